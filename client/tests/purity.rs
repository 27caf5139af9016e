//! The view-model, registry and helper modules run in host `cargo test`
//! without a browser. These checks keep browser and framework calls out of
//! them and keep them from panicking on assistant-supplied data.

use std::fs;
use std::path::{Path, PathBuf};

/// Directories (relative to `src/`) whose modules must stay pure.
const PURE_DIRS: [&str; 3] = ["registry", "state", "util"];
/// Single pure files outside those directories.
const PURE_FILES: [&str; 1] = ["net/types.rs"];
/// Browser adapters that live inside a pure directory.
const ADAPTERS: [&str; 1] = ["util/storage.rs"];

const BROWSER_AND_VIEW: [&str; 5] = ["web_sys", "js_sys", "wasm_bindgen", "gloo_", "leptos::"];
const PANICS: [&str; 4] = [".unwrap()", ".expect(", "panic!(", "unreachable!("];

fn src_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src")
}

fn collect(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") && !path.to_string_lossy().ends_with("_test.rs") {
            out.push(path);
        }
    }
}

/// (relative path, content) of every pure module.
fn pure_modules() -> Vec<(String, String)> {
    let root = src_root();
    let mut paths = Vec::new();
    for dir in PURE_DIRS {
        collect(&root.join(dir), &mut paths);
    }
    paths.extend(PURE_FILES.iter().map(|f| root.join(f)));

    let mut modules: Vec<(String, String)> = paths
        .into_iter()
        .filter_map(|path| {
            let rel = path.strip_prefix(&root).ok()?.to_string_lossy().replace('\\', "/");
            if ADAPTERS.contains(&rel.as_str()) {
                return None;
            }
            Some((rel, fs::read_to_string(&path).ok()?))
        })
        .collect();
    modules.sort();
    modules
}

fn hits(patterns: &[&str]) -> Vec<String> {
    pure_modules()
        .iter()
        .flat_map(|(rel, content)| {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| !line.trim_start().starts_with("//"))
                .filter(|(_, line)| patterns.iter().any(|p| line.contains(p)))
                .map(|(i, line)| format!("{rel}:{}: {}", i + 1, line.trim()))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[test]
fn pure_module_set_is_populated() {
    let names: Vec<String> = pure_modules().into_iter().map(|(rel, _)| rel).collect();
    for expected in ["registry/props.rs", "state/panel.rs", "util/markdown.rs", "net/types.rs"] {
        assert!(names.iter().any(|n| n == expected), "missing {expected} in {names:?}");
    }
    assert!(!names.iter().any(|n| n == "util/storage.rs"));
}

#[test]
fn pure_modules_do_not_touch_browser_or_views() {
    let found = hits(&BROWSER_AND_VIEW);
    assert!(found.is_empty(), "browser/view call in a pure module:\n  {}", found.join("\n  "));
}

#[test]
fn pure_modules_do_not_panic() {
    let found = hits(&PANICS);
    assert!(found.is_empty(), "panicking call in a pure module:\n  {}", found.join("\n  "));
}
