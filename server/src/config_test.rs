use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = SiteConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.assistant.upstream, DEFAULT_ASSISTANT_API_URL);
    assert_eq!(cfg.assistant.prefix, DEFAULT_PROXY_PREFIX);
    assert_eq!(cfg.assistant.api_key, None);
    assert_eq!(cfg.assistant.timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
    assert_eq!(cfg.assistant.connect_timeout_secs, DEFAULT_PROXY_CONNECT_TIMEOUT_SECS);
}

#[test]
fn overrides_are_parsed_and_normalized() {
    let cfg = SiteConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("ASSISTANT_API_URL", "https://assistant.example.test/v1/"),
        ("ASSISTANT_API_KEY_ENV", "TAMBO_KEY"),
        ("TAMBO_KEY", "secret"),
        ("ASSISTANT_PROXY_PREFIX", "proxy/ai/"),
        ("ASSISTANT_PROXY_TIMEOUT_SECS", "5"),
        ("ASSISTANT_PROXY_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.assistant.upstream, "https://assistant.example.test/v1");
    assert_eq!(cfg.assistant.prefix, "/proxy/ai");
    assert_eq!(cfg.assistant.api_key.as_deref(), Some("secret"));
    assert_eq!(cfg.assistant.timeout_secs, 5);
    assert_eq!(cfg.assistant.connect_timeout_secs, 2);
}

#[test]
fn unparseable_timeout_falls_back_to_default() {
    let cfg = SiteConfig::from_lookup(lookup_from(&[("ASSISTANT_PROXY_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.assistant.timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
}

#[test]
fn invalid_port_errors() {
    let err = SiteConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".into() });
}

#[test]
fn named_key_var_must_exist() {
    let err = SiteConfig::from_lookup(lookup_from(&[("ASSISTANT_API_KEY_ENV", "NOPE_KEY")])).unwrap_err();
    assert_eq!(err, ConfigError::MissingApiKey { var: "NOPE_KEY".into() });
    assert!(err.to_string().contains("NOPE_KEY"));
}

#[test]
fn root_prefix_is_rejected() {
    let err = SiteConfig::from_lookup(lookup_from(&[("ASSISTANT_PROXY_PREFIX", "/")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "ASSISTANT_PROXY_PREFIX", .. }));
}

#[test]
fn debug_output_redacts_api_key() {
    let cfg =
        SiteConfig::from_lookup(lookup_from(&[("ASSISTANT_API_KEY_ENV", "K"), ("K", "sk-very-secret")])).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("sk-very-secret"));
    assert!(rendered.contains("<redacted>"));
}

// =============================================================================
// from_env
// =============================================================================

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("ASSISTANT_API_KEY_ENV", "ESC_CONFIG_TEST_KEY");
        std::env::set_var("ESC_CONFIG_TEST_KEY", "from-env");
    }

    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.assistant.api_key.as_deref(), Some("from-env"));

    unsafe {
        std::env::remove_var("ASSISTANT_API_KEY_ENV");
        std::env::remove_var("ESC_CONFIG_TEST_KEY");
    }
}
