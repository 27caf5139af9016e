use super::*;

#[test]
fn new_shares_config_across_clones() {
    let state = test_helpers::test_app_state("http://127.0.0.1:9/", Some("k"));
    let clone = state.clone();
    assert!(Arc::ptr_eq(&state.config, &clone.config));
    assert_eq!(clone.config.assistant.upstream, "http://127.0.0.1:9");
    assert_eq!(clone.config.assistant.api_key.as_deref(), Some("k"));
}

#[test]
fn test_config_uses_default_prefix() {
    let cfg = test_helpers::test_config("http://upstream.test", None);
    assert_eq!(cfg.assistant.prefix, crate::config::DEFAULT_PROXY_PREFIX);
    assert_eq!(cfg.assistant.api_key, None);
}
