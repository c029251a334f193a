use resume_text::infrastructure::observability::{DEFAULT_LOG_FILTER, TracingConfig};

#[test]
fn given_default_config_when_created_then_uses_plain_api_logging() {
    let config = TracingConfig::default();
    assert!(!config.json_format);
    assert_eq!(config.run_mode, "api");
}

#[test]
fn given_default_filter_when_inspected_then_enables_crate_debug_logs() {
    assert!(DEFAULT_LOG_FILTER.contains("resume_text=debug"));
}
