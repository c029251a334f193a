/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub run_mode: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn new(run_mode: impl Into<String>, json_format: bool) -> Self {
        Self {
            run_mode: run_mode.into(),
            json_format,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::new("api", false)
    }
}
