mod init_tracing;
mod progress_bar;
mod request_id;
mod tracing_config;

pub use init_tracing::{DEFAULT_LOG_FILTER, init_tracing};
pub use progress_bar::ProgressBarReporter;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use tracing_config::TracingConfig;
