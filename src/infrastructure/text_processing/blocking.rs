use std::time::Duration;

use crate::application::ports::FileLoaderError;

pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(300);

/// Runs CPU-bound or tool-bound extraction on the blocking pool, bounded by `limit`.
pub(super) async fn run_blocking<T, F>(limit: Duration, work: F) -> Result<T, FileLoaderError>
where
    F: FnOnce() -> Result<T, FileLoaderError> + Send + 'static,
    T: Send + 'static,
{
    tokio::time::timeout(limit, tokio::task::spawn_blocking(work))
        .await
        .map_err(|_| FileLoaderError::TimedOut(limit.as_secs()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
}
