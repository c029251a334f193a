use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::application::services::{BatchService, ExtractionService};
use crate::presentation::config::Settings;

pub struct AppState<F>
where
    F: FileLoader,
{
    pub extraction_service: Arc<ExtractionService<F>>,
    pub batch_service: Arc<BatchService<F>>,
    pub settings: Settings,
}

impl<F> AppState<F>
where
    F: FileLoader,
{
    /// Both services share one loader.
    pub fn new(file_loader: Arc<F>, settings: Settings) -> Self {
        Self {
            extraction_service: Arc::new(ExtractionService::new(Arc::clone(&file_loader))),
            batch_service: Arc::new(BatchService::new(file_loader)),
            settings,
        }
    }
}

impl<F> Clone for AppState<F>
where
    F: FileLoader,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
            batch_service: Arc::clone(&self.batch_service),
            settings: self.settings.clone(),
        }
    }
}
