mod extract;
mod health;
mod process_files;

pub use extract::{ErrorResponse, ExtractedFileResponse, extract_handler};
pub use health::health_handler;
pub use process_files::process_files_handler;
