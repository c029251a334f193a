mod batch_summary;
mod document;
mod processing_outcome;
mod text_block;

pub use batch_summary::BatchSummary;
pub use document::{Document, DocumentFormat, output_file_name_for};
pub use processing_outcome::ProcessingOutcome;
pub use text_block::TextBlock;
