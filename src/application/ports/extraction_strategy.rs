use super::FileLoaderError;

/// One tier of a fallback chain. `Ok(None)` means the tier ran but found nothing usable.
pub trait ExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, data: &[u8]) -> Result<Option<String>, FileLoaderError>;
}
