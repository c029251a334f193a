use crate::application::ports::ExtractionStrategy;

/// Ordered extraction tiers. The first tier yielding non-blank text wins; a tier
/// that errors is logged and treated as having found nothing.
pub struct FallbackChain {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl FallbackChain {
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    pub fn run(&self, data: &[u8]) -> Option<String> {
        for strategy in &self.strategies {
            match strategy.extract(data) {
                Ok(Some(text)) if !text.trim().is_empty() => {
                    tracing::debug!(
                        strategy = strategy.name(),
                        chars = text.len(),
                        "Extraction tier produced text"
                    );
                    return Some(text);
                }
                Ok(_) => {
                    tracing::debug!(strategy = strategy.name(), "Extraction tier found no text");
                }
                Err(e) => {
                    tracing::warn!(
                        strategy = strategy.name(),
                        error = %e,
                        "Extraction tier failed, falling back"
                    );
                }
            }
        }
        None
    }
}
