use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use resume_text::application::ports::{ExtractionStrategy, FileLoaderError};
use resume_text::infrastructure::text_processing::FallbackChain;

enum Scripted {
    Text(&'static str),
    Nothing,
    Fails,
}

struct ScriptedStrategy {
    script: Scripted,
    calls: Arc<AtomicUsize>,
}

impl ScriptedStrategy {
    fn boxed(script: Scripted, calls: &Arc<AtomicUsize>) -> Box<dyn ExtractionStrategy> {
        Box::new(Self {
            script,
            calls: Arc::clone(calls),
        })
    }
}

impl ExtractionStrategy for ScriptedStrategy {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn extract(&self, _data: &[u8]) -> Result<Option<String>, FileLoaderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            Scripted::Text(text) => Ok(Some(text.to_string())),
            Scripted::Nothing => Ok(None),
            Scripted::Fails => Err(FileLoaderError::ExtractionFailed("boom".to_string())),
        }
    }
}

#[test]
fn given_first_tier_succeeds_when_running_then_later_tiers_are_not_consulted() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let chain = FallbackChain::new(vec![
        ScriptedStrategy::boxed(Scripted::Text("layout text"), &first),
        ScriptedStrategy::boxed(Scripted::Text("fallback text"), &second),
    ]);

    let result = chain.run(b"pdf");

    assert_eq!(result.as_deref(), Some("layout text"));
    assert_eq!(second.load(Ordering::SeqCst), 0);
}

#[test]
fn given_failing_and_blank_tiers_when_running_then_falls_through_to_next() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = FallbackChain::new(vec![
        ScriptedStrategy::boxed(Scripted::Fails, &calls),
        ScriptedStrategy::boxed(Scripted::Text("   \n "), &calls),
        ScriptedStrategy::boxed(Scripted::Nothing, &calls),
        ScriptedStrategy::boxed(Scripted::Text("ocr text"), &calls),
    ]);

    let result = chain.run(b"pdf");

    assert_eq!(result.as_deref(), Some("ocr text"));
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(chain.len(), 4);
}

#[test]
fn given_every_tier_empty_when_running_then_returns_none() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = FallbackChain::new(vec![
        ScriptedStrategy::boxed(Scripted::Fails, &calls),
        ScriptedStrategy::boxed(Scripted::Nothing, &calls),
    ]);

    assert!(chain.run(b"pdf").is_none());
}

#[test]
fn given_no_tiers_when_running_then_returns_none() {
    let chain = FallbackChain::new(Vec::new());

    assert!(chain.is_empty());
    assert!(chain.run(b"pdf").is_none());
}
