/// Receives per-file progress from a directory batch.
pub trait BatchProgress: Send + Sync {
    fn started(&self, total: usize);
    fn file_done(&self, filename: &str);
    fn finished(&self);
}

/// Discards progress. Used when nobody is watching, e.g. the HTTP batch endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl BatchProgress for NoProgress {
    fn started(&self, _total: usize) {}
    fn file_done(&self, _filename: &str) {}
    fn finished(&self) {}
}
