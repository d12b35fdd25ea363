use std::path::PathBuf;

/// Work the UI hands to the worker task. One document lifecycle at a
/// time; there is no cancellation for in-flight work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Extract, chunk, and analyze the given PDF.
    Analyze(PathBuf),
    /// Answer a follow-up question against the loaded chunks.
    Chat(String),
}
