/// Errors specific to pacta-tui.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UI channel closed")]
    ChannelClosed,
}
