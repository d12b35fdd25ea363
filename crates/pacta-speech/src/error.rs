#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech engine init failed: {0}")]
    Init(String),

    #[error("speech engine failed: {0}")]
    Engine(String),
}
