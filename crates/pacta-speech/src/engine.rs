use std::sync::Mutex;
use std::time::Duration;

use crate::error::SpeechError;

const SPEAK_POLL: Duration = Duration::from_millis(50);

/// One utterance at a time, synchronously. `speak` blocks until the
/// engine finishes (or is stopped), which makes utterance boundaries the
/// cancellation checkpoints.
pub trait SpeechEngine: Send + Sync {
    /// Speak one utterance to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying engine rejects the utterance.
    fn speak(&self, text: &str) -> Result<(), SpeechError>;

    /// Stop the current utterance, if any. Best effort.
    fn stop(&self);
}

/// The platform speech engine (speech-dispatcher, SAPI, AVSpeech, ...).
pub struct SystemEngine {
    inner: Mutex<tts::Tts>,
}

impl SystemEngine {
    /// # Errors
    ///
    /// Returns an error if no platform speech backend is available.
    pub fn new() -> Result<Self, SpeechError> {
        let tts = tts::Tts::default().map_err(|e| SpeechError::Init(e.to_string()))?;
        Ok(Self {
            inner: Mutex::new(tts),
        })
    }
}

impl SpeechEngine for SystemEngine {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        // Clone the handle so the lock is not held while the utterance
        // plays; clones share the underlying backend, so `stop` from
        // another thread interrupts this loop.
        let mut handle = {
            let guard = self
                .inner
                .lock()
                .map_err(|_| SpeechError::Engine("speech engine lock poisoned".into()))?;
            guard.clone()
        };

        handle
            .speak(text, false)
            .map_err(|e| SpeechError::Engine(e.to_string()))?;

        loop {
            let speaking = handle
                .is_speaking()
                .map_err(|e| SpeechError::Engine(e.to_string()))?;
            if !speaking {
                return Ok(());
            }
            std::thread::sleep(SPEAK_POLL);
        }
    }

    fn stop(&self) {
        if let Ok(mut guard) = self.inner.lock()
            && let Err(e) = guard.stop()
        {
            tracing::warn!(error = %e, "failed to stop speech engine");
        }
    }
}
