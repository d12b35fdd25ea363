//! Playback state lives here and nowhere else.
//!
//! The controller owns the `is_playing` flag and the cancellation
//! signal; `start` and `cancel` are the only mutators. Playback runs on
//! a dedicated background thread so the UI stays responsive, and the
//! cancellation signal is checked between utterances — the engine's own
//! checkpoints — never mid-utterance.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::SpeechEngine;

pub struct PlaybackController {
    engine: Arc<dyn SpeechEngine>,
    playing: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
}

impl PlaybackController {
    #[must_use]
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            playing: Arc::new(AtomicBool::new(false)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Acquire)
    }

    /// Begin reading `script` aloud on a background thread.
    ///
    /// Returns `false` without side effects when playback is already
    /// active — starting twice never yields two concurrent sessions.
    pub fn start(&self, script: String) -> bool {
        if self.playing.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.cancelled.store(false, Ordering::Release);

        let engine = Arc::clone(&self.engine);
        let playing = Arc::clone(&self.playing);
        let cancelled = Arc::clone(&self.cancelled);

        let spawned = std::thread::Builder::new()
            .name("pacta-speech".into())
            .spawn(move || {
                for utterance in utterances(&script) {
                    if cancelled.load(Ordering::Acquire) {
                        break;
                    }
                    if let Err(e) = engine.speak(utterance) {
                        tracing::warn!(error = %e, "speech engine error; stopping playback");
                        break;
                    }
                }
                playing.store(false, Ordering::Release);
            });

        if let Err(e) = spawned {
            tracing::warn!(error = %e, "failed to spawn playback thread");
            self.playing.store(false, Ordering::Release);
            return false;
        }
        true
    }

    /// Request cancellation and stop the current utterance.
    ///
    /// Takes effect at the next checkpoint; the playing flag clears when
    /// the playback thread actually exits.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.engine.stop();
    }
}

fn utterances(script: &str) -> impl Iterator<Item = &str> {
    script.lines().map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    use super::*;
    use crate::error::SpeechError;

    struct RecordingEngine {
        spoken: Mutex<Vec<String>>,
        per_utterance: Duration,
        fail_after: Option<usize>,
    }

    impl RecordingEngine {
        fn new(per_utterance: Duration) -> Self {
            Self {
                spoken: Mutex::new(Vec::new()),
                per_utterance,
                fail_after: None,
            }
        }

        fn spoken_count(&self) -> usize {
            self.spoken.lock().unwrap().len()
        }
    }

    impl SpeechEngine for RecordingEngine {
        fn speak(&self, text: &str) -> Result<(), SpeechError> {
            let count = {
                let mut spoken = self.spoken.lock().unwrap();
                spoken.push(text.to_owned());
                spoken.len()
            };
            if let Some(limit) = self.fail_after
                && count > limit
            {
                return Err(SpeechError::Engine("deliberate failure".into()));
            }
            std::thread::sleep(self.per_utterance);
            Ok(())
        }

        fn stop(&self) {}
    }

    fn wait_until_stopped(controller: &PlaybackController) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while controller.is_playing() {
            assert!(Instant::now() < deadline, "playback did not finish in time");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn playback_speaks_every_utterance_then_clears_flag() {
        let engine = Arc::new(RecordingEngine::new(Duration::ZERO));
        let controller = PlaybackController::new(engine.clone());

        assert!(controller.start("line one\nline two\nline three".into()));
        wait_until_stopped(&controller);
        assert_eq!(engine.spoken_count(), 3);
    }

    #[test]
    fn double_start_is_a_no_op() {
        let engine = Arc::new(RecordingEngine::new(Duration::from_millis(100)));
        let controller = PlaybackController::new(engine.clone());

        assert!(controller.start("first script".into()));
        assert!(!controller.start("second script".into()));
        wait_until_stopped(&controller);
        // Only the first session's single utterance ever played.
        assert_eq!(engine.spoken_count(), 1);
    }

    #[test]
    fn cancel_stops_at_next_checkpoint() {
        let engine = Arc::new(RecordingEngine::new(Duration::from_millis(50)));
        let controller = PlaybackController::new(engine.clone());

        let script: String = (0..20).map(|i| format!("utterance {i}\n")).collect();
        assert!(controller.start(script));
        std::thread::sleep(Duration::from_millis(20));
        controller.cancel();
        wait_until_stopped(&controller);
        assert!(engine.spoken_count() < 20);
    }

    #[test]
    fn restart_allowed_after_completion() {
        let engine = Arc::new(RecordingEngine::new(Duration::ZERO));
        let controller = PlaybackController::new(engine.clone());

        assert!(controller.start("one".into()));
        wait_until_stopped(&controller);
        assert!(controller.start("two".into()));
        wait_until_stopped(&controller);
        assert_eq!(engine.spoken_count(), 2);
    }

    #[test]
    fn engine_error_ends_playback() {
        let engine = Arc::new(RecordingEngine {
            spoken: Mutex::new(Vec::new()),
            per_utterance: Duration::ZERO,
            fail_after: Some(1),
        });
        let controller = PlaybackController::new(engine.clone());

        assert!(controller.start("a\nb\nc\nd".into()));
        wait_until_stopped(&controller);
        assert_eq!(engine.spoken_count(), 2);
    }

    #[test]
    fn empty_script_finishes_immediately() {
        let engine = Arc::new(RecordingEngine::new(Duration::ZERO));
        let controller = PlaybackController::new(engine.clone());

        assert!(controller.start(String::new()));
        wait_until_stopped(&controller);
        assert_eq!(engine.spoken_count(), 0);
    }

    #[test]
    fn utterances_skip_blank_lines() {
        let lines: Vec<&str> = utterances("one\n\n  \ntwo\n").collect();
        assert_eq!(lines, ["one", "two"]);
    }
}
