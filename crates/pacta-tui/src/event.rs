use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEventKind};
use pacta_core::AnalysisReport;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    MouseScroll(i8),
    Worker(WorkerEvent),
}

/// Results flowing back from the worker task.
#[derive(Debug)]
pub enum WorkerEvent {
    Status(String),
    AnalysisComplete(AnalysisReport),
    AnalysisFailed(String),
    ChatAnswer(String),
}

pub struct EventReader {
    tx: mpsc::Sender<AppEvent>,
    tick_rate: Duration,
}

impl EventReader {
    #[must_use]
    pub fn new(tx: mpsc::Sender<AppEvent>, tick_rate: Duration) -> Self {
        Self { tx, tick_rate }
    }

    /// Blocking loop — must run on a dedicated `std::thread`, not a tokio worker.
    pub fn run(self) {
        loop {
            if event::poll(self.tick_rate).unwrap_or(false) {
                let evt = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => AppEvent::Key(key),
                    Ok(CrosstermEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                    Ok(CrosstermEvent::Mouse(mouse)) => match mouse.kind {
                        MouseEventKind::ScrollUp => AppEvent::MouseScroll(1),
                        MouseEventKind::ScrollDown => AppEvent::MouseScroll(-1),
                        _ => continue,
                    },
                    _ => continue,
                };
                if self.tx.blocking_send(evt).is_err() {
                    break;
                }
            } else if self.tx.blocking_send(AppEvent::Tick).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_event_debug() {
        let e = WorkerEvent::Status("working".into());
        assert!(format!("{e:?}").contains("Status"));
    }

    #[test]
    fn app_event_variants() {
        assert!(matches!(AppEvent::Tick, AppEvent::Tick));
        assert!(matches!(
            AppEvent::Resize(80, 24),
            AppEvent::Resize(80, 24)
        ));
        assert!(matches!(AppEvent::MouseScroll(1), AppEvent::MouseScroll(1)));
    }

    #[test]
    fn event_reader_construction() {
        let (tx, _rx) = mpsc::channel(16);
        let reader = EventReader::new(tx, Duration::from_millis(100));
        assert_eq!(reader.tick_rate, Duration::from_millis(100));
    }
}
