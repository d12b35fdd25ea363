use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pacta_core::{AnalysisReport, prompt};
use pacta_speech::{PlaybackController, compose_script};
use tokio::sync::mpsc;

use crate::command::UiCommand;
use crate::event::{AppEvent, WorkerEvent};
use crate::file_picker::{FileIndex, FilePickerState};
use crate::layout::AppLayout;
use crate::theme::Theme;
use crate::widgets;

pub const STATUS_PROCESSING: &str = "PDF uploaded, wait until analysis completes...";
pub const STATUS_DONE: &str = "Analysis done. Scroll down to see the results.";
pub const STATUS_BUSY: &str = "Analysis in progress...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Insert,
}

/// One document lifecycle. Re-entering `Processing` resets all result
/// state; queries are only meaningful once `Displayed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Processing,
    Displayed,
}

pub struct App {
    lifecycle: Lifecycle,
    input_mode: InputMode,
    status: String,
    report: AnalysisReport,
    chat_answer: String,
    input: String,
    cursor_position: usize,
    scroll_offset: usize,
    picker: Option<FilePickerState>,
    error_modal: Option<String>,
    show_help: bool,
    playback: PlaybackController,
    speech_enabled: bool,
    model_name: String,
    pub should_quit: bool,
    command_tx: mpsc::Sender<UiCommand>,
    worker_rx: mpsc::Receiver<WorkerEvent>,
}

impl App {
    #[must_use]
    pub fn new(
        command_tx: mpsc::Sender<UiCommand>,
        worker_rx: mpsc::Receiver<WorkerEvent>,
        playback: PlaybackController,
        speech_enabled: bool,
        model_name: String,
    ) -> Self {
        Self {
            lifecycle: Lifecycle::Idle,
            input_mode: InputMode::Normal,
            status: String::new(),
            report: AnalysisReport::new(),
            chat_answer: String::new(),
            input: String::new(),
            cursor_position: 0,
            scroll_offset: 0,
            picker: None,
            error_modal: None,
            show_help: false,
            playback,
            speech_enabled,
            model_name,
            should_quit: false,
            command_tx,
            worker_rx,
        }
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn report(&self) -> &AnalysisReport {
        &self.report
    }

    #[must_use]
    pub fn chat_answer(&self) -> &str {
        &self.chat_answer
    }

    #[must_use]
    pub fn picker(&self) -> Option<&FilePickerState> {
        self.picker.as_ref()
    }

    #[must_use]
    pub fn error_modal(&self) -> Option<&str> {
        self.error_modal.as_deref()
    }

    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn poll_worker_event(&mut self) -> impl Future<Output = Option<WorkerEvent>> + use<'_> {
        self.worker_rx.recv()
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            // Wheel-up means "move the view up", i.e. a negative offset delta.
            AppEvent::MouseScroll(delta) => self.scroll(-i32::from(delta)),
            AppEvent::Tick | AppEvent::Resize(_, _) => {}
            AppEvent::Worker(worker_event) => self.handle_worker_event(worker_event),
        }
    }

    pub fn handle_worker_event(&mut self, event: WorkerEvent) {
        match event {
            WorkerEvent::Status(status) => self.status = status,
            WorkerEvent::AnalysisComplete(report) => {
                self.report = report;
                self.lifecycle = Lifecycle::Displayed;
                self.scroll_offset = 0;
                self.status = STATUS_DONE.to_owned();
            }
            WorkerEvent::AnalysisFailed(message) => {
                self.lifecycle = Lifecycle::Idle;
                self.status.clear();
                self.error_modal = Some(format!("Failed to process PDF: {message}"));
            }
            WorkerEvent::ChatAnswer(answer) => self.chat_answer = answer,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.error_modal.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.error_modal = None;
            }
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.picker.is_some() {
            self.handle_picker_key(key);
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Insert => self.handle_insert_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('i') => self.input_mode = InputMode::Insert,
            KeyCode::Char('o') => self.open_picker(),
            KeyCode::Char('p') => self.toggle_playback(),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up | KeyCode::Char('k') => self.scroll(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll(1),
            KeyCode::PageUp => self.scroll(-10),
            KeyCode::PageDown => self.scroll(10),
            KeyCode::Home => self.scroll_offset = 0,
            _ => {}
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_query(),
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let byte_offset = self.byte_offset_of_char(self.cursor_position - 1);
                    self.input.remove(byte_offset);
                    self.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if self.cursor_position < self.char_count() {
                    let byte_offset = self.byte_offset_of_char(self.cursor_position);
                    self.input.remove(byte_offset);
                }
            }
            KeyCode::Left => self.cursor_position = self.cursor_position.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor_position < self.char_count() {
                    self.cursor_position += 1;
                }
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.char_count(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear();
                self.cursor_position = 0;
            }
            KeyCode::Char(c) => {
                let byte_offset = self.byte_offset_of_char(self.cursor_position);
                self.input.insert(byte_offset, c);
                self.cursor_position += 1;
            }
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.picker = None,
            KeyCode::Enter => {
                let selected = self
                    .picker
                    .as_ref()
                    .and_then(|p| p.selected_path().map(PathBuf::from));
                if let Some(path) = selected {
                    self.picker = None;
                    self.begin_analysis(path);
                }
            }
            KeyCode::Up => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.move_selection(-1);
                }
            }
            KeyCode::Down => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.move_selection(1);
                }
            }
            KeyCode::Backspace => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.pop_char();
                }
            }
            KeyCode::Char(c) => {
                if let Some(picker) = self.picker.as_mut() {
                    picker.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn open_picker(&mut self) {
        if self.lifecycle == Lifecycle::Processing {
            self.status = STATUS_BUSY.to_owned();
            return;
        }
        let index = FileIndex::build(Path::new("."));
        self.picker = Some(FilePickerState::new(&index));
    }

    /// Reset all result state and hand the file to the worker.
    fn begin_analysis(&mut self, path: PathBuf) {
        if self.lifecycle == Lifecycle::Processing {
            self.status = STATUS_BUSY.to_owned();
            return;
        }
        self.report = AnalysisReport::new();
        self.chat_answer.clear();
        self.scroll_offset = 0;
        self.lifecycle = Lifecycle::Processing;
        self.status = STATUS_PROCESSING.to_owned();
        if self.command_tx.try_send(UiCommand::Analyze(path)).is_err() {
            self.lifecycle = Lifecycle::Idle;
            self.status.clear();
            self.error_modal = Some("Failed to process PDF: worker unavailable".to_owned());
        }
    }

    fn submit_query(&mut self) {
        let query = self.input.trim().to_owned();
        self.input.clear();
        self.cursor_position = 0;

        if query.is_empty() || self.lifecycle != Lifecycle::Displayed {
            self.chat_answer = prompt::CHAT_UPLOAD_FIRST.to_owned();
            return;
        }
        if self.command_tx.try_send(UiCommand::Chat(query)).is_err() {
            self.chat_answer = prompt::CHAT_FALLBACK_FAILED.to_owned();
        }
    }

    fn toggle_playback(&mut self) {
        if !self.speech_enabled {
            self.status = "Speech is disabled.".to_owned();
            return;
        }
        if self.playback.is_playing() {
            self.playback.cancel();
            return;
        }
        if self.lifecycle == Lifecycle::Displayed {
            let script = compose_script(&self.report, &self.chat_answer);
            self.playback.start(script);
        }
    }

    fn scroll(&mut self, delta: i32) {
        if delta < 0 {
            self.scroll_offset = self
                .scroll_offset
                .saturating_sub(delta.unsigned_abs() as usize);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_add(delta as usize);
        }
    }

    fn byte_offset_of_char(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map_or(self.input.len(), |(i, _)| i)
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn draw(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);

        self.draw_header(frame, layout.header);
        widgets::results::render(self, frame, layout.results);
        widgets::answer::render(self, frame, layout.answer);
        widgets::input::render(self, frame, layout.input);
        widgets::status::render(self, frame, layout.status);

        if let Some(picker) = self.picker() {
            widgets::picker::render(picker, frame, layout.input);
        }
        if self.show_help {
            widgets::help::render(frame, area);
        }
        if let Some(message) = self.error_modal() {
            widgets::error::render(message, frame, area);
        }
    }

    fn draw_header(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        use ratatui::text::{Line, Span};
        use ratatui::widgets::Paragraph;

        let theme = Theme::default();
        let playback = if self.is_playing() { "⏸" } else { "▶" };
        let text = format!(
            " Auto Contract Interpreter v{} | Model: {} | Audio: {playback}",
            env!("CARGO_PKG_VERSION"),
            self.model_name,
        );
        let line = Line::from(Span::styled(text, theme.header));
        frame.render_widget(Paragraph::new(line).style(theme.header), area);
    }
}
