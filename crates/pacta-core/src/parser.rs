//! Line-oriented parser for model responses.
//!
//! The model is instructed to emit four `- Header:` lines with `* `
//! bullets underneath. This parser is an explicit state machine over
//! those lines: the state is the category the bullets currently belong
//! to, and every line is classified exactly once. Unrecognized lines are
//! a specified case — counted and logged, never surfaced.

use crate::category::Category;
use crate::report::AnalysisReport;

const BULLET_MARKER: &str = "* ";

/// How a single trimmed line moves the state machine.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Header(Category),
    Bullet(&'a str),
    Blank,
    Other,
}

fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    for category in Category::ALL {
        if line.starts_with(category.header()) {
            return LineKind::Header(category);
        }
    }
    if let Some(rest) = line.strip_prefix(BULLET_MARKER) {
        return LineKind::Bullet(rest.trim());
    }
    LineKind::Other
}

#[derive(Debug, Default)]
pub struct ResponseParser {
    current: Option<Category>,
    skipped: usize,
}

impl ResponseParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one model response, appending recognized bullets to `report`.
    ///
    /// Transitions: a header line selects the active category; a bullet
    /// line appends to the active category and is dropped when no
    /// category is active yet; anything else non-blank is skipped.
    pub fn feed(&mut self, text: &str, report: &mut AnalysisReport) {
        for raw in text.lines() {
            let line = raw.trim();
            match classify(line) {
                LineKind::Header(category) => self.current = Some(category),
                LineKind::Bullet(item) => {
                    if let Some(category) = self.current {
                        report.push(category, item);
                    } else {
                        self.skip(line);
                    }
                }
                LineKind::Blank => {}
                LineKind::Other => self.skip(line),
            }
        }
    }

    fn skip(&mut self, line: &str) {
        self.skipped += 1;
        tracing::debug!(line, "skipping unrecognized response line");
    }

    /// Lines dropped so far because they matched no transition.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
