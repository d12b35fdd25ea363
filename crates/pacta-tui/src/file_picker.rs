//! Fuzzy picker over the PDF files beneath the working directory.

use std::path::Path;
use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

const MAX_RESULTS: usize = 10;
/// Hard cap on indexed paths to bound memory on huge directory trees.
const MAX_INDEXED: usize = 50_000;

pub struct FileIndex {
    paths: Arc<Vec<String>>,
}

impl FileIndex {
    /// Walks `root` with `.gitignore` awareness, keeping only files with
    /// a `.pdf` extension. Synchronous; the picker opens rarely enough
    /// that the traversal cost is acceptable on the calling thread.
    #[must_use]
    pub fn build(root: &Path) -> Self {
        let mut paths = Vec::new();
        let walker = ignore::WalkBuilder::new(root)
            .hidden(true)
            .ignore(true)
            .git_ignore(true)
            .build();

        for entry in walker.flatten() {
            if entry.file_type().is_some_and(|ft| ft.is_file()) {
                let path = entry.path();
                if !path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
                {
                    continue;
                }
                let rel = path.strip_prefix(root).unwrap_or(path);
                if let Some(s) = rel.to_str() {
                    paths.push(s.replace('\\', "/"));
                }
                if paths.len() >= MAX_INDEXED {
                    tracing::warn!(
                        max = MAX_INDEXED,
                        root = %root.display(),
                        "file index cap reached; some files will not be searchable"
                    );
                    break;
                }
            }
        }
        paths.sort_unstable();
        Self {
            paths: Arc::new(paths),
        }
    }

    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    #[must_use]
    pub fn paths_arc(&self) -> Arc<Vec<String>> {
        Arc::clone(&self.paths)
    }
}

#[derive(Clone)]
pub struct PickerMatch {
    pub path: String,
    pub score: u32,
}

pub struct FilePickerState {
    pub query: String,
    pub selected: usize,
    matches: Vec<PickerMatch>,
    index: Arc<Vec<String>>,
    matcher: Matcher,
}

impl FilePickerState {
    #[must_use]
    pub fn new(index: &FileIndex) -> Self {
        let mut state = Self {
            query: String::new(),
            selected: 0,
            matches: Vec::new(),
            index: index.paths_arc(),
            matcher: Matcher::new(Config::DEFAULT),
        };
        state.refilter();
        state
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    #[must_use]
    pub fn matches(&self) -> &[PickerMatch] {
        &self.matches
    }

    #[must_use]
    pub fn selected_path(&self) -> Option<&str> {
        self.matches.get(self.selected).map(|m| m.path.as_str())
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.matches.len();
        if len == 0 {
            return;
        }
        let len_i = i32::try_from(len).unwrap_or(i32::MAX);
        let cur_i = i32::try_from(self.selected).unwrap_or(0);
        let new_i = (cur_i + delta).rem_euclid(len_i);
        self.selected = usize::try_from(new_i).unwrap_or(0);
    }

    fn refilter(&mut self) {
        self.selected = 0;
        if self.query.is_empty() {
            self.matches = self
                .index
                .iter()
                .take(MAX_RESULTS)
                .map(|p| PickerMatch {
                    path: p.clone(),
                    score: 0,
                })
                .collect();
            return;
        }

        let pattern = Pattern::new(
            &self.query,
            CaseMatching::Smart,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut scored: Vec<PickerMatch> = self
            .index
            .iter()
            .filter_map(|p| {
                let mut buf = Vec::new();
                let haystack = Utf32Str::new(p, &mut buf);
                pattern
                    .score(haystack, &mut self.matcher)
                    .map(|score| PickerMatch {
                        path: p.clone(),
                        score,
                    })
            })
            .collect();

        scored.sort_unstable_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(MAX_RESULTS);
        self.matches = scored;
    }
}
