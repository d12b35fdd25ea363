use serde::{Deserialize, Serialize};

/// The four fixed contract-analysis labels the model is instructed to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    KeyClauses,
    Risks,
    UnusualTerms,
    ActionableInsights,
}

impl Category {
    /// Fixed display and accumulation order.
    pub const ALL: [Self; 4] = [
        Self::KeyClauses,
        Self::Risks,
        Self::UnusualTerms,
        Self::ActionableInsights,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::KeyClauses => "Key Clauses",
            Self::Risks => "Risks",
            Self::UnusualTerms => "Unusual Terms",
            Self::ActionableInsights => "Actionable Insights",
        }
    }

    /// The exact header line prefix the model is told to emit for this
    /// category.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::KeyClauses => "- Key Clauses:",
            Self::Risks => "- Risks:",
            Self::UnusualTerms => "- Unusual Terms:",
            Self::ActionableInsights => "- Actionable Insights:",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::KeyClauses => 0,
            Self::Risks => 1,
            Self::UnusualTerms => 2,
            Self::ActionableInsights => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_display_order() {
        assert_eq!(
            Category::ALL.map(Category::label),
            ["Key Clauses", "Risks", "Unusual Terms", "Actionable Insights"]
        );
    }

    #[test]
    fn header_extends_label() {
        for category in Category::ALL {
            assert_eq!(category.header(), format!("- {}:", category.label()));
        }
    }

    #[test]
    fn indices_are_distinct_and_dense() {
        let mut seen = [false; 4];
        for category in Category::ALL {
            assert!(!seen[category.index()]);
            seen[category.index()] = true;
        }
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Category::Risks.to_string(), "Risks");
    }
}
