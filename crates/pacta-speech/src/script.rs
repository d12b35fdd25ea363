//! Serialization of analysis results into the text read aloud.

use pacta_core::AnalysisReport;

/// Category labels with their bullets, then the last chat answer.
/// Empty categories read as "No data", matching the displayed results.
#[must_use]
pub fn compose_script(report: &AnalysisReport, chat_answer: &str) -> String {
    let mut script = String::new();
    for (category, items) in report.iter() {
        script.push_str(category.label());
        script.push_str(":\n");
        if items.is_empty() {
            script.push_str("No data");
        } else {
            script.push_str(&items.join("\n"));
        }
        script.push_str("\n\n");
    }
    script.push_str("Chat Response:\n");
    script.push_str(chat_answer.trim());
    script
}
