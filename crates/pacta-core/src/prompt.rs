//! Fixed prompt and fallback strings.
//!
//! The instruction text defines the response format the parser expects;
//! the two fallback strings are the only user-visible signal of a chat
//! failure, distinguished by wording alone.

use pacta_document::Chunk;
use pacta_llm::Message;

/// Instruction sent with every chunk. The `- Header:` / `* bullet`
/// format here is what [`crate::parser::ResponseParser`] matches on.
pub const ANALYSIS_INSTRUCTION: &str = "\
You are a contract interpreter. Given a document, extract exactly these four categories:
- Key Clauses: Summarize the main clauses in 1-2 sentences each, focusing on what the document is really saying.
- Risks: Identify potential pitfalls, such as termination clauses or confidentiality traps, in 1-2 sentences each.
- Unusual Terms: Highlight non-standard phrasing or hidden obligations, in 1-2 sentences each.
- Actionable Insights: Provide specific actions or checks to perform before signing, in 1-2 sentences each.
Use bullet points (starting with '*') for each item under the respective category. Be concise and clear. Start each category with a header like '- Key Clauses:', '- Risks:', etc. Do not include any other information.";

pub const CHAT_INSTRUCTION: &str = "\
You are a contract interpreter. Given the following document chunks and a user query, provide a concise answer based on the content.
Answer in 1-2 sentences. Do not include any other information.";

/// Shown when the model returns no text for a chat query.
pub const CHAT_FALLBACK_EMPTY: &str =
    "No response due to API quota limit. Please wait until midnight Pacific Time or upgrade your plan.";

/// Shown when the chat request itself fails.
pub const CHAT_FALLBACK_FAILED: &str =
    "Chat unavailable due to API quota limit. Please wait until midnight Pacific Time or upgrade your plan.";

/// Shown when a query arrives before any document is loaded.
pub const CHAT_UPLOAD_FIRST: &str = "Please upload a PDF and enter a query.";

/// Build the per-chunk analysis request.
#[must_use]
pub fn analysis_request(chunk: &Chunk) -> Vec<Message> {
    vec![
        Message::system(ANALYSIS_INSTRUCTION),
        Message::user(format!("Document chunk:\n{}", chunk.content)),
    ]
}

/// Build the single-pass chat request over the whole chunk set.
#[must_use]
pub fn chat_request(query: &str, chunks: &[Chunk]) -> Vec<Message> {
    let document: String = chunks.iter().map(|c| c.content.as_str()).collect();
    vec![
        Message::system(CHAT_INSTRUCTION),
        Message::user(format!(
            "Document chunks: {document}\nUser query: {query}"
        )),
    ]
}
