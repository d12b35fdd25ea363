//! Single-pass question answering over the loaded chunks.

use pacta_document::Chunk;
use pacta_llm::LlmProvider;

use crate::prompt;

/// Answers a free-text query against the full chunk set in one request.
///
/// Always returns a string: failures and empty responses map to fixed
/// fallback messages rather than errors, and a query with no loaded
/// document short-circuits before any network call.
pub struct ChatResponder<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> ChatResponder<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn answer(&self, query: &str, chunks: &[Chunk]) -> String {
        if query.trim().is_empty() || chunks.is_empty() {
            return prompt::CHAT_UPLOAD_FIRST.to_owned();
        }

        let messages = prompt::chat_request(query, chunks);
        match self.provider.chat(&messages).await {
            Ok(response) => {
                let trimmed = response.trim();
                if trimmed.is_empty() {
                    prompt::CHAT_FALLBACK_EMPTY.to_owned()
                } else {
                    trimmed.to_owned()
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "chat request failed");
                prompt::CHAT_FALLBACK_FAILED.to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacta_document::DocumentMetadata;
    use pacta_llm::mock::MockProvider;

    fn one_chunk() -> Vec<Chunk> {
        vec![Chunk {
            content: "The tenant shall pay rent monthly.".to_owned(),
            metadata: DocumentMetadata {
                source: "test".to_owned(),
                content_type: "text/plain".to_owned(),
            },
            chunk_index: 0,
        }]
    }

    #[tokio::test]
    async fn answer_returns_trimmed_response() {
        let mock = MockProvider::with_responses(vec!["  Rent is due monthly.  ".into()]);
        let responder = ChatResponder::new(mock);
        let answer = responder.answer("when is rent due?", &one_chunk()).await;
        assert_eq!(answer, "Rent is due monthly.");
    }

    #[tokio::test]
    async fn no_chunks_returns_fixed_message_without_network() {
        let mock = MockProvider::default();
        let counter = mock.clone();
        let responder = ChatResponder::new(mock);
        let answer = responder.answer("anything?", &[]).await;
        assert_eq!(answer, prompt::CHAT_UPLOAD_FIRST);
        assert_eq!(counter.call_count(), 0);
    }

    #[tokio::test]
    async fn blank_query_returns_fixed_message_without_network() {
        let mock = MockProvider::default();
        let counter = mock.clone();
        let responder = ChatResponder::new(mock);
        let answer = responder.answer("   ", &one_chunk()).await;
        assert_eq!(answer, prompt::CHAT_UPLOAD_FIRST);
        assert_eq!(counter.call_count(), 0);
    }

    #[tokio::test]
    async fn request_failure_maps_to_failed_fallback() {
        let responder = ChatResponder::new(MockProvider::failing());
        let answer = responder.answer("q", &one_chunk()).await;
        assert_eq!(answer, prompt::CHAT_FALLBACK_FAILED);
    }

    #[tokio::test]
    async fn empty_response_maps_to_empty_fallback() {
        let mock = MockProvider::with_responses(vec!["   ".into()]);
        let responder = ChatResponder::new(mock);
        let answer = responder.answer("q", &one_chunk()).await;
        assert_eq!(answer, prompt::CHAT_FALLBACK_EMPTY);
    }
}
