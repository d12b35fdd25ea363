//! Test-only mock LLM provider.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::provider::{LlmProvider, Message};

#[derive(Debug, Clone)]
pub struct MockProvider {
    responses: Arc<Mutex<Vec<Result<String, String>>>>,
    calls: Arc<AtomicUsize>,
    pub default_response: String,
    pub fail_chat: bool,
    /// Milliseconds to sleep before returning a response.
    pub delay_ms: u64,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            default_response: "mock response".into(),
            fail_chat: false,
            delay_ms: 0,
        }
    }
}

impl MockProvider {
    #[must_use]
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().map(Ok).collect())),
            ..Self::default()
        }
    }

    /// Script a mix of successful and failing calls, consumed in order.
    #[must_use]
    pub fn with_script(script: Vec<Result<String, String>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(script)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_chat: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Number of `chat` calls issued so far, shared across clones.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn chat(&self, _messages: &[Message]) -> Result<String, crate::LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }
        if self.fail_chat {
            return Err(crate::LlmError::Other("mock LLM error".into()));
        }
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(self.default_response.clone())
        } else {
            match responses.remove(0) {
                Ok(text) => Ok(text),
                Err(msg) => Err(crate::LlmError::Other(msg)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn scripted_responses_consumed_in_order() {
        let mock = MockProvider::with_responses(vec!["one".into(), "two".into()]);
        assert_eq!(mock.chat(&[]).await.unwrap(), "one");
        assert_eq!(mock.chat(&[]).await.unwrap(), "two");
        // Exhausted script falls back to the default response.
        assert_eq!(mock.chat(&[]).await.unwrap(), "mock response");
    }

    #[tokio::test]
    async fn failing_mock_errors() {
        let mock = MockProvider::failing();
        assert!(mock.chat(&[]).await.is_err());
    }

    #[tokio::test]
    async fn script_interleaves_failures() {
        let mock = MockProvider::with_script(vec![
            Ok("first".into()),
            Err("boom".into()),
            Ok("third".into()),
        ]);
        assert!(mock.chat(&[]).await.is_ok());
        assert!(mock.chat(&[]).await.is_err());
        assert_eq!(mock.chat(&[]).await.unwrap(), "third");
    }

    #[tokio::test]
    async fn call_count_shared_across_clones() {
        let mock = MockProvider::default();
        let clone = mock.clone();
        let _ = clone.chat(&[]).await;
        let _ = clone.chat(&[]).await;
        assert_eq!(mock.call_count(), 2);
    }
}
