use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::provider::{LlmProvider, Message, Role};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_output_tokens: u32,
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

impl GeminiProvider {
    #[must_use]
    pub fn new(api_key: String, base_url: String, model: String, max_output_tokens: u32) -> Self {
        Self {
            client: crate::http::default_client(),
            api_key,
            base_url,
            model,
            max_output_tokens,
        }
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    // One request per call. Failures surface to the caller unretried;
    // the analyzer decides what a failed chunk means.
    async fn send_request(&self, messages: &[Message]) -> Result<String, LlmError> {
        let (system, contents) = split_messages(messages);

        let body = RequestBody {
            system_instruction: system.map(|text| InstructionBlock {
                parts: vec![Part { text }],
            }),
            contents,
            generation_config: GenerationConfig {
                max_output_tokens: self.max_output_tokens,
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await.map_err(LlmError::Http)?;

        if !status.is_success() {
            tracing::error!("Gemini API error {status}: {text}");
            return Err(LlmError::Api {
                status: status.as_u16(),
            });
        }

        let resp: ApiResponse = serde_json::from_str(&text)?;
        let combined = resp
            .candidates
            .first()
            .map(Candidate::text)
            .unwrap_or_default();

        if combined.trim().is_empty() {
            return Err(LlmError::EmptyResponse { provider: "gemini" });
        }

        Ok(combined)
    }
}

impl LlmProvider for GeminiProvider {
    async fn chat(&self, messages: &[Message]) -> Result<String, LlmError> {
        self.send_request(messages).await
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Collect system messages into a single instruction and map the rest
/// onto the API's `user`/`model` turn roles.
fn split_messages(messages: &[Message]) -> (Option<String>, Vec<ContentBlock>) {
    let mut system_parts = Vec::new();
    let mut contents = Vec::new();

    for msg in messages {
        match msg.role {
            Role::System => system_parts.push(msg.content.clone()),
            Role::User => contents.push(ContentBlock {
                role: "user",
                parts: vec![Part {
                    text: msg.content.clone(),
                }],
            }),
            Role::Assistant => contents.push(ContentBlock {
                role: "model",
                parts: vec![Part {
                    text: msg.content.clone(),
                }],
            }),
        }
    }

    let system = if system_parts.is_empty() {
        None
    } else {
        Some(system_parts.join("\n\n"))
    };

    (system, contents)
}

#[derive(Serialize)]
struct RequestBody {
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<InstructionBlock>,
    contents: Vec<ContentBlock>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct InstructionBlock {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct ContentBlock {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

impl Candidate {
    fn text(&self) -> String {
        self.content
            .as_ref()
            .map(|c| {
                c.parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider() -> GeminiProvider {
        GeminiProvider::new(
            "test-key".into(),
            DEFAULT_BASE_URL.into(),
            "gemini-1.5-flash".into(),
            1024,
        )
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let p = test_provider();
        assert_eq!(
            p.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let p = GeminiProvider::new(
            "k".into(),
            "http://localhost:1234/".into(),
            "m".into(),
            64,
        );
        assert_eq!(p.endpoint(), "http://localhost:1234/models/m:generateContent");
    }

    #[test]
    fn name_returns_gemini() {
        assert_eq!(test_provider().name(), "gemini");
    }

    #[test]
    fn debug_redacts_api_key() {
        let p = GeminiProvider::new(
            "sk-secret-key".into(),
            DEFAULT_BASE_URL.into(),
            "gemini-1.5-flash".into(),
            1024,
        );
        let debug = format!("{p:?}");
        assert!(!debug.contains("sk-secret-key"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("gemini-1.5-flash"));
    }

    #[test]
    fn split_messages_extracts_system() {
        let messages = vec![Message::system("You are helpful."), Message::user("Hi")];
        let (system, contents) = split_messages(&messages);
        assert_eq!(system.unwrap(), "You are helpful.");
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].role, "user");
    }

    #[test]
    fn split_messages_no_system() {
        let (system, contents) = split_messages(&[Message::user("Hi")]);
        assert!(system.is_none());
        assert_eq!(contents.len(), 1);
    }

    #[test]
    fn split_messages_multiple_system_joined() {
        let messages = vec![
            Message::system("Part 1"),
            Message::system("Part 2"),
            Message::user("Hi"),
        ];
        let (system, _) = split_messages(&messages);
        assert_eq!(system.unwrap(), "Part 1\n\nPart 2");
    }

    #[test]
    fn split_messages_assistant_maps_to_model_role() {
        let messages = vec![Message::user("q"), Message::assistant("a")];
        let (_, contents) = split_messages(&messages);
        assert_eq!(contents[1].role, "model");
    }

    #[test]
    fn request_body_serializes_without_system() {
        let body = RequestBody {
            system_instruction: None,
            contents: vec![ContentBlock {
                role: "user",
                parts: vec![Part {
                    text: "hello".into(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 256,
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("systemInstruction"));
        assert!(json.contains("\"maxOutputTokens\":256"));
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn request_body_serializes_with_system() {
        let body = RequestBody {
            system_instruction: Some(InstructionBlock {
                parts: vec![Part {
                    text: "instructions".into(),
                }],
            }),
            contents: vec![],
            generation_config: GenerationConfig {
                max_output_tokens: 64,
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"systemInstruction\""));
        assert!(json.contains("instructions"));
    }

    #[test]
    fn api_response_deserializes() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Hello world"}]}}]}"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.candidates.len(), 1);
        assert_eq!(resp.candidates[0].text(), "Hello world");
    }

    #[test]
    fn api_response_concatenates_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"a"},{"text":"b"}]}}]}"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.candidates[0].text(), "ab");
    }

    #[test]
    fn api_response_empty_candidates() {
        let json = r#"{"candidates":[]}"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(resp.candidates.is_empty());
    }

    #[test]
    fn api_response_missing_candidates_field() {
        let resp: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.candidates.is_empty());
    }

    #[test]
    fn candidate_without_content_yields_empty_text() {
        let json = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert!(resp.candidates[0].text().is_empty());
    }

    #[tokio::test]
    async fn chat_with_unreachable_endpoint_errors() {
        let p = GeminiProvider::new("key".into(), "http://127.0.0.1:1".into(), "m".into(), 64);
        let result = p.chat(&[Message::user("test")]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires PACTA_GEMINI_API_KEY env var"]
    async fn integration_gemini_chat() {
        let api_key =
            std::env::var("PACTA_GEMINI_API_KEY").expect("PACTA_GEMINI_API_KEY must be set");
        let p = GeminiProvider::new(
            api_key,
            DEFAULT_BASE_URL.into(),
            "gemini-1.5-flash".into(),
            256,
        );
        let response = p
            .chat(&[Message::user("Reply with exactly: pong")])
            .await
            .unwrap();
        assert!(response.to_lowercase().contains("pong"));
    }
}
