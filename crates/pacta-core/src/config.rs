use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub splitter: SplitterSettings,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Usually left unset in the file and supplied via
    /// `PACTA_GEMINI_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            api_key: None,
        }
    }
}

fn default_base_url() -> String {
    pacta_llm::gemini::DEFAULT_BASE_URL.into()
}

fn default_model() -> String {
    "gemini-1.5-flash".into()
}

fn default_max_output_tokens() -> u32 {
    1024
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SplitterSettings {
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

impl Default for SplitterSettings {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

fn default_chunk_size() -> usize {
    1000
}

fn default_chunk_overlap() -> usize {
    200
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SpeechConfig {
    #[serde(default = "default_speech_enabled")]
    pub enabled: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_speech_enabled(),
        }
    }
}

fn default_speech_enabled() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TuiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Config {
    /// Load configuration from a TOML file with env var overrides.
    ///
    /// Falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str::<Self>(&content).context("failed to parse config file")?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("PACTA_LLM_BASE_URL") {
            self.llm.base_url = v;
        }
        if let Ok(v) = std::env::var("PACTA_LLM_MODEL") {
            self.llm.model = v;
        }
        if let Ok(v) = std::env::var("PACTA_LLM_MAX_OUTPUT_TOKENS")
            && let Ok(tokens) = v.parse::<u32>()
        {
            self.llm.max_output_tokens = tokens;
        }
        if let Ok(v) = std::env::var("PACTA_GEMINI_API_KEY")
            && !v.is_empty()
        {
            self.llm.api_key = Some(v);
        }
        if let Ok(v) = std::env::var("PACTA_SPLITTER_CHUNK_SIZE")
            && let Ok(size) = v.parse::<usize>()
        {
            self.splitter.chunk_size = size;
        }
        if let Ok(v) = std::env::var("PACTA_SPLITTER_CHUNK_OVERLAP")
            && let Ok(overlap) = v.parse::<usize>()
        {
            self.splitter.chunk_overlap = overlap;
        }
        if let Ok(v) = std::env::var("PACTA_SPEECH_ENABLED")
            && let Ok(enabled) = v.parse::<bool>()
        {
            self.speech.enabled = enabled;
        }
        if let Ok(v) = std::env::var("PACTA_TUI_TICK_RATE_MS")
            && let Ok(ms) = v.parse::<u64>()
        {
            self.tui.tick_rate_ms = ms;
        }
    }
}
