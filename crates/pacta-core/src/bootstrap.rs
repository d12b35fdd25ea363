//! Construction of configured components at startup.

use anyhow::Context;
use pacta_document::SplitterConfig;
use pacta_llm::GeminiProvider;

use crate::config::Config;

/// Build the LLM provider from configuration.
///
/// # Errors
///
/// Returns an error when no API key is configured — the one fatal
/// configuration path; everything else falls back to defaults.
pub fn build_provider(config: &Config) -> anyhow::Result<GeminiProvider> {
    let api_key = config
        .llm
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .context("no Gemini API key found; set PACTA_GEMINI_API_KEY or [llm] api_key")?;

    Ok(GeminiProvider::new(
        api_key,
        config.llm.base_url.clone(),
        config.llm.model.clone(),
        config.llm.max_output_tokens,
    ))
}

#[must_use]
pub fn splitter_config(config: &Config) -> SplitterConfig {
    SplitterConfig {
        chunk_size: config.splitter.chunk_size,
        chunk_overlap: config.splitter.chunk_overlap,
        sentence_aware: false,
    }
}
