//! Per-chunk document analysis.

use pacta_document::Chunk;
use pacta_llm::LlmProvider;

use crate::parser::ResponseParser;
use crate::prompt;
use crate::report::AnalysisReport;

/// Sends every chunk through the model with the fixed instruction prompt
/// and accumulates parsed bullets across chunks.
///
/// A failed request means that chunk contributes nothing; processing
/// always continues with the next chunk. Nothing is retried.
pub struct DocumentAnalyzer<P: LlmProvider> {
    provider: P,
}

impl<P: LlmProvider> DocumentAnalyzer<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn analyze(&self, chunks: &[Chunk]) -> AnalysisReport {
        let mut report = AnalysisReport::new();

        for chunk in chunks {
            let messages = prompt::analysis_request(chunk);
            match self.provider.chat(&messages).await {
                Ok(response) => {
                    let mut parser = ResponseParser::new();
                    parser.feed(&response, &mut report);
                    if parser.skipped() > 0 {
                        tracing::debug!(
                            chunk_index = chunk.chunk_index,
                            skipped = parser.skipped(),
                            "response contained unrecognized lines"
                        );
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        chunk_index = chunk.chunk_index,
                        error = %e,
                        "error processing chunk; continuing with next"
                    );
                }
            }
        }

        report
    }
}
