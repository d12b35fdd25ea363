//! End-to-end pipeline tests over a scripted provider: load text,
//! chunk, analyze into the four categories, then ask a follow-up.

use pacta_core::{Category, ChatResponder, DocumentAnalyzer, prompt};
use pacta_document::{DocumentLoader, SplitterConfig, TextLoader, TextSplitter};
use pacta_llm::mock::MockProvider;

fn analysis_response(tag: &str) -> String {
    format!(
        "- Key Clauses:\n* clause {tag}\n- Risks:\n* risk {tag}\n\
         - Unusual Terms:\n* term {tag}\n- Actionable Insights:\n* insight {tag}"
    )
}

#[tokio::test]
async fn document_flows_from_file_to_report() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("contract.txt");
    let body = "This agreement binds both parties. ".repeat(40);
    std::fs::write(&file, &body).unwrap();

    let document = TextLoader::default().load(&file).await.unwrap();
    let splitter = TextSplitter::new(SplitterConfig {
        chunk_size: 400,
        chunk_overlap: 80,
        sentence_aware: false,
    });
    let chunks = splitter.split(&document);
    assert!(chunks.len() > 1, "document should produce several chunks");

    let responses: Vec<String> = (0..chunks.len())
        .map(|i| analysis_response(&i.to_string()))
        .collect();
    let analyzer = DocumentAnalyzer::new(MockProvider::with_responses(responses));
    let report = analyzer.analyze(&chunks).await;

    for category in Category::ALL {
        assert_eq!(report.items(category).len(), chunks.len());
    }
    assert_eq!(report.items(Category::Risks)[0], "risk 0");
}

#[tokio::test]
async fn one_bad_chunk_does_not_sink_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("contract.txt");
    std::fs::write(&file, "a".repeat(900)).unwrap();

    let document = TextLoader::default().load(&file).await.unwrap();
    let splitter = TextSplitter::new(SplitterConfig {
        chunk_size: 300,
        chunk_overlap: 0,
        sentence_aware: false,
    });
    let chunks = splitter.split(&document);
    assert_eq!(chunks.len(), 3);

    let analyzer = DocumentAnalyzer::new(MockProvider::with_script(vec![
        Ok(analysis_response("first")),
        Err("quota exceeded".into()),
        Ok(analysis_response("third")),
    ]));
    let report = analyzer.analyze(&chunks).await;

    assert_eq!(
        report.items(Category::KeyClauses),
        ["clause first", "clause third"]
    );
}

#[tokio::test]
async fn chat_over_loaded_chunks_returns_answer() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("contract.txt");
    std::fs::write(&file, "The notice period is ninety days.").unwrap();

    let document = TextLoader::default().load(&file).await.unwrap();
    let chunks = TextSplitter::new(SplitterConfig::default()).split(&document);

    let responder = ChatResponder::new(MockProvider::with_responses(vec![
        "Ninety days.".into(),
    ]));
    let answer = responder.answer("what is the notice period?", &chunks).await;
    assert_eq!(answer, "Ninety days.");
}

#[tokio::test]
async fn empty_document_produces_empty_report_without_requests() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("empty.txt");
    std::fs::write(&file, "").unwrap();

    let document = TextLoader::default().load(&file).await.unwrap();
    let chunks = TextSplitter::new(SplitterConfig::default()).split(&document);
    assert!(chunks.is_empty());

    let mock = MockProvider::default();
    let counter = mock.clone();
    let report = DocumentAnalyzer::new(mock).analyze(&chunks).await;
    assert!(report.is_empty());
    assert_eq!(counter.call_count(), 0);

    let responder = ChatResponder::new(MockProvider::default());
    let answer = responder.answer("anything?", &chunks).await;
    assert_eq!(answer, prompt::CHAT_UPLOAD_FIRST);
}
