use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use pacta_core::config::Config;
use pacta_core::{ChatResponder, DocumentAnalyzer, bootstrap};
use pacta_document::{Chunk, DocumentLoader, PdfLoader, TextSplitter};
use pacta_llm::GeminiProvider;
use pacta_speech::{PlaybackController, SpeechEngine, SystemEngine};
use pacta_tui::{App, AppEvent, EventReader, UiCommand, WorkerEvent};

#[derive(Parser, Debug)]
#[command(name = "pacta", version, about = "Terminal contract interpreter")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "pacta.toml")]
    config: PathBuf,
}

fn init_tracing() {
    // The TUI owns stdout; log lines go to stderr and are visible after
    // exit or when redirected.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load(&cli.config).context("failed to load configuration")?;

    let provider = bootstrap::build_provider(&config)?;
    let model_name = provider.model().to_owned();

    let (speech_enabled, engine): (bool, Arc<dyn SpeechEngine>) = if config.speech.enabled {
        match SystemEngine::new() {
            Ok(engine) => (true, Arc::new(engine)),
            Err(e) => {
                tracing::warn!(error = %e, "speech engine unavailable; read-aloud disabled");
                (false, Arc::new(MuteEngine))
            }
        }
    } else {
        (false, Arc::new(MuteEngine))
    };
    let playback = PlaybackController::new(engine);

    let (command_tx, command_rx) = mpsc::channel::<UiCommand>(16);
    let (worker_tx, worker_rx) = mpsc::channel::<WorkerEvent>(64);
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(256);

    let splitter = TextSplitter::new(bootstrap::splitter_config(&config));
    tokio::spawn(worker_loop(provider, splitter, command_rx, worker_tx));

    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);
    let reader = EventReader::new(event_tx, tick_rate);
    std::thread::spawn(move || reader.run());

    let app = App::new(command_tx, worker_rx, playback, speech_enabled, model_name);
    pacta_tui::run_tui(app, event_rx).await?;

    Ok(())
}

/// Stand-in engine when speech is disabled or unavailable; the playback
/// toggle is guarded in the UI, so this never actually speaks.
struct MuteEngine;

impl SpeechEngine for MuteEngine {
    fn speak(&self, _text: &str) -> Result<(), pacta_speech::SpeechError> {
        Ok(())
    }

    fn stop(&self) {}
}

/// Owns the loaded chunks and serves the UI one command at a time:
/// extract + chunk + analyze, or answer a chat query. Commands queue on
/// the channel while a document is in flight.
async fn worker_loop(
    provider: GeminiProvider,
    splitter: TextSplitter,
    mut command_rx: mpsc::Receiver<UiCommand>,
    worker_tx: mpsc::Sender<WorkerEvent>,
) {
    let analyzer = DocumentAnalyzer::new(provider.clone());
    let responder = ChatResponder::new(provider);
    let loader = PdfLoader::default();
    let mut chunks: Vec<Chunk> = Vec::new();

    while let Some(command) = command_rx.recv().await {
        match command {
            UiCommand::Analyze(path) => {
                tracing::info!(path = %path.display(), "analyzing document");
                match loader.load(&path).await {
                    Ok(document) => {
                        chunks = splitter.split(&document);
                        tracing::debug!(chunk_count = chunks.len(), "document chunked");
                        let report = analyzer.analyze(&chunks).await;
                        if worker_tx
                            .send(WorkerEvent::AnalysisComplete(report))
                            .await
                            .is_err()
                        {
                            break;
                        }
                    }
                    Err(e) => {
                        chunks.clear();
                        tracing::warn!(error = %e, "document load failed");
                        if worker_tx
                            .send(WorkerEvent::AnalysisFailed(e.to_string()))
                            .await
                            .is_err()
                        {
                            break;
                        }
                    }
                }
            }
            UiCommand::Chat(query) => {
                let answer = responder.answer(&query, &chunks).await;
                if worker_tx
                    .send(WorkerEvent::ChatAnswer(answer))
                    .await
                    .is_err()
                {
                    break;
                }
            }
        }
    }
}
