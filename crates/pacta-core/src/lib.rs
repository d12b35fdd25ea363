//! Core contract-analysis logic: configuration, the four-category
//! document analyzer, and the follow-up chat responder.

pub mod analyzer;
pub mod bootstrap;
pub mod category;
pub mod chat;
pub mod config;
pub mod parser;
pub mod prompt;
pub mod report;

pub use analyzer::DocumentAnalyzer;
pub use category::Category;
pub use chat::ChatResponder;
pub use config::Config;
pub use report::AnalysisReport;
