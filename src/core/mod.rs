pub mod analyzer;
pub mod config;
pub mod error;
pub mod graph;
pub mod language;
pub mod scanner;
pub mod summary;

pub use analyzer::{AnalysisResult, DependencyAnalyzer};
pub use config::ScanConfig;
pub use error::{ExtractError, ScanError};
pub use graph::DependencyGraph;
pub use language::SourceLanguage;
pub use scanner::FileScanner;
pub use summary::Summary;
