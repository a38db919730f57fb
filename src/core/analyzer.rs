use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::config::ScanConfig;
use super::error::ScanError;
use super::graph::DependencyGraph;
use super::language::SourceLanguage;
use super::scanner::{relative_path, FileScanner};
use crate::parsers::{self, Tier};

/// Per-language graphs and file tallies produced by one scan.
#[derive(Debug, Clone, Default)]
pub struct AnalysisResult {
    pub graphs: BTreeMap<SourceLanguage, DependencyGraph>,
    pub file_counts: BTreeMap<SourceLanguage, usize>,
}

impl AnalysisResult {
    pub fn graph(&self, language: SourceLanguage) -> Option<&DependencyGraph> {
        self.graphs.get(&language)
    }

    pub fn file_count(&self, language: SourceLanguage) -> usize {
        self.file_counts.get(&language).copied().unwrap_or(0)
    }

    pub fn total_files(&self) -> usize {
        self.file_counts.values().sum()
    }

    pub fn total_edges(&self) -> usize {
        self.graphs.values().map(DependencyGraph::edge_count).sum()
    }

    /// Language id → source path → sorted references.
    pub fn detailed(&self) -> BTreeMap<&'static str, BTreeMap<String, Vec<String>>> {
        self.graphs
            .iter()
            .map(|(language, graph)| (language.id(), graph.to_sorted_map()))
            .collect()
    }

    /// Record one scanned file. The tally is bumped even when no references
    /// were found.
    fn record(&mut self, language: SourceLanguage, source: &str, references: &[String]) {
        self.graphs
            .entry(language)
            .or_default()
            .add(source, references);
        *self.file_counts.entry(language).or_insert(0) += 1;
    }
}

/// Result of extracting a single file, before it is folded into the graphs.
#[derive(Debug)]
struct ScannedFile {
    relative: String,
    language: SourceLanguage,
    references: Vec<String>,
    tier: Option<Tier>,
}

/// Walks a tree, dispatches every recognised file to its extraction
/// strategy, and builds one [`DependencyGraph`] per language.
///
/// Files are extracted in parallel and folded into the graphs on the calling
/// thread in lexical path order, so results are identical across runs.
pub struct DependencyAnalyzer {
    config: ScanConfig,
}

impl DependencyAnalyzer {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, root: &Path) -> Result<AnalysisResult, ScanError> {
        self.config.validate(root)?;
        let start = Instant::now();

        let scanner = FileScanner::new(&self.config.omit);
        let files: Vec<(PathBuf, SourceLanguage)> = scanner
            .candidates(root)
            .filter_map(|path| SourceLanguage::from_path(&path).map(|language| (path, language)))
            .collect();
        info!(root = %root.display(), files = files.len(), "scanning source files");

        let scanned = match self.config.threads {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|err| ScanError::WorkerPool(err.to_string()))?
                .install(|| self.extract_all(root, &files)),
            None => self.extract_all(root, &files),
        };

        let mut result = AnalysisResult::default();
        let mut fallbacks: BTreeMap<SourceLanguage, usize> = BTreeMap::new();
        for file in scanned.into_iter().flatten() {
            if file.tier == Some(Tier::Fallback) {
                *fallbacks.entry(file.language).or_insert(0) += 1;
            }
            result.record(file.language, &file.relative, &file.references);
        }

        for (language, count) in &fallbacks {
            debug!(%language, files = count, "regex fallback used");
        }
        info!(
            languages = result.graphs.len(),
            files = result.total_files(),
            edges = result.total_edges(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "extraction complete"
        );
        Ok(result)
    }

    fn extract_all(
        &self,
        root: &Path,
        files: &[(PathBuf, SourceLanguage)],
    ) -> Vec<Option<ScannedFile>> {
        files
            .par_iter()
            .map(|(path, language)| self.extract_file(root, path, *language))
            .collect()
    }

    /// `None` means the file could not be read and is left out of the tally.
    fn extract_file(
        &self,
        root: &Path,
        path: &Path,
        language: SourceLanguage,
    ) -> Option<ScannedFile> {
        let relative =
            relative_path(root, path).unwrap_or_else(|| path.to_string_lossy().into_owned());

        let size = match fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable file");
                return None;
            }
        };
        if size > self.config.max_file_bytes {
            warn!(
                path = %path.display(),
                size,
                limit = self.config.max_file_bytes,
                "file exceeds size limit; counted without extraction"
            );
            return Some(ScannedFile {
                relative,
                language,
                references: Vec::new(),
                tier: None,
            });
        }

        let content = match fs::read(path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable file");
                return None;
            }
        };

        let (references, tier) = match parsers::extract(language, &content) {
            Ok(extraction) => (extraction.references, Some(extraction.tier)),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "reference extraction failed");
                (Vec::new(), None)
            }
        };

        Some(ScannedFile {
            relative,
            language,
            references,
            tier,
        })
    }
}
