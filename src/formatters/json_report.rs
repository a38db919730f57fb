use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::{AnalysisResult, Summary};

/// Writes the detailed graph document and the summary document as
/// pretty-printed JSON. Every map in both documents is ordered, so identical
/// scans produce byte-identical files.
pub struct JsonReportFormatter {
    top_emitters: usize,
}

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self {
            top_emitters: crate::core::config::DEFAULT_TOP_EMITTERS,
        }
    }

    pub fn with_top_emitters(mut self, top_emitters: usize) -> Self {
        self.top_emitters = top_emitters;
        self
    }

    pub fn format_detailed(&self, result: &AnalysisResult) -> Result<String> {
        to_json(&result.detailed())
    }

    pub fn format_summary(&self, result: &AnalysisResult) -> Result<String> {
        to_json(&Summary::with_top_emitters(result, self.top_emitters))
    }

    pub fn write_detailed(&self, result: &AnalysisResult, output_path: &Path) -> Result<()> {
        write_document(output_path, &self.format_detailed(result)?)
    }

    pub fn write_summary(&self, result: &AnalysisResult, output_path: &Path) -> Result<()> {
        write_document(output_path, &self.format_summary(result)?)
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize report")
}

fn write_document(output_path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(output_path, content)
        .with_context(|| format!("failed to write {}", output_path.display()))
}
