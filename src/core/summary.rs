use serde::Serialize;
use std::collections::BTreeMap;

use super::analyzer::AnalysisResult;
use super::config::DEFAULT_TOP_EMITTERS;
use super::graph::DependencyGraph;

/// Per-language statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub files: usize,
    pub edges: usize,
    /// `(source, out-degree)` pairs, highest degree first.
    pub top_emitters: Vec<(String, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub languages: usize,
    pub files: usize,
    pub edges: usize,
}

/// Aggregate view over an [`AnalysisResult`], keyed by language id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub languages: BTreeMap<&'static str, LanguageSummary>,
    pub totals: Totals,
}

impl Summary {
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        Self::with_top_emitters(result, DEFAULT_TOP_EMITTERS)
    }

    pub fn with_top_emitters(result: &AnalysisResult, limit: usize) -> Self {
        let languages = result
            .graphs
            .iter()
            .map(|(language, graph)| {
                let stats = LanguageSummary {
                    files: result.file_count(*language),
                    edges: graph.edge_count(),
                    top_emitters: top_emitters(graph, limit),
                };
                (language.id(), stats)
            })
            .collect();

        Self {
            languages,
            totals: Totals {
                languages: result.graphs.len(),
                files: result.total_files(),
                edges: result.total_edges(),
            },
        }
    }
}

/// The `limit` sources with the most outbound references. The sort is
/// stable, so equal degrees keep first-seen order.
pub fn top_emitters(graph: &DependencyGraph, limit: usize) -> Vec<(String, usize)> {
    let mut degrees = graph.out_degrees();
    degrees.sort_by(|a, b| b.1.cmp(&a.1));
    degrees
        .into_iter()
        .take(limit)
        .map(|(source, degree)| (source.to_string(), degree))
        .collect()
}
