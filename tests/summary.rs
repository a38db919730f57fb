use astdeps::core::summary::top_emitters;
use astdeps::core::{AnalysisResult, DependencyGraph, SourceLanguage, Summary};

fn refs(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("dep{i}.h")).collect()
}

#[test]
fn top_emitters_rank_by_degree_then_first_seen() {
    let mut graph = DependencyGraph::new();
    graph.add("a.c", refs(1));
    graph.add("b.c", refs(5));
    graph.add("c.c", refs(3));
    graph.add("d.c", refs(5));

    assert_eq!(
        top_emitters(&graph, 10),
        vec![
            ("b.c".to_string(), 5),
            ("d.c".to_string(), 5),
            ("c.c".to_string(), 3),
            ("a.c".to_string(), 1),
        ]
    );
}

#[test]
fn top_emitters_are_capped() {
    let mut graph = DependencyGraph::new();
    for i in 0..15 {
        graph.add(&format!("f{i:02}.py"), refs(i + 1));
    }

    let top = top_emitters(&graph, 10);
    assert_eq!(top.len(), 10);
    assert_eq!(top[0], ("f14.py".to_string(), 15));
    assert_eq!(top[9], ("f05.py".to_string(), 6));
}

#[test]
fn summary_reports_counts_and_totals() {
    let mut result = AnalysisResult::default();

    let mut c = DependencyGraph::new();
    c.add("main.c", ["a.h", "b.h"]);
    c.add("util.c", ["a.h"]);
    result.graphs.insert(SourceLanguage::C, c);
    result.file_counts.insert(SourceLanguage::C, 4);

    // Scanned files without any references still produce a language entry.
    result.graphs.insert(SourceLanguage::Python, DependencyGraph::new());
    result.file_counts.insert(SourceLanguage::Python, 2);

    let summary = Summary::from_analysis(&result);

    let c = &summary.languages["c"];
    assert_eq!(c.files, 4);
    assert_eq!(c.edges, 3);
    assert_eq!(
        c.top_emitters,
        vec![("main.c".to_string(), 2), ("util.c".to_string(), 1)]
    );

    let python = &summary.languages["python"];
    assert_eq!(python.files, 2);
    assert_eq!(python.edges, 0);
    assert!(python.top_emitters.is_empty());

    assert_eq!(summary.totals.languages, 2);
    assert_eq!(summary.totals.files, 6);
    assert_eq!(summary.totals.edges, 3);
}

#[test]
fn summary_of_empty_scan_is_all_zero() {
    let summary = Summary::from_analysis(&AnalysisResult::default());
    assert!(summary.languages.is_empty());
    assert_eq!(summary.totals.languages, 0);
    assert_eq!(summary.totals.files, 0);
    assert_eq!(summary.totals.edges, 0);
}
