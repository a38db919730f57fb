use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Language, Parser, Query, QueryCursor, Tree};

use crate::core::ExtractError;

/// A grammar paired with the structural query run against it. Built once per
/// language and shared across workers.
pub struct CompiledQuery {
    language: Language,
    query: Query,
}

/// One capture from a query match.
#[derive(Debug, Clone)]
pub struct Captured<'q> {
    pub name: &'q str,
    pub node_id: usize,
    pub text: String,
}

impl CompiledQuery {
    pub fn new(language: Language, source: &str) -> Result<Self, ExtractError> {
        let query =
            Query::new(&language, source).map_err(|err| ExtractError::Query(err.to_string()))?;
        Ok(Self { language, query })
    }

    /// Parse `source` and return the captures of every match, in match order.
    pub fn matches(&self, source: &[u8]) -> Result<Vec<Vec<Captured<'_>>>, ExtractError> {
        let tree = parse_source(&self.language, source)?;
        let names = self.query.capture_names();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, tree.root_node(), source);

        let mut results = Vec::new();
        while let Some(query_match) = matches.next() {
            let captures = query_match
                .captures
                .iter()
                .map(|capture| Captured {
                    name: names[capture.index as usize],
                    node_id: capture.node.id(),
                    text: String::from_utf8_lossy(&source[capture.node.byte_range()])
                        .into_owned(),
                })
                .collect();
            results.push(captures);
        }
        Ok(results)
    }

    /// Texts of every capture named `capture`, delimiters stripped.
    pub fn capture_texts(
        &self,
        source: &[u8],
        capture: &str,
    ) -> Result<Vec<String>, ExtractError> {
        Ok(self
            .matches(source)?
            .into_iter()
            .flatten()
            .filter(|captured| captured.name == capture)
            .map(|captured| strip_delimiters(&captured.text).to_string())
            .collect())
    }
}

pub fn parse_source(language: &Language, source: &[u8]) -> Result<Tree, ExtractError> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|err| ExtractError::Language(err.to_string()))?;
    parser.parse(source, None).ok_or(ExtractError::ParseFailed)
}

/// Compile a query on first use. A failed compilation is remembered, so a
/// broken query costs one attempt per process rather than one per file.
pub fn load_query(
    cell: &'static OnceLock<Result<CompiledQuery, ExtractError>>,
    language: impl FnOnce() -> Language,
    source: &str,
) -> Result<&'static CompiledQuery, ExtractError> {
    cell.get_or_init(|| CompiledQuery::new(language(), source))
        .as_ref()
        .map_err(Clone::clone)
}

pub fn load_regex(
    cell: &'static OnceLock<Result<Regex, ExtractError>>,
    pattern: &str,
) -> Result<&'static Regex, ExtractError> {
    cell.get_or_init(|| Regex::new(pattern).map_err(|err| ExtractError::Regex(err.to_string())))
        .as_ref()
        .map_err(Clone::clone)
}

/// Every match of capture group `group`, in source order.
pub fn regex_group(regex: &Regex, text: &str, group: usize) -> Vec<String> {
    regex
        .captures_iter(text)
        .filter_map(|captures| captures.get(group))
        .map(|found| found.as_str().to_string())
        .collect()
}

/// Remove one pair of surrounding quotes or angle brackets.
pub fn strip_delimiters(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() < 2 {
        return raw;
    }
    let closer = match bytes[0] {
        b'"' => b'"',
        b'\'' => b'\'',
        b'<' => b'>',
        _ => return raw,
    };
    if bytes[bytes.len() - 1] == closer {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

pub fn lossy_text(content: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(content)
}
