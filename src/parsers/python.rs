use regex::Regex;
use std::sync::OnceLock;

use super::common::{load_query, load_regex, CompiledQuery};
use super::ReferenceExtractor;
use crate::core::ExtractError;

// Aliased imports record the module, never the alias. The grammar gives
// `from __future__ import ..` its own node with no module field.
const IMPORT_QUERY: &str = r#"
(future_import_statement) @future
(import_statement name: (dotted_name) @module)
(import_statement name: (aliased_import name: (dotted_name) @module))
(import_from_statement module_name: (dotted_name) @module)
(import_from_statement module_name: (relative_import) @module)
"#;

const IMPORT_PATTERN: &str = r"(?m)^\s*(?:from\s+([\w.]+)\s+import|import\s+([\w.]+))";

const FUTURE_MODULE: &str = "__future__";

static QUERY: OnceLock<Result<CompiledQuery, ExtractError>> = OnceLock::new();
static IMPORT_REGEX: OnceLock<Result<Regex, ExtractError>> = OnceLock::new();

pub struct PythonExtractor;

impl ReferenceExtractor for PythonExtractor {
    fn primary(&self, content: &[u8]) -> Result<Vec<String>, ExtractError> {
        let query = load_query(&QUERY, || tree_sitter_python::LANGUAGE.into(), IMPORT_QUERY)?;
        Ok(query
            .matches(content)?
            .into_iter()
            .flatten()
            .filter_map(|captured| match captured.name {
                "module" => Some(captured.text),
                "future" => Some(FUTURE_MODULE.to_string()),
                _ => None,
            })
            .collect())
    }

    fn fallback(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        let regex = load_regex(&IMPORT_REGEX, IMPORT_PATTERN)?;
        Ok(regex
            .captures_iter(text)
            .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
            .map(|module| module.as_str().to_string())
            .collect())
    }
}
