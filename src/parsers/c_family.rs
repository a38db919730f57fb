use regex::Regex;
use std::sync::OnceLock;

use super::common::{load_query, load_regex, regex_group, CompiledQuery};
use super::ReferenceExtractor;
use crate::core::{ExtractError, SourceLanguage};

const INCLUDE_QUERY: &str =
    "(preproc_include path: [(string_literal) (system_lib_string)] @include)";

const INCLUDE_PATTERN: &str = r#"(?m)^\s*#\s*include\s+[<"]([^>"]+)[>"]"#;

static C_QUERY: OnceLock<Result<CompiledQuery, ExtractError>> = OnceLock::new();
static CPP_QUERY: OnceLock<Result<CompiledQuery, ExtractError>> = OnceLock::new();
static INCLUDE_REGEX: OnceLock<Result<Regex, ExtractError>> = OnceLock::new();

/// `#include` extraction for C and C++. Both dialects share the query and the
/// fallback pattern; only the grammar differs.
pub struct CFamilyExtractor {
    language: SourceLanguage,
}

impl CFamilyExtractor {
    pub fn new(language: SourceLanguage) -> Self {
        Self { language }
    }

    fn query(&self) -> Result<&'static CompiledQuery, ExtractError> {
        match self.language {
            SourceLanguage::C => {
                load_query(&C_QUERY, || tree_sitter_c::LANGUAGE.into(), INCLUDE_QUERY)
            }
            SourceLanguage::Cpp => {
                load_query(&CPP_QUERY, || tree_sitter_cpp::LANGUAGE.into(), INCLUDE_QUERY)
            }
            other => Err(ExtractError::GrammarUnavailable(other)),
        }
    }
}

impl ReferenceExtractor for CFamilyExtractor {
    fn primary(&self, content: &[u8]) -> Result<Vec<String>, ExtractError> {
        self.query()?.capture_texts(content, "include")
    }

    fn fallback(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        let regex = load_regex(&INCLUDE_REGEX, INCLUDE_PATTERN)?;
        Ok(regex_group(regex, text, 1))
    }
}
