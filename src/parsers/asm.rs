use regex::Regex;
use std::sync::OnceLock;

use super::common::{load_regex, regex_group};
use super::ReferenceExtractor;
use crate::core::{ExtractError, SourceLanguage};

// NASM `%include "file"` and GAS `.include "file"`; quotes optional.
const INCLUDE_PATTERN: &str = r#"(?m)^\s*(?:%include|\.include)\s+["']?([^\s"']+)["']?"#;

static INCLUDE_REGEX: OnceLock<Result<Regex, ExtractError>> = OnceLock::new();

pub struct AsmExtractor;

impl ReferenceExtractor for AsmExtractor {
    fn primary(&self, _content: &[u8]) -> Result<Vec<String>, ExtractError> {
        Err(ExtractError::GrammarUnavailable(SourceLanguage::Assembly))
    }

    fn fallback(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        let regex = load_regex(&INCLUDE_REGEX, INCLUDE_PATTERN)?;
        Ok(regex_group(regex, text, 1))
    }
}
