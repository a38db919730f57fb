use regex::Regex;
use std::sync::OnceLock;

use super::common::{load_regex, regex_group};
use super::ReferenceExtractor;
use crate::core::{ExtractError, SourceLanguage};

const USE_PATTERN: &str = r"(?m)^\s*use\s+([\w:]+)";

static USE_REGEX: OnceLock<Result<Regex, ExtractError>> = OnceLock::new();

/// `use Module::Name` statements. No Perl grammar is linked in, so every
/// file goes through the regex scan.
pub struct PerlExtractor;

impl ReferenceExtractor for PerlExtractor {
    fn primary(&self, _content: &[u8]) -> Result<Vec<String>, ExtractError> {
        Err(ExtractError::GrammarUnavailable(SourceLanguage::Perl))
    }

    fn fallback(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        let regex = load_regex(&USE_REGEX, USE_PATTERN)?;
        Ok(regex_group(regex, text, 1))
    }
}
