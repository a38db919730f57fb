use regex::Regex;
use std::sync::OnceLock;

use super::common::{load_query, load_regex, CompiledQuery};
use super::ReferenceExtractor;
use crate::core::ExtractError;

const REQUIRE_QUERY: &str = r#"
((function_call
   name: (identifier) @func
   arguments: (arguments (string content: (string_content) @module)))
 (#eq? @func "require"))
"#;

// Accepts both `require("mod")` and the paren-less `require "mod"`, quoted or
// as a `[[long]]` string.
const REQUIRE_PATTERN: &str = r#"require\s*\(?\s*(?:['"]([^'"]+)['"]|\[\[([^\]]+)\]\])"#;

static QUERY: OnceLock<Result<CompiledQuery, ExtractError>> = OnceLock::new();
static REQUIRE_REGEX: OnceLock<Result<Regex, ExtractError>> = OnceLock::new();

pub struct LuaExtractor;

impl ReferenceExtractor for LuaExtractor {
    fn primary(&self, content: &[u8]) -> Result<Vec<String>, ExtractError> {
        load_query(&QUERY, || tree_sitter_lua::LANGUAGE.into(), REQUIRE_QUERY)?
            .capture_texts(content, "module")
    }

    fn fallback(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        let regex = load_regex(&REQUIRE_REGEX, REQUIRE_PATTERN)?;
        Ok(regex
            .captures_iter(text)
            .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
            .map(|module| module.as_str().to_string())
            .collect())
    }
}
