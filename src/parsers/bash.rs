use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use super::common::{load_query, load_regex, strip_delimiters, CompiledQuery};
use super::ReferenceExtractor;
use crate::core::ExtractError;

const SOURCE_QUERY: &str = r#"
((command
   name: (command_name) @cmd
   .
   argument: (_) @path)
 (#match? @cmd "^(source|\\.)$"))
"#;

const SOURCE_PATTERN: &str = r"(?m)^\s*(?:source|\.)\s+(\S+)";

static QUERY: OnceLock<Result<CompiledQuery, ExtractError>> = OnceLock::new();
static SOURCE_REGEX: OnceLock<Result<Regex, ExtractError>> = OnceLock::new();

/// `source FILE` and `. FILE` commands. Only the first argument of each
/// command names the sourced file; the rest are positional parameters. The
/// argument is taken verbatim whatever its shape, so `$DIR/lib.sh` stays
/// unexpanded.
pub struct BashExtractor;

impl ReferenceExtractor for BashExtractor {
    fn primary(&self, content: &[u8]) -> Result<Vec<String>, ExtractError> {
        let query = load_query(&QUERY, || tree_sitter_bash::LANGUAGE.into(), SOURCE_QUERY)?;

        let mut seen_commands = HashSet::new();
        let mut paths = Vec::new();
        for captures in query.matches(content)? {
            let Some(cmd) = captures.iter().find(|c| c.name == "cmd") else {
                continue;
            };
            if !seen_commands.insert(cmd.node_id) {
                continue;
            }
            if let Some(path) = captures.iter().find(|c| c.name == "path") {
                paths.push(strip_delimiters(&path.text).to_string());
            }
        }
        Ok(paths)
    }

    fn fallback(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        let regex = load_regex(&SOURCE_REGEX, SOURCE_PATTERN)?;
        Ok(regex
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .map(|path| strip_delimiters(path.as_str()).to_string())
            .collect())
    }
}
