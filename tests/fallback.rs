use astdeps::core::{ExtractError, SourceLanguage};
use astdeps::parsers::c_family::CFamilyExtractor;
use astdeps::parsers::{ReferenceExtractor, Tier};
use std::cell::Cell;

/// An include extractor whose grammar pass is replaced by a canned outcome.
struct CannedPrimary {
    primary: Result<Vec<String>, ExtractError>,
    fallback_runs: Cell<usize>,
}

impl CannedPrimary {
    fn new(primary: Result<Vec<String>, ExtractError>) -> Self {
        Self {
            primary,
            fallback_runs: Cell::new(0),
        }
    }
}

impl ReferenceExtractor for CannedPrimary {
    fn primary(&self, _content: &[u8]) -> Result<Vec<String>, ExtractError> {
        self.primary.clone()
    }

    fn fallback(&self, text: &str) -> Result<Vec<String>, ExtractError> {
        self.fallback_runs.set(self.fallback_runs.get() + 1);
        CFamilyExtractor::new(SourceLanguage::C).fallback(text)
    }
}

const SOURCE: &[u8] = b"#include <kernel.h>\nint broken( {\n";

#[test]
fn failing_primary_triggers_fallback() {
    let extractor = CannedPrimary::new(Err(ExtractError::ParseFailed));
    let extraction = extractor.extract(SOURCE).unwrap();

    assert_eq!(extraction.tier, Tier::Fallback);
    assert_eq!(extraction.references, vec!["kernel.h"]);
    assert_eq!(extractor.fallback_runs.get(), 1);
}

#[test]
fn empty_primary_triggers_fallback() {
    let extractor = CannedPrimary::new(Ok(Vec::new()));
    let extraction = extractor.extract(SOURCE).unwrap();

    assert_eq!(extraction.tier, Tier::Fallback);
    assert_eq!(extraction.references, vec!["kernel.h"]);
}

#[test]
fn successful_primary_skips_fallback() {
    let extractor = CannedPrimary::new(Ok(vec!["from_grammar.h".to_string()]));
    let extraction = extractor.extract(SOURCE).unwrap();

    assert_eq!(extraction.tier, Tier::Primary);
    assert_eq!(extraction.references, vec!["from_grammar.h"]);
    assert_eq!(extractor.fallback_runs.get(), 0);
}

struct BrokenEverywhere;

impl ReferenceExtractor for BrokenEverywhere {
    fn primary(&self, _content: &[u8]) -> Result<Vec<String>, ExtractError> {
        Err(ExtractError::Query("bad query".into()))
    }

    fn fallback(&self, _text: &str) -> Result<Vec<String>, ExtractError> {
        Err(ExtractError::Regex("bad pattern".into()))
    }
}

#[test]
fn failing_fallback_is_reported() {
    let err = BrokenEverywhere.extract(SOURCE).unwrap_err();
    assert!(matches!(err, ExtractError::Regex(_)));
}

#[test]
fn invalid_utf8_still_reaches_fallback() {
    let extractor = CannedPrimary::new(Err(ExtractError::ParseFailed));
    let mut content = vec![0xff, 0xfe, b'\n'];
    content.extend_from_slice(b"#include \"after_garbage.h\"\n");

    let extraction = extractor.extract(&content).unwrap();
    assert_eq!(extraction.references, vec!["after_garbage.h"]);
}
