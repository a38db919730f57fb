pub mod asm;
pub mod bash;
pub mod c_family;
pub mod common;
pub mod lua;
pub mod perl;
pub mod python;

use tracing::debug;

use crate::core::{ExtractError, SourceLanguage};

/// Which tier produced an [`Extraction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub references: Vec<String>,
    pub tier: Tier,
}

/// A two-tier reference extractor for one language.
///
/// `primary` is the grammar-based pass; `fallback` is a regex scan over the
/// lossily decoded text and only runs after the primary pass failed or came
/// back empty.
pub trait ReferenceExtractor {
    fn primary(&self, content: &[u8]) -> Result<Vec<String>, ExtractError>;

    fn fallback(&self, text: &str) -> Result<Vec<String>, ExtractError>;

    /// Run the primary pass and fall back when it has nothing to offer.
    /// Only a failing fallback is reported as an error.
    fn extract(&self, content: &[u8]) -> Result<Extraction, ExtractError> {
        match self.primary(content) {
            Ok(references) if !references.is_empty() => {
                return Ok(Extraction {
                    references,
                    tier: Tier::Primary,
                });
            }
            Ok(_) => debug!("primary extractor found no references"),
            Err(err) => debug!(error = %err, "primary extractor failed"),
        }

        let text = common::lossy_text(content);
        self.fallback(&text).map(|references| Extraction {
            references,
            tier: Tier::Fallback,
        })
    }
}

/// Extract the raw references in `content` using the strategy for `language`.
pub fn extract(language: SourceLanguage, content: &[u8]) -> Result<Extraction, ExtractError> {
    match language {
        SourceLanguage::C | SourceLanguage::Cpp => {
            c_family::CFamilyExtractor::new(language).extract(content)
        }
        SourceLanguage::Assembly => asm::AsmExtractor.extract(content),
        SourceLanguage::Python => python::PythonExtractor.extract(content),
        SourceLanguage::Bash => bash::BashExtractor.extract(content),
        SourceLanguage::Lua => lua::LuaExtractor.extract(content),
        SourceLanguage::Perl => perl::PerlExtractor.extract(content),
    }
}
