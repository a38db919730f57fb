//! # astdeps
//!
//! Include/import dependency graphs for mixed-language source trees.
//!
//! Every recognised file is classified by extension and handed to a two-tier
//! extractor: a tree-sitter query first, a regex scan when the query fails or
//! finds nothing. The raw reference strings land in one directed graph per
//! language, which can be serialized in full or summarised.
//!
//! ## Supported Languages
//!
//! C, C++, assembly (`.S`), Python, Bash, Lua, Perl

pub mod core;
pub mod formatters;
pub mod parsers;
