use astdeps::core::SourceLanguage;
use astdeps::parsers::asm::AsmExtractor;
use astdeps::parsers::bash::BashExtractor;
use astdeps::parsers::lua::LuaExtractor;
use astdeps::parsers::{extract, ReferenceExtractor, Tier};

#[test]
fn bash_source_command_is_extracted() {
    let code = b"#!/bin/bash\nset -e\nsource ./lib.sh\necho done\n";
    let extraction = extract(SourceLanguage::Bash, code).unwrap();
    assert_eq!(extraction.references, vec!["./lib.sh"]);
}

#[test]
fn bash_dot_command_is_extracted() {
    let code = b"#!/bin/sh\n. ./common.sh\n";
    let extraction = extract(SourceLanguage::Bash, code).unwrap();
    assert_eq!(extraction.references, vec!["./common.sh"]);
}

#[test]
fn bash_extra_arguments_are_not_references() {
    let code = b"source ./env.sh production\n";
    let extraction = extract(SourceLanguage::Bash, code).unwrap();
    assert_eq!(extraction.references, vec!["./env.sh"]);
}

#[test]
fn bash_variable_paths_are_kept_verbatim() {
    let code = b". ./common.sh\nsource $DIR/lib.sh production\nsource ${ROOT}/env.sh\n";
    let extraction = extract(SourceLanguage::Bash, code).unwrap();
    assert_eq!(extraction.tier, Tier::Primary);
    assert_eq!(
        extraction.references,
        vec!["./common.sh", "$DIR/lib.sh", "${ROOT}/env.sh"]
    );
}

#[test]
fn bash_fallback_strips_quotes() {
    let text = "source \"./quoted.sh\"\n  . ./plain.sh\nsourced=1\n";
    let references = BashExtractor.fallback(text).unwrap();
    assert_eq!(references, vec!["./quoted.sh", "./plain.sh"]);
}

#[test]
fn lua_require_calls_are_extracted() {
    let code = br#"
local json = require("dkjson")
local util = require('app.util')
local x = other("nope")
"#;
    let extraction = extract(SourceLanguage::Lua, code).unwrap();
    assert_eq!(extraction.references, vec!["dkjson", "app.util"]);
}

#[test]
fn lua_long_strings_lose_their_brackets() {
    let extraction = extract(SourceLanguage::Lua, b"local m = require([[long.mod]])\n").unwrap();
    assert_eq!(extraction.references, vec!["long.mod"]);

    let references = LuaExtractor.fallback("require [[other]]\n").unwrap();
    assert_eq!(references, vec!["other"]);
}

#[test]
fn lua_fallback_accepts_paren_less_require() {
    let references = LuaExtractor
        .fallback("local a = require \"lpeg\"\nlocal b = require('re')\n")
        .unwrap();
    assert_eq!(references, vec!["lpeg", "re"]);
}

#[test]
fn perl_uses_regex_tier() {
    let code = b"use strict;\nuse warnings;\nuse Data::Dumper;\nmy $x = 1;\n";
    let extraction = extract(SourceLanguage::Perl, code).unwrap();
    assert_eq!(extraction.tier, Tier::Fallback);
    assert_eq!(extraction.references, vec!["strict", "warnings", "Data::Dumper"]);
}

#[test]
fn assembly_include_directives_are_extracted() {
    let code = b"%include \"macros.inc\"\n    .include \"regs.s\"\n.include defs.inc\nmov eax, 1\n";
    let extraction = extract(SourceLanguage::Assembly, code).unwrap();
    assert_eq!(extraction.tier, Tier::Fallback);
    assert_eq!(extraction.references, vec!["macros.inc", "regs.s", "defs.inc"]);
}

#[test]
fn assembly_has_no_grammar_tier() {
    assert!(AsmExtractor.primary(b"%include \"x.inc\"").is_err());
}
