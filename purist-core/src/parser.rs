//! JavaScript parser using SWC
//!
//! Global invariants enforced:
//! - Deterministic parsing order
//! - A parse failure aborts the run with zero findings

use anyhow::Result;
use swc_common::{sync::Lrc, FileName, SourceFile, SourceMap};
use swc_ecma_ast::{EsVersion, Module};
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax};

/// Create SWC parser syntax configuration for plain JavaScript
///
/// This configuration:
/// - Enables ECMAScript syntax only (no TypeScript)
/// - Disables JSX (will error on JSX syntax)
fn javascript_syntax() -> Syntax {
    Syntax::Es(swc_ecma_parser::EsSyntax {
        jsx: false,
        ..Default::default()
    })
}

/// Parse JavaScript source code into an AST module
///
/// Returns an error if parse errors occur; the caller receives no findings.
pub fn parse_javascript(src: &str, source_map: &Lrc<SourceMap>, filename: &str) -> Result<Module> {
    // Create SourceFile for the source code
    let source_file: Lrc<SourceFile> = source_map.new_source_file(
        FileName::Custom(filename.into()).into(),
        src.to_string(),
    );

    // Create StringInput from SourceFile
    let input = StringInput::from(&*source_file);

    // Create lexer with ES syntax
    let lexer = Lexer::new(javascript_syntax(), EsVersion::Es2022, input, None);

    // Create parser
    let mut parser = Parser::new_from(lexer);

    // Parse module
    parser.parse_module().map_err(|e| {
        anyhow::anyhow!("Parse error: {}", e.kind().msg())
            .context(format!("Failed to parse JavaScript source: {}", filename))
    })
}

#[cfg(test)]
#[path = "parser/tests.rs"]
mod tests;
