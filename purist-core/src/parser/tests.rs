//! Tests for JavaScript parser

#[cfg(test)]
mod tests {
    use crate::parser;
    use swc_common::{sync::Lrc, SourceMap};

    fn parse_test(src: &str) -> Result<swc_ecma_ast::Module, anyhow::Error> {
        let cm: Lrc<SourceMap> = Default::default();
        parser::parse_javascript(src, &cm, "test.js")
    }

    #[test]
    fn test_parse_simple_function() {
        let src = "const f = (a) => { return a + 1; };";
        let result = parse_test(src);
        assert!(result.is_ok(), "Should parse simple arrow function");
    }

    #[test]
    fn test_parse_loops() {
        let src = "for (let i = 0; i < 3; i++) { console.log(i); }";
        let result = parse_test(src);
        assert!(result.is_ok(), "Should parse loop statements");
    }

    #[test]
    fn test_parse_rejects_invalid_syntax() {
        let src = "const = ;";
        let result = parse_test(src);
        assert!(result.is_err(), "Invalid syntax should cause parse error");
    }

    #[test]
    fn test_parse_rejects_typescript_annotations() {
        let src = "function foo(x: number): number { return x * 2; }";
        let result = parse_test(src);
        assert!(
            result.is_err(),
            "TypeScript annotations should cause parse error in ES mode"
        );
    }

    #[test]
    fn test_parse_empty_source() {
        let result = parse_test("");
        assert!(result.is_ok(), "Empty source should parse to empty module");
        assert!(result.unwrap().body.is_empty());
    }
}
