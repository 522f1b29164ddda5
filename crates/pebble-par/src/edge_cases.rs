//! Boundary-behavior tests: parser recovery bound, empty input.

#[cfg(test)]
mod tests {
    use crate::ast::{Declaration, Stmt};
    use crate::parse_source;
    use pebble_util::diagnostic::Handler;

    #[test]
    fn empty_program_has_no_declarations_and_no_errors() {
        let handler = Handler::new();
        let unit = parse_source("", &handler);
        assert!(unit.is_empty());
        assert!(!handler.has_errors());
    }

    #[test]
    fn a_single_syntax_error_affects_only_its_own_statement() {
        let handler = Handler::new();
        let src = "var a:int = 1; var b:int = @; var c:int = 3;";
        let unit = parse_source(src, &handler);
        // exactly one diagnostic from the garbage token inside `b`'s decl;
        // `a` and `c` both still parse successfully.
        assert_eq!(handler.error_count(), 2); // bad char (lexer) + missing expr (parser)
        assert_eq!(unit.len(), 2);
        match (&unit[0], &unit[1]) {
            (Declaration::Statement(Stmt::VarDecl(a)), Declaration::Statement(Stmt::VarDecl(c))) => {
                assert_eq!(a.name.as_str(), "a");
                assert_eq!(c.name.as_str(), "c");
            }
            other => panic!("expected two surviving var decls, got {:?}", other),
        }
    }

    #[test]
    fn missing_semicolon_swallows_through_the_next_one() {
        let handler = Handler::new();
        let src = "var a:int = 1 var b:int = 2; var c:int = 3;";
        let unit = parse_source(src, &handler);
        assert!(handler.has_errors());
        // recovery discards tokens up to and including the *next* `;`, which
        // lands inside `b`'s declaration — so both `a` and `b` are lost and
        // only `c` survives. This is the bounded (one declaration's worth
        // of blast radius), not zero-cost, recovery the grammar specifies.
        assert_eq!(unit.len(), 1);
        match &unit[0] {
            Declaration::Statement(Stmt::VarDecl(c)) => assert_eq!(c.name.as_str(), "c"),
            other => panic!("expected `c`'s declaration to survive, got {:?}", other),
        }
    }

    #[test]
    fn function_and_top_level_statements_coexist() {
        let handler = Handler::new();
        let src = "function f():int { return 1; } var x:int = f();";
        let unit = parse_source(src, &handler);
        assert!(!handler.has_errors());
        assert_eq!(unit.len(), 2);
        assert!(matches!(unit[0], Declaration::Function(_)));
        assert!(matches!(unit[1], Declaration::Statement(_)));
    }
}
