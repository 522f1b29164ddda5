//! Edge case tests for the binder — boundary behavior the main test module
//! doesn't cover: empty input, deeply nested scopes, error suppression
//! across several layers, and the label-uniqueness guarantee.

#[cfg(test)]
mod tests {
    use crate::hir::BoundStmt;
    use crate::{bind_source, types::Type};
    use pebble_util::diagnostic::{DiagnosticCode, Handler};
    use pebble_util::symbol::Symbol;

    fn bind(source: &str) -> (crate::hir::BoundProgram, Handler) {
        let handler = Handler::new();
        let program = bind_source(source, &handler);
        (program, handler)
    }

    #[test]
    fn empty_source_binds_to_an_empty_top_level_block() {
        let (program, handler) = bind("");
        assert!(!handler.has_errors());
        assert!(matches!(&program.top_level, BoundStmt::Block(stmts, _) if stmts.is_empty()));
    }

    #[test]
    fn a_chain_of_undeclared_names_reports_each_once() {
        let (_, handler) = bind("var x: int = a + b + c;");
        // three independent lookups fail; none of them suppress a sibling.
        assert_eq!(handler.error_count(), 3);
    }

    #[test]
    fn error_in_one_operand_suppresses_the_enclosing_operators_diagnostic() {
        let (_, handler) = bind("var x: int = (a + 1) * 2;");
        // only the inner undeclared-name error, not a second no-operator
        // complaint about multiplying an error by an int.
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn deeply_nested_blocks_still_resolve_the_outermost_binding() {
        let source = "var x: int = 1; { { { { print(string(x)); } } } }";
        let (_, handler) = bind(source);
        assert!(!handler.has_errors());
    }

    #[test]
    fn shadowing_a_parameter_inside_the_function_body_is_allowed() {
        let source = "function f(x: int): int { var x: int = x + 1; return x; }";
        let (_, handler) = bind(source);
        assert!(!handler.has_errors());
    }

    #[test]
    fn nested_loops_each_get_their_own_label_pair() {
        let source = "while true { while true { break; } break; }";
        let (program, handler) = bind(source);
        assert!(!handler.has_errors());
        let BoundStmt::Block(top, _) = &program.top_level else { unreachable!() };
        let BoundStmt::While(outer) = &top[0] else { unreachable!() };
        let BoundStmt::Block(outer_body, _) = outer.body.as_ref() else { unreachable!() };
        let BoundStmt::While(inner) = &outer_body[0] else { unreachable!() };
        assert_ne!(outer.break_label, inner.break_label);
        assert_ne!(outer.continue_label, inner.continue_label);
    }

    #[test]
    fn two_functions_generate_independent_label_sequences() {
        let source = "function f() { while true { break; } return 1; } \
                       function g() { while true { break; } return 1; }";
        let (program, handler) = bind(source);
        assert!(!handler.has_errors());
        let (_, f_body) = program.functions.get(&Symbol::intern("f")).unwrap();
        let (_, g_body) = program.functions.get(&Symbol::intern("g")).unwrap();
        let BoundStmt::Block(f_stmts, _) = f_body else { unreachable!() };
        let BoundStmt::Block(g_stmts, _) = g_body else { unreachable!() };
        let BoundStmt::While(f_while) = &f_stmts[0] else { unreachable!() };
        let BoundStmt::While(g_while) = &g_stmts[0] else { unreachable!() };
        // both counters reset to zero at the start of their own body.
        assert_eq!(f_while.break_label, g_while.break_label);
    }

    #[test]
    fn calling_a_type_name_with_two_arguments_is_a_call_not_a_conversion() {
        // `int` is never declared as a function, so this must fail as an
        // undeclared call rather than silently succeed as a conversion.
        let (_, handler) = bind("var x: string = int(1, 2);");
        assert!(handler
            .diagnostics()
            .iter()
            .any(|d| d.code == Some(DiagnosticCode::E_BIND_UNDECLARED_NAME)));
    }

    #[test]
    fn bool_to_string_conversion_without_a_cast_is_rejected() {
        let (_, handler) = bind("var b: bool = true; var s: string = b;");
        assert!(handler
            .diagnostics()
            .iter()
            .any(|d| d.code == Some(DiagnosticCode::E_BIND_ILLEGAL_CONVERSION)));
    }

    #[test]
    fn int_and_bool_have_no_conversion_in_either_direction() {
        let (_, handler) = bind("var n: int = 1; var b: bool = n;");
        assert_eq!(
            handler.diagnostics()[0].code,
            Some(DiagnosticCode::E_BIND_ILLEGAL_CONVERSION)
        );
    }

    #[test]
    fn for_loops_upper_bound_variable_name_never_collides_with_user_names() {
        let (program, handler) = bind("for i = 1 to 10 { var i: int = i; }");
        assert!(!handler.has_errors());
        let BoundStmt::Block(top, _) = &program.top_level else { unreachable!() };
        let BoundStmt::For(f) = &top[0] else { unreachable!() };
        assert_ne!(f.upper_var.name, f.var.name);
        assert_eq!(f.upper_var.ty, Type::Int);
    }
}
