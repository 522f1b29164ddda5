//! pebble-sem — the binder.
//!
//! [`bind_program`] walks a [`pebble_par::ast::CompilationUnit`] twice: a
//! first pass collects every function's signature (so forward calls
//! resolve) and binds top-level statements directly against the global
//! scope, then a second pass binds each function body against a fresh
//! scope seeded with its parameters. Every bound node's type is computed
//! on construction; nothing is re-checked later.
//!
//! Binding never stops at the first error: an unresolvable name, operator,
//! or conversion becomes a [`hir::BoundExpr::Error`]/[`hir::BoundStmt::Error`]
//! node and a diagnostic, and binding continues around it.

pub mod hir;
pub mod scope;
pub mod types;

#[cfg(test)]
mod edge_cases;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use indexmap::IndexMap;

use pebble_par::ast::{
    self, BinaryOp, CompilationUnit, Declaration, Expr, FunctionDecl, Stmt, UnaryOp,
};
use pebble_util::diagnostic::{DiagnosticCode, Handler};
use pebble_util::span::Span;
use pebble_util::symbol::{Symbol, FN_INPUT, FN_PRINT};

use hir::{
    AssignmentBoundExpr, BinaryBoundExpr, BoundExpr, BoundProgram, BoundStmt, CallBoundExpr,
    ConversionBoundExpr, ForBoundStmt, FunctionSymbol, IfBoundStmt, LiteralBoundExpr,
    UnaryBoundExpr, VarDeclBoundStmt, Variable, VariableBoundExpr, VariableKind, WhileBoundStmt,
};
use scope::Scope;
use types::{classify, resolve_binary, resolve_unary, Conversion, Type};

/// Binds a whole program. Builds both built-ins (`print`, `input`) and
/// every user-declared function into one flat symbol table before binding
/// any body, so calls may appear textually before their declaration.
pub fn bind_program(unit: &CompilationUnit, handler: &Handler) -> BoundProgram {
    let binder = Binder::new(handler);
    binder.register_builtins();

    let mut pending_functions: Vec<(Rc<FunctionSymbol>, &FunctionDecl)> = Vec::new();
    let mut top_level_stmts = Vec::new();

    for decl in unit {
        match decl {
            Declaration::Function(f) => {
                if let Some(sym) = binder.bind_function_signature(f) {
                    pending_functions.push((sym, f));
                }
            }
            Declaration::Statement(s) => {
                let scope = Rc::clone(&binder.global_scope);
                top_level_stmts.push(binder.bind_stmt(s, &scope));
            }
        }
    }

    let top_level_span = match (top_level_stmts.first(), top_level_stmts.last()) {
        (Some(first), Some(last)) => first.span().merge(last.span()),
        _ => Span::DUMMY,
    };
    let top_level = BoundStmt::Block(top_level_stmts, top_level_span);

    let mut functions = IndexMap::new();
    for (sym, decl) in pending_functions {
        let body = binder.bind_function_body(&sym, decl);
        functions.insert(sym.name, (sym, body));
    }

    BoundProgram {
        global_variables: binder.global_variables.into_inner(),
        functions,
        top_level,
    }
}

/// Convenience entry point mirroring `pebble_par::parse_source`: lexes,
/// parses, and binds in one call.
pub fn bind_source(source: &str, handler: &Handler) -> BoundProgram {
    let unit = pebble_par::parse_source(source, handler);
    bind_program(&unit, handler)
}

struct Binder<'a> {
    handler: &'a Handler,
    global_scope: Rc<Scope>,
    global_variables: RefCell<IndexMap<Symbol, Rc<Variable>>>,
    functions: RefCell<HashMap<Symbol, Rc<FunctionSymbol>>>,
    current_function: RefCell<Option<Rc<FunctionSymbol>>>,
    /// Stack of `(break_label, continue_label)` pairs, one pushed per
    /// enclosing loop; `break`/`continue` bind against its top.
    loop_labels: RefCell<Vec<(Symbol, Symbol)>>,
    /// Reset at the start of every function body (and the top-level block)
    /// so labels stay short and each body's sequence starts at zero.
    label_counter: Cell<u32>,
}

impl<'a> Binder<'a> {
    fn new(handler: &'a Handler) -> Self {
        Self {
            handler,
            global_scope: Scope::root(),
            global_variables: RefCell::new(IndexMap::new()),
            functions: RefCell::new(HashMap::new()),
            current_function: RefCell::new(None),
            loop_labels: RefCell::new(Vec::new()),
            label_counter: Cell::new(0),
        }
    }

    fn register_builtins(&self) {
        let print = FunctionSymbol {
            name: FN_PRINT,
            parameters: vec![Rc::new(Variable {
                name: Symbol::intern("text"),
                ty: Type::String,
                is_read_only: true,
                kind: VariableKind::Parameter,
            })],
            return_type: Type::Void,
            is_builtin: true,
        };
        let input = FunctionSymbol {
            name: FN_INPUT,
            parameters: Vec::new(),
            return_type: Type::String,
            is_builtin: true,
        };
        self.functions.borrow_mut().insert(FN_PRINT, Rc::new(print));
        self.functions.borrow_mut().insert(FN_INPUT, Rc::new(input));
    }

    /// Binder-time labels live in their own `lbl{N}` namespace so they can
    /// never collide with the `if{N}`/`while{N}` labels `pebble-low`
    /// generates in its own pass, without the two phases sharing a counter.
    fn fresh_label(&self, prefix: &str) -> Symbol {
        let n = self.label_counter.get();
        self.label_counter.set(n + 1);
        Symbol::intern(&format!("lbl_{}{}", prefix, n))
    }

    fn error(&self, span: Span, code: DiagnosticCode, message: impl Into<String>) {
        self.handler.build_error(span, message).code(code).emit(self.handler);
    }

    // --- signatures -------------------------------------------------

    fn resolve_type_clause(&self, clause: &ast::TypeClause) -> Type {
        match Type::from_symbol(clause.name) {
            Some(ty) => ty,
            None => {
                self.error(
                    clause.span,
                    DiagnosticCode::E_BIND_UNDECLARED_NAME,
                    format!("unknown type '{}'", clause.name.as_str()),
                );
                Type::Error
            }
        }
    }

    fn bind_function_signature(&self, decl: &FunctionDecl) -> Option<Rc<FunctionSymbol>> {
        let mut seen = HashMap::new();
        let mut parameters = Vec::with_capacity(decl.params.len());
        for param in &decl.params {
            if seen.insert(param.name, param.name_span).is_some() {
                self.error(
                    param.name_span,
                    DiagnosticCode::E_BIND_DUPLICATE_DECL,
                    format!("duplicate parameter '{}'", param.name.as_str()),
                );
            }
            let ty = self.resolve_type_clause(&param.ty);
            parameters.push(Rc::new(Variable {
                name: param.name,
                ty,
                is_read_only: true,
                kind: VariableKind::Parameter,
            }));
        }

        // A function with no written return type defaults to `int`.
        let return_type = match &decl.return_type {
            Some(clause) => self.resolve_type_clause(clause),
            None => Type::Int,
        };

        let symbol = Rc::new(FunctionSymbol {
            name: decl.name,
            parameters,
            return_type,
            is_builtin: false,
        });

        if self.functions.borrow().contains_key(&decl.name) {
            self.error(
                decl.name_span,
                DiagnosticCode::E_BIND_DUPLICATE_DECL,
                format!("'{}' is already declared", decl.name.as_str()),
            );
            return None;
        }
        self.functions.borrow_mut().insert(decl.name, Rc::clone(&symbol));
        Some(symbol)
    }

    fn bind_function_body(&self, symbol: &Rc<FunctionSymbol>, decl: &FunctionDecl) -> BoundStmt {
        let scope = Scope::child(&self.global_scope);
        for param in &symbol.parameters {
            scope.declare(Rc::clone(param));
        }

        *self.current_function.borrow_mut() = Some(Rc::clone(symbol));
        self.label_counter.set(0);

        let stmts: Vec<BoundStmt> = decl.body.iter().map(|s| self.bind_stmt(s, &scope)).collect();

        *self.current_function.borrow_mut() = None;
        BoundStmt::Block(stmts, decl.span)
    }

    // --- statements ---------------------------------------------------

    fn bind_stmt(&self, stmt: &Stmt, scope: &Rc<Scope>) -> BoundStmt {
        match stmt {
            Stmt::Block(stmts, span) => {
                let inner = Scope::child(scope);
                let bound = stmts.iter().map(|s| self.bind_stmt(s, &inner)).collect();
                BoundStmt::Block(bound, *span)
            }
            Stmt::ExpressionStmt(expr, span) => {
                BoundStmt::ExpressionStmt(self.bind_expr(expr, scope), *span)
            }
            Stmt::VarDecl(decl) => self.bind_var_decl(decl, scope),
            Stmt::If(s) => self.bind_if(s, scope),
            Stmt::While(s) => self.bind_while(s, scope),
            Stmt::For(s) => self.bind_for(s, scope),
            Stmt::Break(span) => self.bind_break(*span),
            Stmt::Continue(span) => self.bind_continue(*span),
            Stmt::Return(s) => self.bind_return(s, scope),
            Stmt::Error(span) => BoundStmt::Error(*span),
        }
    }

    fn bind_var_decl(&self, decl: &ast::VarDeclStmt, scope: &Rc<Scope>) -> BoundStmt {
        let init = self.bind_expr(&decl.init, scope);
        let declared_type = match &decl.type_clause {
            Some(clause) => self.resolve_type_clause(clause),
            None => init.ty(),
        };
        let init_span = decl.init.span();
        let init = if declared_type != Type::Error {
            self.bind_conversion(declared_type, init, false, init_span)
        } else {
            init
        };

        let kind = if self.current_function.borrow().is_some() {
            VariableKind::Local
        } else {
            VariableKind::Global
        };
        let symbol = Rc::new(Variable {
            name: decl.name,
            ty: declared_type,
            is_read_only: decl.is_read_only,
            kind,
        });

        if !scope.declare(Rc::clone(&symbol)) {
            self.error(
                decl.name_span,
                DiagnosticCode::E_BIND_DUPLICATE_DECL,
                format!("'{}' is already declared in this scope", decl.name.as_str()),
            );
        }
        if kind == VariableKind::Global {
            self.global_variables
                .borrow_mut()
                .entry(symbol.name)
                .or_insert_with(|| Rc::clone(&symbol));
        }

        BoundStmt::VariableDeclaration(VarDeclBoundStmt {
            symbol,
            init,
            span: decl.span,
        })
    }

    fn bind_if(&self, s: &ast::IfStmt, scope: &Rc<Scope>) -> BoundStmt {
        let cond = self.bind_expr(&s.condition, scope);
        let cond_span = s.condition.span();
        let condition = self.bind_conversion(Type::Bool, cond, false, cond_span);
        let then_branch = Box::new(self.bind_stmt(&s.then_branch, scope));
        let else_branch = s
            .else_branch
            .as_ref()
            .map(|e| Box::new(self.bind_stmt(e, scope)));
        BoundStmt::If(IfBoundStmt {
            condition,
            then_branch,
            else_branch,
            span: s.span,
        })
    }

    fn bind_while(&self, s: &ast::WhileStmt, scope: &Rc<Scope>) -> BoundStmt {
        let cond = self.bind_expr(&s.condition, scope);
        let cond_span = s.condition.span();
        let condition = self.bind_conversion(Type::Bool, cond, false, cond_span);

        let break_label = self.fresh_label("break");
        let continue_label = self.fresh_label("continue");
        self.loop_labels.borrow_mut().push((break_label, continue_label));
        let body = Box::new(self.bind_stmt(&s.body, scope));
        self.loop_labels.borrow_mut().pop();

        BoundStmt::While(WhileBoundStmt {
            condition,
            body,
            break_label,
            continue_label,
            span: s.span,
        })
    }

    fn bind_for(&self, s: &ast::ForStmt, scope: &Rc<Scope>) -> BoundStmt {
        let lower = self.bind_expr(&s.lower, scope);
        let lower = self.bind_conversion(Type::Int, lower, false, s.lower.span());
        let upper = self.bind_expr(&s.upper, scope);
        let upper = self.bind_conversion(Type::Int, upper, false, s.upper.span());

        let loop_scope = Scope::child(scope);
        let var = Rc::new(Variable {
            name: s.var_name,
            ty: Type::Int,
            is_read_only: true,
            kind: VariableKind::Local,
        });
        if !loop_scope.declare(Rc::clone(&var)) {
            self.error(
                s.var_span,
                DiagnosticCode::E_BIND_DUPLICATE_DECL,
                format!("'{}' is already declared in this scope", s.var_name.as_str()),
            );
        }
        let upper_var = Rc::new(Variable {
            name: self.fresh_label("for_upper"),
            ty: Type::Int,
            is_read_only: true,
            kind: VariableKind::Local,
        });
        loop_scope.declare(Rc::clone(&upper_var));

        let break_label = self.fresh_label("break");
        let continue_label = self.fresh_label("continue");
        self.loop_labels.borrow_mut().push((break_label, continue_label));
        let body = Box::new(self.bind_stmt(&s.body, &loop_scope));
        self.loop_labels.borrow_mut().pop();

        BoundStmt::For(ForBoundStmt {
            var,
            upper_var,
            lower,
            upper,
            body,
            break_label,
            continue_label,
            span: s.span,
        })
    }

    fn bind_break(&self, span: Span) -> BoundStmt {
        match self.loop_labels.borrow().last() {
            Some((break_label, _)) => BoundStmt::Goto(*break_label, span),
            None => {
                self.error(
                    span,
                    DiagnosticCode::E_BIND_LOOP_CONTROL_OUTSIDE_LOOP,
                    "'break' used outside any loop",
                );
                BoundStmt::Error(span)
            }
        }
    }

    fn bind_continue(&self, span: Span) -> BoundStmt {
        match self.loop_labels.borrow().last() {
            Some((_, continue_label)) => BoundStmt::Goto(*continue_label, span),
            None => {
                self.error(
                    span,
                    DiagnosticCode::E_BIND_LOOP_CONTROL_OUTSIDE_LOOP,
                    "'continue' used outside any loop",
                );
                BoundStmt::Error(span)
            }
        }
    }

    fn bind_return(&self, s: &ast::ReturnStmt, scope: &Rc<Scope>) -> BoundStmt {
        let value = self.bind_expr(&s.value, scope);
        let current = self.current_function.borrow().clone();
        match current {
            Some(func) => {
                let value_span = s.value.span();
                let converted = self.bind_conversion(func.return_type, value, false, value_span);
                BoundStmt::Return(converted, s.span)
            }
            None => {
                self.error(
                    s.span,
                    DiagnosticCode::E_BIND_RETURN_OUTSIDE_FUNCTION,
                    "'return' used outside any function",
                );
                BoundStmt::Error(s.span)
            }
        }
    }

    // --- expressions ----------------------------------------------------

    fn bind_expr(&self, expr: &Expr, scope: &Rc<Scope>) -> BoundExpr {
        match expr {
            Expr::Literal(lit) => {
                let ty = literal_type(&lit.value);
                BoundExpr::Literal(LiteralBoundExpr {
                    value: lit.value.clone(),
                    ty,
                    span: lit.span,
                })
            }
            Expr::Name(n) => match scope.lookup(n.name) {
                Some(symbol) => BoundExpr::Variable(VariableBoundExpr { symbol, span: n.span }),
                None => {
                    self.error(
                        n.span,
                        DiagnosticCode::E_BIND_UNDECLARED_NAME,
                        format!("undeclared name '{}'", n.name.as_str()),
                    );
                    BoundExpr::Error(n.span)
                }
            },
            Expr::Paren(p) => self.bind_expr(&p.inner, scope),
            Expr::Unary(u) => self.bind_unary(u, scope),
            Expr::Binary(b) => self.bind_binary(b, scope),
            Expr::Assignment(a) => self.bind_assignment(a, scope),
            Expr::Call(c) => self.bind_call(c, scope),
            Expr::Error(span) => BoundExpr::Error(*span),
        }
    }

    fn bind_unary(&self, u: &ast::UnaryExpr, scope: &Rc<Scope>) -> BoundExpr {
        let operand = self.bind_expr(&u.operand, scope);
        if operand.is_error() {
            return BoundExpr::Error(u.span);
        }
        match resolve_unary(u.op, operand.ty()) {
            Some((op, ty)) => BoundExpr::Unary(UnaryBoundExpr {
                op,
                operand: Box::new(operand),
                ty,
                span: u.span,
            }),
            None => {
                self.error(
                    u.span,
                    DiagnosticCode::E_BIND_NO_OPERATOR,
                    format!("'{}' has no operator for type {}", unary_op_str(u.op), operand.ty()),
                );
                BoundExpr::Error(u.span)
            }
        }
    }

    fn bind_binary(&self, b: &ast::BinaryExpr, scope: &Rc<Scope>) -> BoundExpr {
        let left = self.bind_expr(&b.left, scope);
        let right = self.bind_expr(&b.right, scope);
        if left.is_error() || right.is_error() {
            return BoundExpr::Error(b.span);
        }
        match resolve_binary(b.op, left.ty(), right.ty()) {
            Some((op, ty)) => BoundExpr::Binary(BinaryBoundExpr {
                op,
                left: Box::new(left),
                right: Box::new(right),
                ty,
                span: b.span,
            }),
            None => {
                self.error(
                    b.span,
                    DiagnosticCode::E_BIND_NO_OPERATOR,
                    format!(
                        "'{}' has no operator for types {} and {}",
                        binary_op_str(b.op),
                        left.ty(),
                        right.ty()
                    ),
                );
                BoundExpr::Error(b.span)
            }
        }
    }

    fn bind_assignment(&self, a: &ast::AssignExpr, scope: &Rc<Scope>) -> BoundExpr {
        let symbol = match scope.lookup(a.name) {
            Some(symbol) => symbol,
            None => {
                self.error(
                    a.name_span,
                    DiagnosticCode::E_BIND_UNDECLARED_NAME,
                    format!("undeclared name '{}'", a.name.as_str()),
                );
                // still bind the rhs so unrelated errors in it are reported too.
                self.bind_expr(&a.value, scope);
                return BoundExpr::Error(a.span);
            }
        };

        if symbol.is_read_only {
            self.error(
                a.name_span,
                DiagnosticCode::E_BIND_READONLY_ASSIGNMENT,
                format!("cannot assign to '{}', it is read-only", symbol.name.as_str()),
            );
            self.bind_expr(&a.value, scope);
            return BoundExpr::Error(a.span);
        }

        let value = self.bind_expr(&a.value, scope);
        let value_span = a.value.span();
        let value = self.bind_conversion(symbol.ty, value, false, value_span);
        BoundExpr::Assignment(AssignmentBoundExpr {
            symbol,
            value: Box::new(value),
            span: a.span,
        })
    }

    fn bind_call(&self, c: &ast::CallExpr, scope: &Rc<Scope>) -> BoundExpr {
        // A single-argument call whose callee names a type is an explicit
        // conversion (`int(x)`, `bool(x)`, `string(x)`), not a function call.
        if c.args.len() == 1 {
            if let Some(target) = Type::from_symbol(c.callee) {
                let arg = self.bind_expr(&c.args[0], scope);
                return self.bind_conversion(target, arg, true, c.span);
            }
        }

        let function = match self.functions.borrow().get(&c.callee) {
            Some(f) => Rc::clone(f),
            None => {
                self.error(
                    c.callee_span,
                    DiagnosticCode::E_BIND_UNDECLARED_NAME,
                    format!("undeclared function '{}'", c.callee.as_str()),
                );
                for arg in &c.args {
                    self.bind_expr(arg, scope);
                }
                return BoundExpr::Error(c.span);
            }
        };

        if c.args.len() != function.parameters.len() {
            self.error(
                c.span,
                DiagnosticCode::E_BIND_TYPE_MISMATCH,
                format!(
                    "'{}' expects {} argument(s), found {}",
                    function.name.as_str(),
                    function.parameters.len(),
                    c.args.len()
                ),
            );
            for arg in &c.args {
                self.bind_expr(arg, scope);
            }
            return BoundExpr::Error(c.span);
        }

        let mut args = Vec::with_capacity(c.args.len());
        let mut mismatched = false;
        for (arg_expr, param) in c.args.iter().zip(function.parameters.iter()) {
            let bound = self.bind_expr(arg_expr, scope);
            if !bound.is_error() && bound.ty() != param.ty {
                self.error(
                    arg_expr.span(),
                    DiagnosticCode::E_BIND_TYPE_MISMATCH,
                    format!("expected {}, found {}", param.ty, bound.ty()),
                );
                mismatched = true;
            }
            args.push(bound);
        }
        if mismatched {
            return BoundExpr::Error(c.span);
        }

        BoundExpr::Call(CallBoundExpr { function, args, span: c.span })
    }

    /// Binds a conversion: wraps `expr` to `target`, suppressing
    /// further diagnostics if `expr` already errored, and rejecting an
    /// `Explicit` conversion unless `allow_explicit` (call-site cast syntax).
    fn bind_conversion(&self, target: Type, expr: BoundExpr, allow_explicit: bool, span: Span) -> BoundExpr {
        if expr.is_error() {
            return expr;
        }
        match classify(expr.ty(), target) {
            Conversion::None => {
                self.error(
                    span,
                    DiagnosticCode::E_BIND_ILLEGAL_CONVERSION,
                    format!("cannot convert {} to {}", expr.ty(), target),
                );
                BoundExpr::Error(span)
            }
            Conversion::Explicit if !allow_explicit => {
                self.error(
                    span,
                    DiagnosticCode::E_BIND_ILLEGAL_CONVERSION,
                    format!("{} to {} requires an explicit cast", expr.ty(), target),
                );
                BoundExpr::Error(span)
            }
            Conversion::Identity => expr,
            Conversion::Explicit | Conversion::Implicit => {
                BoundExpr::Conversion(ConversionBoundExpr {
                    to: target,
                    expr: Box::new(expr),
                    span,
                })
            }
        }
    }
}

fn literal_type(value: &pebble_lex::LiteralValue) -> Type {
    match value {
        pebble_lex::LiteralValue::Int(_) => Type::Int,
        pebble_lex::LiteralValue::Str(_) => Type::String,
        pebble_lex::LiteralValue::Bool(_) => Type::Bool,
    }
}

fn unary_op_str(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Not => "!",
        UnaryOp::Plus => "+",
        UnaryOp::Negate => "-",
    }
}

fn binary_op_str(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Lt => "<",
        BinaryOp::LtEq => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::GtEq => ">=",
        BinaryOp::EqEq => "==",
        BinaryOp::NotEq => "!=",
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(source: &str) -> (BoundProgram, Handler) {
        let handler = Handler::new();
        let program = bind_source(source, &handler);
        (program, handler)
    }

    #[test]
    fn binds_a_simple_top_level_program_without_errors() {
        let (program, handler) = bind("var x: int = 1; print(string(x));");
        assert!(!handler.has_errors());
        assert_eq!(program.global_variables.len(), 1);
    }

    #[test]
    fn forward_reference_to_a_later_function_resolves() {
        let (_, handler) = bind("function f(): int { return g(); } function g(): int { return 1; }");
        assert!(!handler.has_errors());
    }

    #[test]
    fn function_without_return_type_defaults_to_int() {
        let (program, handler) = bind("function f() { return 1; }");
        assert!(!handler.has_errors());
        let (sym, _) = program.functions.get(&Symbol::intern("f")).unwrap();
        assert_eq!(sym.return_type, Type::Int);
    }

    #[test]
    fn undeclared_name_is_reported_and_suppressed_downstream() {
        let (_, handler) = bind("var x: int = y + 1;");
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn assigning_to_a_let_binding_is_rejected() {
        let (_, handler) = bind("let x: int = 1; x = 2;");
        assert!(handler
            .diagnostics()
            .iter()
            .any(|d| d.code == Some(DiagnosticCode::E_BIND_READONLY_ASSIGNMENT)));
    }

    #[test]
    fn break_outside_a_loop_is_rejected() {
        let (_, handler) = bind("break;");
        assert!(handler
            .diagnostics()
            .iter()
            .any(|d| d.code == Some(DiagnosticCode::E_BIND_LOOP_CONTROL_OUTSIDE_LOOP)));
    }

    #[test]
    fn while_loop_break_and_continue_reuse_the_loops_label_pair() {
        let (program, handler) = bind("while true { break; continue; }");
        assert!(!handler.has_errors());
        let BoundStmt::Block(stmts, _) = &program.top_level else { unreachable!() };
        let BoundStmt::While(w) = &stmts[0] else { unreachable!() };
        let BoundStmt::Block(body, _) = w.body.as_ref() else { unreachable!() };
        assert_eq!(body[0], BoundStmt::Goto(w.break_label, body[0].span()));
        assert_eq!(body[1], BoundStmt::Goto(w.continue_label, body[1].span()));
    }

    #[test]
    fn for_loop_declares_induction_and_hidden_upper_bound_variables() {
        let (program, handler) = bind("for i = 1 to 10 { print(string(i)); }");
        assert!(!handler.has_errors());
        let BoundStmt::Block(stmts, _) = &program.top_level else { unreachable!() };
        let BoundStmt::For(f) = &stmts[0] else { unreachable!() };
        assert_eq!(f.var.name, Symbol::intern("i"));
        assert_eq!(f.upper_var.ty, Type::Int);
    }

    #[test]
    fn string_to_int_requires_an_explicit_cast() {
        let (_, handler) = bind(r#"var s: string = "1"; var n: int = s;"#);
        assert!(handler
            .diagnostics()
            .iter()
            .any(|d| d.code == Some(DiagnosticCode::E_BIND_ILLEGAL_CONVERSION)));
    }

    #[test]
    fn explicit_cast_call_syntax_is_accepted() {
        let (_, handler) = bind(r#"var s: string = "1"; var n: int = int(s);"#);
        assert!(!handler.has_errors());
    }

    #[test]
    fn call_with_wrong_argument_count_is_reported() {
        let (_, handler) = bind("function f(a: int): int { return a; } var x: int = f();");
        assert!(handler
            .diagnostics()
            .iter()
            .any(|d| d.code == Some(DiagnosticCode::E_BIND_TYPE_MISMATCH)));
    }

    #[test]
    fn duplicate_global_declaration_is_reported() {
        let (_, handler) = bind("var x: int = 1; var x: int = 2;");
        assert!(handler
            .diagnostics()
            .iter()
            .any(|d| d.code == Some(DiagnosticCode::E_BIND_DUPLICATE_DECL)));
    }

    #[test]
    fn return_outside_a_function_is_reported() {
        let (_, handler) = bind("return 1;");
        assert!(handler
            .diagnostics()
            .iter()
            .any(|d| d.code == Some(DiagnosticCode::E_BIND_RETURN_OUTSIDE_FUNCTION)));
    }
}
