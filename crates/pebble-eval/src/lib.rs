//! pebble-eval — the tree-walking evaluator.
//!
//! Executes a [`pebble_low::LoweredProgram`] by instruction pointer: each
//! function body (and the top level) is already a flat `Vec<BoundStmt>` with
//! `Label`/`Goto`/`ConditionalGoto` standing in for every `if`/`while`/`for`,
//! so evaluation never recurses into control flow, only into expressions
//! and nested calls.

pub mod env;
pub mod error;
pub mod value;

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::rc::Rc;

use pebble_low::LoweredProgram;
use pebble_sem::hir::{
    BinaryBoundExpr, BoundExpr, BoundStmt, CallBoundExpr, FunctionSymbol, UnaryBoundExpr,
};
use pebble_sem::types::{BoundBinaryOp, BoundUnaryOp, Type};
use pebble_util::span::Span;
use pebble_util::symbol::{Symbol, FN_INPUT, FN_PRINT};

use env::{Environment, Frame, Globals};
use error::RuntimeError;
use value::Value;

/// How a flat statement sequence finished running.
enum Flow {
    Fallthrough,
    Return(Value),
}

pub struct Evaluator<'a, R, W> {
    program: &'a LoweredProgram,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Evaluator<'a, R, W> {
    pub fn new(program: &'a LoweredProgram, input: R, output: W) -> Self {
        Self { program, input, output }
    }

    /// Runs every top-level statement in order, in the manner of a `main`
    /// function with no parameters and no return value.
    ///
    /// `globals` lives in this call's stack frame rather than as a field
    /// of `Evaluator`: every recursive helper below takes `&mut self` for
    /// `input`/`output` access, and a `Globals` stored on `self` would
    /// have to stay borrowed (via `Environment`) across those same calls,
    /// which the borrow checker rejects. Keeping it external and threading
    /// it through `Environment` avoids that entirely.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        let globals = Globals::new();
        let env = Environment::top_level(&globals);
        self.exec_body(&self.program.top_level.clone(), &env)?;
        Ok(())
    }

    fn exec_body(&mut self, body: &[BoundStmt], env: &Environment) -> Result<Flow, RuntimeError> {
        let labels = index_labels(body);
        let mut ip = 0usize;
        while ip < body.len() {
            match &body[ip] {
                BoundStmt::Label(..) | BoundStmt::Error(_) => {}
                BoundStmt::Goto(target, _) => {
                    ip = *labels.get(target).expect("lowering only emits resolvable gotos");
                    continue;
                }
                BoundStmt::ConditionalGoto { label, condition, jump_if_false, span: _ } => {
                    let cond = self.eval_expr(condition, env)?.as_bool();
                    if cond != *jump_if_false {
                        ip += 1;
                        continue;
                    }
                    ip = *labels.get(label).expect("lowering only emits resolvable gotos");
                    continue;
                }
                BoundStmt::ExpressionStmt(expr, _) => {
                    self.eval_expr(expr, env)?;
                }
                BoundStmt::VariableDeclaration(decl) => {
                    let value = self.eval_expr(&decl.init, env)?;
                    env.define(&decl.symbol, value);
                }
                BoundStmt::Return(expr, _) => {
                    let value = self.eval_expr(expr, env)?;
                    return Ok(Flow::Return(value));
                }
                BoundStmt::Block(..) | BoundStmt::If(_) | BoundStmt::While(_) | BoundStmt::For(_) => {
                    unreachable!("lowering leaves no structured statements in a flat body")
                }
            }
            ip += 1;
        }
        Ok(Flow::Fallthrough)
    }

    fn call_function(
        &mut self,
        func: &Rc<FunctionSymbol>,
        args: Vec<Value>,
        caller_env: &Environment,
    ) -> Result<Value, RuntimeError> {
        if func.is_builtin {
            return self.call_builtin(func, args);
        }
        let (symbol, body) = self
            .program
            .functions
            .get(&func.name)
            .expect("every non-builtin function called is in the lowered program");
        let body = body.clone();
        let frame = Frame::new();
        let callee_env = Environment::call(caller_env.globals(), &frame);
        for (param, arg) in symbol.parameters.iter().zip(args) {
            callee_env.define(param, arg);
        }
        match self.exec_body(&body, &callee_env)? {
            Flow::Return(value) => Ok(value),
            Flow::Fallthrough => Ok(Value::Void),
        }
    }

    fn call_builtin(&mut self, func: &Rc<FunctionSymbol>, mut args: Vec<Value>) -> Result<Value, RuntimeError> {
        if func.name == FN_PRINT {
            let text = args.remove(0).to_string();
            write!(self.output, "{text}")?;
            Ok(Value::Void)
        } else if func.name == FN_INPUT {
            let mut line = String::new();
            self.input.read_line(&mut line)?;
            if line.ends_with('\n') {
                line.pop();
                if line.ends_with('\r') {
                    line.pop();
                }
            }
            Ok(Value::Str(line))
        } else {
            unreachable!("no other function is registered as a builtin")
        }
    }

    fn eval_expr(&mut self, expr: &BoundExpr, env: &Environment) -> Result<Value, RuntimeError> {
        match expr {
            BoundExpr::Literal(lit) => Ok(literal_value(&lit.value)),
            BoundExpr::Variable(v) => Ok(env.get(&v.symbol)),
            BoundExpr::Assignment(a) => {
                let value = self.eval_expr(&a.value, env)?;
                env.set(&a.symbol, value.clone());
                Ok(value)
            }
            BoundExpr::Unary(u) => self.eval_unary(u, env),
            BoundExpr::Binary(b) => self.eval_binary(b, env),
            BoundExpr::Call(c) => self.eval_call(c, env),
            BoundExpr::Conversion(conv) => {
                let value = self.eval_expr(&conv.expr, env)?;
                convert(conv.to, value, conv.span)
            }
            BoundExpr::Error(_) => {
                unreachable!("a program with binder errors is never evaluated")
            }
        }
    }

    fn eval_unary(&mut self, u: &UnaryBoundExpr, env: &Environment) -> Result<Value, RuntimeError> {
        let operand = self.eval_expr(&u.operand, env)?;
        Ok(match u.op {
            BoundUnaryOp::Identity => operand,
            BoundUnaryOp::Negation => Value::Int(operand.as_int().wrapping_neg()),
            BoundUnaryOp::LogicalNegation => Value::Bool(!operand.as_bool()),
        })
    }

    fn eval_binary(&mut self, b: &BinaryBoundExpr, env: &Environment) -> Result<Value, RuntimeError> {
        let left = self.eval_expr(&b.left, env)?;
        let right = self.eval_expr(&b.right, env)?;
        Ok(match b.op {
            BoundBinaryOp::Add => Value::Int(left.as_int().wrapping_add(right.as_int())),
            BoundBinaryOp::Sub => Value::Int(left.as_int().wrapping_sub(right.as_int())),
            BoundBinaryOp::Mul => Value::Int(left.as_int().wrapping_mul(right.as_int())),
            BoundBinaryOp::Div => {
                let divisor = right.as_int();
                if divisor == 0 {
                    return Err(RuntimeError::DivisionByZero { span: b.span });
                }
                Value::Int(left.as_int().wrapping_div(divisor))
            }
            BoundBinaryOp::Lt => Value::Bool(left.as_int() < right.as_int()),
            BoundBinaryOp::LtEq => Value::Bool(left.as_int() <= right.as_int()),
            BoundBinaryOp::Gt => Value::Bool(left.as_int() > right.as_int()),
            BoundBinaryOp::GtEq => Value::Bool(left.as_int() >= right.as_int()),
            BoundBinaryOp::Eq => Value::Bool(left == right),
            BoundBinaryOp::NotEq => Value::Bool(left != right),
            BoundBinaryOp::And => Value::Bool(left.as_bool() && right.as_bool()),
            BoundBinaryOp::Or => Value::Bool(left.as_bool() || right.as_bool()),
            BoundBinaryOp::Concat => Value::Str(format!("{}{}", left.into_string(), right.into_string())),
        })
    }

    fn eval_call(&mut self, c: &CallBoundExpr, env: &Environment) -> Result<Value, RuntimeError> {
        let mut args = Vec::with_capacity(c.args.len());
        for arg in &c.args {
            args.push(self.eval_expr(arg, env)?);
        }
        self.call_function(&c.function, args, env)
    }
}

fn index_labels(body: &[BoundStmt]) -> HashMap<Symbol, usize> {
    body.iter()
        .enumerate()
        .filter_map(|(i, s)| match s {
            BoundStmt::Label(name, _) => Some((*name, i)),
            _ => None,
        })
        .collect()
}

/// `int(string)`/`bool(string)`/`string(int)`/`string(bool)`.
/// Every other `(from, to)` pair the binder could have produced
/// passed through `Conversion::Identity` and never reaches here as a real
/// conversion node.
fn convert(target: Type, value: Value, span: Span) -> Result<Value, RuntimeError> {
    Ok(match (target, value) {
        (Type::String, value) => Value::Str(value.to_string()),
        (Type::Int, Value::Str(s)) => {
            let text = s.clone();
            s.parse::<i32>()
                .map(Value::Int)
                .map_err(|_| RuntimeError::InvalidIntConversion { text, span })?
        }
        (Type::Bool, Value::Str(s)) => Value::Bool(!s.is_empty()),
        (_, value) => value,
    })
}

fn literal_value(value: &pebble_lex::LiteralValue) -> Value {
    match value {
        pebble_lex::LiteralValue::Int(n) => Value::Int(*n),
        pebble_lex::LiteralValue::Bool(b) => Value::Bool(*b),
        pebble_lex::LiteralValue::Str(sym) => Value::Str(sym.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pebble_util::diagnostic::Handler;
    use proptest::prelude::*;

    fn run_source(source: &str, stdin: &str) -> (String, Result<(), RuntimeError>) {
        let handler = Handler::new();
        let bound = pebble_sem::bind_source(source, &handler);
        assert!(!handler.has_errors(), "unexpected diagnostics: {:?}", handler.diagnostics());
        let lowered = pebble_low::lower_program(&bound);
        let mut output = Vec::new();
        let result = {
            let mut evaluator = Evaluator::new(&lowered, stdin.as_bytes(), &mut output);
            evaluator.run()
        };
        (String::from_utf8(output).unwrap(), result)
    }

    #[test]
    fn print_writes_its_argument_with_no_trailing_newline() {
        let (out, result) = run_source(r#"print("hello");"#, "");
        assert!(result.is_ok());
        assert_eq!(out, "hello");
    }

    #[test]
    fn input_strips_the_trailing_newline() {
        let (out, result) = run_source(r#"var s: string = input(); print(s);"#, "world\n");
        assert!(result.is_ok());
        assert_eq!(out, "world");
    }

    #[test]
    fn division_by_zero_is_a_runtime_error() {
        let (_, result) = run_source("var x: int = 1 / 0;", "");
        assert!(matches!(result, Err(RuntimeError::DivisionByZero { .. })));
    }

    #[test]
    fn an_invalid_int_conversion_is_a_runtime_error() {
        let (_, result) = run_source(r#"var x: int = int("not a number");"#, "");
        assert!(matches!(result, Err(RuntimeError::InvalidIntConversion { .. })));
    }

    #[test]
    fn a_while_loop_accumulates_as_expected() {
        let (out, result) = run_source(
            "var i: int = 0; var total: int = 0; while (i < 3) { total = total + i; i = i + 1; } print(string(total));",
            "",
        );
        assert!(result.is_ok());
        assert_eq!(out, "3");
    }

    #[test]
    fn a_for_loop_break_stops_early() {
        let (out, result) = run_source(
            "var total: int = 0; for i = 1 to 10 { if (i == 3) { break; } total = total + i; } print(string(total));",
            "",
        );
        assert!(result.is_ok());
        assert_eq!(out, "3");
    }

    #[test]
    fn a_for_loop_continue_skips_the_rest_of_the_body() {
        let (out, result) = run_source(
            "var total: int = 0; for i = 1 to 5 { if (i == 2) { continue; } total = total + i; } print(string(total));",
            "",
        );
        assert!(result.is_ok());
        assert_eq!(out, "9");
    }

    #[test]
    fn a_recursive_function_computes_a_factorial() {
        let (out, result) = run_source(
            "function fact(n: int): int { if (n <= 1) { return 1; } return n * fact(n - 1); } print(string(fact(5)));",
            "",
        );
        assert!(result.is_ok());
        assert_eq!(out, "120");
    }

    #[test]
    fn bool_conversion_is_false_only_for_an_empty_string() {
        let (out, result) = run_source(
            r#"print(string(bool(""))); print(" "); print(string(bool("false")));"#,
            "",
        );
        assert!(result.is_ok());
        assert_eq!(out, "false true");
    }

    #[test]
    fn string_equality_compares_by_value() {
        let (out, result) = run_source(
            r#"var a: string = "hi"; var b: string = "hi"; print(string(a == b));"#,
            "",
        );
        assert!(result.is_ok());
        assert_eq!(out, "true");
    }

    proptest! {
        /// `int(string(n)) == n` for every representable `i32`.
        #[test]
        fn int_string_round_trips(n: i32) {
            let as_str = convert(Type::String, Value::Int(n), Span::DUMMY).unwrap();
            let back = convert(Type::Int, as_str, Span::DUMMY).unwrap();
            prop_assert_eq!(back, Value::Int(n));
        }

        /// `bool(s)` is `false` iff `s` is empty; true for every non-empty
        /// string, not just `"true"`.
        #[test]
        fn bool_of_string_is_false_only_when_empty(s in ".{0,32}") {
            let is_empty = s.is_empty();
            let converted = convert(Type::Bool, Value::Str(s), Span::DUMMY).unwrap();
            prop_assert_eq!(converted, Value::Bool(!is_empty));
        }
    }
}
