//! Runtime bindings: a global map plus one flat map per call
//! frame, grounded in the same global/enclosing-environment split as a
//! tree-walking interpreter's `Environment`, but simplified for this
//! evaluator's flat instruction stream — the binder has already resolved
//! every reference to a specific [`Variable`], so there is no scope chain
//! left to walk at runtime, only a choice of which map to probe.
//!
//! Two distinct [`Variable`]s can share a name (shadowing across sibling
//! scopes the lowerer flattened into one sequence), so bindings are keyed
//! by the `Rc`'s address rather than by name.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use pebble_sem::hir::{Variable, VariableKind};

use crate::value::Value;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct VarKey(usize);

impl VarKey {
    fn of(var: &Rc<Variable>) -> Self {
        VarKey(Rc::as_ptr(var) as usize)
    }
}

/// Bindings for every `Global` variable, shared for the whole run.
pub struct Globals {
    values: RefCell<HashMap<VarKey, Value>>,
}

impl Globals {
    pub fn new() -> Self {
        Self { values: RefCell::new(HashMap::new()) }
    }
}

impl Default for Globals {
    fn default() -> Self {
        Self::new()
    }
}

/// Bindings local to one function call (its parameters and `var`/`let`
/// declarations). A fresh `Frame` is created per call so recursive calls
/// never share locals.
pub struct Frame {
    values: RefCell<HashMap<VarKey, Value>>,
}

impl Frame {
    pub fn new() -> Self {
        Self { values: RefCell::new(HashMap::new()) }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// The binding surface statements and expressions read and write through —
/// dispatches to `globals` or `frame` based on the variable's own `kind`.
pub struct Environment<'a> {
    globals: &'a Globals,
    frame: Option<&'a Frame>,
}

impl<'a> Environment<'a> {
    pub fn top_level(globals: &'a Globals) -> Self {
        Self { globals, frame: None }
    }

    pub fn call(globals: &'a Globals, frame: &'a Frame) -> Self {
        Self { globals, frame: Some(frame) }
    }

    /// The run's shared globals, so a call site can build the callee's
    /// `Environment` without a separate `&Globals` threaded through every
    /// evaluator method.
    pub fn globals(&self) -> &'a Globals {
        self.globals
    }

    pub fn define(&self, var: &Rc<Variable>, value: Value) {
        match var.kind {
            VariableKind::Global => {
                self.globals.values.borrow_mut().insert(VarKey::of(var), value);
            }
            VariableKind::Local | VariableKind::Parameter => {
                self.frame
                    .expect("a local variable is always bound inside a call frame")
                    .values
                    .borrow_mut()
                    .insert(VarKey::of(var), value);
            }
        }
    }

    pub fn get(&self, var: &Rc<Variable>) -> Value {
        let values = match var.kind {
            VariableKind::Global => &self.globals.values,
            VariableKind::Local | VariableKind::Parameter => {
                &self
                    .frame
                    .expect("a local variable is always bound inside a call frame")
                    .values
            }
        };
        values
            .borrow()
            .get(&VarKey::of(var))
            .cloned()
            .unwrap_or_else(|| panic!("'{}' read before its declaration ran", var.name.as_str()))
    }

    pub fn set(&self, var: &Rc<Variable>, value: Value) {
        self.define(var, value);
    }
}
