//! The scope chain: a singly-linked list of scopes with parent pointers.
//! Lookup walks outward from the innermost scope; no scope ever references
//! a child, so nothing keeps a scope alive once binding leaves its block.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use pebble_util::symbol::Symbol;

use crate::hir::Variable;

/// One lexical scope. `declare` reports whether `name` was already bound
/// *in this scope*, since names are unique within a single lexical scope;
/// a name may freely shadow a binding from an outer scope.
pub struct Scope {
    parent: Option<Rc<Scope>>,
    variables: RefCell<HashMap<Symbol, Rc<Variable>>>,
}

impl Scope {
    pub fn root() -> Rc<Scope> {
        Rc::new(Scope {
            parent: None,
            variables: RefCell::new(HashMap::new()),
        })
    }

    pub fn child(parent: &Rc<Scope>) -> Rc<Scope> {
        Rc::new(Scope {
            parent: Some(Rc::clone(parent)),
            variables: RefCell::new(HashMap::new()),
        })
    }

    /// Declares `var` in this scope. Returns `false` without declaring it
    /// if a binding of the same name already exists here.
    pub fn declare(&self, var: Rc<Variable>) -> bool {
        let mut vars = self.variables.borrow_mut();
        if vars.contains_key(&var.name) {
            false
        } else {
            vars.insert(var.name, var);
            true
        }
    }

    /// Looks up `name`, walking from this scope outward to the root and
    /// returning the nearest binding.
    pub fn lookup(self: &Rc<Self>, name: Symbol) -> Option<Rc<Variable>> {
        if let Some(var) = self.variables.borrow().get(&name) {
            return Some(Rc::clone(var));
        }
        self.parent.as_ref().and_then(|p| p.lookup(name))
    }

    /// `true` if `name` is bound in this exact scope (not an ancestor) —
    /// used by the binder's duplicate-declaration check, which only
    /// forbids shadowing within the same scope.
    pub fn declared_here(&self, name: Symbol) -> bool {
        self.variables.borrow().contains_key(&name)
    }
}
