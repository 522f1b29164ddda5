//! Fresh label generation for the lowerer's own scaffolding labels:
//! `if`/`else`/`while`-check labels, plus the synthesized `continue` label
//! a desugared `for` loop needs.
//!
//! The binder already generated `break`/`continue` labels under an
//! `lbl_` prefix; this generator uses a distinct `lo_` prefix and its own
//! per-body counter, so the two phases never need to share a counter to
//! stay collision-free.

use pebble_util::symbol::Symbol;

pub struct LabelGen {
    counter: u32,
}

impl LabelGen {
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    pub fn fresh(&mut self, prefix: &str) -> Symbol {
        let n = self.counter;
        self.counter += 1;
        Symbol::intern(&format!("lo_{}{}", prefix, n))
    }
}

impl Default for LabelGen {
    fn default() -> Self {
        Self::new()
    }
}
