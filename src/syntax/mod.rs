//! Syntax types: terms and rules.

mod rule;
mod term;

pub use rule::Rule;
pub use term::{is_variable_name, Atom, Real, Term, TermKind, Var, VarKind, INTERNAL_MARKER};
