//! Unification: computing most general unifiers for terms.

mod substitution;
mod unify;

pub use substitution::Substitution;
pub use unify::{unify, unify_many, UnifyError, UnifyResult};
