//! Unification: syntactic, Robinson style, no occurs-check.

use super::Substitution;
use crate::syntax::Term;

/// Result of a unification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyResult {
    /// Unification succeeded with the given extended substitution.
    Success(Substitution),
    /// Unification failed.
    Failure(UnifyError),
}

impl UnifyResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UnifyResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, UnifyResult::Failure(_))
    }

    pub fn into_substitution(self) -> Option<Substitution> {
        match self {
            UnifyResult::Success(subst) => Some(subst),
            UnifyResult::Failure(_) => None,
        }
    }
}

/// Reasons why unification can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnifyError {
    /// Two different atoms, or an atom against a compound.
    #[error("cannot unify {left} with {right}")]
    Clash { left: Term, right: Term },
    /// Compounds of different length.
    #[error("arity mismatch: {expected} vs {found}")]
    ArityMismatch { expected: usize, found: usize },
}

/// Unify two terms under an existing substitution.
///
/// Both terms are resolved against `subst` first. On success the returned
/// substitution extends `subst`; `subst` itself is never modified, so the
/// caller can try further candidates from the same starting point.
pub fn unify(t1: &Term, t2: &Term, subst: &Substitution) -> UnifyResult {
    let left = subst.apply(t1);
    let right = subst.apply(t2);

    if left == right {
        return UnifyResult::Success(subst.clone());
    }

    match (left, right) {
        (Term::Var(var), other) | (other, Term::Var(var)) => {
            UnifyResult::Success(subst.with_binding(var, other))
        }
        (Term::Compound(ls), Term::Compound(rs)) => {
            if ls.len() != rs.len() {
                return UnifyResult::Failure(UnifyError::ArityMismatch {
                    expected: ls.len(),
                    found: rs.len(),
                });
            }
            let pairs: Vec<(Term, Term)> = ls.into_iter().zip(rs).collect();
            unify_many(&pairs, subst)
        }
        (left, right) => UnifyResult::Failure(UnifyError::Clash { left, right }),
    }
}

/// Unify several pairs left to right, threading the substitution.
///
/// The first failing pair fails the whole call.
pub fn unify_many(pairs: &[(Term, Term)], subst: &Substitution) -> UnifyResult {
    let mut current = subst.clone();
    for (left, right) in pairs {
        match unify(left, right, &current) {
            UnifyResult::Success(next) => current = next,
            failure => return failure,
        }
    }
    UnifyResult::Success(current)
}
