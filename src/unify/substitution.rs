//! Substitution: mapping variables to terms.

use std::collections::HashMap;

use crate::syntax::{Term, Var};

/// A substitution mapping variables to terms.
///
/// Bindings are triangular: a variable may be bound to another variable that
/// is bound in turn, so lookups follow chains. A search node owns its
/// substitution; extending one always produces a new value and leaves the
/// original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    bindings: HashMap<Var, Term>,
}

impl Substitution {
    /// Create an empty substitution (identity).
    pub fn empty() -> Self {
        Substitution {
            bindings: HashMap::new(),
        }
    }

    /// Create a substitution with a single binding.
    pub fn singleton(var: Var, term: Term) -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(var, term);
        Substitution { bindings }
    }

    /// Add a binding to this substitution.
    pub fn bind(&mut self, var: Var, term: Term) {
        self.bindings.insert(var, term);
    }

    /// A copy of this substitution extended with one binding.
    pub fn with_binding(&self, var: Var, term: Term) -> Substitution {
        let mut extended = self.clone();
        extended.bind(var, term);
        extended
    }

    /// Look up the direct binding of a variable.
    pub fn lookup(&self, var: &Var) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Follow the binding chain starting at `term` to its end.
    ///
    /// Stops at a non-variable, an unbound variable, or a variable bound to
    /// itself. Only the outermost term is dereferenced.
    pub fn walk<'a>(&'a self, term: &'a Term) -> &'a Term {
        let mut current = term;
        // A chain longer than the number of bindings has revisited a variable.
        let mut remaining = self.bindings.len();
        while let Term::Var(var) = current {
            match self.bindings.get(var) {
                Some(next) if next != current && remaining > 0 => {
                    current = next;
                    remaining -= 1;
                }
                _ => break,
            }
        }
        current
    }

    /// Apply this substitution to a term, resolving it completely.
    ///
    /// Variables are dereferenced through their chains and compounds are
    /// rebuilt with every sub-term resolved. Without an occurs-check a
    /// variable can end up bound to a term containing itself; such a variable
    /// is left in place when met again inside its own expansion.
    pub fn apply(&self, term: &Term) -> Term {
        let mut expanding = Vec::new();
        self.apply_inner(term, &mut expanding)
    }

    fn apply_inner(&self, term: &Term, expanding: &mut Vec<Var>) -> Term {
        match term {
            Term::Var(var) => {
                if expanding.contains(var) {
                    return term.clone();
                }
                let resolved = self.walk(term);
                match resolved {
                    Term::Compound(_) => {
                        expanding.push(var.clone());
                        let result = self.apply_inner(resolved, expanding);
                        expanding.pop();
                        result
                    }
                    _ => resolved.clone(),
                }
            }
            Term::Compound(items) => Term::Compound(
                items
                    .iter()
                    .map(|item| self.apply_inner(item, expanding))
                    .collect(),
            ),
            Term::Atom(_) => term.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if this substitution is empty (has no bindings).
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
