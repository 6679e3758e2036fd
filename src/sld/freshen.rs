//! Renaming apart: fresh copies of rules.

use std::collections::HashMap;

use super::VarCounter;
use crate::syntax::{Rule, Term, Var};

/// Copy `rule` with every variable replaced by a fresh internal variable.
///
/// Variables are renamed in first-occurrence order over the head and then
/// the body goals. Every occurrence of one variable maps to the same fresh
/// variable, so sharing between head and body survives; names drawn from
/// `counter` never repeat within the query.
pub fn freshen(rule: &Rule, counter: &mut VarCounter) -> Rule {
    let mut renaming = HashMap::new();
    let head = rename(&rule.head, &mut renaming, counter);
    let body = rule
        .body
        .iter()
        .map(|goal| rename(goal, &mut renaming, counter))
        .collect();
    Rule { head, body }
}

fn rename(term: &Term, renaming: &mut HashMap<Var, Var>, counter: &mut VarCounter) -> Term {
    match term {
        Term::Var(var) => {
            let fresh = renaming
                .entry(var.clone())
                .or_insert_with(|| var.fresh(counter.next()));
            Term::Var(fresh.clone())
        }
        Term::Compound(items) => Term::Compound(
            items
                .iter()
                .map(|item| rename(item, renaming, counter))
                .collect(),
        ),
        Term::Atom(_) => term.clone(),
    }
}
