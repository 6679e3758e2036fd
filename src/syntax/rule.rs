//! Rules: Horn clauses `head :- body`.

use std::fmt;

use super::{Term, Var};

/// A rule: the head holds whenever every body goal holds.
///
/// Rules are templates. The search never resolves against a rule directly;
/// it renames the variables of a copy first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub head: Term,
    pub body: Vec<Term>,
}

impl Rule {
    pub fn new(head: Term, body: Vec<Term>) -> Self {
        Rule { head, body }
    }

    /// Variables of the head then the body, first occurrence order.
    pub fn variables(&self) -> Vec<Var> {
        let mut vars = Vec::new();
        self.head.collect_variables(&mut vars);
        for goal in &self.body {
            goal.collect_variables(&mut vars);
        }
        vars
    }

    /// Predicate name of the head.
    pub fn functor(&self) -> Option<&str> {
        self.head.functor()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for (i, goal) in self.body.iter().enumerate() {
            let sep = if i == 0 { " :- " } else { ", " };
            write!(f, "{}{}", sep, goal)?;
        }
        Ok(())
    }
}
