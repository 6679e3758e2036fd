//! Derivation traces.

use std::fmt;

use crate::syntax::Term;

/// What a goal was resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matched {
    /// A fact, as declared.
    Fact(Term),
    /// The head of a renamed rule.
    Rule(Term),
}

/// One resolution step on a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationStep {
    /// The goal, with the branch's bindings applied.
    pub goal: Term,
    pub matched: Matched,
}

impl DerivationStep {
    pub fn fact(goal: Term, fact: Term) -> Self {
        DerivationStep {
            goal,
            matched: Matched::Fact(fact),
        }
    }

    pub fn rule(goal: Term, head: Term) -> Self {
        DerivationStep {
            goal,
            matched: Matched::Rule(head),
        }
    }

    pub fn is_fact(&self) -> bool {
        matches!(self.matched, Matched::Fact(_))
    }
}

impl fmt::Display for DerivationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.matched {
            Matched::Fact(fact) => write!(f, "{} matches fact {}", self.goal, fact),
            Matched::Rule(head) => write!(f, "{} applies rule {}", self.goal, head),
        }
    }
}

/// The steps of one branch, oldest first.
pub type Trace = Vec<DerivationStep>;
