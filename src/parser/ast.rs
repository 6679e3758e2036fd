//! AST types for clause syntax.

use crate::syntax::{Rule, Term};

/// A statement in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `head.`
    Fact(Term),
    /// `head :- goal, goal.`
    Rule(Rule),
    /// `?- goal, goal.`
    Query(Vec<Term>),
    /// `:- directive args.`
    Directive(Directive),
}

/// A directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Load a file
    Load(String),
    /// Set a configuration option
    Set(String, String),
}
