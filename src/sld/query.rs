//! Query answering: the top-level driver over the solution stream.

use super::{solve, Solutions, SolveConfig, Trace, VarCounter};
use crate::kb::KnowledgeBase;
use crate::syntax::{Term, Var};
use crate::unify::Substitution;

/// One answer to a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Each user variable of the query with its final value, in the order
    /// the variables first appear in the query.
    pub bindings: Vec<(Var, Term)>,
    pub trace: Trace,
}

impl Answer {
    /// Value bound to the named query variable.
    pub fn binding(&self, name: &str) -> Option<&Term> {
        self.bindings
            .iter()
            .find(|(var, _)| var.name() == name)
            .map(|(_, term)| term)
    }

    /// A query without user variables is answered by a bare "yes".
    pub fn is_affirmative(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Lazy stream of answers to one query.
///
/// Owns the query's variable counter, so independent queries never share
/// renaming state. Dropping the stream abandons the rest of the search.
pub struct QueryStream<'kb> {
    query_vars: Vec<Var>,
    solutions: Solutions<'kb>,
    yielded: usize,
}

/// Run a single-goal query.
pub fn run_query<'kb>(kb: &'kb KnowledgeBase, query: &Term) -> QueryStream<'kb> {
    run_goals(kb, vec![query.clone()])
}

/// Run a conjunction of goals, resolved left to right.
pub fn run_goals<'kb>(kb: &'kb KnowledgeBase, goals: Vec<Term>) -> QueryStream<'kb> {
    let mut query_vars = Vec::new();
    for goal in &goals {
        goal.collect_variables(&mut query_vars);
    }
    query_vars.retain(|var| var.is_user());

    let solutions = solve(kb, goals, Substitution::empty(), Trace::new(), VarCounter::new());
    QueryStream {
        query_vars,
        solutions,
        yielded: 0,
    }
}

/// Whether the query has at least one answer.
pub fn ask(kb: &KnowledgeBase, query: &Term) -> bool {
    run_query(kb, query).next().is_some()
}

impl<'kb> QueryStream<'kb> {
    /// Search limits; `max_solutions` is enforced by the underlying search.
    pub fn with_config(mut self, config: SolveConfig) -> Self {
        self.solutions = self.solutions.with_config(config);
        self
    }

    /// User variables reported in each answer.
    pub fn query_vars(&self) -> &[Var] {
        &self.query_vars
    }

    /// True once the depth limit has cut some branch, meaning the answers
    /// seen so far may be incomplete.
    pub fn depth_limited(&self) -> bool {
        self.solutions.depth_limited()
    }

    /// Number of answers produced so far.
    pub fn answered(&self) -> usize {
        self.yielded
    }
}

impl Iterator for QueryStream<'_> {
    type Item = Answer;

    fn next(&mut self) -> Option<Answer> {
        let solution = self.solutions.next()?;
        self.yielded += 1;
        let bindings = self
            .query_vars
            .iter()
            .map(|var| {
                let value = solution.substitution.apply(&Term::Var(var.clone()));
                (var.clone(), value)
            })
            .collect();
        Some(Answer {
            bindings,
            trace: solution.trace,
        })
    }
}
