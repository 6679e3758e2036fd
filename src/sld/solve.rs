//! SLD resolution: depth-first backward chaining over a knowledge base.

use super::{freshen, DerivationStep, Trace, VarCounter};
use crate::kb::KnowledgeBase;
use crate::syntax::Term;
use crate::unify::{unify, Substitution, UnifyResult};

/// Search limits. The default is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveConfig {
    /// Maximum resolution steps along one branch (None for unlimited).
    pub max_depth: Option<usize>,
    /// Maximum answers a query reports (None for unlimited).
    pub max_solutions: Option<usize>,
}

/// One successful branch: its bindings and how it got there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub substitution: Substitution,
    pub trace: Trace,
}

/// A node of the search tree with the candidates it has not tried yet.
struct Frame {
    goals: Vec<Term>,
    substitution: Substitution,
    trace: Trace,
    /// First goal with the branch bindings applied; `None` once goals run out.
    selected: Option<Term>,
    /// Index into facts, then rules.
    next_candidate: usize,
}

impl Frame {
    fn new(goals: Vec<Term>, substitution: Substitution, trace: Trace) -> Self {
        let selected = goals.first().map(|goal| substitution.apply(goal));
        Frame {
            goals,
            substitution,
            trace,
            selected,
            next_candidate: 0,
        }
    }
}

/// Lazy stream of solutions.
///
/// The stack holds the open nodes of the search tree; the top is the node
/// being expanded. A node tries every fact in order, then every rule in
/// order, and each success is explored to exhaustion before the node's next
/// candidate is tried. That gives depth-first, left-to-right, facts-first
/// enumeration without native recursion, and pulling one more solution only
/// does the work needed to reach it.
pub struct Solutions<'kb> {
    kb: &'kb KnowledgeBase,
    counter: VarCounter,
    config: SolveConfig,
    stack: Vec<Frame>,
    depth_limited: bool,
    attempts: usize,
    found: usize,
}

/// Start a search for `goals` from the given bindings and trace.
pub fn solve<'kb>(
    kb: &'kb KnowledgeBase,
    goals: Vec<Term>,
    substitution: Substitution,
    trace: Trace,
    counter: VarCounter,
) -> Solutions<'kb> {
    Solutions {
        kb,
        counter,
        config: SolveConfig::default(),
        stack: vec![Frame::new(goals, substitution, trace)],
        depth_limited: false,
        attempts: 0,
        found: 0,
    }
}

impl<'kb> Solutions<'kb> {
    pub fn with_config(mut self, config: SolveConfig) -> Self {
        self.config = config;
        self
    }

    /// True once a branch has been cut by `max_depth`.
    pub fn depth_limited(&self) -> bool {
        self.depth_limited
    }

    /// Unification attempts so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn counter(&self) -> &VarCounter {
        &self.counter
    }

    fn push(&mut self, frame: Frame) {
        if let (Some(limit), Some(_)) = (self.config.max_depth, &frame.selected) {
            if frame.trace.len() >= limit {
                if !self.depth_limited {
                    tracing::warn!(max_depth = limit, "search depth limit reached, pruning branch");
                }
                self.depth_limited = true;
                return;
            }
        }
        self.stack.push(frame);
    }

    /// Try the next candidate of the top frame, returning the child node on
    /// a match. Pops the frame once its candidates are exhausted.
    fn expand_top(&mut self) -> Option<Frame> {
        let kb = self.kb;
        let facts = kb.facts();
        let rules = kb.rules();

        let frame = self.stack.last_mut()?;
        let selected = frame.selected.as_ref()?;
        let candidate = frame.next_candidate;
        frame.next_candidate += 1;

        if let Some(fact) = facts.get(candidate) {
            self.attempts += 1;
            tracing::trace!(goal = %selected, fact = %fact, "trying fact");
            let UnifyResult::Success(next) = unify(selected, fact, &frame.substitution) else {
                return None;
            };
            let mut trace = frame.trace.clone();
            trace.push(DerivationStep::fact(selected.clone(), fact.clone()));
            let goals = frame.goals[1..].to_vec();
            return Some(Frame::new(goals, next, trace));
        }

        if let Some(rule) = rules.get(candidate - facts.len()) {
            self.attempts += 1;
            let fresh = freshen(rule, &mut self.counter);
            tracing::trace!(goal = %selected, head = %fresh.head, "trying rule");
            let UnifyResult::Success(next) = unify(selected, &fresh.head, &frame.substitution)
            else {
                return None;
            };
            let mut trace = frame.trace.clone();
            trace.push(DerivationStep::rule(selected.clone(), fresh.head));
            let mut goals = fresh.body;
            goals.extend_from_slice(&frame.goals[1..]);
            return Some(Frame::new(goals, next, trace));
        }

        self.stack.pop();
        None
    }
}

impl Iterator for Solutions<'_> {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        if self.config.max_solutions.is_some_and(|max| self.found >= max) {
            return None;
        }
        while let Some(top) = self.stack.last() {
            if top.selected.is_none() {
                let frame = self.stack.pop()?;
                self.found += 1;
                tracing::debug!(steps = frame.trace.len(), "solution found");
                return Some(Solution {
                    substitution: frame.substitution,
                    trace: frame.trace,
                });
            }
            if let Some(child) = self.expand_top() {
                self.push(child);
            }
        }
        None
    }
}
