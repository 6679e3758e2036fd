//! Session: a knowledge base plus per-user facts and search settings.

use std::path::{Path, PathBuf};

use crate::kb::{is_json_path, KnowledgeBase, LoadError};
use crate::parser::{parse_program, Directive, ParseError, Statement};
use crate::sld::{run_goals, Answer, SolveConfig};
use crate::syntax::Term;

/// Result of executing a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecResult {
    ClauseAdded,
    Answers(QueryOutcome),
    DirectiveApplied(DirectiveResult),
}

/// Result of applying a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveResult {
    Loaded {
        path: String,
        facts: usize,
        rules: usize,
    },
    Set {
        key: String,
        value: String,
    },
}

/// Everything a query produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub goals: Vec<Term>,
    pub answers: Vec<Answer>,
    /// Some branch hit `max_depth`, so `answers` may be incomplete.
    pub depth_limited: bool,
}

impl QueryOutcome {
    pub fn is_satisfied(&self) -> bool {
        !self.answers.is_empty()
    }
}

/// Session error.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// A session holds the loaded knowledge base, the facts asserted for the
/// current user, and the search configuration.
///
/// Session facts are kept apart from the base and joined onto a fresh copy
/// for every query, so clearing them never touches loaded knowledge.
#[derive(Debug, Clone, Default)]
pub struct Session {
    kb: KnowledgeBase,
    session_facts: Vec<Term>,
    config: SolveConfig,
    /// Canonical paths of the files currently being loaded, outermost first.
    loading: Vec<PathBuf>,
}

impl Session {
    /// Create a new empty session.
    pub fn new() -> Self {
        Session::default()
    }

    /// Create a session with the given configuration.
    pub fn with_config(config: SolveConfig) -> Self {
        Session {
            config,
            ..Session::default()
        }
    }

    pub fn with_knowledge_base(kb: KnowledgeBase) -> Self {
        Session {
            kb,
            ..Session::default()
        }
    }

    /// Record a fact about the current user, e.g. where they live.
    pub fn assert_session_fact(&mut self, fact: Term) {
        self.session_facts.push(fact);
    }

    pub fn clear_session_facts(&mut self) {
        self.session_facts.clear();
    }

    /// Base knowledge plus session facts, as queries see it.
    pub fn effective_knowledge_base(&self) -> KnowledgeBase {
        self.kb.with_extra_facts(&self.session_facts)
    }

    /// Run a conjunction of goals and collect the answers.
    pub fn query(&self, goals: Vec<Term>) -> QueryOutcome {
        let kb = self.effective_knowledge_base();
        let mut stream = run_goals(&kb, goals.clone()).with_config(self.config.clone());
        let answers: Vec<Answer> = stream.by_ref().collect();
        let depth_limited = stream.depth_limited();
        tracing::debug!(answers = answers.len(), depth_limited, "query finished");
        QueryOutcome {
            goals,
            answers,
            depth_limited,
        }
    }

    /// Parse and execute every statement in `source`.
    pub fn execute_source(&mut self, source: &str) -> Result<Vec<ExecResult>, SessionError> {
        let stmts = parse_program(source)?;
        stmts
            .into_iter()
            .map(|stmt| self.execute_statement(stmt))
            .collect()
    }

    /// Execute a parsed statement.
    pub fn execute_statement(&mut self, stmt: Statement) -> Result<ExecResult, SessionError> {
        match stmt {
            Statement::Fact(fact) => {
                self.kb.add_fact(fact);
                Ok(ExecResult::ClauseAdded)
            }
            Statement::Rule(rule) => {
                self.kb.add_rule(rule);
                Ok(ExecResult::ClauseAdded)
            }
            Statement::Query(goals) => Ok(ExecResult::Answers(self.query(goals))),
            Statement::Directive(directive) => {
                self.apply_directive(directive).map(ExecResult::DirectiveApplied)
            }
        }
    }

    /// Load a file and add its clauses to the knowledge base.
    ///
    /// Clause files may carry directives; they apply in order as the file is
    /// read, and a relative `:- load` path is taken from the loading file's
    /// directory. Queries are rejected before anything is added. A file that
    /// is already being loaded further up the chain is a cycle.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<DirectiveResult, SessionError> {
        let path = path.as_ref();
        let canonical = std::fs::canonicalize(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        if self.loading.contains(&canonical) {
            return Err(LoadError::Cycle {
                path: path.display().to_string(),
            }
            .into());
        }

        self.loading.push(canonical);
        let result = self.load_unchecked(path);
        self.loading.pop();
        result
    }

    fn load_unchecked(&mut self, path: &Path) -> Result<DirectiveResult, SessionError> {
        let (facts_before, rules_before) = (self.kb.facts().len(), self.kb.rules().len());

        if is_json_path(path) {
            self.kb.extend(KnowledgeBase::load_file(path)?);
        } else {
            let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let stmts = parse_program(&source)?;
            if stmts.iter().any(|stmt| matches!(stmt, Statement::Query(_))) {
                return Err(LoadError::UnexpectedQuery.into());
            }
            let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
            for stmt in stmts {
                match stmt {
                    Statement::Fact(fact) => self.kb.add_fact(fact),
                    Statement::Rule(rule) => self.kb.add_rule(rule),
                    Statement::Directive(Directive::Load(target)) => {
                        self.load_file(base_dir.join(target))?;
                    }
                    Statement::Directive(directive) => {
                        self.apply_directive(directive)?;
                    }
                    Statement::Query(_) => return Err(LoadError::UnexpectedQuery.into()),
                }
            }
        }

        let result = DirectiveResult::Loaded {
            path: path.display().to_string(),
            facts: self.kb.facts().len() - facts_before,
            rules: self.kb.rules().len() - rules_before,
        };
        tracing::debug!(?result, "file loaded into session");
        Ok(result)
    }

    /// Apply a directive.
    pub fn apply_directive(&mut self, directive: Directive) -> Result<DirectiveResult, SessionError> {
        match directive {
            Directive::Load(path) => self.load_file(path),
            Directive::Set(key, value) => self.set_option(&key, &value),
        }
    }

    /// Update the configuration from a key/value pair. `none` removes a
    /// limit.
    pub fn set_option(&mut self, key: &str, value: &str) -> Result<DirectiveResult, SessionError> {
        let limit = if value == "none" {
            None
        } else {
            Some(value.parse::<usize>().map_err(|_| SessionError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            })?)
        };
        match key {
            "max_depth" => self.config.max_depth = limit,
            "max_solutions" => self.config.max_solutions = limit,
            _ => return Err(SessionError::UnknownOption(key.to_string())),
        }
        Ok(DirectiveResult::Set {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Access the base knowledge base (without session facts).
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn session_facts(&self) -> &[Term] {
        &self.session_facts
    }

    /// Access the current configuration.
    pub fn config(&self) -> &SolveConfig {
        &self.config
    }
}
