//! Knowledge base: ordered facts and rules.

mod json;

use std::path::Path;

use crate::parser::{parse_program, ParseError, Statement};
use crate::syntax::{Rule, Term};

pub use json::{JsonRule, JsonTerm, KbDocument};

/// Facts and rules, in declaration order.
///
/// Order only affects the order answers come out in, never which answers
/// exist. The search reads a knowledge base without modifying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    facts: Vec<Term>,
    rules: Vec<Rule>,
}

/// Error while loading a knowledge base.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON knowledge base: {0}")]
    Json(#[from] serde_json::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Convention(String),
    #[error("queries cannot appear in a knowledge base file")]
    UnexpectedQuery,
    #[error("directives cannot appear in a plain knowledge base")]
    UnexpectedDirective,
    #[error("load cycle: {path} is already being loaded")]
    Cycle { path: String },
}

impl KnowledgeBase {
    /// Create an empty knowledge base.
    pub fn new() -> Self {
        KnowledgeBase {
            facts: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Build a knowledge base from parsed statements.
    pub fn from_statements(stmts: Vec<Statement>) -> Result<Self, LoadError> {
        let mut kb = KnowledgeBase::new();
        for stmt in stmts {
            match stmt {
                Statement::Fact(fact) => kb.add_fact(fact),
                Statement::Rule(rule) => kb.add_rule(rule),
                Statement::Query(_) => return Err(LoadError::UnexpectedQuery),
                Statement::Directive(_) => return Err(LoadError::UnexpectedDirective),
            }
        }
        Ok(kb)
    }

    /// Parse clause syntax.
    pub fn from_source(source: &str) -> Result<Self, LoadError> {
        Self::from_statements(parse_program(source)?)
    }

    /// Read the JSON document layout (`facts` / `rules` with `head` and
    /// `body`).
    pub fn from_json_str(source: &str) -> Result<Self, LoadError> {
        let doc: KbDocument = serde_json::from_str(source)?;
        doc.into_knowledge_base()
    }

    /// Load a file: `.json` as a JSON document, anything else as clauses.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let kb = if is_json_path(path) {
            Self::from_json_str(&source)?
        } else {
            Self::from_source(&source)?
        };
        tracing::debug!(
            path = %path.display(),
            facts = kb.facts.len(),
            rules = kb.rules.len(),
            "knowledge base loaded"
        );
        Ok(kb)
    }

    /// Add a fact at the end.
    pub fn add_fact(&mut self, fact: Term) {
        self.facts.push(fact);
    }

    /// Add a rule at the end.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Append everything from `other`, keeping both orders.
    pub fn extend(&mut self, other: KnowledgeBase) {
        self.facts.extend(other.facts);
        self.rules.extend(other.rules);
    }

    /// A new knowledge base with `extra` facts after the existing ones.
    pub fn with_extra_facts(&self, extra: &[Term]) -> KnowledgeBase {
        let mut facts = self.facts.clone();
        facts.extend_from_slice(extra);
        KnowledgeBase {
            facts,
            rules: self.rules.clone(),
        }
    }

    pub fn facts(&self) -> &[Term] {
        &self.facts
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.facts.len() + self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty() && self.rules.is_empty()
    }
}

pub(crate) fn is_json_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
