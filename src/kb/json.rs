//! JSON knowledge-base documents.
//!
//! ```json
//! { "facts": [["es_tramite_valido", "pasaporte"]],
//!   "rules": [{ "head": ["requiere", "G", "R"],
//!               "body": [["subtipo_de", "E", "G"], ["requiere", "E", "R"]] }] }
//! ```
//!
//! Arrays are compounds, numbers are atoms, and strings go through the
//! variable naming convention. `{"text": "..."}` is always an atom.

use serde::Deserialize;

use super::{KnowledgeBase, LoadError};
use crate::syntax::{Rule, Term};

/// Top-level document.
#[derive(Debug, Clone, Deserialize)]
pub struct KbDocument {
    #[serde(default, alias = "hechos")]
    pub facts: Vec<JsonTerm>,
    #[serde(default, alias = "reglas")]
    pub rules: Vec<JsonRule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRule {
    #[serde(alias = "cabeza")]
    pub head: JsonTerm,
    #[serde(default, alias = "cuerpo")]
    pub body: Vec<JsonTerm>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JsonTerm {
    Text { text: String },
    Name(String),
    Number(serde_json::Number),
    Tuple(Vec<JsonTerm>),
}

impl JsonTerm {
    pub fn to_term(&self) -> Result<Term, LoadError> {
        match self {
            JsonTerm::Text { text } => Ok(Term::text(text.clone())),
            JsonTerm::Name(name) if name.is_empty() => {
                Err(LoadError::Convention("empty name in knowledge base".to_string()))
            }
            JsonTerm::Name(name) => Ok(Term::named(name.clone())),
            JsonTerm::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Ok(Term::int(i)),
                (None, Some(f)) => Ok(Term::real(f)),
                (None, None) => Err(LoadError::Convention(format!("unsupported number {}", n))),
            },
            JsonTerm::Tuple(items) => items
                .iter()
                .map(JsonTerm::to_term)
                .collect::<Result<Vec<_>, _>>()
                .map(Term::Compound),
        }
    }
}

impl KbDocument {
    pub fn into_knowledge_base(self) -> Result<KnowledgeBase, LoadError> {
        let mut kb = KnowledgeBase::new();
        for fact in &self.facts {
            kb.add_fact(fact.to_term()?);
        }
        for rule in &self.rules {
            let head = rule.head.to_term()?;
            if head.is_var() {
                return Err(LoadError::Convention(format!(
                    "rule head cannot be a variable: {}",
                    head
                )));
            }
            let body = rule
                .body
                .iter()
                .map(JsonTerm::to_term)
                .collect::<Result<Vec<_>, _>>()?;
            kb.add_rule(Rule::new(head, body));
        }
        Ok(kb)
    }
}
