//! SLDLog: a small logic programming engine.
//!
//! Knowledge bases are ordered facts and rules (Horn clauses). Queries are
//! answered by SLD resolution: depth-first backward chaining with syntactic
//! unification, renaming rule variables apart on every use. Answers come out
//! lazily, in a fixed order (facts before rules, declaration order), each
//! with the derivation that produced it.
//!
//! ```
//! use sldlog::kb::KnowledgeBase;
//! use sldlog::parser::parse_term;
//! use sldlog::sld::run_query;
//!
//! let kb = KnowledgeBase::from_source(
//!     "subtipo_de(acta_existente, acta).
//!      requiere(acta_existente, 'CURP').
//!      requiere(G, R) :- subtipo_de(E, G), requiere(E, R).",
//! )
//! .unwrap();
//! let query = parse_term("requiere(acta, X)").unwrap();
//! let answers: Vec<_> = run_query(&kb, &query).collect();
//! assert_eq!(answers.len(), 1);
//! assert_eq!(answers[0].binding("X").unwrap().to_string(), "'CURP'");
//! ```

pub mod kb;
pub mod parser;
pub mod repl;
pub mod session;
pub mod sld;
pub mod syntax;
pub mod unify;
