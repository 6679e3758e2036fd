//! Parser for the clause syntax of knowledge bases and queries.

mod ast;
mod lexer;
mod parser;

pub use ast::{Directive, Statement};
pub use parser::{parse_program, parse_query, parse_term, ParseError};
