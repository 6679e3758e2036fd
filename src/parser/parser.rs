//! Recursive-descent parser for clause syntax.

use super::ast::{Directive, Statement};
use super::lexer::{LexError, Lexer, Token};
use crate::syntax::{Rule, Term};

/// Parse error with location information.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{line}:{column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        }
    }
}

/// Parser state.
struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        let (line, column) = (lexer.token_line, lexer.token_column);
        Ok(Parser {
            lexer,
            current,
            line,
            column,
        })
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        let old = std::mem::replace(&mut self.current, self.lexer.next_token()?);
        self.line = self.lexer.token_line;
        self.column = self.lexer.token_column;
        Ok(old)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        if self.current == expected {
            self.advance()?;
            Ok(())
        } else {
            Err(self.error(format!("expected {:?}, found {:?}", expected, self.current)))
        }
    }

    fn error(&self, message: String) -> ParseError {
        ParseError {
            message,
            line: self.line,
            column: self.column,
        }
    }
}

/// Parse a source file into statements.
pub fn parse_program(source: &str) -> Result<Vec<Statement>, ParseError> {
    let mut parser = Parser::new(source)?;
    let mut statements = Vec::new();

    while parser.current != Token::Eof {
        let stmt = parse_statement(&mut parser)?;
        statements.push(stmt);
    }

    Ok(statements)
}

/// Parse a query. The leading `?-` and the final `.` are optional.
pub fn parse_query(source: &str) -> Result<Vec<Term>, ParseError> {
    let mut parser = Parser::new(source)?;
    if parser.current == Token::Query {
        parser.advance()?;
    }
    let goals = parse_goals(&mut parser)?;
    if parser.current == Token::Dot {
        parser.advance()?;
    }
    if parser.current != Token::Eof {
        return Err(parser.error(format!("unexpected {:?} after query", parser.current)));
    }
    Ok(goals)
}

/// Parse a single term.
pub fn parse_term(source: &str) -> Result<Term, ParseError> {
    let mut parser = Parser::new(source)?;
    let term = parse_term_inner(&mut parser)?;
    if parser.current != Token::Eof {
        return Err(parser.error(format!("unexpected {:?} after term", parser.current)));
    }
    Ok(term)
}

fn parse_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    match &parser.current {
        Token::Neck => parse_directive(parser),
        Token::Query => {
            parser.advance()?;
            let goals = parse_goals(parser)?;
            parser.expect(Token::Dot)?;
            Ok(Statement::Query(goals))
        }
        _ => parse_clause(parser),
    }
}

fn parse_directive(parser: &mut Parser) -> Result<Statement, ParseError> {
    parser.expect(Token::Neck)?;

    let name = match &parser.current {
        Token::Identifier(name) => name.clone(),
        _ => return Err(parser.error("expected directive name after ':-'".to_string())),
    };
    parser.advance()?;

    let directive = match name.as_str() {
        "load" => match parser.advance()? {
            Token::Str(path) => Directive::Load(path),
            _ => return Err(parser.error("expected quoted path after load".to_string())),
        },
        "set" => {
            let key = match parser.advance()? {
                Token::Identifier(key) => key,
                _ => return Err(parser.error("expected setting name after set".to_string())),
            };
            let value = match parser.advance()? {
                Token::Identifier(v) | Token::Str(v) => v,
                Token::Int(n) => n.to_string(),
                _ => return Err(parser.error("expected setting value".to_string())),
            };
            Directive::Set(key, value)
        }
        _ => return Err(parser.error(format!("unknown directive: {}", name))),
    };

    parser.expect(Token::Dot)?;
    Ok(Statement::Directive(directive))
}

fn parse_clause(parser: &mut Parser) -> Result<Statement, ParseError> {
    let (line, column) = (parser.line, parser.column);
    let head = parse_term_inner(parser)?;
    if head.is_var() {
        return Err(ParseError {
            message: "clause head cannot be a variable".to_string(),
            line,
            column,
        });
    }

    if parser.current == Token::Neck {
        parser.advance()?;
        let body = parse_goals(parser)?;
        parser.expect(Token::Dot)?;
        Ok(Statement::Rule(Rule::new(head, body)))
    } else {
        parser.expect(Token::Dot)?;
        Ok(Statement::Fact(head))
    }
}

fn parse_goals(parser: &mut Parser) -> Result<Vec<Term>, ParseError> {
    let mut goals = vec![parse_term_inner(parser)?];
    while parser.current == Token::Comma {
        parser.advance()?;
        goals.push(parse_term_inner(parser)?);
    }
    Ok(goals)
}

fn parse_args(parser: &mut Parser) -> Result<Vec<Term>, ParseError> {
    parser.expect(Token::LParen)?;
    let mut args = Vec::new();
    if parser.current != Token::RParen {
        args.push(parse_term_inner(parser)?);
        while parser.current == Token::Comma {
            parser.advance()?;
            args.push(parse_term_inner(parser)?);
        }
    }
    parser.expect(Token::RParen)?;
    Ok(args)
}

fn parse_term_inner(parser: &mut Parser) -> Result<Term, ParseError> {
    match &parser.current {
        Token::Variable(name) => {
            let term = Term::var(name.clone());
            parser.advance()?;
            Ok(term)
        }
        Token::Str(text) => {
            let term = Term::text(text.clone());
            parser.advance()?;
            Ok(term)
        }
        Token::Int(n) => {
            let term = Term::int(*n);
            parser.advance()?;
            Ok(term)
        }
        Token::Real(r) => {
            let term = Term::real(*r);
            parser.advance()?;
            Ok(term)
        }
        Token::Identifier(name) => {
            let name = name.clone();
            parser.advance()?;
            if parser.current == Token::LParen {
                let args = parse_args(parser)?;
                Ok(Term::app(name, args))
            } else {
                Ok(Term::constant(name))
            }
        }
        // Bare tuple: (a, b)
        Token::LParen => {
            let items = parse_args(parser)?;
            Ok(Term::tuple(items))
        }
        _ => Err(parser.error(format!("expected term, found {:?}", parser.current))),
    }
}
