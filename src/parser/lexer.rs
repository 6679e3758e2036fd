//! Lexer for clause syntax.

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Names
    Identifier(String), // lowercase: constants, predicates
    Variable(String),   // uppercase or '_': variables

    // Literals
    Str(String),
    Int(i64),
    Real(f64),

    // Delimiters
    LParen, // (
    RParen, // )
    Comma,  // ,
    Dot,    // .

    Neck,  // :-
    Query, // ?-

    // End of input
    Eof,
}

/// Lexer state.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    /// Where the most recent token started.
    pub token_line: usize,
    pub token_column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            line: 1,
            column: 1,
            token_line: 1,
            token_column: 1,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.input[self.position..].chars().nth(1)
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();
        self.token_line = self.line;
        self.token_column = self.column;

        let Some(ch) = self.peek_char() else {
            return Ok(Token::Eof);
        };
        let remaining = &self.input[self.position..];

        match ch {
            '(' => {
                self.advance(1);
                return Ok(Token::LParen);
            }
            ')' => {
                self.advance(1);
                return Ok(Token::RParen);
            }
            ',' => {
                self.advance(1);
                return Ok(Token::Comma);
            }
            '.' => {
                self.advance(1);
                return Ok(Token::Dot);
            }
            ':' if remaining.starts_with(":-") => {
                self.advance(2);
                return Ok(Token::Neck);
            }
            '?' if remaining.starts_with("?-") => {
                self.advance(2);
                return Ok(Token::Query);
            }
            '\'' | '"' => return self.lex_string(ch),
            '-' if self.peek_second().is_some_and(|c| c.is_ascii_digit()) => {
                self.advance(1);
                return self.lex_number(true);
            }
            _ => {}
        }

        if ch.is_ascii_digit() {
            return self.lex_number(false);
        }

        if ch.is_lowercase() {
            return Ok(Token::Identifier(self.lex_name()));
        }

        if ch.is_uppercase() || ch == '_' {
            return Ok(Token::Variable(self.lex_name()));
        }

        Err(self.error(format!("unexpected character: '{}'", ch)))
    }

    fn error(&self, message: String) -> LexError {
        LexError {
            message,
            line: self.line,
            column: self.column,
        }
    }

    fn advance(&mut self, bytes: usize) {
        let consumed = &self.input[self.position..self.position + bytes];
        for ch in consumed.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += bytes;
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek_char() {
            let remaining = &self.input[self.position..];
            if ch.is_whitespace() {
                self.advance(ch.len_utf8());
            } else if ch == '%' || remaining.starts_with("//") {
                // Skip to end of line
                while let Some(c) = self.peek_char() {
                    self.advance(c.len_utf8());
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn lex_name(&mut self) -> String {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                self.advance(ch.len_utf8());
            } else {
                break;
            }
        }
        self.input[start..self.position].to_string()
    }

    fn lex_number(&mut self, negative: bool) -> Result<Token, LexError> {
        let start = self.position;
        self.skip_digits();

        // A dot only belongs to the number when a digit follows; otherwise it
        // ends the clause.
        let is_real =
            self.peek_char() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit());
        if is_real {
            self.advance(1);
            self.skip_digits();
        }

        let digits = &self.input[start..self.position];
        let text = if negative {
            format!("-{}", digits)
        } else {
            digits.to_string()
        };

        if is_real {
            text.parse::<f64>()
                .map(Token::Real)
                .map_err(|_| self.error(format!("invalid number: {}", text)))
        } else {
            text.parse::<i64>()
                .map(Token::Int)
                .map_err(|_| self.error(format!("integer out of range: {}", text)))
        }
    }

    fn skip_digits(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_digit() {
                self.advance(1);
            } else {
                break;
            }
        }
    }

    fn lex_string(&mut self, quote: char) -> Result<Token, LexError> {
        // Skip opening quote
        self.advance(1);
        let mut content = String::new();

        while let Some(ch) = self.peek_char() {
            if ch == quote {
                self.advance(1);
                return Ok(Token::Str(content));
            } else if ch == '\\' {
                self.advance(1);
                match self.peek_char() {
                    Some('n') => content.push('\n'),
                    Some('t') => content.push('\t'),
                    Some(c) if c != '\n' => content.push(c),
                    _ => break,
                }
                if let Some(c) = self.peek_char() {
                    self.advance(c.len_utf8());
                }
            } else if ch == '\n' {
                break;
            } else {
                content.push(ch);
                self.advance(ch.len_utf8());
            }
        }

        Err(self.error("unterminated string literal".to_string()))
    }
}

/// Lexer error.
#[derive(Debug, Clone)]
pub struct LexError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
