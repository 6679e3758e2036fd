//! REPL implementation.

use std::io::{BufRead, Write};

use crate::parser::{parse_program, parse_term, ParseError};
use crate::session::{DirectiveResult, ExecResult, QueryOutcome, Session, SessionError};

const HELP: &str = "\
Clauses:   p(a).   q(X) :- p(X).
Queries:   ?- q(X).
Commands:
  :help               show this text
  :facts              list the loaded facts and rules
  :assert <fact>      add a session fact, e.g. :assert reside_en_ensenada(yo)
  :clear-session      drop all session facts
  :load <path>        load a clause or JSON file
  :quit               leave";

/// REPL error.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Interactive REPL.
pub struct Repl {
    session: Session,
}

impl Repl {
    /// Create a new REPL.
    pub fn new() -> Self {
        Repl {
            session: Session::new(),
        }
    }

    pub fn with_session(session: Session) -> Self {
        Repl { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Load a file into the REPL.
    pub fn load_file(&mut self, path: &str) -> Result<String, ReplError> {
        let result = self.session.load_file(path)?;
        Ok(render_directive(&result))
    }

    /// Process a line of input.
    pub fn process_line(&mut self, line: &str) -> Result<String, ReplError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(String::new());
        }

        if let Some(command) = line.strip_prefix(':').filter(|_| !line.starts_with(":-")) {
            return self.process_command(command);
        }

        let mut output = Vec::new();
        for stmt in parse_program(line)? {
            match self.session.execute_statement(stmt)? {
                ExecResult::ClauseAdded => output.push("ok.".to_string()),
                ExecResult::Answers(outcome) => output.push(render_outcome(&outcome)),
                ExecResult::DirectiveApplied(result) => output.push(render_directive(&result)),
            }
        }
        Ok(output.join("\n"))
    }

    fn process_command(&mut self, command: &str) -> Result<String, ReplError> {
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        match name {
            "help" => Ok(HELP.to_string()),
            "facts" => Ok(self.render_knowledge_base()),
            "assert" => {
                let fact = parse_term(arg.trim_end_matches('.'))?;
                let shown = fact.to_string();
                self.session.assert_session_fact(fact);
                Ok(format!("session fact {} asserted.", shown))
            }
            "clear-session" => {
                self.session.clear_session_facts();
                Ok("session facts cleared.".to_string())
            }
            "load" => self.load_file(arg.trim_matches('"')),
            _ => Err(ReplError::UnknownCommand(name.to_string())),
        }
    }

    fn render_knowledge_base(&self) -> String {
        let kb = self.session.knowledge_base();
        let mut lines: Vec<String> = kb.facts().iter().map(|f| format!("{}.", f)).collect();
        lines.extend(kb.rules().iter().map(|r| format!("{}.", r)));
        lines.extend(
            self.session
                .session_facts()
                .iter()
                .map(|f| format!("{}.  % session", f)),
        );
        lines.join("\n")
    }

    /// Run the REPL on the given input and output.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ReplError> {
        write!(output, "?- ")?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            if line.trim() == ":quit" {
                break;
            }
            match self.process_line(&line) {
                Ok(text) if text.is_empty() => {}
                Ok(text) => writeln!(output, "{}", text)?,
                Err(e) => writeln!(output, "Error: {}", e)?,
            }
            write!(output, "?- ")?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }

    /// Run the REPL interactively.
    pub fn run(&mut self) -> Result<(), ReplError> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

/// Human-readable form of a query's answers and their derivations.
pub fn render_outcome(outcome: &QueryOutcome) -> String {
    let mut out = String::new();
    for (i, answer) in outcome.answers.iter().enumerate() {
        out.push_str(&format!("Solution {}\n", i + 1));
        if answer.is_affirmative() {
            out.push_str("  true\n");
        } else {
            for (var, value) in &answer.bindings {
                out.push_str(&format!("  {} = {}\n", var, value));
            }
        }
        out.push_str("  Derivation:\n");
        for (j, step) in answer.trace.iter().enumerate() {
            out.push_str(&format!("    {}. {}\n", j + 1, step));
        }
    }
    if outcome.answers.is_empty() {
        out.push_str("false.\n");
    }
    if outcome.depth_limited {
        out.push_str("(depth limit reached; answers may be incomplete)\n");
    }
    out.trim_end().to_string()
}

fn render_directive(result: &DirectiveResult) -> String {
    match result {
        DirectiveResult::Loaded { path, facts, rules } => {
            format!("loaded {}: {} facts, {} rules.", path, facts, rules)
        }
        DirectiveResult::Set { key, value } => format!("{} = {}.", key, value),
    }
}
