//! Line-oriented front end over a session.

mod repl;

pub use repl::{render_outcome, Repl, ReplError};
