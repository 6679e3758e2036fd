//! SLD resolution: renaming, search and query answering.

mod counter;
mod freshen;
mod query;
mod solve;
mod trace;

pub use counter::VarCounter;
pub use freshen::freshen;
pub use query::{ask, run_goals, run_query, Answer, QueryStream};
pub use solve::{solve, Solution, Solutions, SolveConfig};
pub use trace::{DerivationStep, Matched, Trace};
