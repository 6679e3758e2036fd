//! Per-query counter for minting fresh variable names.

/// Monotonic counter owned by one query.
///
/// Each query builds its own; it is handed to renaming by `&mut` and never
/// shared between queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarCounter {
    last: u64,
}

impl VarCounter {
    pub fn new() -> Self {
        VarCounter { last: 0 }
    }

    /// Next value, strictly greater than every value returned before.
    pub fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// The most recently returned value (0 before the first call).
    pub fn current(&self) -> u64 {
        self.last
    }

    /// Back to the initial state. Only valid between queries.
    pub fn reset(&mut self) {
        self.last = 0;
    }
}
