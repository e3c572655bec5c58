//! Test oracles for exercising `ddmin-core`.
//!
//! These are intentionally the textbook family of delta-debugging oracles
//! used by every worked example in the algorithm's literature: units are
//! characters, and the property under test is "does the multiset of the
//! configuration contain some fixed target multiset". None of this ships in
//! `ddmin-core` itself — the core never implements an oracle.

use std::cell::Cell;
use std::rc::Rc;

use ddmin_core::{ConfigId, DdminError, Oracle, Outcome};

/// `oracle(C) = FAIL` iff the multiset of characters in `C` is a superset of
/// `target`.
///
/// Carries its call counter behind an `Rc<Cell<_>>` so a caller can hold a
/// clone of the counter after moving the oracle itself into a `Ddmin` engine
/// (the engine owns its oracle; this is the only way to read the count back
/// out afterwards without the engine exposing one).
#[derive(Debug, Clone)]
pub struct SupersetOracle {
    target: Vec<char>,
    non_assert_calls: Rc<Cell<usize>>,
}

impl SupersetOracle {
    pub fn new(target: impl Into<Vec<char>>) -> Self {
        Self {
            target: target.into(),
            non_assert_calls: Rc::new(Cell::new(0)),
        }
    }

    /// A shared handle to this oracle's call counter, readable after the
    /// oracle itself has been moved into an engine.
    pub fn call_counter(&self) -> Rc<Cell<usize>> {
        self.non_assert_calls.clone()
    }

    /// Number of oracle invocations made for non-`"assert"` probes. The
    /// assertion probe at the top of every run is deliberately excluded,
    /// since it never touches the outcome cache and would otherwise double
    /// count the very first probe of each run.
    pub fn non_assert_calls(&self) -> usize {
        self.non_assert_calls.get()
    }

    fn verdict(&self, config: &[char]) -> Outcome {
        let mut remaining = self.target.clone();
        for &c in config {
            if let Some(pos) = remaining.iter().position(|&t| t == c) {
                remaining.remove(pos);
            }
        }
        if remaining.is_empty() {
            Outcome::Fail
        } else {
            Outcome::Pass
        }
    }
}

impl Oracle<char> for SupersetOracle {
    fn test(&mut self, config: &[char], id: ConfigId) -> Result<Outcome, DdminError> {
        if !id.is_assert() {
            self.non_assert_calls.set(self.non_assert_calls.get() + 1);
        }
        Ok(self.verdict(config))
    }
}
