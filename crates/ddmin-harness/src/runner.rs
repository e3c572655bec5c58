//! Runs named reduction cases through `ddmin-core` and collects reports.
//!
//! This is the direct analogue of a fixture-driven test runner: where a
//! typical harness runs fixture cases through a verifier and collects pass/
//! fail results, [`ScenarioRunner`] runs [`OracleCase`]s through
//! [`ddmin_core::Ddmin::ddmin`] and collects [`ReductionReport`]s.

use ddmin_core::{Ddmin, DdminBuilder, DdminError, HashMapCache, Oracle};

use crate::oracles::SupersetOracle;

/// A named initial configuration plus the multiset property ("contains at
/// least these characters") that makes it interesting.
#[derive(Debug, Clone)]
pub struct OracleCase {
    pub name: String,
    pub initial: Vec<char>,
    pub target: Vec<char>,
}

impl OracleCase {
    pub fn new(name: impl Into<String>, initial: &str, target: &str) -> Self {
        Self {
            name: name.into(),
            initial: initial.chars().collect(),
            target: target.chars().collect(),
        }
    }
}

/// The outcome of running one [`OracleCase`] to completion.
#[derive(Debug, Clone)]
pub struct ReductionReport {
    pub case_name: String,
    pub initial_len: usize,
    pub minimal: Vec<char>,
    pub oracle_calls: usize,
    /// `true` if every single-unit removal from `minimal` was brute-force
    /// checked and found to make the oracle pass. Only computed when
    /// `minimal.len()` is small enough to check exhaustively
    /// (see [`ScenarioRunner::BRUTE_FORCE_LIMIT`]); `None` otherwise.
    pub verified_1_minimal: Option<bool>,
}

/// Runs a batch of [`OracleCase`]s with a fresh engine and cache per case.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    /// Above this result size, brute-force 1-minimality verification is
    /// skipped: it costs one oracle call per surviving unit and the engine's
    /// own termination guarantee already covers larger cases.
    const BRUTE_FORCE_LIMIT: usize = 32;

    pub fn run(&self, cases: &[OracleCase]) -> Vec<ReductionReport> {
        cases.iter().map(|case| self.run_one(case)).collect()
    }

    pub fn run_one(&self, case: &OracleCase) -> ReductionReport {
        let oracle = SupersetOracle::new(case.target.clone());
        let call_counter = oracle.call_counter();
        let mut engine: Ddmin<char, SupersetOracle, HashMapCache<char>> =
            DdminBuilder::new(oracle).build();

        let minimal = engine
            .ddmin(case.initial.clone())
            .expect("case oracles always satisfy the FAIL precondition on their own initial configuration");

        let verified_1_minimal = if minimal.len() <= Self::BRUTE_FORCE_LIMIT {
            Some(self.verify_1_minimal(&case.target, &minimal))
        } else {
            None
        };

        ReductionReport {
            case_name: case.name.clone(),
            initial_len: case.initial.len(),
            oracle_calls: call_counter.get(),
            minimal,
            verified_1_minimal,
        }
    }

    /// Removes each unit of `minimal` in turn and confirms the property no
    /// longer holds, using a disposable oracle so the check never pollutes
    /// any call-count accounting.
    fn verify_1_minimal(&self, target: &[char], minimal: &[char]) -> bool {
        let mut checker = SupersetOracle::new(target.to_vec());
        for i in 0..minimal.len() {
            let mut without_i: Vec<char> = minimal.to_vec();
            without_i.remove(i);
            let id = ddmin_core::ConfigId::new(&[], ["verify".to_string()]);
            let still_interesting =
                Oracle::test(&mut checker, &without_i, id).expect("test oracle never errs") == ddmin_core::Outcome::Fail;
            if still_interesting {
                return false;
            }
        }
        true
    }
}

/// Reduces `initial` under `oracle`, for callers that already have a
/// configured oracle rather than a [`SupersetOracle`]. Kept for harness
/// consumers that bring their own test oracle shape.
pub fn run_with_oracle<U, Ora>(oracle: Ora, initial: Vec<U>) -> Result<Vec<U>, DdminError>
where
    U: Clone + Eq + std::hash::Hash,
    Ora: Oracle<U>,
{
    let mut engine: Ddmin<U, Ora, HashMapCache<U>> = DdminBuilder::new(oracle).build();
    engine.ddmin(initial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_single_char_case_reduces_to_the_target() {
        let runner = ScenarioRunner;
        let case = OracleCase::new("classic", "12345678", "8");
        let report = runner.run_one(&case);
        assert_eq!(report.minimal, vec!['8']);
        assert_eq!(report.verified_1_minimal, Some(true));
        assert!(report.oracle_calls > 0 && report.oracle_calls <= 16);
    }

    #[test]
    fn two_char_case_preserves_relative_order() {
        let runner = ScenarioRunner;
        let case = OracleCase::new("two-chars", "xaybz", "ab");
        let report = runner.run_one(&case);
        assert_eq!(report.minimal, vec!['a', 'b']);
        assert_eq!(report.verified_1_minimal, Some(true));
    }

    #[test]
    fn already_minimal_case_is_unchanged() {
        let runner = ScenarioRunner;
        let case = OracleCase::new("already-minimal", "q", "q");
        let report = runner.run_one(&case);
        assert_eq!(report.minimal, vec!['q']);
        assert_eq!(report.initial_len, 1);
    }

    #[test]
    fn duplicate_units_required_by_the_target_survive() {
        let runner = ScenarioRunner;
        let case = OracleCase::new("duplicates", "abac", "aa");
        let report = runner.run_one(&case);
        assert_eq!(report.minimal, vec!['a', 'a']);
        assert_eq!(report.verified_1_minimal, Some(true));
    }

    #[test]
    fn run_batches_every_case_in_order() {
        let runner = ScenarioRunner;
        let cases = vec![
            OracleCase::new("a", "12345678", "8"),
            OracleCase::new("b", "xaybz", "ab"),
        ];
        let reports = runner.run(&cases);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].case_name, "a");
        assert_eq!(reports[1].case_name, "b");
    }

    #[test]
    fn run_with_oracle_accepts_a_bare_closure() {
        let oracle = |config: &[char], _id: ddmin_core::ConfigId| {
            Ok(if config.contains(&'8') {
                ddmin_core::Outcome::Fail
            } else {
                ddmin_core::Outcome::Pass
            })
        };
        let result = run_with_oracle(oracle, "12345678".chars().collect()).unwrap();
        assert_eq!(result, vec!['8']);
    }
}
