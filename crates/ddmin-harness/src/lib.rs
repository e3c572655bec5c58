//! Oracle fixtures and a reduction-report runner for exercising `ddmin-core`.
//!
//! This crate never ships a production oracle — it exists only to give the
//! core something concrete to reduce against in tests, benchmarks, and fuzz
//! targets. [`SupersetOracle`] is the textbook "does this multiset contain a
//! target substring" property; [`ScenarioRunner`] drives a batch of
//! [`OracleCase`]s through [`ddmin_core::Ddmin`] and collects
//! [`ReductionReport`]s, including a brute-force check of 1-minimality for
//! small results.

#![forbid(unsafe_code)]

pub mod oracles;
pub mod runner;

pub use oracles::SupersetOracle;
pub use runner::{run_with_oracle, OracleCase, ReductionReport, ScenarioRunner};

#[cfg(test)]
mod end_to_end {
    //! The six worked scenarios, run through the harness's own
    //! [`ScenarioRunner`] rather than a bare `Ddmin` instance, so that the
    //! runner itself is exercised the same way a consumer would use it.

    use std::cell::Cell;
    use std::rc::Rc;

    use ddmin_core::{ConfigId, DdminBuilder, DdminError, HashMapCache, Outcome};

    use super::*;

    #[test]
    fn classic_single_char_reduces_within_the_expected_call_budget() {
        let report = ScenarioRunner.run_one(&OracleCase::new("classic", "12345678", "8"));
        assert_eq!(report.minimal, vec!['8']);
        assert_eq!(report.verified_1_minimal, Some(true));
        assert!(
            report.oracle_calls <= 16,
            "expected at most 16 oracle calls, got {}",
            report.oracle_calls
        );
    }

    #[test]
    fn two_units_required_together_preserve_their_relative_order() {
        let report = ScenarioRunner.run_one(&OracleCase::new("two-units", "xaybz", "ab"));
        assert_eq!(report.minimal, vec!['a', 'b']);
    }

    #[test]
    fn an_already_minimal_configuration_makes_no_probe_calls() {
        let report = ScenarioRunner.run_one(&OracleCase::new("already-minimal", "q", "q"));
        assert_eq!(report.minimal, vec!['q']);
        assert_eq!(report.oracle_calls, 0);
    }

    #[test]
    fn duplicate_units_survive_when_the_property_needs_both() {
        let report = ScenarioRunner.run_one(&OracleCase::new("duplicates", "abac", "aa"));
        assert_eq!(report.minimal, vec!['a', 'a']);
    }

    #[test]
    fn complement_first_direction_reaches_the_same_minimal_set() {
        let oracle = SupersetOracle::new(['a', 'b']);
        let mut subset_first = DdminBuilder::new(oracle.clone()).build();
        let mut complement_first = DdminBuilder::new(oracle).subset_first(false).build();

        let config: Vec<char> = "xaybz".chars().collect();
        let a = subset_first.ddmin(config.clone()).unwrap();
        let b = complement_first.ddmin(config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn a_cache_shared_across_two_runs_absorbs_the_second_runs_probes() {
        let cache = HashMapCache::new();
        let oracle = SupersetOracle::new(['8']);
        let counter = oracle.call_counter();
        let mut engine = DdminBuilder::new(oracle).cache(cache).build();

        let config: Vec<char> = "12345678".chars().collect();
        engine.ddmin(config.clone()).unwrap();
        let calls_after_first = counter.get();
        assert!(calls_after_first > 0);

        engine.ddmin(config).unwrap();
        assert_eq!(
            counter.get(),
            calls_after_first,
            "a repeated reduction over a shared cache should add no new non-assert probes"
        );
    }

    #[test]
    fn an_oracle_that_lies_about_the_precondition_is_reported_not_panicked() {
        let always_pass = |_: &[char], _: ConfigId| Ok(Outcome::Pass);
        let mut engine = DdminBuilder::new(always_pass).build();
        let err = engine.ddmin(vec!['a', 'b']).unwrap_err();
        assert!(matches!(err, DdminError::OracleContractViolation { .. }));
    }
}
