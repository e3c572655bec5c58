//! The test oracle: a caller-supplied, opaque capability.
//!
//! The core never implements an oracle itself; it only defines the contract
//! an oracle must satisfy and invokes it synchronously.

use crate::error::DdminError;
use crate::outcome::{ConfigId, Outcome};

/// A deterministic test oracle over configurations of `U`.
///
/// `&mut self` lets stateful oracles (counting calls, recording a trace)
/// be used directly; pure functions work too via the blanket impl below.
pub trait Oracle<U> {
    fn test(&mut self, config: &[U], id: ConfigId) -> Result<Outcome, DdminError>;
}

impl<U, F> Oracle<U> for F
where
    F: FnMut(&[U], ConfigId) -> Result<Outcome, DdminError>,
{
    fn test(&mut self, config: &[U], id: ConfigId) -> Result<Outcome, DdminError> {
        self(config, id)
    }
}

/// Adapts an oracle that speaks the `"PASS"`/`"FAIL"` wire tokens to the
/// typed [`Oracle`] contract. Any other return value is reported as an
/// `OracleContractViolation`.
pub struct StringWireOracle<F> {
    inner: F,
}

impl<F> StringWireOracle<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<U, F> Oracle<U> for StringWireOracle<F>
where
    F: FnMut(&[U], ConfigId) -> String,
{
    fn test(&mut self, config: &[U], id: ConfigId) -> Result<Outcome, DdminError> {
        let pretty = id.pretty();
        let wire = (self.inner)(config, id);
        Outcome::from_wire(&wire).ok_or_else(|| DdminError::OracleContractViolation {
            detail: format!("oracle for [{pretty}] returned {wire:?}, expected \"PASS\" or \"FAIL\""),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_oracle_is_usable_directly() {
        let mut oracle = |config: &[char], _id: ConfigId| -> Result<Outcome, DdminError> {
            Ok(if config.contains(&'8') {
                Outcome::Fail
            } else {
                Outcome::Pass
            })
        };
        let id = ConfigId::new(&[], ["r0".to_string(), "assert".to_string()]);
        assert_eq!(
            oracle.test(&['1', '8'], id.clone()).unwrap(),
            Outcome::Fail
        );
        assert_eq!(oracle.test(&['1', '2'], id).unwrap(), Outcome::Pass);
    }

    #[test]
    fn string_wire_oracle_accepts_canonical_tokens() {
        let mut oracle = StringWireOracle::new(|config: &[char], _id: ConfigId| {
            if config.contains(&'8') {
                "FAIL".to_string()
            } else {
                "PASS".to_string()
            }
        });
        let id = ConfigId::new(&[], ["r0".to_string(), "s0".to_string()]);
        assert_eq!(
            Oracle::test(&mut oracle, &['8'], id.clone()).unwrap(),
            Outcome::Fail
        );
        assert_eq!(Oracle::test(&mut oracle, &['1'], id).unwrap(), Outcome::Pass);
    }

    #[test]
    fn string_wire_oracle_rejects_unknown_tokens() {
        let mut oracle =
            StringWireOracle::new(|_config: &[char], _id: ConfigId| "MAYBE".to_string());
        let id = ConfigId::new(&[], ["r0".to_string(), "s0".to_string()]);
        let err = Oracle::test(&mut oracle, &['x'], id).unwrap_err();
        assert!(matches!(err, DdminError::OracleContractViolation { .. }));
    }
}
