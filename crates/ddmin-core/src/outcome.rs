//! The oracle verdict, and the tuple-of-tokens identifying a probe.

use serde::Serialize;

/// Test outcome. `Fail` means "interesting".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    /// The literal wire token, for oracles that speak `"PASS"`/`"FAIL"` strings
    /// rather than the typed `Outcome` directly (see [`crate::oracle::StringWireOracle`]).
    pub fn as_wire(self) -> &'static str {
        match self {
            Outcome::Pass => "PASS",
            Outcome::Fail => "FAIL",
        }
    }

    /// Parse a wire token. Returns `None` for anything but `"PASS"`/`"FAIL"`,
    /// which the caller turns into an `OracleContractViolation`.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "PASS" => Some(Outcome::Pass),
            "FAIL" => Some(Outcome::Fail),
            _ => None,
        }
    }
}

/// Identifies where in the search a probe came from: `(id_prefix..., "rN", "sI" | "cI" | "assert")`.
///
/// Used only for logs and for oracle-derived working-directory names;
/// the core never inspects the tokens except to detect the `"assert"`
/// marker, which is excluded from the outcome cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigId(pub Vec<String>);

impl ConfigId {
    /// Build an id from a shared prefix plus the tokens for this probe.
    pub fn new(prefix: &[String], tokens: impl IntoIterator<Item = String>) -> Self {
        let mut all = prefix.to_vec();
        all.extend(tokens);
        ConfigId(all)
    }

    /// Whether this id marks a pre-iteration invariant check: such probes
    /// are never looked up in, or written to, the outcome cache.
    pub fn is_assert(&self) -> bool {
        self.0.iter().any(|token| token == "assert")
    }

    /// `"rN / sI"`-style formatting for logs and directory names.
    pub fn pretty(&self) -> String {
        self.0.join(" / ")
    }
}
