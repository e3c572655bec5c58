//! The ddmin control loop: the engine that drives the strategy
//! surface and the outcome cache to locate a 1-minimal interesting
//! subsequence of the initial configuration.

use std::hash::Hash;
use std::marker::PhantomData;

use crate::cache::{HashMapCache, OutcomeCache};
use crate::error::DdminError;
use crate::iterator::{IndexIterFn, forward};
use crate::logging::{Emitter, LogEntry, LogLevel, NullEmitter};
use crate::oracle::Oracle;
use crate::outcome::{ConfigId, Outcome};
use crate::slice::Slice;
use crate::splitter::{balanced, validate_partition};

/// `split(n, k) -> Vec<Slice>`, boxed so it can be swapped at construction
/// time.
pub type SplitFn = Box<dyn Fn(usize, usize) -> Result<Vec<Slice>, DdminError>>;

type ReduceFn<U, Ora, Cac> = fn(
    &mut Ddmin<U, Ora, Cac>,
    usize,
    &[U],
    &[Slice],
    usize,
) -> Result<(Option<Vec<Slice>>, usize), DdminError>;

/// Builds a [`Ddmin`] engine. Every field is an optional construction
/// parameter with a sensible default.
pub struct DdminBuilder<U, Ora, Cac = HashMapCache<U>> {
    oracle: Ora,
    cache: Cac,
    id_prefix: Vec<String>,
    split: SplitFn,
    subset_first: bool,
    subset_iterator: IndexIterFn,
    complement_iterator: IndexIterFn,
    emitter: Box<dyn Emitter>,
    _unit: PhantomData<U>,
}

impl<U, Ora> DdminBuilder<U, Ora, HashMapCache<U>>
where
    U: Clone + Eq + Hash,
    Ora: Oracle<U>,
{
    /// Start a builder with the classic defaults: a fresh hash-map cache, no
    /// id prefix, balanced split, subset-first, forward iterators, and a
    /// null log emitter.
    pub fn new(oracle: Ora) -> Self {
        Self {
            oracle,
            cache: HashMapCache::new(),
            id_prefix: Vec::new(),
            split: Box::new(balanced),
            subset_first: true,
            subset_iterator: Box::new(forward),
            complement_iterator: Box::new(forward),
            emitter: Box::new(NullEmitter),
            _unit: PhantomData,
        }
    }
}

impl<U, Ora, Cac> DdminBuilder<U, Ora, Cac>
where
    U: Clone + Eq + Hash,
    Ora: Oracle<U>,
    Cac: OutcomeCache<U>,
{
    /// Swap in a caller-supplied cache, e.g. to share one across several
    /// `ddmin` invocations.
    pub fn cache<Cac2: OutcomeCache<U>>(self, cache: Cac2) -> DdminBuilder<U, Ora, Cac2> {
        DdminBuilder {
            oracle: self.oracle,
            cache,
            id_prefix: self.id_prefix,
            split: self.split,
            subset_first: self.subset_first,
            subset_iterator: self.subset_iterator,
            complement_iterator: self.complement_iterator,
            emitter: self.emitter,
            _unit: PhantomData,
        }
    }

    pub fn id_prefix(mut self, id_prefix: Vec<String>) -> Self {
        self.id_prefix = id_prefix;
        self
    }

    pub fn split(mut self, split: impl Fn(usize, usize) -> Result<Vec<Slice>, DdminError> + 'static) -> Self {
        self.split = Box::new(split);
        self
    }

    /// When `true` (the default), an iteration probes subset-reduce before
    /// complement-reduce; when `false`, the order is reversed.
    pub fn subset_first(mut self, subset_first: bool) -> Self {
        self.subset_first = subset_first;
        self
    }

    pub fn subset_iterator(mut self, f: impl Fn(usize) -> Vec<Option<usize>> + 'static) -> Self {
        self.subset_iterator = Box::new(f);
        self
    }

    pub fn complement_iterator(mut self, f: impl Fn(usize) -> Vec<Option<usize>> + 'static) -> Self {
        self.complement_iterator = Box::new(f);
        self
    }

    pub fn emitter(mut self, emitter: impl Emitter + 'static) -> Self {
        self.emitter = Box::new(emitter);
        self
    }

    pub fn build(self) -> Ddmin<U, Ora, Cac> {
        Ddmin {
            oracle: self.oracle,
            cache: self.cache,
            id_prefix: self.id_prefix,
            split: self.split,
            subset_first: self.subset_first,
            subset_iterator: self.subset_iterator,
            complement_iterator: self.complement_iterator,
            emitter: self.emitter,
            _unit: PhantomData,
        }
    }
}

/// The reduction engine. Construct via [`DdminBuilder`].
pub struct Ddmin<U, Ora, Cac = HashMapCache<U>> {
    oracle: Ora,
    cache: Cac,
    id_prefix: Vec<String>,
    split: SplitFn,
    subset_first: bool,
    subset_iterator: IndexIterFn,
    complement_iterator: IndexIterFn,
    emitter: Box<dyn Emitter>,
    _unit: PhantomData<U>,
}

impl<U, Ora, Cac> Ddmin<U, Ora, Cac>
where
    U: Clone + Eq + Hash,
    Ora: Oracle<U>,
    Cac: OutcomeCache<U>,
{
    /// `ddmin(config)` with the classic split ratio `n = 2`.
    pub fn ddmin(&mut self, config: Vec<U>) -> Result<Vec<U>, DdminError> {
        self.ddmin_with_ratio(config, 2)
    }

    /// `ddmin(config, n)`: reduce `config` to a 1-minimal interesting
    /// subsequence using initial split ratio `n`.
    ///
    /// Precondition: `oracle(config) == FAIL`. Re-asserted at the top of
    /// every outer iteration; a violation is a fatal
    /// `OracleContractViolation`, never silently recovered from.
    pub fn ddmin_with_ratio(&mut self, mut config: Vec<U>, n: usize) -> Result<Vec<U>, DdminError> {
        let mut slices: Vec<Slice> = Vec::new();
        let mut complement_offset: usize = 0;

        for run in 0usize.. {
            self.assert_interesting(run, &config)?;

            if config.len() < 2 {
                self.emit_info("done: configuration reduced to a single unit");
                return Ok(config);
            }

            if slices.len() < 2 {
                let k = n.min(config.len());
                slices = self.split_checked(config.len(), k)?;
            }

            self.emit_info(&format!(
                "run #{run}: trying {}",
                slices
                    .iter()
                    .map(|s| s.len().to_string())
                    .collect::<Vec<_>>()
                    .join(" + ")
            ));

            let (next_slices, new_offset) =
                self.reduce_step(run, &config, &slices, complement_offset)?;

            match next_slices {
                Some(next_slices) => {
                    let (new_config, rebuilt) = rebuild(&config, &next_slices);
                    config = new_config;
                    slices = rebuilt;
                    complement_offset = new_offset;
                    self.emit_info(&format!("reduced to {} units", config.len()));
                }
                None if slices.len() < config.len() => {
                    let prev_len = slices.len();
                    let next_k = (prev_len * n).min(config.len());
                    let next_slices = self.split_checked(config.len(), next_k)?;
                    // Project the offset into the finer coordinate system,
                    // rounding down (see DESIGN.md).
                    complement_offset = (complement_offset * next_slices.len()) / prev_len;
                    slices = next_slices;
                    self.emit_info(&format!("increase granularity to {}", slices.len()));
                }
                None => {
                    self.emit_info("done: finest granularity exhausted");
                    return Ok(config);
                }
            }
        }

        unreachable!("0usize.. never terminates before the loop returns")
    }

    fn assert_interesting(&mut self, run: usize, config: &[U]) -> Result<(), DdminError> {
        let id = self.make_id(run, "assert");
        let outcome = self.oracle.test(config, id.clone())?;
        self.emit_probe(LogLevel::Debug, "assert probe", &id, outcome);
        if outcome != Outcome::Fail {
            return Err(DdminError::OracleContractViolation {
                detail: format!(
                    "expected FAIL at top of run {run} ([{}]), got {outcome:?}",
                    id.pretty()
                ),
            });
        }
        Ok(())
    }

    fn reduce_step(
        &mut self,
        run: usize,
        config: &[U],
        slices: &[Slice],
        complement_offset: usize,
    ) -> Result<(Option<Vec<Slice>>, usize), DdminError> {
        let (first, second): (ReduceFn<U, Ora, Cac>, ReduceFn<U, Ora, Cac>) = if self.subset_first {
            (Self::reduce_to_subset, Self::reduce_to_complement)
        } else {
            (Self::reduce_to_complement, Self::reduce_to_subset)
        };

        let (next, offset) = first(self, run, config, slices, complement_offset)?;
        if next.is_some() {
            return Ok((next, offset));
        }
        second(self, run, config, slices, offset)
    }

    fn reduce_to_subset(
        &mut self,
        run: usize,
        config: &[U],
        slices: &[Slice],
        offset: usize,
    ) -> Result<(Option<Vec<Slice>>, usize), DdminError> {
        let n = slices.len();
        for candidate in (self.subset_iterator)(n) {
            let Some(i) = candidate else { continue };
            if i >= n {
                return Err(DdminError::IteratorContractViolation { n, index: i });
            }

            let slice = slices[i];
            let subset = &config[slice.start..slice.stop];
            let id = self.make_id(run, &format!("s{i}"));
            if self.test_or_cache(subset, id)? == Outcome::Fail {
                // Successful subset reduction resets the complement offset:
                // the coordinate system is about to change entirely.
                return Ok((Some(vec![slice]), 0));
            }
        }
        Ok((None, offset))
    }

    fn reduce_to_complement(
        &mut self,
        run: usize,
        config: &[U],
        slices: &[Slice],
        offset: usize,
    ) -> Result<(Option<Vec<Slice>>, usize), DdminError> {
        let n = slices.len();
        for candidate in (self.complement_iterator)(n) {
            let Some(j) = candidate else { continue };
            if j >= n {
                return Err(DdminError::IteratorContractViolation { n, index: j });
            }
            let i = (j + offset) % n;

            let mut complement = Vec::with_capacity(config.len());
            for (k, s) in slices.iter().enumerate() {
                if k != i {
                    complement.extend_from_slice(&config[s.start..s.stop]);
                }
            }

            let id = self.make_id(run, &format!("c{i}"));
            if self.test_or_cache(&complement, id)? == Outcome::Fail {
                let mut next = Vec::with_capacity(n - 1);
                next.extend_from_slice(&slices[..i]);
                next.extend_from_slice(&slices[i + 1..]);
                // The next run resumes complement search just past the
                // slice removed here — the earliest slice not yet proven
                // irreducible.
                return Ok((Some(next), i));
            }
        }
        Ok((None, offset))
    }

    fn test_or_cache(&mut self, config: &[U], id: ConfigId) -> Result<Outcome, DdminError> {
        debug_assert!(!id.is_assert(), "assert probes must bypass the cache");

        if let Some(cached) = self.cache.lookup(config) {
            self.emit_probe(LogLevel::Debug, "cache hit", &id, cached);
            return Ok(cached);
        }

        let outcome = self.oracle.test(config, id.clone())?;
        self.emit_probe(LogLevel::Debug, "oracle test", &id, outcome);
        self.cache.add(config, outcome);
        Ok(outcome)
    }

    fn split_checked(&self, n: usize, k: usize) -> Result<Vec<Slice>, DdminError> {
        let slices = (self.split)(n, k)?;
        validate_partition(n, k, &slices)?;
        Ok(slices)
    }

    fn make_id(&self, run: usize, token: &str) -> ConfigId {
        ConfigId::new(&self.id_prefix, [format!("r{run}"), token.to_string()])
    }

    fn emit_probe(&self, level: LogLevel, message: &str, id: &ConfigId, outcome: Outcome) {
        self.emitter.emit(LogEntry {
            level,
            message: message.to_string(),
            config_id: Some(id.pretty()),
            fields: serde_json::json!({ "outcome": outcome }),
        });
    }

    fn emit_info(&self, message: &str) {
        self.emitter.emit(LogEntry {
            level: LogLevel::Info,
            message: message.to_string(),
            config_id: None,
            fields: serde_json::Value::Null,
        });
    }
}

/// Concatenate the kept slices into the new working configuration, then
/// rebuild a contiguous partition whose slice sizes mirror `next_slices`,
/// translated to origin 0.
fn rebuild<U: Clone>(config: &[U], next_slices: &[Slice]) -> (Vec<U>, Vec<Slice>) {
    let mut new_config = Vec::new();
    for s in next_slices {
        new_config.extend_from_slice(&config[s.start..s.stop]);
    }

    let mut rebuilt = Vec::with_capacity(next_slices.len());
    let mut start = 0;
    for s in next_slices {
        let len = s.len();
        rebuilt.push(Slice::new(start, start + len));
        start += len;
    }

    (new_config, rebuilt)
}
