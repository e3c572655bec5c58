//! Subset/complement index iterators.
//!
//! A policy is any `Fn(usize) -> Vec<Option<usize>>`: given the current
//! granularity `n`, it returns a permutation of `[0, n)`, optionally
//! interleaved with `None` (the skip sentinel). The engine ignores `None`
//! entries; they exist so that policies which "hide" already-tried
//! candidates can still produce a sequence of stable length `n`.

/// A boxed iterator policy, used for both the subset and complement
/// strategy slots.
pub type IndexIterFn = Box<dyn Fn(usize) -> Vec<Option<usize>>>;

/// `0, 1, …, n-1`. The default for both subset and complement iteration.
pub fn forward(n: usize) -> Vec<Option<usize>> {
    (0..n).map(Some).collect()
}

/// `n-1, n-2, …, 0`. Just as valid as forward order for either slot; shipped
/// as a real policy rather than a hypothetical one, since reverse-scan
/// strategies are commonly exercised in practice.
pub fn backward(n: usize) -> Vec<Option<usize>> {
    (0..n).rev().map(Some).collect()
}
