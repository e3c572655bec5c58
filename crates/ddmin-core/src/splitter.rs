//! Splitters: partition `[0, n)` into `k` contiguous slices.

use crate::error::DdminError;
use crate::slice::Slice;

/// The classic balanced splitter: distributes `n` units across `k` slices so
/// sizes differ by at most 1, front-loading the extra unit onto the first
/// `n % k` slices. This is the default split policy.
pub fn balanced(n: usize, k: usize) -> Result<Vec<Slice>, DdminError> {
    if k == 0 || k > n {
        return Err(DdminError::SplitterContractViolation {
            expected_n: n,
            got_slices: k,
            detail: format!("requested k={k} parts is not in 1..={n}"),
        });
    }

    let base = n / k;
    let extra = n % k;
    let mut slices = Vec::with_capacity(k);
    let mut start = 0;
    for i in 0..k {
        let len = base + usize::from(i < extra);
        slices.push(Slice::new(start, start + len));
        start += len;
    }
    Ok(slices)
}

/// Enforces: slices must be exactly `k` contiguous, non-overlapping
/// ranges covering `[0, n)`. Runs after every call to a (possibly
/// caller-supplied) splitter, regardless of which one produced the slices.
pub(crate) fn validate_partition(n: usize, k: usize, slices: &[Slice]) -> Result<(), DdminError> {
    if slices.len() != k {
        return Err(DdminError::SplitterContractViolation {
            expected_n: n,
            got_slices: slices.len(),
            detail: format!("requested k={k} parts but got {}", slices.len()),
        });
    }

    let mut cursor = 0usize;
    for (idx, s) in slices.iter().enumerate() {
        if s.start != cursor || s.stop < s.start {
            return Err(DdminError::SplitterContractViolation {
                expected_n: n,
                got_slices: slices.len(),
                detail: format!(
                    "slice {idx} = [{}, {}) does not continue the partition at {cursor}",
                    s.start, s.stop
                ),
            });
        }
        cursor = s.stop;
    }
    if cursor != n {
        return Err(DdminError::SplitterContractViolation {
            expected_n: n,
            got_slices: slices.len(),
            detail: format!("slices cover [0, {cursor}) but configuration length is {n}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_sizes_differ_by_at_most_one() {
        let slices = balanced(8, 3).unwrap();
        let lens: Vec<usize> = slices.iter().map(Slice::len).collect();
        assert_eq!(lens, vec![3, 3, 2]);
        assert!(lens.iter().max().unwrap() - lens.iter().min().unwrap() <= 1);
    }

    #[test]
    fn balanced_partitions_exactly() {
        let slices = balanced(7, 2).unwrap();
        validate_partition(7, 2, &slices).unwrap();
    }

    #[test]
    fn balanced_rejects_k_greater_than_n() {
        assert!(balanced(2, 5).is_err());
    }

    #[test]
    fn balanced_rejects_zero_k() {
        assert!(balanced(4, 0).is_err());
    }

    #[test]
    fn validate_partition_catches_gap() {
        let slices = vec![Slice::new(0, 2), Slice::new(3, 5)];
        assert!(validate_partition(5, 2, &slices).is_err());
    }

    #[test]
    fn validate_partition_catches_overlap() {
        let slices = vec![Slice::new(0, 3), Slice::new(2, 5)];
        assert!(validate_partition(5, 2, &slices).is_err());
    }

    #[test]
    fn validate_partition_catches_short_cover() {
        let slices = vec![Slice::new(0, 2), Slice::new(2, 4)];
        assert!(validate_partition(5, 2, &slices).is_err());
    }
}
