#![no_main]
use libfuzzer_sys::fuzz_target;

use ddmin_core::balanced;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let n = u16::from_le_bytes([data[0], data[1]]) as usize % 512;
    let k = u16::from_le_bytes([data[2], data[3]]) as usize % 512;

    let result = balanced(n, k);

    if k == 0 || k > n {
        assert!(result.is_err(), "balanced({n}, {k}) should reject an out-of-range k");
        return;
    }

    let slices = result.expect("balanced should succeed for 1 <= k <= n");
    assert_eq!(slices.len(), k, "balanced({n}, {k}) returned {} slices", slices.len());

    let mut cursor = 0usize;
    for slice in &slices {
        assert_eq!(slice.start, cursor, "slices must be contiguous with no gap or overlap");
        assert!(slice.stop >= slice.start);
        cursor = slice.stop;
    }
    assert_eq!(cursor, n, "slices must cover [0, {n})");

    let lens: Vec<usize> = slices.iter().map(|s| s.len()).collect();
    let max = *lens.iter().max().unwrap();
    let min = *lens.iter().min().unwrap();
    assert!(max - min <= 1, "balanced slice sizes must differ by at most one, got {lens:?}");
});
