#![no_main]
use libfuzzer_sys::fuzz_target;

use ddmin_core::{ConfigId, DdminBuilder, HashMapCache, Outcome};

const ALPHABET_SIZE: u8 = 6;
const MAX_CONFIG_LEN: usize = 48;

fn to_unit(b: u8) -> char {
    (b'a' + b % ALPHABET_SIZE) as char
}

/// `true` iff the multiset of `config` is a superset of `target`.
fn is_interesting(config: &[char], target: &[char]) -> bool {
    let mut remaining = target.to_vec();
    for &c in config {
        if let Some(pos) = remaining.iter().position(|&t| t == c) {
            remaining.remove(pos);
        }
    }
    remaining.is_empty()
}

fn is_subsequence(needle: &[char], haystack: &[char]) -> bool {
    let mut it = haystack.iter();
    needle.iter().all(|u| it.any(|h| h == u))
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let target_len = 1 + (data[0] as usize % 3);
    if data.len() <= target_len + 1 {
        return;
    }
    let target: Vec<char> = data[1..1 + target_len].iter().map(|&b| to_unit(b)).collect();
    let config: Vec<char> = data[1 + target_len..]
        .iter()
        .take(MAX_CONFIG_LEN)
        .map(|&b| to_unit(b))
        .collect();

    if !is_interesting(&config, &target) {
        return;
    }

    let target_for_oracle = target.clone();
    let oracle = move |c: &[char], _id: ConfigId| {
        Ok(if is_interesting(c, &target_for_oracle) {
            Outcome::Fail
        } else {
            Outcome::Pass
        })
    };

    let mut engine: ddmin_core::Ddmin<char, _, HashMapCache<char>> = DdminBuilder::new(oracle).build();
    let Ok(result) = engine.ddmin(config.clone()) else {
        return;
    };

    assert!(
        is_subsequence(&result, &config),
        "result {result:?} is not a subsequence of input {config:?}"
    );
    assert!(
        is_interesting(&result, &target),
        "result {result:?} lost the interesting property for target {target:?}"
    );

    for i in 0..result.len() {
        let mut without_i = result.clone();
        without_i.remove(i);
        assert!(
            !is_interesting(&without_i, &target),
            "result {result:?} is not 1-minimal: removing index {i} keeps it interesting"
        );
    }
});
