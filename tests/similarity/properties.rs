//! Output-shape properties over many inputs.

use crate::common::random_bytes;
use ctph::similarity::{build_digest, fuzzy_hash, BASE64_ALPHABET, MIN_BLOCK_SIZE};
use ctph::HashingConfig;

fn in_alphabet(s: &str) -> bool {
    s.bytes().all(|c| BASE64_ALPHABET.contains(&c))
}

#[test]
fn signatures_are_well_formed() {
    for (i, len) in [0usize, 1, 6, 7, 63, 64, 1000, 12_345, 100_000].into_iter().enumerate() {
        let data = random_bytes(len, i as u64 + 100);
        let sig = fuzzy_hash(&data);
        assert!(sig.block_size() >= MIN_BLOCK_SIZE);
        assert_eq!(sig.block_size() % MIN_BLOCK_SIZE, 0);
        assert!((sig.block_size() / MIN_BLOCK_SIZE).is_power_of_two());
        assert!(sig.normal().len() <= 64);
        assert!(sig.shorter().len() <= 32);
        assert!(in_alphabet(sig.normal()) && in_alphabet(sig.shorter()));

        let text = sig.to_string();
        let parts: Vec<&str> = text.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], sig.block_size().to_string());
    }
}

#[test]
fn hashing_is_deterministic() {
    let data = random_bytes(30_000, 9);
    assert_eq!(fuzzy_hash(&data), fuzzy_hash(&data));
    for bs in [3u32, 48, 768] {
        assert_eq!(
            build_digest(&data, bs, 64, false).unwrap(),
            build_digest(&data, bs, 64, false).unwrap()
        );
    }
}

#[test]
fn shorter_digest_is_normal_at_double_block_size() {
    let data = random_bytes(40_000, 21);
    let sig = fuzzy_hash(&data);
    let bs = sig.block_size();
    assert_eq!(sig.normal(), build_digest(&data, bs, 64, false).unwrap());
    assert_eq!(sig.shorter(), build_digest(&data, bs * 2, 32, false).unwrap());
}

#[test]
fn empty_input_regression() {
    assert_eq!(fuzzy_hash(b"").to_string(), "3::");
    let legacy = HashingConfig {
        legacy: true,
        ..Default::default()
    };
    assert_eq!(
        ctph::fuzzy_hash_with(b"", &legacy).unwrap().to_string(),
        "3:n:n"
    );
}

#[test]
fn legacy_only_differs_on_empty_trailing_block() {
    let legacy = HashingConfig {
        legacy: true,
        ..Default::default()
    };
    let data = random_bytes(20_000, 33);
    assert_eq!(
        fuzzy_hash(&data),
        ctph::fuzzy_hash_with(&data, &legacy).unwrap()
    );
}

#[test]
fn known_signatures() {
    assert_eq!(fuzzy_hash(b"hello world").to_string(), "3:iKFSMPn:rJPn");
    assert_eq!(
        fuzzy_hash(&b"The quick brown fox jumps over the lazy dog".repeat(40)).to_string(),
        "6:FHIGYIGYIGYIGYIGYIGYIGYIGYIGYIGYIGYIGYIGYIGYIGYIGYIGYIGYIGYIGYIc:Fl"
    );
    assert_eq!(
        fuzzy_hash(&random_bytes(1000, 106)).to_string(),
        "24:2BjcHg/OM5hVX3eavgVN34XvtLmzpFF6xAX7/HYKOMyTfCnxmA:2ZIcOWeJ4/tSzp36iLHYKOlqxp"
    );
}

#[test]
fn repeating_pattern_fills_to_cap() {
    let data: Vec<u8> = (0..=255u8).cycle().take(256 * 64).collect();
    let sig = fuzzy_hash(&data);
    assert_eq!(sig.block_size(), 192);
    assert_eq!(sig.normal().len(), 64);
    assert_eq!(sig.shorter(), "n");
}
