//! Local edits keep digests close; unrelated inputs do not.

use crate::common::{random_bytes, Xorshift};
use ctph::similarity::{distance, fuzzy_hash};

fn with_insertion(base: &[u8], offset: usize, len: usize, seed: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(base.len() + len);
    out.extend_from_slice(&base[..offset]);
    out.extend_from_slice(&Xorshift::new(seed).bytes(len));
    out.extend_from_slice(&base[offset..]);
    out
}

#[test]
fn small_insertion_keeps_normal_digest_close() {
    let x = random_bytes(10_000, 0xC0FFEE);
    let y = with_insertion(&x, 4000, 16, 0xBEEF);
    let unrelated = random_bytes(10_000, 0x5EED);

    let sx = fuzzy_hash(&x);
    let sy = fuzzy_hash(&y);
    let su = fuzzy_hash(&unrelated);
    assert_eq!(sx.block_size(), sy.block_size(), "{sx} vs {sy}");

    let near = distance(sx.normal(), sy.normal());
    let far = distance(sx.normal(), su.normal());
    assert!(near < 10, "near distance {near}: {sx} vs {sy}");
    assert!(far > 30, "far distance {far}: {sx} vs {su}");
    assert!(near < far);
}

#[test]
fn four_byte_insertion_in_middle() {
    let x = random_bytes(10_000, 42);
    let y = with_insertion(&x, 5000, 4, 43);
    let sx = fuzzy_hash(&x);
    let sy = fuzzy_hash(&y);
    assert_eq!(sx.block_size(), sy.block_size());
    assert!(distance(sx.normal(), sy.normal()) < 10, "{sx} vs {sy}");
}

#[test]
fn identical_prefix_shares_digest_prefix() {
    // Symbols before the edit are computed from identical bytes.
    let x = random_bytes(10_000, 7);
    let mut y = x.clone();
    let last = y.len() - 1;
    y[last] ^= 0xff;
    let sx = fuzzy_hash(&x);
    let sy = fuzzy_hash(&y);
    assert_eq!(sx.block_size(), sy.block_size());
    let n = sx.normal().len().min(sy.normal().len());
    assert!(n > 1);
    assert_eq!(sx.normal()[..n - 1], sy.normal()[..n - 1]);
}
