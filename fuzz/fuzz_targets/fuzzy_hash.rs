#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let sig = ctph::similarity::fuzzy_hash(data);
    assert!(sig.block_size() >= ctph::similarity::MIN_BLOCK_SIZE);
    assert!(sig.normal().len() <= 64 && sig.shorter().len() <= 32);
});
