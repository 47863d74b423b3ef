#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mid = data.len() / 2;
    let a = String::from_utf8_lossy(&data[..mid]);
    let b = String::from_utf8_lossy(&data[mid..]);
    let d = ctph::similarity::distance(&a, &b);
    assert_eq!(d, ctph::similarity::distance(&b, &a));
});
