//! Hashing through the file-backed byte source.

use crate::common::{create_temp_file, random_bytes};
use ctph::io::error::IoError;
use ctph::io::{ByteSource, IOLimits};
use ctph::{fuzzy_hash, fuzzy_hash_path, CtphConfig, CtphError};

#[test]
fn file_and_buffer_agree() {
    let data = random_bytes(50_000, 77);
    let file = create_temp_file(&data);
    let from_file = fuzzy_hash_path(file.path(), &CtphConfig::default()).unwrap();
    assert_eq!(from_file, fuzzy_hash(&data));
}

#[test]
fn empty_file_signature() {
    let file = create_temp_file(b"");
    let sig = fuzzy_hash_path(file.path(), &CtphConfig::default()).unwrap();
    assert_eq!(sig.to_string(), "3::");
}

#[test]
fn oversize_file_is_rejected() {
    let file = create_temp_file(&[1u8; 2048]);
    let mut cfg = CtphConfig::default();
    cfg.io = IOLimits { max_file_size: 1024 };
    let err = fuzzy_hash_path(file.path(), &cfg).unwrap_err();
    assert!(matches!(
        err,
        CtphError::Io(IoError::FileTooLarge { limit: 1024, found: 2048 })
    ));
}

#[test]
fn block_size_override_from_config_file() {
    let cfg_file = create_temp_file(br#"{"hashing": {"block_size": 96}}"#);
    let cfg = CtphConfig::from_json_file(cfg_file.path()).unwrap();
    assert_eq!(cfg.hashing.block_size, Some(96));

    let data = random_bytes(400_000, 5);
    let file = create_temp_file(&data);
    let sig = fuzzy_hash_path(file.path(), &cfg).unwrap();
    // 400k bytes at 96 give far more than 32 triggers; no halving.
    assert_eq!(sig.block_size(), 96);
}

#[test]
fn byte_source_rewinds() {
    let data = random_bytes(1000, 3);
    let file = create_temp_file(&data);
    let source = ByteSource::open(file.path(), &IOLimits::default()).unwrap();
    assert_eq!(source.len(), 1000);
    assert_eq!(fuzzy_hash(source.as_slice()), fuzzy_hash(source.as_slice()));
}
