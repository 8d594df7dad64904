// Tests for algorithm name resolution and validation
use algo_registry::{
    CipherAlgorithm,
    CipherMode,
    DigestAlgorithm,
    Error,
    ReportConfig,
    Reporter,
    Result,
    get_registry,
    is_valid_cipher_name,
    is_valid_digest_name,
    list_cipher_names,
    list_digest_names,
    lookup_cipher,
    resolve_cipher,
    resolve_digest,
    diagnostics::reasons,
};

const VALID_CIPHERS: [&str; 13] = [
    "bfcfb", "bfcbc",
    "aes256cfb", "aes256cbc", "aes256gcm", "aes256ctr",
    "aes128cfb", "aes128cbc", "aes128gcm", "aes128ctr",
    "cast5cfb", "cast5cbc",
    "null",
];

const VALID_DIGESTS: [&str; 4] = ["sha256", "sha384", "sha512", "ripemd160"];

#[test]
fn test_unknown_cipher_falls_back_to_default() {
    let default = resolve_cipher("aes256cbc");
    assert!(std::ptr::eq(resolve_cipher("bogus"), default));
    assert!(std::ptr::eq(resolve_cipher(""), default));
    assert_eq!(default.algorithm(), CipherAlgorithm::Aes256Cbc);
}

#[test]
fn test_known_cipher_is_distinct_from_default() {
    let gcm = resolve_cipher("aes128gcm");
    assert!(!std::ptr::eq(gcm, resolve_cipher("aes256cbc")));
    assert_eq!(gcm.algorithm(), CipherAlgorithm::Aes128Gcm);
    assert_eq!(gcm.mode(), CipherMode::Gcm);
    assert_eq!(gcm.key_size(), 16);
}

#[test]
fn test_unknown_digest_falls_back_to_default() {
    let default = resolve_digest("sha512");
    assert!(std::ptr::eq(resolve_digest(""), default));
    assert!(std::ptr::eq(resolve_digest("md5"), default));
    assert_eq!(default.algorithm(), DigestAlgorithm::Sha512);
}

#[test]
fn test_null_cipher_is_valid_but_resolves_to_handle() {
    assert!(is_valid_cipher_name("null"));
    assert!(lookup_cipher("null").is_none());

    let handle = resolve_cipher("null");
    assert_eq!(handle.name(), "aes256cbc");
    assert!(handle.key_size() > 0);
}

#[test]
fn test_every_valid_cipher_name() {
    for name in VALID_CIPHERS {
        assert!(is_valid_cipher_name(name), "{} should be valid", name);
        if name != "null" {
            assert_eq!(resolve_cipher(name).name(), name);
        }
    }
    for name in ["aes", "aes256", "Aes256Cbc", "aes256cbc ", "des", "chacha20poly1305"] {
        assert!(!is_valid_cipher_name(name), "{} should be invalid", name);
    }
}

#[test]
fn test_every_valid_digest_name() {
    for name in VALID_DIGESTS {
        assert!(is_valid_digest_name(name), "{} should be valid", name);
        assert_eq!(resolve_digest(name).name(), name);
    }
    assert!(!is_valid_digest_name("md5"));
    assert!(!is_valid_digest_name("sha1"));
    assert!(!is_valid_digest_name(""));
}

#[test]
fn test_listings_are_stable_and_complete() {
    let first = list_cipher_names();
    let second = list_cipher_names();
    assert_eq!(first, second);

    let mut names: Vec<&str> = first.iter().map(|(name, _)| *name).collect();
    let mut expected = VALID_CIPHERS.to_vec();
    names.sort_unstable();
    expected.sort_unstable();
    assert_eq!(names, expected);

    let digests: Vec<&str> = list_digest_names().iter().map(|(name, _)| *name).collect();
    assert_eq!(digests, vec!["ripemd160", "sha256", "sha384", "sha512"]);
}

#[test]
fn test_exactly_one_default_per_listing() {
    assert_eq!(list_cipher_names().iter().filter(|(_, d)| *d).count(), 1);
    assert_eq!(list_digest_names().iter().filter(|(_, d)| *d).count(), 1);
}

#[test]
fn test_registry_is_shared() {
    assert!(std::ptr::eq(get_registry(), get_registry()));
}

#[test]
fn test_resolution_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| resolve_cipher("cast5cfb") as *const _ as usize))
        .collect();

    let local = resolve_cipher("cast5cfb") as *const _ as usize;
    for handle in handles {
        assert_eq!(handle.join().unwrap(), local);
    }
}

#[test]
fn test_strict_parse_matches_validity() {
    for algorithm in CipherAlgorithm::ALL {
        assert!(is_valid_cipher_name(algorithm.name()));
    }
    for algorithm in DigestAlgorithm::ALL {
        assert!(is_valid_digest_name(algorithm.name()));
    }
    assert!("bogus".parse::<CipherAlgorithm>().is_err());
}

#[test]
fn test_reporter_listing() -> Result<()> {
    let reporter = Reporter::new(ReportConfig::with_prefix("x: "));
    let mut out = Vec::new();
    reporter.write_cipher_names(&mut out)?;

    let text = String::from_utf8(out).expect("listing is utf-8");
    assert!(text.contains("x: aes256cbc (default)\n"));
    assert!(text.contains("x: null\n"));
    assert!(!text.contains("aes128cbc (default)"));
    Ok(())
}

#[test]
fn test_resolved_handles_key_provider_ciphers() -> Result<()> {
    for name in VALID_CIPHERS {
        let handle = resolve_cipher(name);
        let key = vec![0u8; handle.key_size()];
        let iv = vec![0u8; handle.iv_size()];

        assert_eq!(handle.new_encryptor(&key, &iv)?.algorithm(), handle.algorithm());
        assert_eq!(handle.new_decryptor(&key, &iv)?.algorithm(), handle.algorithm());
    }
    Ok(())
}

#[test]
fn test_short_key_is_rejected() {
    let handle = resolve_cipher("bfcbc");
    let iv = vec![0u8; handle.iv_size()];

    match handle.new_encryptor(&[0u8; 8], &iv) {
        Err(Error::Provider(code)) => assert_eq!(code.reason(), reasons::INVALID_KEY_LENGTH),
        other => panic!("Expected Provider error, got {:?}", other),
    }
    algo_registry::diagnostics::clear_errors();
}
