/*!
Registry manager for cipher and digest algorithms.

The registry maps catalog names to provider handles. Resolution never fails:
names that are not in a catalog resolve to that catalog's default entry.
Validity is a separate question, answered by the `is_valid_*` predicates,
and the two do not agree on the `"null"` cipher.
*/

use std::collections::BTreeMap;
use once_cell::sync::Lazy;

use crate::core::constants::ciphers;
use crate::core::crypto::provider::{Cipher, Digest};
use crate::core::crypto::types::algorithms::{CipherAlgorithm, DigestAlgorithm};

/// A catalog entry: a provider handle and its listing marker
#[derive(Debug)]
pub struct CatalogEntry<H: 'static> {
    /// The primitive handle
    pub handle: &'static H,
    /// Whether this entry is the catalog default
    pub is_default: bool,
}

/// Registry of supported cipher and digest algorithms
pub struct AlgorithmRegistry {
    /// Available cipher algorithms, ordered by name
    ciphers: BTreeMap<&'static str, CatalogEntry<Cipher>>,

    /// Available digest algorithms, ordered by name
    digests: BTreeMap<&'static str, CatalogEntry<Digest>>,

    /// Cipher returned for unknown names
    default_cipher: &'static Cipher,

    /// Digest returned for unknown names
    default_digest: &'static Digest,
}

impl AlgorithmRegistry {
    /// Create a new registry with every supported algorithm
    fn new() -> Self {
        let default_cipher = CipherAlgorithm::default();
        let default_digest = DigestAlgorithm::default();

        let mut registry = Self {
            ciphers: BTreeMap::new(),
            digests: BTreeMap::new(),
            default_cipher: default_cipher.handle(),
            default_digest: default_digest.handle(),
        };

        for algorithm in CipherAlgorithm::ALL {
            registry.register_cipher(algorithm, algorithm == default_cipher);
        }

        for algorithm in DigestAlgorithm::ALL {
            registry.register_digest(algorithm, algorithm == default_digest);
        }

        registry
    }

    fn register_cipher(&mut self, algorithm: CipherAlgorithm, is_default: bool) {
        let entry = CatalogEntry { handle: algorithm.handle(), is_default };
        self.ciphers.insert(algorithm.name(), entry);
    }

    fn register_digest(&mut self, algorithm: DigestAlgorithm, is_default: bool) {
        let entry = CatalogEntry { handle: algorithm.handle(), is_default };
        self.digests.insert(algorithm.name(), entry);
    }

    /// Resolve a cipher name, falling back to the default cipher
    pub fn resolve_cipher(&self, name: &str) -> &'static Cipher {
        self.lookup_cipher(name).unwrap_or_else(|| {
            log::debug!(
                "Unknown cipher {:?}, falling back to {}",
                name, self.default_cipher
            );
            self.default_cipher
        })
    }

    /// Resolve a digest name, falling back to the default digest
    pub fn resolve_digest(&self, name: &str) -> &'static Digest {
        self.lookup_digest(name).unwrap_or_else(|| {
            log::debug!(
                "Unknown digest {:?}, falling back to {}",
                name, self.default_digest
            );
            self.default_digest
        })
    }

    /// Look up a cipher without fallback
    pub fn lookup_cipher(&self, name: &str) -> Option<&'static Cipher> {
        self.ciphers.get(name).map(|entry| entry.handle)
    }

    /// Look up a digest without fallback
    pub fn lookup_digest(&self, name: &str) -> Option<&'static Digest> {
        self.digests.get(name).map(|entry| entry.handle)
    }

    /// Whether `name` is an accepted cipher selection, including "null"
    pub fn is_valid_cipher_name(&self, name: &str) -> bool {
        name == ciphers::NULL || self.ciphers.contains_key(name)
    }

    /// Whether `name` is an accepted digest selection
    pub fn is_valid_digest_name(&self, name: &str) -> bool {
        self.digests.contains_key(name)
    }

    /// List cipher names with their default marker, in name order
    ///
    /// The "null" selection is listed since callers may choose it,
    /// even though it has no handle.
    pub fn list_cipher_names(&self) -> Vec<(&'static str, bool)> {
        let mut names: Vec<(&'static str, bool)> = self
            .ciphers
            .iter()
            .map(|(name, entry)| (*name, entry.is_default))
            .collect();

        names.push((ciphers::NULL, false));
        names.sort_unstable_by_key(|(name, _)| *name);
        names
    }

    /// List digest names with their default marker, in name order
    pub fn list_digest_names(&self) -> Vec<(&'static str, bool)> {
        self.digests
            .iter()
            .map(|(name, entry)| (*name, entry.is_default))
            .collect()
    }

    /// The cipher handed out for unknown names
    pub fn default_cipher(&self) -> &'static Cipher {
        self.default_cipher
    }

    /// The digest handed out for unknown names
    pub fn default_digest(&self) -> &'static Digest {
        self.default_digest
    }
}

// Global registry instance
static REGISTRY: Lazy<AlgorithmRegistry> = Lazy::new(AlgorithmRegistry::new);

// Public API

/// Get the process-wide registry
pub fn get_registry() -> &'static AlgorithmRegistry {
    &REGISTRY
}

/// Resolve a cipher name to a handle; unknown names yield `aes256cbc`
pub fn resolve_cipher(name: &str) -> &'static Cipher {
    get_registry().resolve_cipher(name)
}

/// Resolve a digest name to a handle; unknown names yield `sha512`
pub fn resolve_digest(name: &str) -> &'static Digest {
    get_registry().resolve_digest(name)
}

/// Get a cipher by name, or `None` if it is not in the catalog
pub fn lookup_cipher(name: &str) -> Option<&'static Cipher> {
    get_registry().lookup_cipher(name)
}

/// Get a digest by name, or `None` if it is not in the catalog
pub fn lookup_digest(name: &str) -> Option<&'static Digest> {
    get_registry().lookup_digest(name)
}

/// Check a cipher name against the supported set
pub fn is_valid_cipher_name(name: &str) -> bool {
    get_registry().is_valid_cipher_name(name)
}

/// Check a digest name against the supported set
pub fn is_valid_digest_name(name: &str) -> bool {
    get_registry().is_valid_digest_name(name)
}

/// List all cipher names as (name, is_default) pairs
pub fn list_cipher_names() -> Vec<(&'static str, bool)> {
    get_registry().list_cipher_names()
}

/// List all digest names as (name, is_default) pairs
pub fn list_digest_names() -> Vec<(&'static str, bool)> {
    get_registry().list_digest_names()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::provider;

    #[test]
    fn test_registry_defaults() {
        let registry = get_registry();

        assert!(std::ptr::eq(registry.default_cipher(), &provider::AES_256_CBC));
        assert!(std::ptr::eq(registry.default_digest(), &provider::SHA512));
    }

    #[test]
    fn test_fallback_constants_drive_defaults() {
        use crate::core::constants::digests;

        assert_eq!(resolve_cipher("bogus").algorithm(), ciphers::FALLBACK);
        assert_eq!(resolve_digest("bogus").algorithm(), digests::FALLBACK);
        assert!(std::ptr::eq(get_registry().default_cipher(), ciphers::FALLBACK.handle()));
        assert!(std::ptr::eq(get_registry().default_digest(), digests::FALLBACK.handle()));
    }

    #[test]
    fn test_resolve_known_names() {
        for algorithm in CipherAlgorithm::ALL {
            assert_eq!(resolve_cipher(algorithm.name()).algorithm(), algorithm);
        }
        for algorithm in DigestAlgorithm::ALL {
            assert_eq!(resolve_digest(algorithm.name()).algorithm(), algorithm);
        }
    }

    #[test]
    fn test_resolve_fallback() {
        let default_cipher = resolve_cipher("aes256cbc");
        for name in ["", "bogus", "null", "AES256CBC", " aes128gcm"] {
            assert!(std::ptr::eq(resolve_cipher(name), default_cipher), "{:?}", name);
        }

        let default_digest = resolve_digest("sha512");
        for name in ["", "md5", "SHA256", "null"] {
            assert!(std::ptr::eq(resolve_digest(name), default_digest), "{:?}", name);
        }
    }

    #[test]
    fn test_lookup_has_no_fallback() {
        assert!(lookup_cipher("bogus").is_none());
        assert!(lookup_cipher("null").is_none());
        assert!(lookup_digest("").is_none());
        assert_eq!(lookup_digest("ripemd160").map(|d| d.name()), Some("ripemd160"));
    }

    #[test]
    fn test_validity_predicates() {
        assert!(is_valid_cipher_name("null"));
        assert!(is_valid_cipher_name("cast5cbc"));
        assert!(!is_valid_cipher_name(""));
        assert!(!is_valid_cipher_name("aes192cbc"));

        assert!(is_valid_digest_name("sha384"));
        assert!(!is_valid_digest_name("md5"));
        assert!(!is_valid_digest_name("null"));
    }

    #[test]
    fn test_list_algorithms() {
        let ciphers = list_cipher_names();
        let digests = list_digest_names();

        assert_eq!(ciphers.len(), 13);
        assert_eq!(digests.len(), 4);

        // Sorted by name
        assert!(ciphers.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(digests.windows(2).all(|w| w[0].0 < w[1].0));

        let cipher_defaults: Vec<_> = ciphers.iter().filter(|(_, d)| *d).collect();
        assert_eq!(cipher_defaults, vec![&("aes256cbc", true)]);

        let digest_defaults: Vec<_> = digests.iter().filter(|(_, d)| *d).collect();
        assert_eq!(digest_defaults, vec![&("sha512", true)]);

        assert!(ciphers.contains(&("null", false)));
    }
}
