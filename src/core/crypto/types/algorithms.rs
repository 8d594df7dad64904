/*!
Algorithm type definitions.

This module defines the closed sets of cipher and digest algorithms
that the registry can select.
*/

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::constants;
use crate::core::crypto::provider::{self, Cipher, Digest};
use crate::core::error::{AlgorithmKind, Error};

/// Supported symmetric cipher algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "lowercase"))]
pub enum CipherAlgorithm {
    /// Blowfish, CFB mode
    BfCfb,
    /// Blowfish, CBC mode
    BfCbc,
    /// AES-256, CFB mode
    Aes256Cfb,
    /// AES-256, CBC mode
    Aes256Cbc,
    /// AES-256, GCM mode
    Aes256Gcm,
    /// AES-256, CTR mode
    Aes256Ctr,
    /// AES-128, CFB mode
    Aes128Cfb,
    /// AES-128, CBC mode
    Aes128Cbc,
    /// AES-128, GCM mode
    Aes128Gcm,
    /// AES-128, CTR mode
    Aes128Ctr,
    /// CAST5, CFB mode
    Cast5Cfb,
    /// CAST5, CBC mode
    Cast5Cbc,
}

impl Default for CipherAlgorithm {
    fn default() -> Self {
        constants::ciphers::FALLBACK
    }
}

impl CipherAlgorithm {
    /// Every resolvable cipher algorithm
    pub const ALL: [CipherAlgorithm; 12] = [
        CipherAlgorithm::BfCfb,
        CipherAlgorithm::BfCbc,
        CipherAlgorithm::Aes256Cfb,
        CipherAlgorithm::Aes256Cbc,
        CipherAlgorithm::Aes256Gcm,
        CipherAlgorithm::Aes256Ctr,
        CipherAlgorithm::Aes128Cfb,
        CipherAlgorithm::Aes128Cbc,
        CipherAlgorithm::Aes128Gcm,
        CipherAlgorithm::Aes128Ctr,
        CipherAlgorithm::Cast5Cfb,
        CipherAlgorithm::Cast5Cbc,
    ];

    /// Get the catalog name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            CipherAlgorithm::BfCfb => "bfcfb",
            CipherAlgorithm::BfCbc => "bfcbc",
            CipherAlgorithm::Aes256Cfb => "aes256cfb",
            CipherAlgorithm::Aes256Cbc => "aes256cbc",
            CipherAlgorithm::Aes256Gcm => "aes256gcm",
            CipherAlgorithm::Aes256Ctr => "aes256ctr",
            CipherAlgorithm::Aes128Cfb => "aes128cfb",
            CipherAlgorithm::Aes128Cbc => "aes128cbc",
            CipherAlgorithm::Aes128Gcm => "aes128gcm",
            CipherAlgorithm::Aes128Ctr => "aes128ctr",
            CipherAlgorithm::Cast5Cfb => "cast5cfb",
            CipherAlgorithm::Cast5Cbc => "cast5cbc",
        }
    }

    /// Get the provider handle for the algorithm
    pub fn handle(&self) -> &'static Cipher {
        match self {
            CipherAlgorithm::BfCfb => &provider::BF_CFB,
            CipherAlgorithm::BfCbc => &provider::BF_CBC,
            CipherAlgorithm::Aes256Cfb => &provider::AES_256_CFB,
            CipherAlgorithm::Aes256Cbc => &provider::AES_256_CBC,
            CipherAlgorithm::Aes256Gcm => &provider::AES_256_GCM,
            CipherAlgorithm::Aes256Ctr => &provider::AES_256_CTR,
            CipherAlgorithm::Aes128Cfb => &provider::AES_128_CFB,
            CipherAlgorithm::Aes128Cbc => &provider::AES_128_CBC,
            CipherAlgorithm::Aes128Gcm => &provider::AES_128_GCM,
            CipherAlgorithm::Aes128Ctr => &provider::AES_128_CTR,
            CipherAlgorithm::Cast5Cfb => &provider::CAST5_CFB,
            CipherAlgorithm::Cast5Cbc => &provider::CAST5_CBC,
        }
    }
}

impl fmt::Display for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherAlgorithm {
    type Err = Error;

    /// Strict parse: unlike the resolver, unknown names are an error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherAlgorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| Error::unknown_algorithm(AlgorithmKind::Cipher, s))
    }
}

/// Supported message digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "lowercase"))]
pub enum DigestAlgorithm {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// RIPEMD-160
    Ripemd160,
}

impl Default for DigestAlgorithm {
    fn default() -> Self {
        constants::digests::FALLBACK
    }
}

impl DigestAlgorithm {
    /// Every resolvable digest algorithm
    pub const ALL: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
        DigestAlgorithm::Ripemd160,
    ];

    /// Get the catalog name of the algorithm
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha384 => "sha384",
            DigestAlgorithm::Sha512 => "sha512",
            DigestAlgorithm::Ripemd160 => "ripemd160",
        }
    }

    /// Get the provider handle for the algorithm
    pub fn handle(&self) -> &'static Digest {
        match self {
            DigestAlgorithm::Sha256 => &provider::SHA256,
            DigestAlgorithm::Sha384 => &provider::SHA384,
            DigestAlgorithm::Sha512 => &provider::SHA512,
            DigestAlgorithm::Ripemd160 => &provider::RIPEMD160,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DigestAlgorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| Error::unknown_algorithm(AlgorithmKind::Digest, s))
    }
}
