/*!
Primitive handles supplied by the crypto provider.

Each supported cipher and digest is described by a process-wide static.
The registry only ever hands out `&'static` references to these, so two
resolutions of the same algorithm compare equal by address as well as by
value.
*/

use std::fmt;

use digest::DynDigest;

use crate::core::crypto::types::algorithms::{CipherAlgorithm, DigestAlgorithm};
use crate::core::crypto::types::constants::{aes, blowfish, cast5, digest as sizes};

/// Block cipher mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    /// Cipher block chaining
    Cbc,
    /// Cipher feedback
    Cfb,
    /// Counter mode
    Ctr,
    /// Galois/counter mode (authenticated)
    Gcm,
}

impl CipherMode {
    /// Whether the mode produces an authentication tag
    pub fn is_aead(&self) -> bool {
        matches!(self, CipherMode::Gcm)
    }

    /// Whether plaintext must be padded to the block size
    pub fn needs_padding(&self) -> bool {
        matches!(self, CipherMode::Cbc)
    }
}

/// Handle to a symmetric cipher primitive
#[derive(Debug, PartialEq, Eq)]
pub struct Cipher {
    algorithm: CipherAlgorithm,
    name: &'static str,
    mode: CipherMode,
    key_size: usize,
    iv_size: usize,
    block_size: usize,
}

impl Cipher {
    const fn new(
        algorithm: CipherAlgorithm,
        name: &'static str,
        mode: CipherMode,
        key_size: usize,
        iv_size: usize,
        block_size: usize,
    ) -> Self {
        Self {
            algorithm,
            name,
            mode,
            key_size,
            iv_size,
            block_size,
        }
    }

    pub fn algorithm(&self) -> CipherAlgorithm {
        self.algorithm
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    /// Key length in bytes
    pub fn key_size(&self) -> usize {
        self.key_size
    }

    /// IV (or nonce) length in bytes
    pub fn iv_size(&self) -> usize {
        self.iv_size
    }

    /// Block size of the underlying block cipher in bytes
    pub fn block_size(&self) -> usize {
        self.block_size
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Handle to a message digest primitive
#[derive(Debug, PartialEq, Eq)]
pub struct Digest {
    algorithm: DigestAlgorithm,
    name: &'static str,
    output_size: usize,
    block_size: usize,
}

impl Digest {
    const fn new(
        algorithm: DigestAlgorithm,
        name: &'static str,
        output_size: usize,
        block_size: usize,
    ) -> Self {
        Self {
            algorithm,
            name,
            output_size,
            block_size,
        }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Digest length in bytes
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Internal block size in bytes
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Create a fresh hasher from the provider
    pub fn hasher(&self) -> Box<dyn DynDigest> {
        match self.algorithm {
            DigestAlgorithm::Sha256 => Box::new(sha2::Sha256::default()),
            DigestAlgorithm::Sha384 => Box::new(sha2::Sha384::default()),
            DigestAlgorithm::Sha512 => Box::new(sha2::Sha512::default()),
            DigestAlgorithm::Ripemd160 => Box::new(ripemd::Ripemd160::default()),
        }
    }

    /// Hash `data` in one shot
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        let mut hasher = self.hasher();
        hasher.update(data);
        hasher.finalize().into_vec()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// Cipher handles

pub static BF_CFB: Cipher = Cipher::new(
    CipherAlgorithm::BfCfb, "bfcfb", CipherMode::Cfb,
    blowfish::KEY_SIZE, blowfish::BLOCK_SIZE, blowfish::BLOCK_SIZE,
);
pub static BF_CBC: Cipher = Cipher::new(
    CipherAlgorithm::BfCbc, "bfcbc", CipherMode::Cbc,
    blowfish::KEY_SIZE, blowfish::BLOCK_SIZE, blowfish::BLOCK_SIZE,
);
pub static AES_256_CFB: Cipher = Cipher::new(
    CipherAlgorithm::Aes256Cfb, "aes256cfb", CipherMode::Cfb,
    aes::KEY_SIZE_256, aes::BLOCK_SIZE, aes::BLOCK_SIZE,
);
pub static AES_256_CBC: Cipher = Cipher::new(
    CipherAlgorithm::Aes256Cbc, "aes256cbc", CipherMode::Cbc,
    aes::KEY_SIZE_256, aes::BLOCK_SIZE, aes::BLOCK_SIZE,
);
pub static AES_256_GCM: Cipher = Cipher::new(
    CipherAlgorithm::Aes256Gcm, "aes256gcm", CipherMode::Gcm,
    aes::KEY_SIZE_256, aes::GCM_NONCE_SIZE, aes::BLOCK_SIZE,
);
pub static AES_256_CTR: Cipher = Cipher::new(
    CipherAlgorithm::Aes256Ctr, "aes256ctr", CipherMode::Ctr,
    aes::KEY_SIZE_256, aes::BLOCK_SIZE, aes::BLOCK_SIZE,
);
pub static AES_128_CFB: Cipher = Cipher::new(
    CipherAlgorithm::Aes128Cfb, "aes128cfb", CipherMode::Cfb,
    aes::KEY_SIZE_128, aes::BLOCK_SIZE, aes::BLOCK_SIZE,
);
pub static AES_128_CBC: Cipher = Cipher::new(
    CipherAlgorithm::Aes128Cbc, "aes128cbc", CipherMode::Cbc,
    aes::KEY_SIZE_128, aes::BLOCK_SIZE, aes::BLOCK_SIZE,
);
pub static AES_128_GCM: Cipher = Cipher::new(
    CipherAlgorithm::Aes128Gcm, "aes128gcm", CipherMode::Gcm,
    aes::KEY_SIZE_128, aes::GCM_NONCE_SIZE, aes::BLOCK_SIZE,
);
pub static AES_128_CTR: Cipher = Cipher::new(
    CipherAlgorithm::Aes128Ctr, "aes128ctr", CipherMode::Ctr,
    aes::KEY_SIZE_128, aes::BLOCK_SIZE, aes::BLOCK_SIZE,
);
pub static CAST5_CFB: Cipher = Cipher::new(
    CipherAlgorithm::Cast5Cfb, "cast5cfb", CipherMode::Cfb,
    cast5::KEY_SIZE, cast5::BLOCK_SIZE, cast5::BLOCK_SIZE,
);
pub static CAST5_CBC: Cipher = Cipher::new(
    CipherAlgorithm::Cast5Cbc, "cast5cbc", CipherMode::Cbc,
    cast5::KEY_SIZE, cast5::BLOCK_SIZE, cast5::BLOCK_SIZE,
);

// Digest handles

pub static SHA256: Digest = Digest::new(
    DigestAlgorithm::Sha256, "sha256", sizes::SHA256_SIZE, sizes::BLOCK_SIZE_64,
);
pub static SHA384: Digest = Digest::new(
    DigestAlgorithm::Sha384, "sha384", sizes::SHA384_SIZE, sizes::BLOCK_SIZE_128,
);
pub static SHA512: Digest = Digest::new(
    DigestAlgorithm::Sha512, "sha512", sizes::SHA512_SIZE, sizes::BLOCK_SIZE_128,
);
pub static RIPEMD160: Digest = Digest::new(
    DigestAlgorithm::Ripemd160, "ripemd160", sizes::RIPEMD160_SIZE, sizes::BLOCK_SIZE_64,
);
