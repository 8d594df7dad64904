/*!
Keyed cipher contexts.

A `Cipher` handle only describes a primitive. `Cipher::new_encryptor` and
`Cipher::new_decryptor` bind it to the provider implementation with a key
and IV, giving back state the caller drives with the `cipher`/`aead`
traits. Length mismatches are reported through the provider error queue
as well as the returned error, so `compose_error` can describe them.
*/

use std::fmt;

use aes::{Aes128, Aes256};
use aes::cipher::KeyIvInit;
use aes_gcm::aead::KeyInit;
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use blowfish::Blowfish;
use cast5::Cast5;
use ctr::Ctr128BE;

use crate::core::crypto::provider::Cipher;
use crate::core::crypto::types::algorithms::CipherAlgorithm;
use crate::core::crypto::types::constants::aes::GCM_NONCE_SIZE;
use crate::core::diagnostics::error_queue::{push_error, reasons, ErrorCode, Library};
use crate::core::error::{Error, Result};

/// AES-GCM cipher keyed together with its nonce
pub struct GcmContext<C> {
    pub cipher: C,
    pub nonce: [u8; GCM_NONCE_SIZE],
}

macro_rules! keyed_context {
    ($(#[$meta:meta])* $name:ident { $($variant:ident($ty:ty)),+ $(,)? }) => {
        $(#[$meta])*
        pub enum $name {
            $($variant($ty)),+
        }

        impl $name {
            /// Algorithm the context was keyed for
            pub fn algorithm(&self) -> CipherAlgorithm {
                match self {
                    $($name::$variant(_) => CipherAlgorithm::$variant),+
                }
            }
        }

        // Key material stays out of debug output
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.algorithm().name())
                    .finish()
            }
        }
    };
}

keyed_context! {
    /// Encryption state for one of the catalog ciphers
    Encryptor {
        BfCfb(cfb_mode::Encryptor<Blowfish>),
        BfCbc(cbc::Encryptor<Blowfish>),
        Aes256Cfb(cfb_mode::Encryptor<Aes256>),
        Aes256Cbc(cbc::Encryptor<Aes256>),
        Aes256Gcm(GcmContext<Aes256Gcm>),
        Aes256Ctr(Ctr128BE<Aes256>),
        Aes128Cfb(cfb_mode::Encryptor<Aes128>),
        Aes128Cbc(cbc::Encryptor<Aes128>),
        Aes128Gcm(GcmContext<Aes128Gcm>),
        Aes128Ctr(Ctr128BE<Aes128>),
        Cast5Cfb(cfb_mode::Encryptor<Cast5>),
        Cast5Cbc(cbc::Encryptor<Cast5>),
    }
}

keyed_context! {
    /// Decryption state for one of the catalog ciphers
    Decryptor {
        BfCfb(cfb_mode::Decryptor<Blowfish>),
        BfCbc(cbc::Decryptor<Blowfish>),
        Aes256Cfb(cfb_mode::Decryptor<Aes256>),
        Aes256Cbc(cbc::Decryptor<Aes256>),
        Aes256Gcm(GcmContext<Aes256Gcm>),
        Aes256Ctr(Ctr128BE<Aes256>),
        Aes128Cfb(cfb_mode::Decryptor<Aes128>),
        Aes128Cbc(cbc::Decryptor<Aes128>),
        Aes128Gcm(GcmContext<Aes128Gcm>),
        Aes128Ctr(Ctr128BE<Aes128>),
        Cast5Cfb(cfb_mode::Decryptor<Cast5>),
        Cast5Cbc(cbc::Decryptor<Cast5>),
    }
}

impl Cipher {
    /// Key the provider's implementation of this cipher for encryption
    ///
    /// `key` and `iv` must be exactly `key_size()` and `iv_size()` bytes.
    pub fn new_encryptor(&self, key: &[u8], iv: &[u8]) -> Result<Encryptor> {
        check_lengths(self, key, iv)?;
        Ok(match self.algorithm() {
            CipherAlgorithm::BfCfb => Encryptor::BfCfb(keyed(key, iv)?),
            CipherAlgorithm::BfCbc => Encryptor::BfCbc(keyed(key, iv)?),
            CipherAlgorithm::Aes256Cfb => Encryptor::Aes256Cfb(keyed(key, iv)?),
            CipherAlgorithm::Aes256Cbc => Encryptor::Aes256Cbc(keyed(key, iv)?),
            CipherAlgorithm::Aes256Gcm => Encryptor::Aes256Gcm(gcm(key, iv)?),
            CipherAlgorithm::Aes256Ctr => Encryptor::Aes256Ctr(keyed(key, iv)?),
            CipherAlgorithm::Aes128Cfb => Encryptor::Aes128Cfb(keyed(key, iv)?),
            CipherAlgorithm::Aes128Cbc => Encryptor::Aes128Cbc(keyed(key, iv)?),
            CipherAlgorithm::Aes128Gcm => Encryptor::Aes128Gcm(gcm(key, iv)?),
            CipherAlgorithm::Aes128Ctr => Encryptor::Aes128Ctr(keyed(key, iv)?),
            CipherAlgorithm::Cast5Cfb => Encryptor::Cast5Cfb(keyed(key, iv)?),
            CipherAlgorithm::Cast5Cbc => Encryptor::Cast5Cbc(keyed(key, iv)?),
        })
    }

    /// Key the provider's implementation of this cipher for decryption
    pub fn new_decryptor(&self, key: &[u8], iv: &[u8]) -> Result<Decryptor> {
        check_lengths(self, key, iv)?;
        Ok(match self.algorithm() {
            CipherAlgorithm::BfCfb => Decryptor::BfCfb(keyed(key, iv)?),
            CipherAlgorithm::BfCbc => Decryptor::BfCbc(keyed(key, iv)?),
            CipherAlgorithm::Aes256Cfb => Decryptor::Aes256Cfb(keyed(key, iv)?),
            CipherAlgorithm::Aes256Cbc => Decryptor::Aes256Cbc(keyed(key, iv)?),
            CipherAlgorithm::Aes256Gcm => Decryptor::Aes256Gcm(gcm(key, iv)?),
            CipherAlgorithm::Aes256Ctr => Decryptor::Aes256Ctr(keyed(key, iv)?),
            CipherAlgorithm::Aes128Cfb => Decryptor::Aes128Cfb(keyed(key, iv)?),
            CipherAlgorithm::Aes128Cbc => Decryptor::Aes128Cbc(keyed(key, iv)?),
            CipherAlgorithm::Aes128Gcm => Decryptor::Aes128Gcm(gcm(key, iv)?),
            CipherAlgorithm::Aes128Ctr => Decryptor::Aes128Ctr(keyed(key, iv)?),
            CipherAlgorithm::Cast5Cfb => Decryptor::Cast5Cfb(keyed(key, iv)?),
            CipherAlgorithm::Cast5Cbc => Decryptor::Cast5Cbc(keyed(key, iv)?),
        })
    }
}

// Blowfish and CAST5 accept a range of key lengths; the handle fixes one.
fn check_lengths(cipher: &Cipher, key: &[u8], iv: &[u8]) -> Result<()> {
    if key.len() != cipher.key_size() {
        log::debug!("{}: key is {} bytes, expected {}", cipher, key.len(), cipher.key_size());
        return Err(provider_error(reasons::INVALID_KEY_LENGTH));
    }
    if iv.len() != cipher.iv_size() {
        log::debug!("{}: iv is {} bytes, expected {}", cipher, iv.len(), cipher.iv_size());
        return Err(provider_error(reasons::INVALID_IV_LENGTH));
    }
    Ok(())
}

fn provider_error(reason: u32) -> Error {
    let code = ErrorCode::new(Library::Evp, reason);
    push_error(code);
    Error::Provider(code)
}

fn keyed<C: KeyIvInit>(key: &[u8], iv: &[u8]) -> Result<C> {
    C::new_from_slices(key, iv).map_err(|_| provider_error(reasons::INVALID_KEY_LENGTH))
}

fn gcm<C: KeyInit>(key: &[u8], iv: &[u8]) -> Result<GcmContext<C>> {
    let cipher = C::new_from_slice(key).map_err(|_| provider_error(reasons::INVALID_KEY_LENGTH))?;
    let nonce: [u8; GCM_NONCE_SIZE] = iv.try_into().map_err(|_| provider_error(reasons::INVALID_IV_LENGTH))?;
    Ok(GcmContext { cipher, nonce })
}
