/*!
Constants for cryptographic primitives.

Key, IV and block sizes of the primitives the registry hands out.
*/

/// AES constants
pub mod aes {
    /// Size of an AES block in bytes
    pub const BLOCK_SIZE: usize = 16;

    /// Size of an AES-128 key in bytes
    pub const KEY_SIZE_128: usize = 16;

    /// Size of an AES-256 key in bytes
    pub const KEY_SIZE_256: usize = 32;

    /// Size of an AES-GCM nonce in bytes
    pub const GCM_NONCE_SIZE: usize = 12;
}

/// Blowfish constants
pub mod blowfish {
    /// Size of a Blowfish block in bytes
    pub const BLOCK_SIZE: usize = 8;

    /// Default Blowfish key size in bytes
    pub const KEY_SIZE: usize = 16;
}

/// CAST5 constants
pub mod cast5 {
    /// Size of a CAST5 block in bytes
    pub const BLOCK_SIZE: usize = 8;

    /// Size of a CAST5 key in bytes
    pub const KEY_SIZE: usize = 16;
}

/// Digest constants
pub mod digest {
    /// SHA-256 output size in bytes
    pub const SHA256_SIZE: usize = 32;

    /// SHA-384 output size in bytes
    pub const SHA384_SIZE: usize = 48;

    /// SHA-512 output size in bytes
    pub const SHA512_SIZE: usize = 64;

    /// RIPEMD-160 output size in bytes
    pub const RIPEMD160_SIZE: usize = 20;

    /// Block size of SHA-256 and RIPEMD-160
    pub const BLOCK_SIZE_64: usize = 64;

    /// Block size of SHA-384 and SHA-512
    pub const BLOCK_SIZE_128: usize = 128;
}
