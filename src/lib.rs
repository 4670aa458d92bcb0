//! Assetseal - AES-256-GCM sealing of in-memory asset content
//!
//! Generates 256-bit keys, seals plaintext as `nonce ‖ ciphertext ‖ tag`,
//! and packages the result as base64 text for storage or transmission.
//! Key storage, key exchange, and file/network I/O are owned by the
//! integrating application.

#![forbid(unsafe_code)]

pub mod error;
pub mod gcmcrypt;
pub mod transcode;

pub use error::{AssetSealError, ErrorCategory, ErrorKind, Result};
pub use gcmcrypt::{
    SealedMessage, SecretKey, decrypt, decrypt_to_string, encrypt, encrypt_with_nonce,
};
