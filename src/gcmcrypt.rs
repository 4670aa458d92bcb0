//! Encryption/decryption using AES-256-GCM
//!
//! This module seals in-memory content (e.g., extracted application assets)
//! under a 256-bit key with a fresh random nonce per call.
//!
//! The sealed binary format is:
//! - nonce: 12 bytes
//! - ciphertext: same length as the plaintext
//! - authentication tag: 16 bytes (GCM standard, appended by the cipher)
//!
//! Sealed messages are carried as base64 text so they survive any
//! text-oriented storage or transport.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::TryRngCore;
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::error::{AssetSealError, ErrorCategory, ErrorKind, Result};
use crate::transcode;

/// Length of an AES-256 key in bytes
pub const KEY_LEN: usize = 32;

/// Length of a GCM nonce in bytes
pub const NONCE_LEN: usize = 12;

/// Length of the GCM authentication tag in bytes
pub const TAG_LEN: usize = 16;

/// Smallest valid decoded sealed payload: a nonce plus the tag over an
/// empty plaintext.
pub const MIN_SEALED_LEN: usize = NONCE_LEN + TAG_LEN;

/// An immutable 256-bit AES-GCM key.
///
/// Key bytes live in zeroizing storage and are wiped when the last clone is
/// dropped. There is no public accessor for the raw bytes and the `Debug`
/// impl prints none of them.
#[derive(Clone)]
pub struct SecretKey {
    bytes: Zeroizing<[u8; KEY_LEN]>,
}

impl SecretKey {
    /// Generate a fresh key from the operating system's secure random source.
    ///
    /// Fails only if that source is unavailable, which is an environment
    /// error the caller cannot recover from by retrying with other input.
    pub fn generate() -> Result<Self> {
        let mut bytes = Zeroizing::new([0u8; KEY_LEN]);
        OsRng.try_fill_bytes(bytes.as_mut_slice()).map_err(|e| {
            AssetSealError::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::KeyGeneration,
                "secure random source unavailable",
                e,
            )
        })?;
        Ok(Self { bytes })
    }

    /// Construct a key from raw bytes obtained elsewhere.
    ///
    /// The bytes are moved into zeroizing storage; the caller is responsible
    /// for wiping any other copies it holds.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self {
            bytes: Zeroizing::new(bytes),
        }
    }

    fn cipher(&self) -> Result<Aes256Gcm> {
        Aes256Gcm::new_from_slice(self.bytes.as_slice()).map_err(|_| {
            AssetSealError::with_kind(
                ErrorCategory::Internal,
                ErrorKind::Encryption,
                "cipher rejected key material",
            )
        })
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// A sealed message as produced by [`encrypt`].
///
/// `encrypted_data` is the base64 encoding of `nonce ‖ ciphertext ‖ tag`.
/// `nonce` is the base64 encoding of the nonce alone. The separate field is
/// redundant with the first 12 bytes of the payload; it is kept for callers
/// that store or transmit the nonce independently, and [`decrypt`] rejects
/// a message whose two copies disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    pub encrypted_data: String,
    pub nonce: String,
}

/// Encrypt plaintext under `key` with a fresh random nonce.
///
/// Every call draws a new 96-bit nonce from the OS secure random source, so
/// sealing the same plaintext twice under the same key produces different
/// sealed messages.
pub fn encrypt(plaintext: &[u8], key: &SecretKey) -> Result<SealedMessage> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.try_fill_bytes(&mut nonce).map_err(|e| {
        AssetSealError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::KeyGeneration,
            "secure random source unavailable",
            e,
        )
    })?;

    encrypt_with_nonce(plaintext, key, &nonce)
}

/// Encrypt plaintext under `key` with a caller-supplied nonce.
///
/// This function exists to validate against published test vectors.
/// NEVER use this in production - reusing a nonce under the same key
/// destroys GCM's confidentiality and authentication guarantees. Always
/// use [`encrypt`], which generates a random nonce per call.
pub fn encrypt_with_nonce(
    plaintext: &[u8],
    key: &SecretKey,
    nonce: &[u8; NONCE_LEN],
) -> Result<SealedMessage> {
    let cipher = key.cipher()?;

    let sealed = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| {
            AssetSealError::with_kind(
                ErrorCategory::Internal,
                ErrorKind::Encryption,
                "cipher rejected input",
            )
        })?;

    let mut payload = Vec::with_capacity(NONCE_LEN + sealed.len());
    payload.extend_from_slice(nonce);
    payload.extend_from_slice(&sealed);

    Ok(SealedMessage {
        encrypted_data: transcode::to_base64(&payload),
        nonce: transcode::to_base64(nonce),
    })
}

/// Decrypt a sealed message back to plaintext bytes.
///
/// The decoded payload must be at least [`MIN_SEALED_LEN`] bytes and the
/// message's `nonce` field must match the 12 bytes at the payload head.
/// Authentication failure is reported with a fixed message: whether the
/// payload was tampered with, corrupted, or opened under the wrong key is
/// deliberately not distinguished, and tag comparison is the cipher's
/// constant-time comparison.
pub fn decrypt(sealed: &SealedMessage, key: &SecretKey) -> Result<Vec<u8>> {
    let payload = transcode::from_base64(&sealed.encrypted_data)?;

    if payload.len() < MIN_SEALED_LEN {
        return Err(AssetSealError::with_kind(
            ErrorCategory::User,
            ErrorKind::Decoding,
            "sealed payload shorter than nonce plus tag; likely truncated",
        ));
    }

    let declared_nonce = transcode::from_base64(&sealed.nonce)?;
    let (nonce, boxed) = payload.split_at(NONCE_LEN);
    if declared_nonce != nonce {
        return Err(AssetSealError::with_kind(
            ErrorCategory::User,
            ErrorKind::Decoding,
            "nonce field does not match the sealed payload head",
        ));
    }

    let cipher = key.cipher()?;
    cipher.decrypt(Nonce::from_slice(nonce), boxed).map_err(|_| {
        AssetSealError::with_kind(
            ErrorCategory::User,
            ErrorKind::AuthenticationFailed,
            "corrupt input, tampered-with data, or wrong key",
        )
    })
}

/// Decrypt a sealed message and decode the plaintext as UTF-8 text.
///
/// Invalid UTF-8 fails with a `CharacterDecoding` error rather than being
/// replaced; callers that want lossy output can use [`decrypt`] with
/// [`crate::transcode::to_utf8_lossy`].
pub fn decrypt_to_string(sealed: &SealedMessage, key: &SecretKey) -> Result<String> {
    let plaintext = decrypt(sealed, key)?;
    transcode::to_utf8(plaintext)
}
