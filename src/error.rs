use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// The environment or the cryptographic primitive failed in a way the
    /// caller cannot correct by changing its input.
    Internal,

    /// The caller provided input that is malformed, tampered with, or
    /// otherwise impossible to process.
    User,
}

/// Fine-grained condition flags for consumers that want to branch on error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The operating system's secure random source was unavailable.
    KeyGeneration,
    /// The cipher rejected the key or input during encryption.
    Encryption,
    /// Authentication failed: the sealed payload was tampered with,
    /// corrupted, or decrypted under the wrong key. The three causes are
    /// deliberately indistinguishable.
    AuthenticationFailed,
    /// The base64 payload is malformed, shorter than the minimum sealed
    /// length, or its nonce field disagrees with the payload head.
    Decoding,
    /// Recovered plaintext is not valid UTF-8 when text output was requested.
    CharacterDecoding,
}

#[derive(Debug, Error)]
#[error("{msg}")]
pub struct AssetSealError {
    /// Broad error category, always provided.
    pub category: ErrorCategory,
    /// Optional specific condition tag for consumers that need to
    /// branch their behavior. Any code consuming errors MUST handle
    /// the absence of a defined kind.
    pub kind: Option<ErrorKind>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    msg: String,
}

impl AssetSealError {
    /// Creates a new error with a required category and display message.
    pub fn new(category: ErrorCategory, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: None,
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that also tags the failure with a kind.
    pub fn with_kind(category: ErrorCategory, kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: None,
            msg: msg.into(),
        }
    }

    /// Creates a new error that carries both a kind tag and the originating source error.
    pub fn with_kind_and_source(
        category: ErrorCategory,
        kind: ErrorKind,
        msg: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            category,
            kind: Some(kind),
            source: Some(Box::new(source)),
            msg: msg.into(),
        }
    }

    /// The user-facing message carried by the error.
    ///
    /// Messages never contain plaintext or key material.
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Returns the preserved source error if present.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AssetSealError>;
