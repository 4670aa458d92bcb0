//! End-to-end sealing behavior across the public API

use std::collections::HashSet;

use assetseal::{
    ErrorKind, SealedMessage, SecretKey, decrypt, decrypt_to_string, encrypt, transcode,
};

#[test]
fn test_sample_asset_round_trip() {
    let key = SecretKey::generate().unwrap();
    let content = "This is a sample APK asset content";

    let sealed = encrypt(content.as_bytes(), &key).unwrap();
    let recovered = decrypt_to_string(&sealed, &key).unwrap();

    assert_eq!(recovered, content);
}

#[test]
fn test_same_input_never_seals_identically() {
    let key = SecretKey::generate().unwrap();
    let content = b"This is a sample APK asset content";

    let sealed1 = encrypt(content, &key).unwrap();
    let sealed2 = encrypt(content, &key).unwrap();

    assert_ne!(sealed1.encrypted_data, sealed2.encrypted_data);
    assert_ne!(sealed1.nonce, sealed2.nonce);

    assert_eq!(decrypt(&sealed1, &key).unwrap(), content);
    assert_eq!(decrypt(&sealed2, &key).unwrap(), content);
}

#[test]
fn test_nonce_uniqueness_under_one_key() {
    let key = SecretKey::generate().unwrap();
    let mut seen = HashSet::new();

    // A collision among 10,000 random 96-bit nonces is negligible; any
    // repeat here points at a broken random source.
    for _ in 0..10_000 {
        let sealed = encrypt(b"x", &key).unwrap();
        assert!(seen.insert(sealed.nonce), "nonce reused under the same key");
    }
}

#[test]
fn test_every_single_bit_flip_is_rejected() {
    let key = SecretKey::generate().unwrap();
    let sealed = encrypt(b"asset999", &key).unwrap();
    let payload = transcode::from_base64(&sealed.encrypted_data).unwrap();

    for byte in 0..payload.len() {
        for bit in 0..8 {
            let mut tampered = payload.clone();
            tampered[byte] ^= 1 << bit;

            // Keep the nonce field consistent with the (possibly
            // nonce-flipped) payload so the failure is always the tag check.
            let sealed = SealedMessage {
                encrypted_data: transcode::to_base64(&tampered),
                nonce: transcode::to_base64(&tampered[..12]),
            };

            let err = decrypt(&sealed, &key)
                .expect_err("tampered payload must never decrypt");
            assert_eq!(err.kind, Some(ErrorKind::AuthenticationFailed));
        }
    }
}

#[test]
fn test_empty_content_round_trip() {
    let key = SecretKey::generate().unwrap();

    let sealed = encrypt(b"", &key).unwrap();
    let payload = transcode::from_base64(&sealed.encrypted_data).unwrap();
    assert_eq!(payload.len(), 12 + 16);

    assert_eq!(decrypt_to_string(&sealed, &key).unwrap(), "");
}

#[test]
fn test_lossy_text_recovery_is_opt_in() {
    let key = SecretKey::generate().unwrap();
    let sealed = encrypt(&[b'o', b'k', 0xFF], &key).unwrap();

    let err = decrypt_to_string(&sealed, &key).expect_err("strict decoding must fail");
    assert_eq!(err.kind, Some(ErrorKind::CharacterDecoding));

    let bytes = decrypt(&sealed, &key).unwrap();
    assert_eq!(transcode::to_utf8_lossy(&bytes), "ok\u{FFFD}");
}
