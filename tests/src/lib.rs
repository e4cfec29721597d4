//! Shared fixtures for the ecshim integration tests

// Test-only crate; fixtures are trusted hex so decoding failures are bugs.
#![allow(clippy::unwrap_used)]

use ecshim::prelude::*;
use sha2::{Digest, Sha256};
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

/// RFC 6979 A.2.5 P-256 private scalar
pub const P256_D: &str = "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721";

/// Public point for [`P256_D`]
pub const P256_QX: &str = "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6";
pub const P256_QY: &str = "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299";

/// RFC 6979 A.2.5 SHA-256 signature over "sample"
pub const SAMPLE_R: &str = "efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716";
pub const SAMPLE_S: &str = "f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8";

/// Initialise `tracing` once for the whole test binary.
///
/// `RUST_LOG` selects targets; the default is `DEBUG` everywhere.
pub fn init_tracing() {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        let targets = match std::env::var("RUST_LOG") {
            Ok(var) => var.parse().unwrap_or_else(|_| Targets::new().with_default(LevelFilter::DEBUG)),
            Err(_) => Targets::new().with_default(LevelFilter::DEBUG),
        };
        let _ = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_test_writer()
            .with_max_level(LevelFilter::TRACE)
            .finish()
            .with(targets)
            .try_init();
    });
}

/// Bridge over the software provider
pub fn bridge() -> Ec<SoftwareProvider> {
    Ec::new(SoftwareProvider::new())
}

pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

pub fn sha256(message: &[u8]) -> [u8; 32] {
    Sha256::digest(message).into()
}

/// SEC1 `ECPrivateKey` for [`P256_D`] with curve parameters and public key
pub fn sec1_private_der() -> Vec<u8> {
    unhex(&format!(
        "30770201010420{P256_D}a00a06082a8648ce3d030107a14403420004{P256_QX}{P256_QY}"
    ))
}

/// Bare SEC1 `ECPrivateKey` for [`P256_D`], no optional fields
pub fn sec1_minimal_der() -> Vec<u8> {
    unhex(&format!("30250201010420{P256_D}"))
}

/// PKCS#8 `PrivateKeyInfo` wrapping [`sec1_minimal_der`]
pub fn pkcs8_private_der() -> Vec<u8> {
    unhex(&format!(
        "3041020100301306072a8648ce3d020106082a8648ce3d030107042730250201010420{P256_D}"
    ))
}

/// PKCS#8 v2 `OneAsymmetricKey`: [`pkcs8_private_der`] plus the `[1]` public key
pub fn pkcs8_v2_private_der() -> Vec<u8> {
    unhex(&format!(
        "308185020101301306072a8648ce3d020106082a8648ce3d030107042730250201010420{P256_D}\
         81420004{P256_QX}{P256_QY}"
    ))
}

/// X.509 `SubjectPublicKeyInfo` for the [`P256_D`] public point
pub fn spki_der() -> Vec<u8> {
    unhex(&format!(
        "3059301306072a8648ce3d020106082a8648ce3d03010703420004{P256_QX}{P256_QY}"
    ))
}

/// Private and matching public handle for [`P256_D`]
pub fn key_pair(ec: &Ec<SoftwareProvider>) -> (KeyHandle<SoftwareProvider>, KeyHandle<SoftwareProvider>) {
    let private = ec.private_key_from_der(&sec1_private_der()).unwrap();
    let public = ec.public_key_from_der(&spki_der()).unwrap();
    (private, public)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_lengths() {
        assert_eq!(sec1_private_der().len(), 0x79);
        assert_eq!(sec1_minimal_der().len(), 0x27);
        assert_eq!(pkcs8_private_der().len(), 0x43);
        assert_eq!(spki_der().len(), 91);
    }
}
