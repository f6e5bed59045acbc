//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Length of generated signing secrets, in bytes
pub const SECRET_LEN: usize = 32;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Fresh random signing secret (development builds only)
pub fn random_secret() -> Vec<u8> {
    random_bytes(SECRET_LEN)
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
        assert!(random_bytes(0).is_empty());
    }

    #[test]
    fn test_random_secrets_differ() {
        assert_ne!(random_secret(), random_secret());
        assert_eq!(random_secret().len(), SECRET_LEN);
    }

    #[test]
    fn test_base64_roundtrip() {
        let data = b"signing key material";
        let encoded = to_base64(data);
        assert_eq!(from_base64(&encoded).unwrap(), data);
        assert_eq!(from_base64(&format!("{encoded}\n")).unwrap(), data);
    }

    #[test]
    fn test_base64_invalid() {
        assert!(from_base64("not base64 !!").is_err());
    }
}
