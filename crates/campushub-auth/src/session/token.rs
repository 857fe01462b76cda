//! Opaque session token generation.

use rand::RngCore;

/// Generates a cryptographically secure random session token.
///
/// 32 random bytes, hex encoded. The token carries no meaning; all
/// session state lives server-side.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Simple hex encoding without external dependency.
mod hex {
    /// Encode bytes to hex string.
    pub fn encode(bytes: [u8; 32]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_distinct_hex() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
