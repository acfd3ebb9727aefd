//! Digest interface (L4 external collaborator).
//!
//! ECDSA signs and verifies a 32-byte message digest, not a message; this
//! crate does not choose the hash function, it only names the shape a
//! caller-supplied one must have.

/// A hash function producing a 32-byte digest, suitable for feeding into
/// [`crate::ecdsa::sign`] / [`crate::ecdsa::verify`].
pub trait Digest32 {
    /// Hashes `msg` and returns the 32-byte digest.
    fn digest(msg: &[u8]) -> [u8; 32];
}

#[cfg(test)]
mod tests {
    use super::Digest32;

    struct Sha3_256;

    impl Digest32 for Sha3_256 {
        fn digest(msg: &[u8]) -> [u8; 32] {
            use sha3::Digest;
            let mut hasher = sha3::Sha3_256::new();
            hasher.update(msg);
            hasher.finalize().into()
        }
    }

    #[test]
    fn sha3_256_is_deterministic() {
        assert_eq!(Sha3_256::digest(b"hello"), Sha3_256::digest(b"hello"));
        assert_ne!(Sha3_256::digest(b"hello"), Sha3_256::digest(b"world"));
    }
}
