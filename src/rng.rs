//! RNG interface (L4 external collaborator).
//!
//! Keygen and signing both need a source of cryptographically secure
//! randomness; this module bounds that need to [`rand_core`]'s traits
//! rather than picking a concrete generator, and provides the one helper
//! both call sites actually need: an unbiased random element of a scalar
//! field.

use crate::field::ScalarFp;
use rand_core::{CryptoRng, RngCore};

/// Draws a uniformly random [`ScalarFp`] by rejection sampling.
///
/// Repeatedly fills 32 bytes from `rng` and interprets them as a big-endian
/// integer, discarding any draw that lands `>= n` (the scalar field order)
/// so the result is unbiased rather than merely "reduced mod n", which
/// would skew the distribution toward the low end of the range.
pub fn uniform_scalar_below_n<R: CryptoRng + RngCore + ?Sized>(rng: &mut R) -> ScalarFp {
    loop {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        if let Some(scalar) = Option::<ScalarFp>::from(ScalarFp::from_bytes(&bytes)) {
            if !bool::from(scalar.is_zero()) {
                return scalar;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn draws_nonzero_scalars() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for _ in 0..32 {
            let s = uniform_scalar_below_n(&mut rng);
            assert!(!bool::from(s.is_zero()));
        }
    }

    #[test]
    fn is_deterministic_given_a_seed() {
        let mut rng_a = ChaCha20Rng::seed_from_u64(7);
        let mut rng_b = ChaCha20Rng::seed_from_u64(7);
        assert_eq!(
            uniform_scalar_below_n(&mut rng_a).to_bytes(),
            uniform_scalar_below_n(&mut rng_b).to_bytes()
        );
    }
}
