//! ECDSA over secp256k1 (L4): key generation, signing, and verification.
//!
//! This module's public surface is three free functions operating on plain
//! value types, not a `Signer`/`Verifier` trait hierarchy - the arithmetic
//! core's only job is `R = kG`, `r = Rx mod n`, `s = k^-1(h + r*sk) mod n`,
//! and the matching verification equation. Encoding (DER/SEC1), recoverable
//! signatures, and deterministic (RFC 6979) nonce derivation are not this
//! module's concern.

use crate::error::{Error, Result};
use crate::field::ScalarFp;
use crate::point::ProjectivePoint;
use crate::rng::uniform_scalar_below_n;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// An ECDSA private key: a nonzero scalar in `[1, n)`.
#[derive(Clone)]
pub struct SecretKey(ScalarFp);

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl SecretKey {
    /// Generates a new random secret key.
    pub fn random<R: CryptoRng + RngCore + ?Sized>(rng: &mut R) -> Self {
        Self(uniform_scalar_below_n(rng))
    }

    /// Builds a secret key from a canonical big-endian scalar, rejecting
    /// zero and out-of-range values.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let scalar = Option::<ScalarFp>::from(ScalarFp::from_bytes(bytes)).ok_or(Error)?;
        if bool::from(scalar.is_zero()) {
            return Err(Error);
        }
        Ok(Self(scalar))
    }

    /// Encodes this secret key as big-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Derives the corresponding public key, `sk * G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(ProjectivePoint::generator().mul(&self.0))
    }
}

/// An ECDSA public key: a point on the curve, excluding the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(ProjectivePoint);

impl PublicKey {
    /// Wraps a curve point as a public key, rejecting the point at
    /// infinity.
    pub fn from_point(point: ProjectivePoint) -> Result<Self> {
        if bool::from(point.is_identity()) {
            Err(Error)
        } else {
            Ok(Self(point))
        }
    }

    /// Returns the underlying curve point.
    pub fn as_point(&self) -> &ProjectivePoint {
        &self.0
    }
}

/// An ECDSA signature: the pair `(r, s)`, each a nonzero scalar mod `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    r: ScalarFp,
    s: ScalarFp,
}

impl Signature {
    /// The signature's `r` component.
    pub fn r(&self) -> ScalarFp {
        self.r
    }

    /// The signature's `s` component.
    pub fn s(&self) -> ScalarFp {
        self.s
    }
}

/// A key pair: a secret key and its corresponding public key.
pub struct KeyPair {
    /// The private half of the pair.
    pub secret_key: SecretKey,
    /// The public half of the pair.
    pub public_key: PublicKey,
}

/// Generates a new ECDSA key pair.
pub fn keygen<R: CryptoRng + RngCore + ?Sized>(rng: &mut R) -> KeyPair {
    let secret_key = SecretKey::random(rng);
    let public_key = secret_key.public_key();
    KeyPair {
        secret_key,
        public_key,
    }
}

/// Signs a 32-byte message digest with `secret_key`, consuming randomness
/// from `rng` for the ephemeral nonce `k`.
///
/// Internally resamples `k` whenever the unlucky (probability ~2^-128)
/// event `r == 0` or `s == 0` occurs, per the ECDSA specification.
pub fn sign<R: CryptoRng + RngCore + ?Sized>(
    secret_key: &SecretKey,
    digest: &[u8; 32],
    rng: &mut R,
) -> Signature {
    let z = ScalarFp::from_bytes_reduced(digest);
    loop {
        let k = uniform_scalar_below_n(rng);
        let point = ProjectivePoint::generator().mul(&k);
        let affine = point.to_affine();
        let r = ScalarFp::from_bytes_reduced(&affine.x().to_bytes());
        if bool::from(r.is_zero()) {
            continue;
        }

        let k_inv = match Option::<ScalarFp>::from(k.invert()) {
            Some(inv) => inv,
            None => continue,
        };
        let s = k_inv.mul(&z.add(&r.mul(&secret_key.0)));
        if bool::from(s.is_zero()) {
            continue;
        }

        return Signature { r, s };
    }
}

/// Verifies that `signature` is a valid ECDSA signature over `digest` by
/// `public_key`.
///
/// Returns `false` (never panics or errors) for any structurally invalid
/// input: `r` or `s` outside `[1, n)`, or a verification point that turns
/// out to be the identity.
pub fn verify(public_key: &PublicKey, digest: &[u8; 32], signature: &Signature) -> bool {
    let r = signature.r;
    let s = signature.s;
    if bool::from(r.is_zero()) || bool::from(s.is_zero()) {
        return false;
    }

    let s_inv = match Option::<ScalarFp>::from(s.invert()) {
        Some(inv) => inv,
        None => return false,
    };
    let z = ScalarFp::from_bytes_reduced(digest);
    let u1 = z.mul(&s_inv);
    let u2 = r.mul(&s_inv);

    let point = ProjectivePoint::generator()
        .mul(&u1)
        .add(&public_key.0.mul(&u2));
    if bool::from(point.is_identity()) {
        return false;
    }

    let affine = point.to_affine();
    let x_as_scalar = ScalarFp::from_bytes_reduced(&affine.x().to_bytes());
    x_as_scalar == r
}

/// Exposed for property tests that need to inspect an `x` coordinate
/// directly without round-tripping through `BaseFp`'s byte encoding twice.
#[cfg(test)]
pub(crate) fn x_coordinate_as_scalar(x: crate::field::BaseFp) -> ScalarFp {
    ScalarFp::from_bytes_reduced(&x.to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn test_rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(1234)
    }

    #[test]
    fn sign_then_verify_round_trips() {
        let mut rng = test_rng();
        let pair = keygen(&mut rng);
        let digest = [7u8; 32];
        let sig = sign(&pair.secret_key, &digest, &mut rng);
        assert!(verify(&pair.public_key, &digest, &sig));
    }

    #[test]
    fn tampered_digest_fails_verification() {
        let mut rng = test_rng();
        let pair = keygen(&mut rng);
        let digest = [7u8; 32];
        let sig = sign(&pair.secret_key, &digest, &mut rng);
        let mut tampered = digest;
        tampered[0] ^= 1;
        assert!(!verify(&pair.public_key, &tampered, &sig));
    }

    #[test]
    fn tampered_signature_fails_verification() {
        let mut rng = test_rng();
        let pair = keygen(&mut rng);
        let digest = [7u8; 32];
        let mut sig = sign(&pair.secret_key, &digest, &mut rng);
        sig.r = sig.r.add(&ScalarFp::one());
        assert!(!verify(&pair.public_key, &digest, &sig));
    }

    #[test]
    fn wrong_key_fails_verification() {
        let mut rng = test_rng();
        let pair_a = keygen(&mut rng);
        let pair_b = keygen(&mut rng);
        let digest = [9u8; 32];
        let sig = sign(&pair_a.secret_key, &digest, &mut rng);
        assert!(!verify(&pair_b.public_key, &digest, &sig));
    }

    #[test]
    fn secret_key_rejects_zero() {
        assert!(SecretKey::from_bytes(&[0u8; 32]).is_err());
    }

    #[test]
    fn public_key_from_identity_is_rejected() {
        assert!(PublicKey::from_point(ProjectivePoint::identity()).is_err());
    }
}
