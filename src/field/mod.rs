//! Generic Montgomery-form field element (L2).

mod base;
mod scalar;

pub use base::BaseFieldParams;
pub use scalar::ScalarFieldParams;

use crate::limbs::{self, Limbs};
use crate::montgomery::{self, FieldParams};
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg, Sub};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// The base field, `GF(p)`, in which curve point coordinates live.
pub type BaseFp = Fp<BaseFieldParams>;

/// The scalar field, `GF(n)`, in which private keys, nonces, and signature
/// components live.
pub type ScalarFp = Fp<ScalarFieldParams>;

/// An element of a prime field, held internally in Montgomery form.
///
/// `Fp<P>` implements the field's operation set exactly once; `P` supplies
/// the modulus-specific constants. The two instantiations used by this
/// crate are [`BaseFp`] (mod *p*) and [`ScalarFp`] (mod *n*).
#[derive(Clone, Copy)]
pub struct Fp<P: FieldParams> {
    limbs: Limbs,
    _params: PhantomData<P>,
}

impl<P: FieldParams> Fp<P> {
    /// The additive identity.
    pub const fn zero() -> Self {
        Self {
            limbs: [0; 8],
            _params: PhantomData,
        }
    }

    /// The multiplicative identity.
    pub const fn one() -> Self {
        Self {
            limbs: P::R,
            _params: PhantomData,
        }
    }

    fn from_limbs(limbs: Limbs) -> Self {
        Self {
            limbs,
            _params: PhantomData,
        }
    }

    /// Lifts a plain (non-Montgomery) integer, given as little-endian
    /// 32-bit limbs, into this field. The caller must ensure `value` is
    /// already reduced; this is an internal helper for building constants.
    pub(crate) fn from_canonical_limbs(value: Limbs) -> Self {
        Self::from_limbs(montgomery::to_montgomery(&value, &P::MODULUS, P::MU, &P::R2))
    }

    /// Parses a big-endian 32-byte encoding of a canonical field element.
    ///
    /// Returns [`CtOption::none`] if the encoded integer is `>= MODULUS`.
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        let value = limbs::from_be_bytes(bytes);
        let is_canonical = limbs::cmp(&value, &P::MODULUS) == core::cmp::Ordering::Less;
        CtOption::new(
            Self::from_canonical_limbs(value),
            Choice::from(is_canonical as u8),
        )
    }

    /// Reduces an arbitrary 32-byte big-endian integer modulo the field's
    /// modulus, without rejecting out-of-range input.
    ///
    /// Used to turn a message digest into a scalar-field element per the
    /// ECDSA protocol, where the digest is not guaranteed to already be
    /// less than *n*.
    pub fn from_bytes_reduced(bytes: &[u8; 32]) -> Self {
        let value = limbs::from_be_bytes(bytes);
        if limbs::cmp(&value, &P::MODULUS) == core::cmp::Ordering::Less {
            Self::from_canonical_limbs(value)
        } else {
            // `value < 2^256` and `MODULUS` is within a small margin of
            // `2^256`, so a single subtraction suffices to reduce it.
            let reduced = montgomery::sub_mod(&value, &P::MODULUS, &P::MODULUS);
            Self::from_canonical_limbs(reduced)
        }
    }

    /// Encodes this element as a big-endian 32-byte canonical integer.
    pub fn to_bytes(&self) -> [u8; 32] {
        let canonical = montgomery::from_montgomery(&self.limbs, &P::MODULUS, P::MU);
        limbs::to_be_bytes(&canonical)
    }

    /// Returns `Choice(1)` if this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::zero())
    }

    /// Field addition.
    pub fn add(&self, rhs: &Self) -> Self {
        Self::from_limbs(montgomery::add_mod(&self.limbs, &rhs.limbs, &P::MODULUS))
    }

    /// Field subtraction.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self::from_limbs(montgomery::sub_mod(&self.limbs, &rhs.limbs, &P::MODULUS))
    }

    /// Field negation.
    pub fn neg(&self) -> Self {
        Self::from_limbs(montgomery::neg_mod(&self.limbs, &P::MODULUS))
    }

    /// Field multiplication.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::from_limbs(montgomery::montgomery_mul(
            &self.limbs,
            &rhs.limbs,
            &P::MODULUS,
            P::MU,
        ))
    }

    /// Multiplies by a small (`< 2^32`) unsigned constant.
    ///
    /// Used by the curve-point formulae for the `7·` and `21·` terms that
    /// arise from secp256k1's `b = 7` coefficient, avoiding a full field
    /// multiplication for a single-limb scalar.
    pub fn mul_single(&self, c: u32) -> Self {
        let small = Self::from_canonical_limbs([c, 0, 0, 0, 0, 0, 0, 0]);
        self.mul(&small)
    }

    /// Field squaring.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// `self + self`.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Field inversion via Fermat's little theorem (`self^(m-2)`), using
    /// plain square-and-multiply.
    ///
    /// Not constant-time with respect to the modulus's bit pattern - only
    /// `self` stays inside Montgomery-domain arithmetic throughout, the
    /// public exponent `m - 2` is what drives the square/multiply schedule.
    /// Returns [`CtOption::none`] for `self == 0`.
    pub fn invert(&self) -> CtOption<Self> {
        // `MODULUS - 2`, computed as a plain (non-modular) subtraction: the
        // result is already in `[0, MODULUS)` so no wraparound correction
        // is needed, but `sub_mod` against `MODULUS` itself is a convenient
        // way to reuse the same branchless limb subtraction.
        let exponent = montgomery::sub_mod(&P::MODULUS, &[2, 0, 0, 0, 0, 0, 0, 0], &P::MODULUS);
        let mut result = Self::one();
        for limb in exponent.iter().rev() {
            for bit in (0..32).rev() {
                result = result.square();
                if (limb >> bit) & 1 == 1 {
                    result = result.mul(*self);
                }
            }
        }
        CtOption::new(result, !self.is_zero())
    }
}

impl<P: FieldParams> PartialEq for Fp<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<P: FieldParams> Eq for Fp<P> {}

impl<P: FieldParams> ConstantTimeEq for Fp<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs
            .iter()
            .zip(other.limbs.iter())
            .fold(Choice::from(1), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl<P: FieldParams> ConditionallySelectable for Fp<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u32; 8];
        for i in 0..8 {
            limbs[i] = u32::conditional_select(&a.limbs[i], &b.limbs[i], choice);
        }
        Self::from_limbs(limbs)
    }
}

impl<P: FieldParams> Default for Fp<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: FieldParams> fmt::Debug for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        write!(f, "Fp(0x")?;
        for byte in bytes {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl<P: FieldParams> zeroize::Zeroize for Fp<P> {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl<P: FieldParams> Add for Fp<P> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Fp::add(&self, &rhs)
    }
}

impl<P: FieldParams> Sub for Fp<P> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Fp::sub(&self, &rhs)
    }
}

impl<P: FieldParams> Mul for Fp<P> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Fp::mul(&self, &rhs)
    }
}

impl<P: FieldParams> Neg for Fp<P> {
    type Output = Self;
    fn neg(self) -> Self {
        Fp::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_field_axioms<P: FieldParams>() {
        let a = Fp::<P>::from_canonical_limbs([7, 0, 0, 0, 0, 0, 0, 0]);
        let b = Fp::<P>::from_canonical_limbs([11, 0, 0, 0, 0, 0, 0, 0]);
        let c = Fp::<P>::from_canonical_limbs([13, 0, 0, 0, 0, 0, 0, 0]);

        // property: additive identity
        assert_eq!(a.add(Fp::<P>::zero()), a);
        // property: multiplicative identity
        assert_eq!(a.mul(Fp::<P>::one()), a);
        // property: additive inverse
        assert!(bool::from(a.add(a.neg()).is_zero()));
        // property: commutativity
        assert_eq!(a.add(b), b.add(a));
        assert_eq!(a.mul(b), b.mul(a));
        // property: associativity
        assert_eq!(a.add(b).add(c), a.add(b.add(c)));
        assert_eq!(a.mul(b).mul(c), a.mul(b.mul(c)));
        // property: distributivity
        assert_eq!(a.mul(b.add(c)), a.mul(b).add(a.mul(c)));
        // property: multiplicative inverse
        let inv = a.invert().unwrap();
        assert_eq!(a.mul(inv), Fp::<P>::one());
        // property: byte round-trip
        let bytes = a.to_bytes();
        assert_eq!(Fp::<P>::from_bytes(&bytes).unwrap(), a);
    }

    #[test]
    fn base_field_axioms() {
        check_field_axioms::<BaseFieldParams>();
    }

    #[test]
    fn scalar_field_axioms() {
        check_field_axioms::<ScalarFieldParams>();
    }

    #[test]
    fn zero_has_no_inverse() {
        assert!(bool::from(BaseFp::zero().invert().is_none()));
        assert!(bool::from(ScalarFp::zero().invert().is_none()));
    }

    #[test]
    fn reduced_digest_matches_modular_reduction() {
        // A 32-byte value equal to MODULUS should reduce to zero.
        let bytes = limbs::to_be_bytes(&ScalarFieldParams::MODULUS);
        let reduced = ScalarFp::from_bytes_reduced(&bytes);
        assert!(bool::from(reduced.is_zero()));
    }

    mod bignum_crosscheck {
        use super::*;
        use num_bigint::BigUint;
        use proptest::prelude::*;

        fn modulus_of<P: FieldParams>() -> BigUint {
            BigUint::from_bytes_be(&limbs::to_be_bytes(&P::MODULUS))
        }

        fn to_biguint<P: FieldParams>(x: &Fp<P>) -> BigUint {
            BigUint::from_bytes_be(&x.to_bytes())
        }

        fn from_biguint<P: FieldParams>(x: &BigUint) -> Fp<P> {
            let bytes = x.to_bytes_be();
            let mut padded = [0u8; 32];
            padded[32 - bytes.len()..].copy_from_slice(&bytes);
            Fp::<P>::from_bytes(&padded).unwrap()
        }

        fn check_add_mul<P: FieldParams>(a: u64, b: u64) {
            let m = modulus_of::<P>();
            let a_big = BigUint::from(a) % &m;
            let b_big = BigUint::from(b) % &m;
            let a_fp = from_biguint::<P>(&a_big);
            let b_fp = from_biguint::<P>(&b_big);

            let sum_expected = (&a_big + &b_big) % &m;
            assert_eq!(to_biguint(&a_fp.add(b_fp)), sum_expected);

            let prod_expected = (&a_big * &b_big) % &m;
            assert_eq!(to_biguint(&a_fp.mul(b_fp)), prod_expected);
        }

        proptest! {
            #[test]
            fn base_field_matches_bignum(a in any::<u64>(), b in any::<u64>()) {
                check_add_mul::<BaseFieldParams>(a, b);
            }

            #[test]
            fn scalar_field_matches_bignum(a in any::<u64>(), b in any::<u64>()) {
                check_add_mul::<ScalarFieldParams>(a, b);
            }
        }
    }
}
