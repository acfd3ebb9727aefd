//! Elliptic curve points (L3): secp256k1's short Weierstrass curve
//! `y^2 = x^3 + 7` over the base field, in projective and affine
//! coordinates, with the Renes-Costello-Batina complete addition formulae.

use crate::field::{BaseFp, ScalarFp};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// secp256k1's curve equation constant, `b = 7`.
const CURVE_EQUATION_B_SINGLE: u32 = 7;

/// A point on secp256k1 in affine `(x, y)` coordinates.
///
/// The point at infinity is represented by an explicit `infinity` flag
/// rather than an out-of-range `(x, y)` pair, so affine coordinates stay
/// meaningful (and comparable) even for the identity.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint {
    x: BaseFp,
    y: BaseFp,
    infinity: Choice,
}

impl AffinePoint {
    /// Returns the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: BaseFp::zero(),
            y: BaseFp::zero(),
            infinity: Choice::from(1),
        }
    }

    /// Returns a finite affine point, without checking that it lies on the
    /// curve.
    pub fn new_unchecked(x: BaseFp, y: BaseFp) -> Self {
        Self {
            x,
            y,
            infinity: Choice::from(0),
        }
    }

    /// secp256k1's base point, `G`.
    pub fn generator() -> Self {
        generator_affine()
    }

    /// The point's `x` coordinate. Meaningless for the identity.
    pub fn x(&self) -> BaseFp {
        self.x
    }

    /// The point's `y` coordinate. Meaningless for the identity.
    pub fn y(&self) -> BaseFp {
        self.y
    }

    /// Returns `Choice(1)` if this is the point at infinity.
    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    /// Checks that this point satisfies the curve equation `y^2 = x^3 + 7`.
    pub fn is_on_curve(&self) -> Choice {
        let lhs = self.y.square();
        let b = BaseFp::one().mul_single(CURVE_EQUATION_B_SINGLE);
        let rhs = self.x.square().mul(&self.x).add(&b);
        self.infinity | lhs.ct_eq(&rhs)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: self.y.neg(),
            infinity: self.infinity,
        }
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: BaseFp::conditional_select(&a.x, &b.x, choice),
            y: BaseFp::conditional_select(&a.y, &b.y, choice),
            infinity: Choice::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_identity = self.infinity & other.infinity;
        let both_finite = !self.infinity & !other.infinity;
        both_identity | (both_finite & self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

/// A point on secp256k1 in projective `(X : Y : Z)` coordinates.
///
/// The point at infinity is `(0 : 1 : 0)`; every other representative has
/// `Z != 0` and corresponds to the affine point `(X/Z, Y/Z)`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    x: BaseFp,
    y: BaseFp,
    z: BaseFp,
}

impl ProjectivePoint {
    /// Returns the point at infinity, `(0 : 1 : 0)`.
    pub fn identity() -> Self {
        Self {
            x: BaseFp::zero(),
            y: BaseFp::one(),
            z: BaseFp::zero(),
        }
    }

    /// secp256k1's base point, `G`, in projective form.
    pub fn generator() -> Self {
        Self::from_affine(&generator_affine())
    }

    /// Lifts an affine point into projective coordinates.
    pub fn from_affine(p: &AffinePoint) -> Self {
        let finite = Self {
            x: p.x,
            y: p.y,
            z: BaseFp::one(),
        };
        Self::conditional_select(&finite, &Self::identity(), p.is_identity())
    }

    /// Returns `Choice(1)` if this is the point at infinity.
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Converts back to affine coordinates, normalizing by `Z^-1`.
    ///
    /// Returns [`AffinePoint::identity()`] if `self` is the point at infinity
    /// (in which case `Z` has no inverse).
    pub fn to_affine(&self) -> AffinePoint {
        match Option::<BaseFp>::from(self.z.invert()) {
            Some(zinv) => AffinePoint::new_unchecked(self.x.mul(&zinv), self.y.mul(&zinv)),
            None => AffinePoint::identity(),
        }
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: self.y.neg(),
            z: self.z,
        }
    }

    /// Point addition, Renes-Costello-Batina Algorithm 7 (complete formula
    /// for `a = 0` short Weierstrass curves).
    pub fn add(&self, other: &Self) -> Self {
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2, z2) = (other.x, other.y, other.z);

        let xx = x1.mul(&x2);
        let yy = y1.mul(&y2);
        let zz = z1.mul(&z2);

        let n_xx_yy = xx.add(&yy).neg();
        let n_yy_zz = yy.add(&zz).neg();
        let n_xx_zz = xx.add(&zz).neg();

        let xy_pairs = x1.add(&y1).mul(&x2.add(&y2)).add(&n_xx_yy);
        let yz_pairs = y1.add(&z1).mul(&y2.add(&z2)).add(&n_yy_zz);
        let xz_pairs = x1.add(&z1).mul(&x2.add(&z2)).add(&n_xx_zz);

        let bzz = zz.mul_single(CURVE_EQUATION_B_SINGLE);
        let bzz3 = bzz.double().add(&bzz);

        let yy_m_bzz3 = yy.add(&bzz3.neg());
        let yy_p_bzz3 = yy.add(&bzz3);

        let byz = yz_pairs.mul_single(CURVE_EQUATION_B_SINGLE);
        let byz3 = byz.double().add(&byz);

        let xx3 = xx.double().add(&xx);
        let bxx9 = xx3.double().add(&xx3).mul_single(CURVE_EQUATION_B_SINGLE);

        let new_x = xy_pairs.mul(&yy_m_bzz3).add(&byz3.mul(&xz_pairs).neg());
        let new_y = yy_p_bzz3.mul(&yy_m_bzz3).add(&bxx9.mul(&xz_pairs));
        let new_z = yz_pairs.mul(&yy_p_bzz3).add(&xx3.mul(&xy_pairs));

        Self {
            x: new_x,
            y: new_y,
            z: new_z,
        }
    }

    /// Mixed addition of a projective and an affine point, Renes-Costello-
    /// Batina Algorithm 8.
    pub fn add_mixed(&self, other: &AffinePoint) -> Self {
        let (x1, y1, z1) = (self.x, self.y, self.z);
        let (x2, y2) = (other.x, other.y);

        let xx = x1.mul(&x2);
        let yy = y1.mul(&y2);
        let xy_pairs = x1.add(&y1).mul(&x2.add(&y2)).add(&xx.add(&yy).neg());
        let yz_pairs = y2.mul(&z1).add(&y1);
        let xz_pairs = x2.mul(&z1).add(&x1);

        let bzz = z1.mul_single(CURVE_EQUATION_B_SINGLE);
        let bzz3 = bzz.double().add(&bzz);

        let yy_m_bzz3 = yy.add(&bzz3.neg());
        let yy_p_bzz3 = yy.add(&bzz3);

        let byz = yz_pairs.mul_single(CURVE_EQUATION_B_SINGLE);
        let byz3 = byz.double().add(&byz);

        let xx3 = xx.double().add(&xx);
        let bxx9 = xx3.double().add(&xx3).mul_single(CURVE_EQUATION_B_SINGLE);

        let ret = Self {
            x: xy_pairs.mul(&yy_m_bzz3).add(&byz3.mul(&xz_pairs).neg()),
            y: yy_p_bzz3.mul(&yy_m_bzz3).add(&bxx9.mul(&xz_pairs)),
            z: yz_pairs.mul(&yy_p_bzz3).add(&xx3.mul(&xy_pairs)),
        };
        Self::conditional_select(&ret, self, other.is_identity())
    }

    /// Point doubling, Renes-Costello-Batina Algorithm 9.
    pub fn double(&self) -> Self {
        let (x, y, z) = (self.x, self.y, self.z);

        let yy = y.square();
        let zz = z.square();
        let xy2 = x.mul(&y).double();

        let bzz = zz.mul_single(CURVE_EQUATION_B_SINGLE);
        let bzz3 = bzz.double().add(&bzz);
        let bzz9 = bzz3.double().add(&bzz3);

        let yy_m_bzz9 = yy.add(&bzz9.neg());
        let yy_p_bzz3 = yy.add(&bzz3);

        let yy_zz = yy.mul(&zz);
        let yy_zz8 = yy_zz.double().double().double();
        let t = yy_zz8.double().add(&yy_zz8).mul_single(CURVE_EQUATION_B_SINGLE);

        Self {
            x: xy2.mul(&yy_m_bzz9),
            y: yy_m_bzz9.mul(&yy_p_bzz3).add(&t),
            z: yy.mul(&y).mul(&z).double().double().double(),
        }
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Scalar multiplication, `scalar * self`.
    ///
    /// Implemented as plain LSB-first double-and-add. This is *not*
    /// constant-time: the sequence of doublings and conditional additions
    /// depends on the scalar's bit pattern, which is unsuitable for secret
    /// scalars in a production signer but keeps the arithmetic core
    /// reviewable and simple.
    pub fn mul(&self, scalar: &ScalarFp) -> Self {
        let bytes = scalar.to_bytes();
        let mut acc = Self::identity();
        let mut base = *self;
        for byte in bytes.iter().rev() {
            for bit in 0..8 {
                if (byte >> bit) & 1 == 1 {
                    acc = acc.add(&base);
                }
                base = base.double();
            }
        }
        acc
    }

    /// Checks whether `self` and `other` represent the same point, without
    /// normalizing either to affine coordinates.
    ///
    /// Projective representatives of the same point differ by a nonzero
    /// scalar on `(X, Y, Z)`, so equality is tested by cross-multiplication:
    /// `X1*Z2 == X2*Z1` and `Y1*Z2 == Y2*Z1`.
    pub fn eq_projective(&self, other: &Self) -> Choice {
        let both_identity = self.is_identity() & other.is_identity();
        let either_identity = self.is_identity() | other.is_identity();
        let x_eq = self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z));
        let y_eq = self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z));
        both_identity | (!either_identity & x_eq & y_eq)
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: BaseFp::conditional_select(&a.x, &b.x, choice),
            y: BaseFp::conditional_select(&a.y, &b.y, choice),
            z: BaseFp::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.eq_projective(other)
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint {}

fn generator_affine() -> AffinePoint {
    let x = BaseFp::from_bytes(&[
        0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b,
        0x07, 0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8,
        0x17, 0x98,
    ])
    .unwrap();
    let y = BaseFp::from_bytes(&[
        0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08,
        0xa8, 0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10,
        0xd4, 0xb8,
    ])
    .unwrap();
    AffinePoint::new_unchecked(x, y)
}
