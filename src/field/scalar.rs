//! Montgomery parameters for the scalar field, `GF(n)`, where `n` is the
//! order of secp256k1's base point.

use crate::limbs::Limbs;
use crate::montgomery::FieldParams;

/// Parameters for secp256k1's scalar field, in which private keys, nonces,
/// and signature components live.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarFieldParams;

impl FieldParams for ScalarFieldParams {
    const MODULUS: Limbs = [
        0xD036_4141,
        0xBFD2_5E8C,
        0xAF48_A03B,
        0xBAAE_DCE6,
        0xFFFF_FFFE,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
    ];
    const MU: u32 = 0x5588_B13F;
    const R: Limbs = [
        801_750_719,
        1_076_732_275,
        1_354_194_884,
        1_162_945_305,
        1,
        0,
        0,
        0,
    ];
    const R2: Limbs = [
        0x67D7_D140,
        0x896C_F214,
        0x0E7C_F878,
        0x7414_96C2,
        0x5BCD_07C6,
        0xE697_F5E4,
        0x81C6_9BC5,
        0x9D67_1CD5,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ScalarFp;

    #[test]
    fn one_round_trips() {
        let one = ScalarFp::one();
        let bytes = one.to_bytes();
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(bytes, expected);
    }

    #[test]
    fn modulus_reduces_to_zero() {
        use crate::limbs;
        let bytes = limbs::to_be_bytes(&ScalarFieldParams::MODULUS);
        assert!(bool::from(ScalarFp::from_bytes(&bytes).is_none()));
    }
}
