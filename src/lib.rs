//! A from-scratch, pure-Rust implementation of the secp256k1 elliptic curve
//! and the ECDSA signature scheme.
//!
//! The crate is organized bottom-up:
//!
//! - [`limbs`] - 32-bit limb primitives (`adc`/`sbb`/`mac`).
//! - [`montgomery`] - the generic CIOS Montgomery multiplication engine.
//! - [`field`] - `Fp<P>`, the Montgomery-form field element, instantiated
//!   as [`field::BaseFp`] (mod *p*) and [`field::ScalarFp`] (mod *n*).
//! - [`point`] - projective and affine curve points, with the complete
//!   Renes-Costello-Batina addition formulae.
//! - [`ecdsa`] - key generation, signing, and verification.
//!
//! Hashing, randomness, and serialization are treated as external
//! collaborators: callers supply an [`rand_core`] generator and reduce
//! their own message digest to 32 bytes before calling [`ecdsa::sign`] or
//! [`ecdsa::verify`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod digest;
pub mod ecdsa;
pub mod error;
pub mod field;
pub mod limbs;
pub mod montgomery;
pub mod point;
pub mod rng;

pub use error::{Error, Result};
pub use field::{BaseFp, ScalarFp};
pub use point::{AffinePoint, ProjectivePoint};
