//! Error type.

use core::fmt::{self, Display};

/// Opaque error returned by fallible operations in this crate.
///
/// Deliberately carries no variants: callers of a cryptographic primitive
/// should not be able to branch on *why* a signature failed to verify or a
/// byte string failed to decode into a field element.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Error;

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("secp256k1-core error")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;
