//! Curve backends. Exactly one of them provides `Scalar` and `GroupElement`
//! to the rest of the crate.

#[cfg(feature = "ristretto255")]
mod ristretto255;

#[cfg(feature = "ristretto255")]
pub use self::ristretto255::{GroupElement, Scalar};

#[cfg(all(feature = "p256", not(feature = "ristretto255")))]
mod p256r1;

#[cfg(all(feature = "p256", not(feature = "ristretto255")))]
pub use self::p256r1::{GroupElement, Scalar};

#[cfg(not(any(feature = "p256", feature = "ristretto255")))]
compile_error!("one of the `p256` or `ristretto255` features must be enabled");
