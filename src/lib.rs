//! Fixed-point arbitrary-precision signed decimal arithmetic.
//!
//! A [`Decimal`] is a signed integer coefficient of up to 96 decimal digits
//! paired with a per-value scale of up to 30 fractional digits. Values are
//! stored in one of three tiers — a 64-bit integer, a 128-bit integer, or a
//! fixed-capacity big integer — and arithmetic promotes between tiers
//! transparently on overflow, so common magnitudes compute at primitive
//! speed while the full range stays available. There is no heap allocation
//! anywhere on the arithmetic path.
//!
//! Every fallible operation exists in two forms: a quiet `try_*` method
//! returning [`Error`], and a loud operator (`+`, `-`, `*`, `/`, `%`) that
//! panics with the same diagnostic. Results are exact except where the
//! scale limit forces rounding, which is always half away from zero.
//!
//! ```
//! use bigdec::prelude::*;
//!
//! let a: Decimal = "0.4".parse()?;
//! let b: Decimal = "0.5".parse()?;
//! assert_eq!((a * b).to_string(), "0.2");
//! assert_eq!((Decimal::ONE / Decimal::from(3)).to_string(), "0.3333");
//! # Ok::<(), bigdec::Error>(())
//! ```
#![forbid(unsafe_code)]
#![deny(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
extern crate alloc;

mod bigint;
mod constants;
mod decimal;
mod error;
mod ops;
mod str;

// We purposely place this here for documentation ordering
mod arithmetic_impls;

#[cfg(feature = "proptest")]
mod proptest;
#[cfg(feature = "serde")]
mod serde;

pub use constants::{DIV_INCR_SCALE, MAX_PRECISION, MAX_SCALE};
pub use decimal::Decimal;
pub use error::Error;

/// A convenience module appropriate for glob imports (`use bigdec::prelude::*;`).
pub mod prelude {
    pub use crate::{Decimal, Error};
    pub use core::str::FromStr;
    pub use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};
}

/// Shortcut for `core::result::Result<T, bigdec::Error>`. Useful to
/// distinguish between `bigdec` and `std` types.
pub type Result<T> = core::result::Result<T, Error>;
