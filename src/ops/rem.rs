use crate::decimal::Decimal;
use crate::error::Error;
use crate::ops::common::{exceeds_value_range, pow10_wide, with_sign};

use core::cmp::Ordering;

/// Modulo as `lhs − trunc(lhs / rhs) · rhs`, computed at the big tier on
/// aligned magnitudes. The result carries the sign of the dividend and the
/// larger of the two scales.
pub(crate) fn rem_impl(lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, Error> {
    let rhs_big = rhs.coeff_big();
    if rhs_big.is_zero() {
        return Err(Error::DivByZero);
    }
    let lhs_big = lhs.coeff_big();
    if lhs_big.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let negative = lhs_big.is_negative();
    let mut l = lhs_big.abs().widen();
    let mut r = rhs_big.abs().widen();
    let scale = match lhs.scale().cmp(&rhs.scale()) {
        Ordering::Equal => lhs.scale(),
        Ordering::Less => {
            l = l.mul(&pow10_wide(rhs.scale() - lhs.scale()));
            rhs.scale()
        }
        Ordering::Greater => {
            r = r.mul(&pow10_wide(lhs.scale() - rhs.scale()));
            lhs.scale()
        }
    };

    let (_, rem) = l.divrem(&r);
    // |rem| is bounded by both operands' aligned magnitudes, one of which
    // is an unscaled in-range coefficient.
    debug_assert!(!exceeds_value_range(&rem));
    Ok(Decimal::from_parts_wide(with_sign(rem, negative), scale))
}
