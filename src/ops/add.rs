use crate::decimal::Decimal;
use crate::error::Error;
use crate::ops::common::{add_integral, exceeds_value_range, pow10_wide};
use crate::bigint::Int320;

use core::cmp::Ordering;

/// Addition over the promotion ladder: compute at the narrowest tier both
/// operands fit, and on overflow recompute both operands one tier up. Only
/// exhaustion of the big tier is an error.
pub(crate) fn add_impl(lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, Error> {
    if let (Some(l), Some(r)) = (lhs.coeff_i64(), rhs.coeff_i64()) {
        if let Some((coeff, scale)) = add_integral(l, lhs.scale(), r, rhs.scale()) {
            return Ok(Decimal::from_parts_i64(coeff, scale));
        }
    }
    if let (Some(l), Some(r)) = (lhs.coeff_i128(), rhs.coeff_i128()) {
        if let Some((coeff, scale)) = add_integral(l, lhs.scale(), r, rhs.scale()) {
            return Ok(Decimal::from_parts_i128(coeff, scale));
        }
    }
    add_big(&lhs.coeff_big(), lhs.scale(), &rhs.coeff_big(), rhs.scale())
}

pub(crate) fn sub_impl(lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, Error> {
    add_impl(lhs, &rhs.neg_value())
}

fn add_big(lhs: &Int320, lhs_scale: u32, rhs: &Int320, rhs_scale: u32) -> Result<Decimal, Error> {
    let lhs = lhs.widen();
    let rhs = rhs.widen();
    let (lhs, rhs, scale) = match lhs_scale.cmp(&rhs_scale) {
        Ordering::Equal => (lhs, rhs, lhs_scale),
        Ordering::Less => (lhs.mul(&pow10_wide(rhs_scale - lhs_scale)), rhs, rhs_scale),
        Ordering::Greater => (lhs, rhs.mul(&pow10_wide(lhs_scale - rhs_scale)), lhs_scale),
    };
    let sum = lhs.add(&rhs);
    if exceeds_value_range(&sum) {
        return Err(Error::AddSubOverflow);
    }
    Ok(Decimal::from_parts_wide(sum, scale))
}
