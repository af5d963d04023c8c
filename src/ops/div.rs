use crate::constants::{DIV_INCR_SCALE, MAX_SCALE};
use crate::decimal::Decimal;
use crate::error::Error;
use crate::ops::common::{exceeds_value_range, pow10_wide, trim_wide, with_sign};

/// Division runs unconditionally at the big tier: the scale extension makes
/// primitive-range results rare, and the division itself dominates whatever
/// the tier selection could save.
///
/// The dividend is pre-shifted by `rhs_scale + DIV_INCR_SCALE + 1` decimal
/// digits so that after the integer division the result carries one digit
/// more than the target scale; that digit then decides the rounding, half
/// away from zero.
pub(crate) fn div_impl(lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, Error> {
    let rhs_big = rhs.coeff_big();
    if rhs_big.is_zero() {
        return Err(Error::DivByZero);
    }
    let lhs_big = lhs.coeff_big();
    if lhs_big.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let lhs_scale = lhs.scale();
    let rhs_scale = rhs.scale();
    let negative = lhs_big.is_negative() != rhs_big.is_negative();

    let dividend = lhs_big
        .abs()
        .widen()
        .mul(&pow10_wide(rhs_scale + DIV_INCR_SCALE + 1));
    let mut quotient = dividend.divrem(&rhs_big.abs().widen()).0;

    if lhs_scale + DIV_INCR_SCALE > MAX_SCALE {
        // The extended scale overshot the maximum; drop the excess digits
        // before rounding so the result lands exactly on MAX_SCALE.
        quotient = quotient
            .divrem(&pow10_wide(lhs_scale + DIV_INCR_SCALE - MAX_SCALE))
            .0;
    }

    let (q, rem) = quotient.divrem_u64(10);
    quotient = if rem >= 5 { q.add_u64(1) } else { q };

    if exceeds_value_range(&quotient) {
        return Err(Error::DivOverflow);
    }
    let scale = MAX_SCALE.min(lhs_scale + DIV_INCR_SCALE);
    let (quotient, scale) = trim_wide(quotient, scale);
    Ok(Decimal::from_parts_wide(with_sign(quotient, negative), scale))
}
