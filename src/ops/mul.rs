use crate::bigint::Int320;
use crate::constants::MAX_SCALE;
use crate::decimal::Decimal;
use crate::error::Error;
use crate::ops::common::{
    exceeds_value_range, mul_integral, pow10_wide, trim_wide, with_sign,
};

pub(crate) fn mul_impl(lhs: &Decimal, rhs: &Decimal) -> Result<Decimal, Error> {
    if let (Some(l), Some(r)) = (lhs.coeff_i64(), rhs.coeff_i64()) {
        if let Some((coeff, scale)) = mul_integral(l, lhs.scale(), r, rhs.scale(), false) {
            return Ok(Decimal::from_parts_i64(coeff, scale));
        }
    }
    if let (Some(l), Some(r)) = (lhs.coeff_i128(), rhs.coeff_i128()) {
        // Trailing-zero trimming of the operands is the last chance to
        // avoid the big tier, so it is worth the divisions here.
        if let Some((coeff, scale)) = mul_integral(l, lhs.scale(), r, rhs.scale(), true) {
            return Ok(Decimal::from_parts_i128(coeff, scale));
        }
    }
    mul_big(&lhs.coeff_big(), lhs.scale(), &rhs.coeff_big(), rhs.scale())
}

fn mul_big(lhs: &Int320, lhs_scale: u32, rhs: &Int320, rhs_scale: u32) -> Result<Decimal, Error> {
    let product = lhs.widen().mul(&rhs.widen());
    let negative = product.is_negative();
    let mut mag = product.abs();
    let mut scale = lhs_scale + rhs_scale;

    if scale > MAX_SCALE {
        // Round the excess fractional digits away: drop all but one of
        // them, then let the last digit decide, half away from zero.
        let delta = scale - MAX_SCALE;
        if delta > 1 {
            mag = mag.divrem(&pow10_wide(delta - 1)).0;
        }
        let (q, rem) = mag.divrem_u64(10);
        mag = if rem >= 5 { q.add_u64(1) } else { q };
        scale = MAX_SCALE;
    }

    if exceeds_value_range(&mag) {
        return Err(Error::MulOverflow);
    }
    let (mag, scale) = trim_wide(mag, scale);
    Ok(Decimal::from_parts_wide(with_sign(mag, negative), scale))
}
