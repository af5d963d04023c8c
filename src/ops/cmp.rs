use crate::bigint::Int320;
use crate::constants::POWERS_10_128;
use crate::decimal::Decimal;
use crate::ops::common::{cmp_integral_with_delta, pow10_wide, ScaledInt};

use core::cmp::Ordering;

/// Three-way comparison. Sign mismatches settle immediately; on matching
/// signs the operands are compared at the working tier after scale
/// alignment, escalating a tier when alignment would overflow and falling
/// back to truncation with a tie-break only once no wider tier is left.
pub(crate) fn cmp_impl(lhs: &Decimal, rhs: &Decimal) -> Ordering {
    match (lhs.is_sign_negative(), rhs.is_sign_negative()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    if let (Some(l), Some(r)) = (lhs.coeff_i64(), rhs.coeff_i64()) {
        return cmp_i64(l, lhs.scale(), r, rhs.scale());
    }
    if let (Some(l), Some(r)) = (lhs.coeff_i128(), rhs.coeff_i128()) {
        return cmp_i128(l, lhs.scale(), r, rhs.scale());
    }
    cmp_big(&lhs.coeff_big(), lhs.scale(), &rhs.coeff_big(), rhs.scale())
}

fn cmp_i64(lhs: i64, lhs_scale: u32, rhs: i64, rhs_scale: u32) -> Ordering {
    if lhs_scale == rhs_scale {
        return lhs.cmp(&rhs);
    }
    // Try to align within 64 bits; any overflow escalates to 128 bits,
    // where a pair of 64-bit coefficients may still need the truncating
    // fallback for extreme scale differences.
    if rhs_scale > lhs_scale {
        if let Some(p) = i64::pow10(rhs_scale - lhs_scale) {
            if let Some(scaled) = lhs.checked_mul(p) {
                return scaled.cmp(&rhs);
            }
        }
    } else if let Some(p) = i64::pow10(lhs_scale - rhs_scale) {
        if let Some(scaled) = rhs.checked_mul(p) {
            return lhs.cmp(&scaled);
        }
    }
    cmp_i128(i128::from(lhs), lhs_scale, i128::from(rhs), rhs_scale)
}

fn cmp_i128(lhs: i128, lhs_scale: u32, rhs: i128, rhs_scale: u32) -> Ordering {
    if lhs_scale == rhs_scale {
        return lhs.cmp(&rhs);
    }
    if rhs_scale > lhs_scale {
        let p = POWERS_10_128[(rhs_scale - lhs_scale) as usize];
        if let Some(scaled) = lhs.checked_mul(p) {
            return scaled.cmp(&rhs);
        }
        // Truncate the other side instead and break any tie by the
        // precision it lost.
        cmp_integral_with_delta(lhs, rhs / p, true)
    } else {
        let p = POWERS_10_128[(lhs_scale - rhs_scale) as usize];
        if let Some(scaled) = rhs.checked_mul(p) {
            return lhs.cmp(&scaled);
        }
        cmp_integral_with_delta(lhs / p, rhs, false)
    }
}

fn cmp_big(lhs: &Int320, lhs_scale: u32, rhs: &Int320, rhs_scale: u32) -> Ordering {
    let lhs = lhs.widen();
    let rhs = rhs.widen();
    // Intermediate capacity fits any aligned coefficient, so no tie-break
    // is ever needed here.
    match lhs_scale.cmp(&rhs_scale) {
        Ordering::Equal => lhs.cmp(&rhs),
        Ordering::Less => lhs.mul(&pow10_wide(rhs_scale - lhs_scale)).cmp(&rhs),
        Ordering::Greater => lhs.cmp(&rhs.mul(&pow10_wide(lhs_scale - rhs_scale))),
    }
}
