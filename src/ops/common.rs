use core::cmp::Ordering;

use num_traits::{CheckedAdd, CheckedMul, PrimInt, Signed};

use crate::bigint::{Int320, Int704, MAX_COEFFICIENT_WIDE};
use crate::constants::{MAX_SCALE, POWERS_10, POWERS_10_128};

/// The primitive coefficient types the small and mid tiers compute in.
/// `pow10` returning `None` is the "this tier cannot even hold the scale
/// factor" signal, treated exactly like an overflowing multiplication.
pub(crate) trait ScaledInt: PrimInt + Signed + CheckedAdd + CheckedMul {
    const TEN: Self;
    const FIVE: Self;

    fn pow10(exp: u32) -> Option<Self>;
}

impl ScaledInt for i64 {
    const TEN: Self = 10;
    const FIVE: Self = 5;

    fn pow10(exp: u32) -> Option<Self> {
        POWERS_10.get(exp as usize).copied()
    }
}

impl ScaledInt for i128 {
    const TEN: Self = 10;
    const FIVE: Self = 5;

    fn pow10(exp: u32) -> Option<Self> {
        POWERS_10_128.get(exp as usize).copied()
    }
}

/// Aligns both coefficients to the larger scale and adds. `None` means the
/// tier overflowed and the caller should promote and retry.
pub(crate) fn add_integral<T: ScaledInt>(
    lhs: T,
    lhs_scale: u32,
    rhs: T,
    rhs_scale: u32,
) -> Option<(T, u32)> {
    let (lhs, rhs, scale) = match lhs_scale.cmp(&rhs_scale) {
        Ordering::Equal => (lhs, rhs, lhs_scale),
        Ordering::Less => (
            lhs.checked_mul(&T::pow10(rhs_scale - lhs_scale)?)?,
            rhs,
            rhs_scale,
        ),
        Ordering::Greater => (
            lhs,
            rhs.checked_mul(&T::pow10(lhs_scale - rhs_scale)?)?,
            lhs_scale,
        ),
    };
    Some((lhs.checked_add(&rhs)?, scale))
}

/// Multiplies at a primitive tier. The result scale is the scale sum,
/// rounded back to `MAX_SCALE` (half away from zero) when it exceeds it,
/// and the result coefficient is trailing-zero trimmed. `None` means the
/// tier overflowed and the caller should promote and retry.
///
/// When `trim_operands` is set and the raw product overflows, trailing
/// zeros are first stripped from the operands themselves (`1.200 × 2.50`
/// carries no more information than `1.2 × 2.5`) and the product retried.
/// Worth it only above 64 bits, where the alternative is a big-integer
/// multiplication rather than a cheap widening.
pub(crate) fn mul_integral<T: ScaledInt>(
    mut lhs: T,
    mut lhs_scale: u32,
    mut rhs: T,
    mut rhs_scale: u32,
    trim_operands: bool,
) -> Option<(T, u32)> {
    let mut product = lhs.checked_mul(&rhs);
    if product.is_none() && trim_operands {
        let mut trimmed = false;
        while lhs_scale > 0 && (lhs % T::TEN).is_zero() {
            lhs = lhs / T::TEN;
            lhs_scale -= 1;
            trimmed = true;
        }
        while rhs_scale > 0 && (rhs % T::TEN).is_zero() {
            rhs = rhs / T::TEN;
            rhs_scale -= 1;
            trimmed = true;
        }
        if trimmed {
            product = lhs.checked_mul(&rhs);
        }
    }
    let mut product = product?;
    let mut scale = lhs_scale + rhs_scale;
    if scale > MAX_SCALE {
        let delta = scale - MAX_SCALE;
        let negative = product < T::zero();
        if delta > 1 {
            product = product / T::pow10(delta - 1)?;
        }
        let rem = (product % T::TEN).abs();
        product = product / T::TEN;
        if rem >= T::FIVE {
            product = if negative {
                product - T::one()
            } else {
                product + T::one()
            };
        }
        scale = MAX_SCALE;
    }
    Some(trim_integral(product, scale))
}

/// Strips trailing zero digits, reducing the scale in step. Zero drains to
/// scale 0, its canonical form.
pub(crate) fn trim_integral<T: ScaledInt>(mut value: T, mut scale: u32) -> (T, u32) {
    while scale > 0 && (value % T::TEN).is_zero() {
        value = value / T::TEN;
        scale -= 1;
    }
    (value, scale)
}

/// Trailing-zero trim on a non-negative big intermediate.
pub(crate) fn trim_wide(mut value: Int704, mut scale: u32) -> (Int704, u32) {
    debug_assert!(!value.is_negative());
    while scale > 0 {
        let (q, rem) = value.divrem_u64(10);
        if rem != 0 {
            break;
        }
        value = q;
        scale -= 1;
    }
    (value, scale)
}

pub(crate) fn with_sign(value: Int704, negative: bool) -> Int704 {
    if negative {
        value.neg()
    } else {
        value
    }
}

pub(crate) fn pow10_wide(exp: u32) -> Int704 {
    Int320::pow10(exp).widen()
}

/// `true` when a big intermediate falls outside ±(10^96 − 1).
pub(crate) fn exceeds_value_range(value: &Int704) -> bool {
    value.cmp_abs(&MAX_COEFFICIENT_WIDE) == Ordering::Greater
}

/// Tie-break for comparisons that had to truncate one operand to align
/// scales. Truncation only happens when exact alignment would overflow the
/// working tier, so a seeming tie means the truncated side still carries
/// nonzero hidden digits: it is strictly larger when positive and strictly
/// smaller when negative.
pub(crate) fn cmp_integral_with_delta<T: ScaledInt>(
    lhs: T,
    rhs: T,
    truncated_rhs: bool,
) -> Ordering {
    match lhs.cmp(&rhs) {
        Ordering::Equal => {
            let negative = lhs < T::zero();
            if truncated_rhs != negative {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        ord => ord,
    }
}
