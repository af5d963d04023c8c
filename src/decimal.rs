use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use num_traits::{Bounded, FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

use crate::bigint::{Int320, Int704, MAX_COEFFICIENT, MIN_COEFFICIENT};
use crate::constants::{MAX_I64_POW10, MAX_SCALE, POWERS_10, POWERS_10_128};
use crate::error::Error;
use crate::ops;
use crate::str::parse_str;

/// The coefficient storage tier. A value lives in the narrowest tier the
/// constructing operation managed to complete in, but the representation is
/// not canonical: the same numeric value may legally be held in any tier
/// wide enough, and every observable operation treats such values alike.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Coefficient {
    Small(i64),
    Mid(i128),
    Big(Int320),
}

/// A fixed-point decimal number with up to 96 significant digits and up to
/// 30 fractional digits.
///
/// A decimal is a plain value: a signed integer *coefficient* paired with a
/// *scale*, representing `coefficient · 10^(−scale)`. The scale is carried
/// per value, not fixed by a schema. Small values are kept in primitive
/// integer registers and only promoted to a fixed-capacity big integer when
/// an operation overflows, so there is no heap allocation anywhere on the
/// arithmetic path.
///
/// ```
/// use bigdec::Decimal;
/// use core::str::FromStr;
///
/// let price = Decimal::from_str("18.99")?;
/// let quantity = Decimal::from(3);
/// assert_eq!((price * quantity).to_string(), "56.97");
/// # Ok::<(), bigdec::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct Decimal {
    coeff: Coefficient,
    scale: u8,
}

impl Decimal {
    /// The decimal `0`.
    pub const ZERO: Decimal = Decimal {
        coeff: Coefficient::Small(0),
        scale: 0,
    };
    /// The decimal `1`.
    pub const ONE: Decimal = Decimal {
        coeff: Coefficient::Small(1),
        scale: 0,
    };
    /// The decimal `2`.
    pub const TWO: Decimal = Decimal {
        coeff: Coefficient::Small(2),
        scale: 0,
    };
    /// The decimal `10`.
    pub const TEN: Decimal = Decimal {
        coeff: Coefficient::Small(10),
        scale: 0,
    };
    /// The largest representable decimal, `10^96 − 1`.
    pub const MAX: Decimal = Decimal {
        coeff: Coefficient::Big(MAX_COEFFICIENT),
        scale: 0,
    };
    /// The smallest representable decimal, `−(10^96 − 1)`.
    pub const MIN: Decimal = Decimal {
        coeff: Coefficient::Big(MIN_COEFFICIENT),
        scale: 0,
    };

    /// Returns a decimal with coefficient `num` and the given scale.
    ///
    /// # Panics
    ///
    /// Panics when `scale` exceeds the maximum scale of 30. Use
    /// [`Decimal::try_new`] for explicit error handling.
    ///
    /// # Example
    ///
    /// ```
    /// use bigdec::Decimal;
    /// let pi = Decimal::new(3141, 3);
    /// assert_eq!(pi.to_string(), "3.141");
    /// ```
    #[must_use]
    pub fn new(num: i64, scale: u32) -> Decimal {
        match Decimal::try_new(num, scale) {
            Ok(d) => d,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible form of [`Decimal::new`].
    pub fn try_new(num: i64, scale: u32) -> crate::Result<Decimal> {
        if scale > MAX_SCALE {
            return Err(Error::ScaleOverflow);
        }
        Ok(Decimal::from_parts_i64(num, scale))
    }

    /// Returns a decimal with a 128-bit coefficient and the given scale.
    ///
    /// # Panics
    ///
    /// Panics when `scale` exceeds the maximum scale of 30. Use
    /// [`Decimal::try_from_i128_with_scale`] for explicit error handling.
    #[must_use]
    pub fn from_i128_with_scale(num: i128, scale: u32) -> Decimal {
        match Decimal::try_from_i128_with_scale(num, scale) {
            Ok(d) => d,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible form of [`Decimal::from_i128_with_scale`].
    pub fn try_from_i128_with_scale(num: i128, scale: u32) -> crate::Result<Decimal> {
        if scale > MAX_SCALE {
            return Err(Error::ScaleOverflow);
        }
        Ok(Decimal::from_parts_i128(num, scale))
    }

    /// Returns the scale of the decimal, i.e. the number of digits to the
    /// right of the decimal point.
    ///
    /// ```
    /// use bigdec::Decimal;
    /// assert_eq!(Decimal::new(1234, 2).scale(), 2);
    /// ```
    pub fn scale(&self) -> u32 {
        u32::from(self.scale)
    }

    /// Returns `true` if the decimal is strictly less than zero.
    pub fn is_sign_negative(&self) -> bool {
        match self.coeff {
            Coefficient::Small(v) => v < 0,
            Coefficient::Mid(v) => v < 0,
            Coefficient::Big(b) => b.is_negative(),
        }
    }

    /// Returns `true` if the decimal is greater than or equal to zero.
    pub fn is_sign_positive(&self) -> bool {
        !self.is_sign_negative()
    }

    /// Returns `true` if the decimal is zero, at any scale.
    pub fn is_zero(&self) -> bool {
        match self.coeff {
            Coefficient::Small(v) => v == 0,
            Coefficient::Mid(v) => v == 0,
            Coefficient::Big(b) => b.is_zero(),
        }
    }

    /// Returns `true` if the decimal has no fractional component.
    ///
    /// ```
    /// use bigdec::Decimal;
    /// assert!(Decimal::new(12300, 2).is_integer());
    /// assert!(!Decimal::new(12301, 2).is_integer());
    /// ```
    pub fn is_integer(&self) -> bool {
        self.normalize().scale == 0
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Decimal {
        if self.is_sign_negative() {
            self.neg_value()
        } else {
            *self
        }
    }

    /// Strips trailing zero digits from the coefficient, reducing the scale
    /// accordingly, and repacks into the narrowest tier that fits. The
    /// numeric value is unchanged.
    ///
    /// ```
    /// use bigdec::Decimal;
    /// let d = Decimal::new(12300, 4);
    /// assert_eq!(d.normalize().scale(), 2);
    /// assert_eq!(d, d.normalize());
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Decimal {
        match self.coeff {
            Coefficient::Small(v) => {
                let (v, scale) = ops::trim_integral(i128::from(v), self.scale());
                Decimal::from_parts_i128(v, scale)
            }
            Coefficient::Mid(v) => {
                let (v, scale) = ops::trim_integral(v, self.scale());
                Decimal::from_parts_i128(v, scale)
            }
            Coefficient::Big(b) => {
                let negative = b.is_negative();
                let (mag, scale) = ops::trim_wide(b.abs().widen(), self.scale());
                Decimal::from_parts_wide(ops::with_sign(mag, negative), scale)
            }
        }
    }

    pub(crate) fn neg_value(&self) -> Decimal {
        match self.coeff {
            Coefficient::Small(v) => Decimal::from_parts_i128(-i128::from(v), self.scale()),
            Coefficient::Mid(v) => match v.checked_neg() {
                Some(n) => Decimal::from_parts_i128(n, self.scale()),
                None => Decimal::from_big_with_scale(Int320::from_i128(v).neg(), self.scale()),
            },
            Coefficient::Big(b) => Decimal::from_big_with_scale(b.neg(), self.scale()),
        }
    }

    pub(crate) fn from_parts_i64(coeff: i64, scale: u32) -> Decimal {
        debug_assert!(scale <= MAX_SCALE);
        Decimal {
            coeff: Coefficient::Small(coeff),
            scale: scale as u8,
        }
    }

    pub(crate) fn from_parts_i128(coeff: i128, scale: u32) -> Decimal {
        debug_assert!(scale <= MAX_SCALE);
        match i64::try_from(coeff) {
            Ok(small) => Decimal {
                coeff: Coefficient::Small(small),
                scale: scale as u8,
            },
            Err(_) => Decimal {
                coeff: Coefficient::Mid(coeff),
                scale: scale as u8,
            },
        }
    }

    // Packs an in-range intermediate into the narrowest tier that fits.
    pub(crate) fn from_parts_wide(coeff: Int704, scale: u32) -> Decimal {
        match coeff.to_i128() {
            Some(v) => Decimal::from_parts_i128(v, scale),
            None => Decimal::from_big_with_scale(coeff.narrow(), scale),
        }
    }

    pub(crate) fn from_big_with_scale(coeff: Int320, scale: u32) -> Decimal {
        debug_assert!(scale <= MAX_SCALE);
        Decimal {
            coeff: Coefficient::Big(coeff),
            scale: scale as u8,
        }
    }

    pub(crate) fn coefficient(&self) -> &Coefficient {
        &self.coeff
    }

    // Tier accessors used by the promotion ladder: each yields the
    // coefficient only when the value is stored at (or below) that tier.
    pub(crate) fn coeff_i64(&self) -> Option<i64> {
        match self.coeff {
            Coefficient::Small(v) => Some(v),
            _ => None,
        }
    }

    pub(crate) fn coeff_i128(&self) -> Option<i128> {
        match self.coeff {
            Coefficient::Small(v) => Some(i128::from(v)),
            Coefficient::Mid(v) => Some(v),
            Coefficient::Big(_) => None,
        }
    }

    pub(crate) fn coeff_big(&self) -> Int320 {
        match self.coeff {
            Coefficient::Small(v) => Int320::from_i64(v),
            Coefficient::Mid(v) => Int320::from_i128(v),
            Coefficient::Big(b) => b,
        }
    }

    // Truncates toward zero to an integer, if it fits 128 bits.
    fn integral_i128(&self) -> Option<i128> {
        let scale = self.scale() as usize;
        match self.coeff {
            Coefficient::Small(v) => Some(i128::from(v) / POWERS_10_128[scale]),
            Coefficient::Mid(v) => Some(v / POWERS_10_128[scale]),
            Coefficient::Big(b) => {
                let (q, _) = b.widen().divrem(&Int320::pow10(self.scale()).widen());
                q.to_i128()
            }
        }
    }

    /// Builds a decimal from the shortest decimal rendering of an `f32`, so
    /// constructing from a float is identical to constructing from its
    /// string representation. Non-finite inputs are rejected.
    pub fn from_f32(n: f32) -> crate::Result<Decimal> {
        if !n.is_finite() {
            return Err(Error::InvalidArgument);
        }
        parse_str(&alloc::format!("{}", n))
    }

    /// Builds a decimal from the shortest decimal rendering of an `f64`.
    /// See [`Decimal::from_f32`].
    pub fn from_f64(n: f64) -> crate::Result<Decimal> {
        if !n.is_finite() {
            return Err(Error::InvalidArgument);
        }
        parse_str(&alloc::format!("{}", n))
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Decimal::ZERO
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Decimal) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Decimal) -> Ordering {
        ops::cmp_impl(self, other)
    }
}

// Equal values normalize to an identical representation, so hashing the
// normalized parts keeps Hash consistent with Eq across tiers and scales.
impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let n = self.normalize();
        n.scale.hash(state);
        match n.coeff {
            Coefficient::Small(v) => i128::from(v).hash(state),
            Coefficient::Mid(v) => v.hash(state),
            Coefficient::Big(b) => {
                b.is_negative().hash(state);
                let mut mag = b.abs();
                while !mag.is_zero() {
                    let (q, digit) = mag.divrem_u64(10);
                    digit.hash(state);
                    mag = q;
                }
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($T:ty),*) => {
        $(
            impl From<$T> for Decimal {
                fn from(t: $T) -> Self {
                    Decimal::from_parts_i128(t as i128, 0)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, i128);

impl From<u128> for Decimal {
    fn from(t: u128) -> Self {
        match i128::try_from(t) {
            Ok(v) => Decimal::from_parts_i128(v, 0),
            Err(_) => Decimal::from_big_with_scale(Int320::from_u128(t), 0),
        }
    }
}

impl TryFrom<f32> for Decimal {
    type Error = Error;

    fn try_from(value: f32) -> crate::Result<Decimal> {
        Decimal::from_f32(value)
    }
}

impl TryFrom<f64> for Decimal {
    type Error = Error;

    fn try_from(value: f64) -> crate::Result<Decimal> {
        Decimal::from_f64(value)
    }
}

impl TryFrom<Decimal> for i64 {
    type Error = Error;

    fn try_from(value: Decimal) -> crate::Result<i64> {
        let i = value.integral_i128().ok_or(Error::ValueOutOfRange)?;
        i64::try_from(i).map_err(|_| Error::ValueOutOfRange)
    }
}

impl TryFrom<Decimal> for u64 {
    type Error = Error;

    fn try_from(value: Decimal) -> crate::Result<u64> {
        if value.is_sign_negative() {
            return Err(Error::ValueOutOfRange);
        }
        let i = value.integral_i128().ok_or(Error::ValueOutOfRange)?;
        u64::try_from(i).map_err(|_| Error::ValueOutOfRange)
    }
}

impl TryFrom<Decimal> for i128 {
    type Error = Error;

    fn try_from(value: Decimal) -> crate::Result<i128> {
        value.integral_i128().ok_or(Error::ValueOutOfRange)
    }
}

impl TryFrom<Decimal> for u128 {
    type Error = Error;

    fn try_from(value: Decimal) -> crate::Result<u128> {
        if value.is_sign_negative() {
            return Err(Error::ValueOutOfRange);
        }
        match value.coeff {
            Coefficient::Small(v) => Ok(v as u128 / POWERS_10_128[value.scale() as usize] as u128),
            Coefficient::Mid(v) => Ok(v as u128 / POWERS_10_128[value.scale() as usize] as u128),
            Coefficient::Big(b) => {
                let (q, _) = b.widen().divrem(&Int320::pow10(value.scale()).widen());
                q.to_u128().ok_or(Error::ValueOutOfRange)
            }
        }
    }
}

impl Zero for Decimal {
    fn zero() -> Decimal {
        Decimal::ZERO
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

impl One for Decimal {
    fn one() -> Decimal {
        Decimal::ONE
    }
}

impl Bounded for Decimal {
    fn min_value() -> Decimal {
        Decimal::MIN
    }

    fn max_value() -> Decimal {
        Decimal::MAX
    }
}

impl Num for Decimal {
    type FromStrRadixErr = Error;

    fn from_str_radix(str: &str, radix: u32) -> crate::Result<Decimal> {
        if radix != 10 {
            return Err(Error::InvalidArgument);
        }
        parse_str(str)
    }
}

impl Signed for Decimal {
    fn abs(&self) -> Decimal {
        Decimal::abs(self)
    }

    fn abs_sub(&self, other: &Decimal) -> Decimal {
        if self <= other {
            Decimal::ZERO
        } else {
            *self - *other
        }
    }

    fn signum(&self) -> Decimal {
        if self.is_zero() {
            Decimal::ZERO
        } else if self.is_sign_negative() {
            Decimal::ONE.neg_value()
        } else {
            Decimal::ONE
        }
    }

    fn is_positive(&self) -> bool {
        !self.is_zero() && self.is_sign_positive()
    }

    fn is_negative(&self) -> bool {
        self.is_sign_negative()
    }
}

impl FromPrimitive for Decimal {
    fn from_i64(n: i64) -> Option<Decimal> {
        Some(n.into())
    }

    fn from_u64(n: u64) -> Option<Decimal> {
        Some(n.into())
    }

    fn from_i128(n: i128) -> Option<Decimal> {
        Some(n.into())
    }

    fn from_u128(n: u128) -> Option<Decimal> {
        Some(n.into())
    }

    fn from_f32(n: f32) -> Option<Decimal> {
        Decimal::from_f32(n).ok()
    }

    fn from_f64(n: f64) -> Option<Decimal> {
        Decimal::from_f64(n).ok()
    }
}

impl ToPrimitive for Decimal {
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(*self).ok()
    }

    fn to_i128(&self) -> Option<i128> {
        i128::try_from(*self).ok()
    }

    fn to_u128(&self) -> Option<u128> {
        u128::try_from(*self).ok()
    }

    fn to_f32(&self) -> Option<f32> {
        self.to_f64().map(|v| v as f32)
    }

    fn to_f64(&self) -> Option<f64> {
        let mut value = match self.coeff {
            Coefficient::Small(v) => v as f64,
            Coefficient::Mid(v) => v as f64,
            Coefficient::Big(b) => {
                let mag = b.mag_f64();
                if b.is_negative() {
                    -mag
                } else {
                    mag
                }
            }
        };
        // Divide the scale away in chunks to keep every divisor in range.
        let mut scale = self.scale();
        while scale > 0 {
            let s = scale.min(MAX_I64_POW10);
            value /= POWERS_10[s as usize] as f64;
            scale -= s;
        }
        Some(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_packs_results_into_the_narrowest_tier() {
        let d = Decimal::from_parts_i128(42, 0);
        assert!(matches!(d.coeff, Coefficient::Small(42)));
        let d = Decimal::from_parts_i128(i128::from(i64::MAX) + 1, 0);
        assert!(matches!(d.coeff, Coefficient::Mid(_)));
        let d = Decimal::from_parts_wide(Int320::pow10(40).widen(), 0);
        assert!(matches!(d.coeff, Coefficient::Big(_)));
        let d = Decimal::from_parts_wide(Int704::from_i64(-7), 5);
        assert!(matches!(d.coeff, Coefficient::Small(-7)));
    }

    #[test]
    fn it_normalizes_trailing_zeros() {
        let d = Decimal::new(123_000, 3);
        let n = d.normalize();
        assert_eq!(n.scale(), 0);
        assert_eq!(d, n);
        // zero canonicalizes to scale 0
        assert_eq!(Decimal::new(0, 7).normalize().scale(), 0);
    }

    #[test]
    fn it_converts_to_integers_by_truncation() {
        let d = Decimal::new(-12399, 2);
        assert_eq!(i64::try_from(d), Ok(-123));
        assert_eq!(u64::try_from(d), Err(Error::ValueOutOfRange));
        assert_eq!(i128::try_from(Decimal::MAX).ok(), None);
        assert_eq!(u64::try_from(Decimal::new(999, 1)), Ok(99));
    }

    #[test]
    fn it_converts_floats_through_their_shortest_rendering() {
        assert_eq!(Decimal::from_f64(0.1).unwrap().to_string(), "0.1");
        assert_eq!(Decimal::from_f32(1.5f32).unwrap().to_string(), "1.5");
        assert_eq!(Decimal::from_f64(-2.5).unwrap().to_string(), "-2.5");
        assert!(Decimal::from_f64(f64::NAN).is_err());
        assert!(Decimal::from_f64(f64::INFINITY).is_err());
    }

    #[test]
    fn it_exposes_sign_predicates() {
        assert!(Decimal::new(-1, 0).is_sign_negative());
        assert!(Decimal::ZERO.is_sign_positive());
        assert!(!Decimal::ZERO.is_sign_negative());
        assert_eq!(Decimal::new(-3, 0).signum(), Decimal::new(-1, 0));
    }
}
