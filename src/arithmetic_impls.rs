use crate::{ops, Decimal};

use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub};

// Quiet arithmetic: every operation has a form that reports failure as an
// error code and leaves both operands untouched. The operator traits below
// are the loud forms and panic on the same errors.
impl Decimal {
    /// Adds `rhs`, reporting overflow beyond the maximum precision instead
    /// of panicking.
    ///
    /// ```
    /// use bigdec::{Decimal, Error};
    /// assert_eq!(Decimal::MAX.try_add(&Decimal::ONE), Err(Error::AddSubOverflow));
    /// ```
    pub fn try_add(&self, rhs: &Decimal) -> crate::Result<Decimal> {
        ops::add_impl(self, rhs)
    }

    /// Subtracts `rhs`; the error cases match [`Decimal::try_add`].
    pub fn try_sub(&self, rhs: &Decimal) -> crate::Result<Decimal> {
        ops::sub_impl(self, rhs)
    }

    /// Multiplies by `rhs`. Excess fractional digits beyond the maximum
    /// scale are rounded half away from zero; exceeding the maximum
    /// precision is an error.
    pub fn try_mul(&self, rhs: &Decimal) -> crate::Result<Decimal> {
        ops::mul_impl(self, rhs)
    }

    /// Divides by `rhs`, extending the scale by the division increment and
    /// rounding half away from zero.
    ///
    /// ```
    /// use bigdec::{Decimal, Error};
    /// let one = Decimal::ONE;
    /// assert_eq!(one.try_div(&Decimal::from(3)).unwrap().to_string(), "0.3333");
    /// assert_eq!(one.try_div(&Decimal::ZERO), Err(Error::DivByZero));
    /// ```
    pub fn try_div(&self, rhs: &Decimal) -> crate::Result<Decimal> {
        ops::div_impl(self, rhs)
    }

    /// Remainder of the truncating division; the result keeps the sign of
    /// `self`.
    pub fn try_rem(&self, rhs: &Decimal) -> crate::Result<Decimal> {
        ops::rem_impl(self, rhs)
    }

    /// Checked addition; `None` on overflow.
    pub fn checked_add(&self, rhs: &Decimal) -> Option<Decimal> {
        self.try_add(rhs).ok()
    }

    /// Checked subtraction; `None` on overflow.
    pub fn checked_sub(&self, rhs: &Decimal) -> Option<Decimal> {
        self.try_sub(rhs).ok()
    }

    /// Checked multiplication; `None` on overflow.
    pub fn checked_mul(&self, rhs: &Decimal) -> Option<Decimal> {
        self.try_mul(rhs).ok()
    }

    /// Checked division; `None` on overflow or a zero divisor.
    pub fn checked_div(&self, rhs: &Decimal) -> Option<Decimal> {
        self.try_div(rhs).ok()
    }

    /// Checked remainder; `None` on a zero divisor.
    pub fn checked_rem(&self, rhs: &Decimal) -> Option<Decimal> {
        self.try_rem(rhs).ok()
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $quiet:ident) => {
        impl $imp for Decimal {
            type Output = Decimal;

            fn $method(self, other: Decimal) -> Decimal {
                match self.$quiet(&other) {
                    Ok(result) => result,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl<'a> $imp<Decimal> for &'a Decimal {
            type Output = Decimal;

            fn $method(self, other: Decimal) -> Decimal {
                $imp::$method(*self, other)
            }
        }

        impl<'a> $imp<&'a Decimal> for Decimal {
            type Output = Decimal;

            fn $method(self, other: &Decimal) -> Decimal {
                $imp::$method(self, *other)
            }
        }

        impl<'a, 'b> $imp<&'b Decimal> for &'a Decimal {
            type Output = Decimal;

            fn $method(self, other: &Decimal) -> Decimal {
                $imp::$method(*self, *other)
            }
        }
    };
}

forward_binop!(Add, add, try_add);
forward_binop!(Sub, sub, try_sub);
forward_binop!(Mul, mul, try_mul);
forward_binop!(Div, div, try_div);
forward_binop!(Rem, rem, try_rem);

macro_rules! forward_assign {
    ($imp:ident, $method:ident, $op:ident, $op_method:ident) => {
        impl $imp for Decimal {
            fn $method(&mut self, other: Decimal) {
                *self = $op::$op_method(*self, other);
            }
        }

        impl<'a> $imp<&'a Decimal> for Decimal {
            fn $method(&mut self, other: &Decimal) {
                *self = $op::$op_method(*self, *other);
            }
        }
    };
}

forward_assign!(AddAssign, add_assign, Add, add);
forward_assign!(SubAssign, sub_assign, Sub, sub);
forward_assign!(MulAssign, mul_assign, Mul, mul);
forward_assign!(DivAssign, div_assign, Div, div);
forward_assign!(RemAssign, rem_assign, Rem, rem);

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.neg_value()
    }
}

impl<'a> Neg for &'a Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        self.neg_value()
    }
}

impl CheckedAdd for Decimal {
    fn checked_add(&self, other: &Decimal) -> Option<Decimal> {
        Decimal::checked_add(self, other)
    }
}

impl CheckedSub for Decimal {
    fn checked_sub(&self, other: &Decimal) -> Option<Decimal> {
        Decimal::checked_sub(self, other)
    }
}

impl CheckedMul for Decimal {
    fn checked_mul(&self, other: &Decimal) -> Option<Decimal> {
        Decimal::checked_mul(self, other)
    }
}

impl CheckedDiv for Decimal {
    fn checked_div(&self, other: &Decimal) -> Option<Decimal> {
        Decimal::checked_div(self, other)
    }
}

impl CheckedRem for Decimal {
    fn checked_rem(&self, other: &Decimal) -> Option<Decimal> {
        Decimal::checked_rem(self, other)
    }
}

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::ZERO, Add::add)
    }
}

impl Product for Decimal {
    fn product<I: Iterator<Item = Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::ONE, Mul::mul)
    }
}

impl<'a> Product<&'a Decimal> for Decimal {
    fn product<I: Iterator<Item = &'a Decimal>>(iter: I) -> Decimal {
        iter.fold(Decimal::ONE, Mul::mul)
    }
}
