use crate::Decimal;

use core::ops::RangeInclusive;
use proptest::arbitrary::{Arbitrary, StrategyFor};
use proptest::prelude::*;
use proptest::strategy::Map;

impl Arbitrary for Decimal {
    type Parameters = ();
    fn arbitrary_with(_parameters: Self::Parameters) -> Self::Strategy {
        // any 128-bit coefficient is within the 96-digit range, so only the
        // scale needs constraining
        (any::<i128>(), 0..=crate::MAX_SCALE)
            .prop_map(|(coeff, scale)| Decimal::from_i128_with_scale(coeff, scale))
    }

    type Strategy = Map<(StrategyFor<i128>, RangeInclusive<u32>), fn((i128, u32)) -> Self>;
}
