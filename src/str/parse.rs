use arrayvec::ArrayVec;

use crate::bigint::Int320;
use crate::constants::{MAX_PRECISION, MAX_SCALE};
use crate::decimal::Decimal;
use crate::error::Error;

// The longest coefficient that always fits a 128-bit accumulator. 38 nines
// stay below i128::MAX; 39 digits may not.
const MAX_I128_DIGITS: usize = 38;

/// Parses `[space]* [-]? digits [. digits] [space]*` into a decimal,
/// choosing the narrowest storage tier the digit count allows.
///
/// Leading integer zeros carry no value and are stripped; trailing
/// fractional zeros are stripped with the scale reduced in step, so
/// `"123.4500"` parses at scale 2. A fractional part still longer than the
/// maximum scale after that is refused.
pub(crate) fn parse_str(input: &str) -> Result<Decimal, Error> {
    let bytes = input.as_bytes();
    let mut start = 0;
    let mut end = bytes.len();
    while start < end && bytes[start] == b' ' {
        start += 1;
    }
    while end > start && bytes[end - 1] == b' ' {
        end -= 1;
    }
    let bytes = &bytes[start..end];
    if bytes.is_empty() {
        return Err(Error::InvalidArgument);
    }

    let (negative, bytes) = match bytes[0] {
        b'-' => (true, &bytes[1..]),
        _ => (false, bytes),
    };
    if bytes.is_empty() {
        return Err(Error::InvalidArgument);
    }

    // A second point lands in one of the digit runs and is rejected there.
    let (int_part, frac_part) = match bytes.iter().position(|&b| b == b'.') {
        Some(0) => return Err(Error::InvalidArgument),
        Some(i) if i + 1 == bytes.len() => return Err(Error::InvalidArgument),
        Some(i) => (&bytes[..i], &bytes[i + 1..]),
        None => (bytes, &bytes[..0]),
    };
    if int_part.iter().any(|b| !b.is_ascii_digit()) || frac_part.iter().any(|b| !b.is_ascii_digit())
    {
        return Err(Error::InvalidArgument);
    }

    let int_part = &int_part[int_part.iter().take_while(|&&b| b == b'0').count()..];
    let trailing_zeros = frac_part.iter().rev().take_while(|&&b| b == b'0').count();
    let frac_part = &frac_part[..frac_part.len() - trailing_zeros];

    let scale = frac_part.len() as u32;
    if scale > MAX_SCALE {
        return Err(Error::ScaleOverflow);
    }
    let digits = int_part.len() + frac_part.len();
    if digits > MAX_PRECISION as usize {
        return Err(Error::InvalidArgument);
    }

    if digits <= MAX_I128_DIGITS {
        let mut value: i128 = 0;
        for &b in int_part.iter().chain(frac_part) {
            value = value * 10 + i128::from(b - b'0');
        }
        if negative {
            value = -value;
        }
        Ok(Decimal::from_parts_i128(value, scale))
    } else {
        let mut buf = ArrayVec::<u8, { MAX_PRECISION as usize }>::new();
        buf.try_extend_from_slice(int_part)
            .and_then(|_| buf.try_extend_from_slice(frac_part))
            .map_err(|_| Error::InvalidArgument)?;
        let mut coeff = Int320::from_ascii_digits(&buf);
        if negative {
            coeff = coeff.neg();
        }
        Ok(Decimal::from_big_with_scale(coeff, scale))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_canonicalizes_zeros_while_parsing() {
        let d = parse_str("00123.45600").unwrap();
        assert_eq!(d.scale(), 3);
        assert_eq!(d.to_string(), "123.456");

        let d = parse_str("-0.0000").unwrap();
        assert_eq!(d.scale(), 0);
        assert_eq!(d.to_string(), "0");
    }

    #[test]
    fn it_rejects_malformed_input() {
        for input in [
            "", " ", "-", ".", ".5", "-.5", "1.", "1..2", "1.2.3", "1e3", "+5", "12a4", "- 1",
            "1 2",
        ] {
            assert_eq!(parse_str(input), Err(Error::InvalidArgument), "{input:?}");
        }
    }

    #[test]
    fn it_enforces_the_scale_limit_after_trimming() {
        let thirty_one_digits = "0.0000000000000000000000000000001";
        assert_eq!(parse_str(thirty_one_digits), Err(Error::ScaleOverflow));
        // the same width in trailing zeros trims back into range
        let d = parse_str("0.1000000000000000000000000000000").unwrap();
        assert_eq!(d.scale(), 1);
    }

    #[test]
    fn it_selects_the_tier_by_digit_count() {
        let d = parse_str("9223372036854775807").unwrap();
        assert_eq!(i64::try_from(d), Ok(i64::MAX));
        // 39 significant digits parse through the big tier
        let large = "123456789012345678901234567890123456789";
        assert_eq!(parse_str(large).unwrap().to_string(), large);
        // 96 digits is the precision limit
        let max = "9".repeat(96);
        assert_eq!(parse_str(&max).unwrap().to_string(), max);
        let over = "9".repeat(97);
        assert_eq!(parse_str(&over), Err(Error::InvalidArgument));
    }

    #[test]
    fn it_trims_spaces_only_at_the_ends() {
        let d = parse_str("   -42.5  ").unwrap();
        assert_eq!(d.to_string(), "-42.5");
    }
}
