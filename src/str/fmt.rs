use crate::constants::{MAX_SCALE, MAX_STR_BUFFER_SIZE};
use crate::decimal::{Coefficient, Decimal};

use arrayvec::{ArrayString, ArrayVec};

// Writes the canonical form without allocating: the shortest string that
// parses back to the same value. With an explicit precision the fractional
// part is zero-padded or truncated (no rounding) to exactly that width;
// without one, trailing fractional zeros are trimmed away.
//
// A requested precision beyond MAX_SCALE cannot change the digits, so the
// surplus is returned for the caller to pad.
pub(crate) fn to_str_internal(
    value: &Decimal,
    append_sign: bool,
    precision: Option<usize>,
) -> (ArrayString<MAX_STR_BUFFER_SIZE>, Option<usize>) {
    let scale = value.scale() as usize;

    // Coefficient magnitude digits, least significant first, padded so the
    // fractional window is always fully populated.
    let mut digits = ArrayVec::<u8, MAX_STR_BUFFER_SIZE>::new();
    match *value.coefficient() {
        Coefficient::Small(v) => {
            let mut mag = v.unsigned_abs();
            while mag != 0 {
                digits.push((mag % 10) as u8);
                mag /= 10;
            }
        }
        Coefficient::Mid(v) => {
            let mut mag = v.unsigned_abs();
            while mag != 0 {
                digits.push((mag % 10) as u8);
                mag /= 10;
            }
        }
        Coefficient::Big(b) => {
            let mut mag = b.abs();
            while !mag.is_zero() {
                let (q, rem) = mag.divrem_u64(10);
                digits.push(rem as u8);
                mag = q;
            }
        }
    }
    while digits.len() < scale {
        digits.push(0);
    }

    let (prec, additional) = match precision {
        Some(prec) => {
            let max = MAX_SCALE as usize;
            if prec > max {
                (max, Some(prec - max))
            } else {
                (prec, None)
            }
        }
        None => {
            let trailing = digits[..scale].iter().take_while(|&&d| d == 0).count();
            (scale - trailing, None)
        }
    };

    let mut rep = ArrayString::new();
    if append_sign && value.is_sign_negative() {
        rep.push('-');
    }
    if digits.len() == scale {
        rep.push('0');
    } else {
        for i in (scale..digits.len()).rev() {
            rep.push(char::from(b'0' + digits[i]));
        }
    }
    if prec > 0 {
        rep.push('.');
        for k in 0..prec {
            if k < scale {
                rep.push(char::from(b'0' + digits[scale - 1 - k]));
            } else {
                rep.push('0');
            }
        }
    }

    (rep, additional)
}

#[cfg(test)]
mod test {
    use crate::Decimal;
    use arrayvec::ArrayString;
    use core::{fmt::Write, str::FromStr};

    #[test]
    fn display_does_not_overflow_max_capacity() {
        let num = Decimal::from_str("1.2").unwrap();
        let mut buffer = ArrayString::<160>::new();
        buffer.write_fmt(format_args!("{:.31}", num)).unwrap();
        assert_eq!("1.2000000000000000000000000000000", buffer.as_str());
    }

    #[test]
    fn it_renders_canonical_forms() {
        for (input, expected) in [
            ("0", "0"),
            ("-0.000", "0"),
            ("0.1", "0.1"),
            ("-0.1", "-0.1"),
            ("123.10", "123.1"),
            ("-123.666", "-123.666"),
            ("0.00000001", "0.00000001"),
        ] {
            assert_eq!(Decimal::from_str(input).unwrap().to_string(), expected);
        }
    }

    #[test]
    fn it_pads_and_truncates_with_precision() {
        let a = Decimal::from_str("233.323223").unwrap();
        assert_eq!(format!("{}", a), "233.323223");
        assert_eq!(format!("{:.9}", a), "233.323223000");
        assert_eq!(format!("{:.0}", a), "233");
        assert_eq!(format!("{:.2}", a), "233.32");
        assert_eq!(format!("{:010.2}", a), "0000233.32");
    }
}
