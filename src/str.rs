mod fmt;
mod parse;

pub(crate) use fmt::to_str_internal;
pub(crate) use parse::parse_str;

use crate::{Decimal, Error};

use alloc::string::String;
use core::{fmt as core_fmt, str::FromStr};

impl core_fmt::Display for Decimal {
    fn fmt(&self, f: &mut core_fmt::Formatter<'_>) -> core_fmt::Result {
        let (rep, additional) = to_str_internal(self, false, f.precision());
        if let Some(additional) = additional {
            let mut value = String::from(rep.as_str());
            value.extend(core::iter::repeat('0').take(additional));
            f.pad_integral(self.is_sign_positive(), "", value.as_str())
        } else {
            f.pad_integral(self.is_sign_positive(), "", rep.as_str())
        }
    }
}

impl core_fmt::Debug for Decimal {
    fn fmt(&self, f: &mut core_fmt::Formatter<'_>) -> core_fmt::Result {
        core_fmt::Display::fmt(self, f)
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(value: &str) -> Result<Decimal, Error> {
        parse_str(value)
    }
}

impl TryFrom<&str> for Decimal {
    type Error = Error;

    fn try_from(value: &str) -> Result<Decimal, Error> {
        parse_str(value)
    }
}
