use crate::Decimal;
use alloc::string::ToString;
use core::{fmt, str::FromStr};
use serde::{self, de::Unexpected};

/// Decimals serialize as their canonical string so no precision is lost in
/// transit; deserialization additionally accepts native integers and
/// floats, the latter routed through their shortest decimal rendering.
impl serde::Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let value = crate::str::to_str_internal(self, true, None);
        serializer.serialize_str(value.0.as_ref())
    }
}

impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

struct DecimalVisitor;

impl<'de> serde::de::Visitor<'de> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a Decimal type representing a fixed-point number")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Ok(Decimal::from(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Decimal::from_str(&value.to_string()).map_err(|_| E::invalid_value(Unexpected::Float(value), &self))
    }

    fn visit_str<E>(self, value: &str) -> Result<Decimal, E>
    where
        E: serde::de::Error,
    {
        Decimal::from_str(value).map_err(|_| E::invalid_value(Unexpected::Str(value), &self))
    }
}

#[cfg(test)]
mod test {
    use crate::Decimal;
    use core::str::FromStr;

    #[test]
    fn it_serializes_as_the_canonical_string() {
        let value = Decimal::from_str("-123.400").unwrap();
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""-123.4""#);
        assert_eq!(serde_json::to_string(&Decimal::ZERO).unwrap(), r#""0""#);
    }

    #[test]
    fn it_deserializes_strings_numbers_and_floats() {
        let a: Decimal = serde_json::from_str(r#""1.23""#).unwrap();
        assert_eq!(a, Decimal::new(123, 2));
        let b: Decimal = serde_json::from_str("42").unwrap();
        assert_eq!(b, Decimal::from(42));
        let c: Decimal = serde_json::from_str("-5.5").unwrap();
        assert_eq!(c, Decimal::new(-55, 1));
        assert!(serde_json::from_str::<Decimal>(r#""1.2.3""#).is_err());
    }

    #[test]
    fn it_round_trips_through_json() {
        for s in ["0", "-0.5", "123456789012345678901234567890123456789", "0.000000000000000000000000000001"] {
            let d = Decimal::from_str(s).unwrap();
            let json = serde_json::to_string(&d).unwrap();
            let back: Decimal = serde_json::from_str(&json).unwrap();
            assert_eq!(d, back);
        }
    }
}
