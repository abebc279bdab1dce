//! Deserialization of BigReal.

use core::fmt::Formatter;

use crate::ctx::global_bigit_count;
use crate::defs::BIGIT_BIT_SIZE;
use crate::num::BigReal;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct BigRealVisitor {}

impl<'de> Deserialize<'de> for BigReal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigRealVisitor {})
    }
}

// Bigits needed to hold every fraction digit of a hexadecimal string.
fn hex_bigits(s: &str) -> usize {
    let s = s.trim_start_matches(['-', '+']);
    if !(s.starts_with("0x") || s.starts_with("0X")) {
        return 0;
    }
    let frac = match s.find('.') {
        Some(pos) => &s[pos + 1..],
        None => return 0,
    };
    let digits = frac.bytes().take_while(u8::is_ascii_hexdigit).count();
    (digits * 4 + BIGIT_BIT_SIZE - 1) / BIGIT_BIT_SIZE
}

impl<'de> Visitor<'de> for BigRealVisitor {
    type Value = BigReal;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a number or a string with a number")
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigReal::from_u64(v))
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BigReal::from_i64(v))
    }

    fn visit_f32<E: Error>(self, v: f32) -> Result<Self::Value, E> {
        Ok(BigReal::from_f32(v))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(BigReal::from_f64(v))
    }

    // hexadecimal strings keep all their digits even above the default precision
    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        let n = global_bigit_count().max(hex_bigits(v));
        BigReal::parse_p(v, n).map_err(|e| Error::custom(format!("{e}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

#[cfg(test)]
mod tests {

    use serde_json::from_str;
    use serde_json::to_string;

    use super::hex_bigits;
    use crate::num::BigReal;

    #[test]
    fn from_json() {
        let x = BigReal::zero();
        assert!(x == from_str::<BigReal>("-0").unwrap());
        assert!(x == from_str::<BigReal>("0.0").unwrap());

        assert!(BigReal::from_f64(0.3) == from_str::<BigReal>("0.3").unwrap());
        assert!(BigReal::from_i64(-12) == from_str::<BigReal>("-12").unwrap());
        assert!(BigReal::from_u64(u64::MAX) == from_str::<BigReal>("18446744073709551615").unwrap());

        let x = BigReal::parse("0.3").unwrap();
        assert!(x == from_str::<BigReal>("\"0.3\"").unwrap());
        assert!(from_str::<BigReal>("\"nan\"").unwrap().is_nan());
        assert!(from_str::<BigReal>("\"0.3z\"").is_err());
        assert!(from_str::<BigReal>("true").is_err());
    }

    #[test]
    fn json_round_trip() {
        let x = BigReal::pi().with_bigit_count(40).div_i64(7);
        let s = to_string(&x).unwrap();
        let y: BigReal = from_str(&s).unwrap();
        assert!(y.bigit_count() <= 40);
        assert_eq!(x.as_raw_parts(), y.with_bigit_count(40).as_raw_parts());

        let v = vec![BigReal::from_f64(1.5), BigReal::inf(), BigReal::from_f64(-2.0)];
        let w: Vec<BigReal> = from_str(&to_string(&v).unwrap()).unwrap();
        assert_eq!(w.len(), 3);
        assert_eq!(w[0].to_f64(), 1.5);
        assert!(w[1].is_inf());
        assert_eq!(w[2].to_f64(), -2.0);
    }

    #[test]
    fn test_hex_bigits() {
        assert_eq!(hex_bigits("0x1p+0"), 0);
        assert_eq!(hex_bigits("-0x1.8p+1"), 1);
        assert_eq!(hex_bigits("0x1.123456789p-3"), 2);
        assert_eq!(hex_bigits("1.123456789"), 0);
    }
}
