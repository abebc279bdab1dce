//! Conversion of numbers to strings.

use crate::defs::Exponent;
use crate::num::BigReal;
use crate::num::Flavor;

/// `log10(2) × 2^64`, rounded down.
const LOG10_2_FIXED: i128 = 5553023288523357132;

impl BigReal {
    /// Returns `self × 10^k` with `n` bigits.
    /// The power is applied in two halves, each of which stays within the exponent range.
    fn scale_pow10(&self, k: Exponent, n: usize) -> Self {
        let ten = Self::from_u64_p(10, n);
        let k1 = k / 2;
        let k2 = k - k1;
        if k >= 0 {
            self.mul(&ten.powi(k1)).mul(&ten.powi(k2))
        } else {
            self.div(&ten.powi(-k1)).div(&ten.powi(-k2))
        }
    }

    /// Number of decimal digits the mantissa can hold.
    pub(crate) fn decimal_digits(&self) -> usize {
        (self.total_bits() as f64 * core::f64::consts::LOG10_2) as usize
    }

    /// Formats the number in decimal scientific notation with at most `ndigits` significant digits,
    /// e.g. `1.2345e+10`. Trailing zeroes are dropped, and the exponent is omitted when it is 0.
    pub fn str(&self, ndigits: usize) -> String {
        match self.f {
            Flavor::NaN => return "nan".to_owned(),
            Flavor::Inf if self.s.is_negative() => return "-inf".to_owned(),
            Flavor::Inf => return "inf".to_owned(),
            Flavor::Value => {}
        }

        let mut ret = String::new();
        if self.s.is_negative() {
            ret.push('-');
        }
        if self.m.is_empty() {
            ret.push('0');
            return ret;
        }

        let ndigits = ndigits.max(1);
        let n = self.m.len() + 1;
        let one = Self::from_u64_p(1, n);
        let ten = Self::from_u64_p(10, n);

        // floor(e × log10(2)) is the decimal exponent or one less
        let mut k = ((self.e as i128 * LOG10_2_FIXED) >> 64) as Exponent;
        let mut x = self.abs().with_bigit_count(n).scale_pow10(-k, n);
        while x >= ten {
            x = x.div(&ten);
            k += 1;
        }
        while x < one {
            x = x.mul(&ten);
            k -= 1;
        }

        // half a unit of the last digit
        let half = Self::from_u64_p(5, n).scale_pow10(-(ndigits as Exponent), n);
        x = x.add(&half);
        if x >= ten {
            x = x.div(&ten);
            k += 1;
        }

        let mut digits = String::with_capacity(ndigits + 1);
        for i in 0..ndigits {
            let d = x.to_u64().min(9);
            digits.push((b'0' + d as u8) as char);
            if i == 0 {
                digits.push('.');
            }
            x = x.sub(&Self::from_u64_p(d, n)).mul(&ten);
        }

        let digits = digits.trim_end_matches('0').trim_end_matches('.');
        ret.push_str(digits);

        if k != 0 {
            ret.push_str(&format!("e{:+}", k));
        }
        ret
    }

    /// Formats the number in hexadecimal scientific notation, e.g. `0x1.8p+1`.
    /// Every mantissa bit is written, so the value can be parsed back exactly.
    pub fn xstr(&self) -> String {
        match self.f {
            Flavor::NaN => return "nan".to_owned(),
            Flavor::Inf if self.s.is_negative() => return "-inf".to_owned(),
            Flavor::Inf => return "inf".to_owned(),
            Flavor::Value => {}
        }

        let mut ret = String::new();
        if self.s.is_negative() {
            ret.push('-');
        }
        if self.m.is_empty() {
            ret.push_str("0x0p+0");
            return ret;
        }

        let mut frac = String::with_capacity(self.m.len() * 8);
        for d in self.m.iter() {
            frac.push_str(&format!("{:08x}", d));
        }
        let frac = frac.trim_end_matches('0');

        ret.push_str("0x1");
        if !frac.is_empty() {
            ret.push('.');
            ret.push_str(frac);
        }
        ret.push_str(&format!("p{:+}", self.e));
        ret
    }
}
