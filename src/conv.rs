//! Conversions between numbers and native numeric types.

use crate::common::buf::BigitBuf;
use crate::ctx::global_bigit_count;
use crate::defs::Bigit;
use crate::defs::DoubleBigit;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::BIGIT_BIT_SIZE;
use crate::num::BigReal;
use crate::num::Flavor;

const F64_FRACTION_BITS: u32 = 52;
const F64_EXPONENT_BIAS: Exponent = 1023;
const F64_EXPONENT_FIELD_MAX: Exponent = 0x7ff;
const F64_SUBNORMAL_EXPONENT: Exponent = -1074;

impl BigReal {
    /// Converts `u` to a number with `n` bigits.
    pub(crate) fn from_u64_p(u: u64, n: usize) -> Self {
        if u == 0 {
            return Self::zero();
        }

        let lz = u.leading_zeros();
        // drop the leading one
        let frac = (u << lz) << 1;

        let mut m = BigitBuf::new(n.max(1));
        m[0] = (frac >> BIGIT_BIT_SIZE) as Bigit;
        if m.len() > 1 {
            m[1] = frac as Bigit;
        }

        Self::from_parts(m, 63 - lz as Exponent, Sign::Pos)
    }

    /// Converts `i` to a number with `n` bigits.
    pub(crate) fn from_i64_p(i: i64, n: usize) -> Self {
        let mut ret = Self::from_u64_p(i.unsigned_abs(), n);
        if i < 0 {
            ret.s = Sign::Neg;
        }
        ret
    }

    /// Converts `f` to a number with `n` bigits.
    /// Subnormal values are normalized; NaN and infinities are preserved.
    pub(crate) fn from_f64_p(f: f64, n: usize) -> Self {
        let bits = f.to_bits();
        let s = if bits >> 63 != 0 { Sign::Neg } else { Sign::Pos };
        let exp = ((bits >> F64_FRACTION_BITS) & 0x7ff) as Exponent;
        let frac = bits & ((1u64 << F64_FRACTION_BITS) - 1);

        if exp == F64_EXPONENT_FIELD_MAX {
            return if frac == 0 {
                Self::signed_inf(s)
            } else {
                Self::nan()
            };
        }

        if exp == 0 {
            if frac == 0 {
                return Self::signed_zero(s);
            }
            let mut ret = Self::from_u64_p(frac, n);
            ret.e += F64_SUBNORMAL_EXPONENT;
            ret.s = s;
            return ret;
        }

        let mut m = BigitBuf::new(n.max(1));
        m[0] = (frac >> 20) as Bigit;
        if m.len() > 1 {
            m[1] = (frac << 12) as Bigit;
        }

        Self::from_parts(m, exp - F64_EXPONENT_BIAS, s)
    }

    /// Converts `f` to a number with the default precision.
    pub fn from_f64(f: f64) -> Self {
        Self::from_f64_p(f, global_bigit_count())
    }

    /// Converts `f` to a number with the default precision.
    pub fn from_f32(f: f32) -> Self {
        Self::from_f64_p(f as f64, global_bigit_count())
    }

    /// Converts `i` to a number with the default precision.
    pub fn from_i64(i: i64) -> Self {
        Self::from_i64_p(i, global_bigit_count())
    }

    /// Converts `u` to a number with the default precision.
    pub fn from_u64(u: u64) -> Self {
        Self::from_u64_p(u, global_bigit_count())
    }

    /// Converts `i` to a number with the default precision.
    pub fn from_i32(i: i32) -> Self {
        Self::from_i64_p(i as i64, global_bigit_count())
    }

    /// Converts `u` to a number with the default precision.
    pub fn from_u32(u: u32) -> Self {
        Self::from_u64_p(u as u64, global_bigit_count())
    }

    /// Top 64 bits of the mantissa with the leading one explicit.
    fn top64(&self) -> DoubleBigit {
        let m0 = self.m.first().copied().unwrap_or(0) as DoubleBigit;
        let m1 = self.m.get(1).copied().unwrap_or(0) as DoubleBigit;
        (1 << 63) | (m0 << 31) | (m1 >> 1)
    }

    /// True if any mantissa bit below `top64` is set.
    fn tail_nonzero(&self) -> bool {
        self.m.get(1).map_or(false, |d| d & 1 != 0) || self.m.iter().skip(2).any(|d| *d != 0)
    }

    /// Converts to `f64`, rounding to nearest with ties to even at the 53rd significant bit.
    /// Values beyond the `f64` range become infinite, tiny values become subnormal or zero.
    pub fn to_f64(&self) -> f64 {
        match self.f {
            Flavor::NaN => return f64::NAN,
            Flavor::Inf => {
                return if self.s.is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            }
            Flavor::Value => {}
        }

        let sign = if self.s.is_negative() { 1u64 << 63 } else { 0 };

        if self.m.is_empty() {
            return f64::from_bits(sign);
        }

        let e = self.e as i128 + F64_EXPONENT_BIAS as i128;

        if e >= F64_EXPONENT_FIELD_MAX as i128 {
            return f64::from_bits(sign | ((F64_EXPONENT_FIELD_MAX as u64) << F64_FRACTION_BITS));
        }

        let top = self.top64();

        // bits of `top` shifted out below the last fraction bit
        let (bits, r) = if e > 0 {
            let frac = (top << 1) >> 12;
            ((sign | ((e as u64) << F64_FRACTION_BITS) | frac), 11)
        } else {
            let r = 12 - e;
            if r > 64 {
                return f64::from_bits(sign);
            }
            let frac = top.checked_shr(r as u32).unwrap_or(0);
            (sign | frac, r as u32)
        };

        let half = (top >> (r - 1)) & 1 != 0;
        let sticky = top & ((1u64 << (r - 1)) - 1) != 0 || self.tail_nonzero();
        let round_up = half && (sticky || bits & 1 != 0);

        // a carry from rounding moves into the exponent field
        f64::from_bits(bits + round_up as u64)
    }

    /// Converts to `f32` through `f64`.
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Converts to `u64` truncating toward zero. Negative values give 0, too large values give `u64::MAX`,
    /// NaN gives 0.
    pub fn to_u64(&self) -> u64 {
        match self.f {
            Flavor::NaN => 0,
            Flavor::Inf => {
                if self.s.is_negative() {
                    0
                } else {
                    u64::MAX
                }
            }
            Flavor::Value => {
                if self.m.is_empty() || self.s.is_negative() || self.e < 0 {
                    0
                } else if self.e >= 64 {
                    u64::MAX
                } else {
                    self.top64() >> (63 - self.e)
                }
            }
        }
    }

    /// Converts to `i64` truncating toward zero and saturating at the bounds of `i64`. NaN gives 0.
    pub fn to_i64(&self) -> i64 {
        if self.is_negative() {
            let u = self.abs().to_u64() as i128;
            (-u).max(i64::MIN as i128) as i64
        } else {
            self.to_u64().min(i64::MAX as u64) as i64
        }
    }

    /// Converts to `i32` truncating toward zero and saturating at the bounds of `i32`. NaN gives 0.
    pub fn to_i32(&self) -> i32 {
        self.to_i64().clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    /// Converts to `u32` truncating toward zero and saturating at the bounds of `u32`. NaN gives 0.
    pub fn to_u32(&self) -> u32 {
        self.to_u64().min(u32::MAX as u64) as u32
    }
}
