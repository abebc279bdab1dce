//! Multiplication.

use crate::defs::Sign;
use crate::mantissa;
use crate::num::BigReal;
use crate::num::Flavor;

impl BigReal {
    /// Multiplies `self` by `d2`. The result has the precision of the wider operand.
    pub fn mul(&self, d2: &Self) -> Self {
        let s = self.s.xor(d2.s);

        match (self.f, d2.f) {
            (Flavor::NaN, _) | (_, Flavor::NaN) => return Self::nan(),
            (Flavor::Inf, _) | (_, Flavor::Inf) => {
                return if self.is_zero() || d2.is_zero() {
                    Self::nan()
                } else {
                    Self::signed_inf(s)
                }
            }
            (Flavor::Value, Flavor::Value) => {}
        }

        if self.is_zero() || d2.is_zero() {
            return Self::signed_zero(s);
        }

        let n = self.m.len().max(d2.m.len());
        let (m, overflow) = mantissa::mul(&self.m, &d2.m, n);

        Self::from_parts_wide(m, self.e as i128 + d2.e as i128 + overflow as i128, s)
    }

    /// Multiplies `self` by an integer. Multiplication by a power of two is an exponent shift.
    pub fn mul_i64(&self, i: i64) -> Self {
        match pow2_shift(i) {
            Some(shift) => {
                let ret = self.ldexp(shift);
                if i < 0 {
                    ret.neg()
                } else {
                    ret
                }
            }
            None => self.mul(&Self::from_i64_p(i, self.prec())),
        }
    }
}

/// Returns `k` if `|i| = 2^k`.
pub(crate) fn pow2_shift(i: i64) -> Option<i64> {
    let u = i.unsigned_abs();
    if u.is_power_of_two() {
        Some(u.trailing_zeros() as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_mul() {
        assert_eq!(BigReal::from_f64(1.5).mul(&BigReal::from_f64(-4.25)).to_f64(), -6.375);
        assert_eq!(BigReal::from_f64(-3.0).mul(&BigReal::from_f64(-3.0)).to_f64(), 9.0);

        for _ in 0..1000 {
            let a = (random::<i32>() >> 4) as i64;
            let b = (random::<i32>() >> 4) as i64;
            let p = BigReal::from_i64(a).mul(&BigReal::from_i64(b));
            assert_eq!(p.to_i64(), a * b);
            assert!(p == BigReal::from_i64(b).mul(&BigReal::from_i64(a)));

            let f1 = random::<f64>() * 1e3;
            let f2 = random::<f64>() * 1e-3;
            let p = BigReal::from_f64(f1).mul(&BigReal::from_f64(f2));
            assert!((p.to_f64() - f1 * f2).abs() <= f1 * f2 * f64::EPSILON);
        }

        // 1/3 * 3 at one bigit
        let third = BigReal::from_raw_parts(&[0x5555_5555], -2, Sign::Pos);
        let p = third.mul(&BigReal::from_u64_p(3, 1));
        assert_eq!(p.as_raw_parts(), (&[0xffff_ffffu32][..], -1, Sign::Pos));
    }

    #[test]
    fn test_mul_special() {
        let one = BigReal::from_f64(1.0);
        let nz = BigReal::from_f64(-0.0);

        assert!(BigReal::inf().mul(&nz).is_nan());
        assert!(BigReal::zero().mul(&BigReal::neg_inf()).is_nan());
        assert!(BigReal::neg_inf().mul(&one.neg()).is_inf());
        assert!(BigReal::neg_inf().mul(&one.neg()).is_positive());
        assert!(BigReal::nan().mul(&one).is_nan());
        assert!(nz.mul(&one).is_zero() && nz.mul(&one).is_negative());
        assert!(nz.mul(&nz).is_positive());

        // exponent overflow and underflow
        let big = one.ldexp(crate::defs::EXPONENT_MAX - 1);
        assert!(big.mul(&big).is_inf());
        let small = one.ldexp(crate::defs::EXPONENT_MIN + 1);
        assert!(small.mul(&small).is_zero());
    }

    #[test]
    fn test_mul_i64() {
        let x = BigReal::from_f64(1.75);
        assert_eq!(x.mul_i64(8).to_f64(), 14.0);
        assert_eq!(x.mul_i64(-2).to_f64(), -3.5);
        assert_eq!(x.mul_i64(3).to_f64(), 5.25);
        assert_eq!(x.mul_i64(i64::MIN).to_f64(), -1.75 * 2f64.powi(63));
        assert!(x.mul_i64(0).is_zero());
        assert!(BigReal::inf().mul_i64(0).is_nan());
        assert!(BigReal::inf().mul_i64(-4).is_negative());
        assert_eq!(pow2_shift(1), Some(0));
        assert_eq!(pow2_shift(-64), Some(6));
        assert_eq!(pow2_shift(6), None);
        assert_eq!(pow2_shift(0), None);
    }
}
