//! Reciprocal and division.

use crate::common::buf::BigitBuf;
use crate::common::consts::TWO;
use crate::common::util::newton_steps;
use crate::num::BigReal;
use crate::num::Flavor;
use crate::ops::mul::pow2_shift;

impl BigReal {
    /// Computes `1 / self` with Newton-Raphson iterations seeded from a `f32` reciprocal.
    /// The inverse of zero is infinity of the same sign, the inverse of infinity is zero.
    pub fn inverse(&self) -> Self {
        match self.f {
            Flavor::NaN => return Self::nan(),
            Flavor::Inf => return Self::signed_zero(self.s),
            Flavor::Value if self.m.is_empty() => return Self::signed_inf(self.s),
            Flavor::Value => {}
        }

        let n = self.m.len();

        // 1.m as f32 is in [1, 2), its reciprocal is in (0.5, 1]
        let u = f32::from_bits(0x3f80_0000 | (self.m[0] >> 9));
        let v = (1.0 / u).to_bits();

        let mut m = BigitBuf::new(n);
        m[0] = v << 9;
        let e = -(self.e as i128) + (v >> 23) as i128 - 0x7f;

        let mut ret = Self::from_parts_wide(m, e, self.s);
        if !ret.is_regular() {
            return ret;
        }

        for _ in 0..newton_steps(n) {
            ret = ret.mul(&TWO.sub(&ret.mul(self)));
        }

        ret
    }

    /// Divides `self` by `d2` as `self × (1 / d2)`.
    pub fn div(&self, d2: &Self) -> Self {
        if self.is_nan() || d2.is_nan() || (self.is_inf() && d2.is_inf()) {
            return Self::nan();
        }
        if self.is_zero() && d2.is_zero() {
            return Self::nan();
        }
        self.mul(&d2.inverse())
    }

    /// Divides `self` by an integer. Division by a power of two is an exponent shift.
    pub fn div_i64(&self, i: i64) -> Self {
        match pow2_shift(i) {
            Some(shift) => {
                let ret = self.ldexp(-shift);
                if i < 0 {
                    ret.neg()
                } else {
                    ret
                }
            }
            None => self.div(&Self::from_i64_p(i, self.prec())),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_inverse() {
        assert_eq!(BigReal::from_f64(4.0).inverse().to_f64(), 0.25);
        assert_eq!(BigReal::from_f64(-0.5).inverse().to_f64(), -2.0);

        let z = BigReal::from_f64(-0.0).inverse();
        assert!(z.is_inf() && z.is_negative());
        let z = BigReal::neg_inf().inverse();
        assert!(z.is_zero() && z.is_negative());
        assert!(BigReal::nan().inverse().is_nan());

        let three = BigReal::from_u64_p(3, 4);
        let r = three.inverse();
        let err = r.mul(&three).sub(&BigReal::from_u64_p(1, 4)).abs();
        assert!(err.is_zero() || err.exponent() < -120);

        for _ in 0..1000 {
            let f = (random::<f64>() - 0.5) * 1e10;
            let x = BigReal::from_f64(f);
            let r = x.inverse();
            assert!((r.to_f64() - 1.0 / f).abs() <= (1.0 / f).abs() * f64::EPSILON);
            let back = r.inverse();
            let d = back.sub(&x).abs();
            assert!(d.is_zero() || d.exponent() < x.exponent() - 500);
        }

        // the result of the exponent negation is representable
        let x = BigReal::from_f64(1.0).ldexp(crate::defs::EXPONENT_MAX);
        assert!(x.inverse().is_regular());
    }

    #[test]
    fn test_div() {
        let q = BigReal::from_f64(10.0).div(&BigReal::from_f64(4.0));
        assert_eq!(q.as_raw_parts(), BigReal::from_f64(2.5).as_raw_parts());

        assert_eq!(BigReal::from_f64(-7.5).div(&BigReal::from_f64(2.5)).to_f64(), -3.0);
        assert!(BigReal::from_f64(1.0).div(&BigReal::zero()).is_inf());
        assert!(BigReal::from_f64(-1.0).div(&BigReal::zero()).is_negative());
        assert!(BigReal::zero().div(&BigReal::zero()).is_nan());
        assert!(BigReal::inf().div(&BigReal::inf()).is_nan());
        assert!(BigReal::from_f64(1.0).div(&BigReal::inf()).is_zero());
        assert!(BigReal::inf().div(&BigReal::from_f64(-2.0)).is_negative());

        for _ in 0..1000 {
            let a = random::<f64>() * 100.0 + 1.0;
            let b = random::<f64>() * 100.0 + 1.0;
            let q = BigReal::from_f64(a).div(&BigReal::from_f64(b));
            assert!((q.to_f64() - a / b).abs() <= a / b * f64::EPSILON);
        }
    }

    #[test]
    fn test_div_i64() {
        let x = BigReal::from_f64(3.0);
        assert_eq!(x.div_i64(4).to_f64(), 0.75);
        assert_eq!(x.div_i64(-2).to_f64(), -1.5);
        assert!((x.div_i64(7).to_f64() - 3.0 / 7.0).abs() < 1e-16);
        assert!(x.div_i64(0).is_inf());
    }
}
