//! Neighbouring values, angle conversion and sample surfaces.

use crate::common::buf::BigitBuf;
use crate::defs::Sign;
use crate::defs::BIGIT_BIT_SIZE;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::mantissa;
use crate::num::BigReal;
use crate::num::Flavor;
use crate::ops::consts::Constant;
use core::cmp::Ordering;

impl BigReal {
    /// Returns the next representable number after `self` in the direction of `y`,
    /// keeping the precision of `self`. If `self` equals `y`, `y` is returned.
    pub fn nextafter(&self, y: &Self) -> Self {
        let ord = match self.cmp(y) {
            None => return Self::nan(),
            Some(Ordering::Equal) => return y.clone(),
            Some(ord) => ord,
        };

        let n = self.prec();
        let s = if ord == Ordering::Less {
            Sign::Pos
        } else {
            Sign::Neg
        };

        if self.is_zero() {
            return Self::from_parts(BigitBuf::new(n), EXPONENT_MIN, s);
        }
        if self.is_inf() {
            let mut ret = Constant::Max.value(n);
            ret.s = self.s;
            return ret;
        }

        let mut ret = self.clone();
        if s == self.s {
            if mantissa::inc(&mut ret.m) {
                if ret.e == EXPONENT_MAX {
                    return Self::signed_inf(self.s);
                }
                ret.e += 1;
            }
        } else if mantissa::dec(&mut ret.m) {
            if ret.e == EXPONENT_MIN {
                return Self::signed_zero(self.s);
            }
            ret.e -= 1;
        }
        ret
    }

    /// Returns the value of the least significant mantissa bit of `self`.
    /// Zero gives the smallest positive value, infinity gives infinity.
    pub fn ulp(&self) -> Self {
        match self.f {
            Flavor::NaN => Self::nan(),
            Flavor::Inf => Self::inf(),
            Flavor::Value if self.m.is_empty() => Constant::Min.value(self.prec()),
            Flavor::Value => {
                let n = self.m.len();
                let e = self.e as i128 - (n * BIGIT_BIT_SIZE) as i128;
                Self::from_parts_wide(BigitBuf::new(n), e, Sign::Pos)
            }
        }
    }

    /// Converts radians to degrees.
    pub fn degrees(&self) -> Self {
        self.mul_i64(180).div(&Constant::Pi.value(self.prec()))
    }

    /// Converts degrees to radians.
    pub fn radians(&self) -> Self {
        self.mul(&Constant::Pi.value(self.prec())).div_i64(180)
    }

    /// Franke's bivariate test function on the unit square.
    pub fn franke(x: &Self, y: &Self) -> Self {
        let n = x.prec().max(y.prec());
        let x9 = x.mul_i64(9);
        let y9 = y.mul_i64(9);
        let shift = |v: &Self, d: i64| v.add(&Self::from_i64_p(d, n));
        let sq = |v: &Self| v.mul(v);

        let a = shift(&x9, -2);
        let b = shift(&y9, -2);
        let c = shift(&x9, 1);
        let d = shift(&y9, 1);
        let e = shift(&x9, -7);
        let f = shift(&y9, -3);
        let g = shift(&x9, -4);
        let h = shift(&y9, -7);

        let t1 = sq(&a).add(&sq(&b)).ldexp(-2).neg().exp();
        let t2 = sq(&c).div_i64(49).add(&d.div_i64(10)).neg().exp();
        let t3 = sq(&e).add(&sq(&f)).ldexp(-2).neg().exp();
        let t4 = sq(&g).add(&sq(&h)).neg().exp();

        let three_4 = Self::from_u64_p(3, n).ldexp(-2);
        three_4
            .mul(&t1.add(&t2))
            .add(&t3.ldexp(-1))
            .sub(&t4.div_i64(5))
    }

    /// The `peaks` test surface:
    /// `3(1-x)² e^(-x²-(y+1)²) - 10(x/5 - x³ - y⁵) e^(-x²-y²) - e^(-(x+1)²-y²)/3`.
    pub fn peaks(x: &Self, y: &Self) -> Self {
        let n = x.prec().max(y.prec());
        let one = Self::from_u64_p(1, n);
        let x2 = x.mul(x);
        let y2 = y.mul(y);
        let x3 = x2.mul(x);
        let y5 = y2.mul(&y2).mul(y);
        let mr2 = x2.add(&y2).neg();

        let t1 = one
            .sub(x)
            .powi(2)
            .mul_i64(3)
            .mul(&mr2.sub(&y.ldexp(1)).sub(&one).exp());
        let t2 = x
            .ldexp(1)
            .sub(&x3.add(&y5).mul_i64(10))
            .mul(&mr2.exp());
        let t3 = mr2.sub(&x.ldexp(1)).sub(&one).exp().div_i64(3);

        t1.sub(&t2).sub(&t3)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_nextafter() {
        let one = BigReal::from_u64_p(1, 2);
        let two = BigReal::from_u64_p(2, 2);

        let up = one.nextafter(&two);
        assert_eq!(up.as_raw_parts(), (&[0u32, 1][..], 0, Sign::Pos));
        assert!(up.nextafter(&BigReal::zero()) == one);

        let down = one.nextafter(&BigReal::zero());
        assert_eq!(down.as_raw_parts(), (&[u32::MAX, u32::MAX][..], -1, Sign::Pos));
        assert!(down.nextafter(&two) == one);
        assert_eq!(down.nextafter(&two).exponent(), 0);

        let mone = one.neg();
        let d = mone.nextafter(&BigReal::neg_inf());
        assert_eq!(d.as_raw_parts(), (&[0u32, 1][..], 0, Sign::Neg));

        assert!(one.nextafter(&one.with_bigit_count(5)) == one);
        assert!(one.nextafter(&BigReal::nan()).is_nan());

        let z = BigReal::zero().nextafter(&BigReal::from_f64(-1.0));
        assert!(z.is_negative());
        assert_eq!(z.exponent(), EXPONENT_MIN);
        assert!(z.nextafter(&BigReal::zero()).is_zero());

        let m = BigReal::inf().nextafter(&one);
        assert!(m.is_finite() && m.exponent() == EXPONENT_MAX);
        assert!(m.nextafter(&BigReal::inf()).is_inf());
    }

    #[test]
    fn test_ulp() {
        let one = BigReal::from_u64_p(1, 2);
        assert_eq!(one.ulp().exponent(), -64);
        assert!(one.add(&one.ulp()) == one.nextafter(&BigReal::inf()));
        assert_eq!(BigReal::from_f64_p(6.0, 1).ulp().to_f64(), 2f64.powi(-30));
        assert!(BigReal::nan().ulp().is_nan());
        assert_eq!(BigReal::zero().ulp().exponent(), EXPONENT_MIN);
    }

    #[test]
    fn test_angles() {
        let pi = BigReal::pi();
        assert!((pi.degrees().to_f64() - 180.0).abs() <= 180.0 * f64::EPSILON);
        let r = BigReal::from_f64(90.0).radians();
        assert!((r.to_f64() - core::f64::consts::FRAC_PI_2).abs() <= f64::EPSILON);
        let d = BigReal::from_f64(33.0).radians().degrees().sub(&BigReal::from_f64(33.0)).abs();
        assert!(d.is_zero() || d.exponent() < -500);
    }

    #[test]
    fn test_surfaces() {
        let franke = |x: f64, y: f64| {
            0.75 * (-((9.0 * x - 2.0).powi(2) + (9.0 * y - 2.0).powi(2)) / 4.0).exp()
                + 0.75 * (-(9.0 * x + 1.0).powi(2) / 49.0 - (9.0 * y + 1.0) / 10.0).exp()
                + 0.5 * (-((9.0 * x - 7.0).powi(2) + (9.0 * y - 3.0).powi(2)) / 4.0).exp()
                - 0.2 * (-(9.0 * x - 4.0).powi(2) - (9.0 * y - 7.0).powi(2)).exp()
        };
        let peaks = |x: f64, y: f64| {
            3.0 * (1.0 - x).powi(2) * (-x * x - (y + 1.0).powi(2)).exp()
                - 10.0 * (x / 5.0 - x.powi(3) - y.powi(5)) * (-x * x - y * y).exp()
                - (-(x + 1.0).powi(2) - y * y).exp() / 3.0
        };

        for (x, y) in [(0.0, 0.0), (0.25, 0.75), (0.5, 0.5), (1.0, 0.125), (-1.5, 2.0)] {
            let bx = BigReal::from_f64(x);
            let by = BigReal::from_f64(y);
            let f = BigReal::franke(&bx, &by).to_f64();
            assert!((f - franke(x, y)).abs() <= 1e-14, "franke {} {}", x, y);
            let p = BigReal::peaks(&bx, &by).to_f64();
            assert!((p - peaks(x, y)).abs() <= 1e-13, "peaks {} {}", x, y);
        }
    }
}
