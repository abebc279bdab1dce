//! Arcsine and arccosine.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::num::BigReal;
use crate::ops::consts::Constant;

impl BigReal {
    /// Shared computation of `asin` and `acos`.
    ///
    /// Near zero (`|x| < 0.5`) the Taylor series of `asin` is used directly.
    /// Otherwise `asin(|x|) = π/2 - 2·asin(√((1 - |x|)/2))` keeps the series argument small
    /// and the precision near `|x| = 1`.
    fn asin_acos(&self, is_asin: bool) -> Self {
        if self.is_nan() || self.abs() > *ONE {
            return Self::nan();
        }
        if self.is_zero() {
            return if is_asin {
                self.clone()
            } else {
                Constant::Pi2.value(self.prec())
            };
        }

        let n = self.m.len();
        let mut absx = self.abs();
        let around_zero = absx < *HALF;

        if !around_zero {
            absx = ONE.sub(&absx).ldexp(-1).sqrt();
        }

        let mut ret = absx.clone();
        let mut xn = absx.clone();
        let x2 = absx.mul(&absx);
        let mut fact1 = Self::from_u64_p(2, n);
        let mut fact2 = Self::from_u64_p(1, n);

        let mut i: i64 = 1;
        loop {
            xn = xn.mul(&x2);
            let div = fact2.mul_i64(2 * i + 1);
            let newret = ret.add(&fact1.mul(&xn).div(&div).ldexp(-2 * i));
            if newret == ret {
                break;
            }
            ret = newret;
            fact1 = fact1.mul_i64((2 * i + 1) * (2 * i + 2));
            fact2 = fact2.mul_i64((i + 1) * (i + 1));
            i += 1;
        }

        if self.is_negative() {
            ret = ret.neg();
        }

        let pi2 = Constant::Pi2.value(n);
        if around_zero {
            if is_asin {
                ret
            } else {
                pi2.sub(&ret)
            }
        } else {
            let adjust = if self.is_negative() {
                Constant::Pi.value(n)
            } else {
                Self::zero()
            };
            if is_asin {
                pi2.sub(&adjust).sub(&ret.ldexp(1))
            } else {
                adjust.add(&ret.ldexp(1))
            }
        }
    }

    /// Computes the arcsine of a number. Arguments outside `[-1, 1]` give NaN.
    pub fn asin(&self) -> Self {
        self.asin_acos(true)
    }

    /// Computes the arccosine of a number. Arguments outside `[-1, 1]` give NaN.
    pub fn acos(&self) -> Self {
        self.asin_acos(false)
    }
}
