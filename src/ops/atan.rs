//! Arctangent.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::num::BigReal;
use crate::num::Flavor;
use crate::ops::consts::Constant;

impl BigReal {
    /// Computes the arctangent of a number.
    ///
    /// A different Taylor series is used depending on `|x|` to keep the series argument small:
    ///
    ///  - `|x| < 0.5`: `atan(y) = y - y³/3 + y⁵/5 - ...`
    ///  - `0.5 <= |x| < 1.5`: expansion of `atan(1 - y)` around `π/4`.
    ///  - `1.5 <= |x| < 2`: expansion of `atan(√3 + 2y)` around `π/3`.
    ///  - `|x| >= 2`: `atan(y) = π/2 - 1/y + 1/(3y³) - 1/(5y⁵) + ...`
    pub fn atan(&self) -> Self {
        match self.f {
            Flavor::NaN => return Self::nan(),
            Flavor::Inf => return Constant::Pi2.value(self.prec()).copysign(self),
            Flavor::Value if self.m.is_empty() => return self.clone(),
            Flavor::Value => {}
        }

        let n = self.m.len();
        let absx = self.abs();

        if absx < *HALF {
            let mut ret = self.clone();
            let mut xn = self.clone();
            let mx2 = self.mul(self).neg();
            let mut i = 3;
            loop {
                xn = xn.mul(&mx2);
                let newret = ret.add(&xn.div_i64(i));
                if newret == ret {
                    break;
                }
                ret = newret;
                i += 2;
            }
            return ret;
        }

        let ret = if absx < Self::from_u64_p(3, 1).ldexp(-1) {
            let y = ONE.sub(&absx);
            let mut yn = y.clone();
            let my2 = y.mul(&y).neg();
            let mut ret = Self::zero();
            let mut i: i64 = 0;
            loop {
                let mut newret = ret.add(&yn.div_i64(2 * i + 1).ldexp(-i - 1));
                yn = yn.mul(&y);
                newret = newret.add(&yn.div_i64(2 * i + 2).ldexp(-i - 1));
                yn = yn.mul(&y);
                newret = newret.add(&yn.div_i64(2 * i + 3).ldexp(-i - 2));
                if newret == ret {
                    break;
                }
                ret = newret;
                yn = yn.mul(&my2);
                i += 2;
            }
            Constant::Pi4.value(n).sub(&ret)
        } else if absx < *TWO {
            let sqrt3_2 = Constant::Sqrt3.value(n).ldexp(-1);
            let y = absx.sub(&Constant::Sqrt3.value(n)).ldexp(-1);
            let mut yn = y.clone();
            let my2 = y.mul(&y).neg();
            let mut ret = Self::zero();
            let mut i: i64 = 1;
            loop {
                let mut newret = ret.add(&yn.div_i64(i).ldexp(-1));
                yn = yn.mul(&y);
                newret = newret.sub(&sqrt3_2.mul(&yn).div_i64(i + 1));
                yn = yn.mul(&y);
                newret = newret.add(&yn.div_i64(i + 2));
                yn = yn.mul(&y);
                newret = newret.sub(&sqrt3_2.mul(&yn).div_i64(i + 3));
                yn = yn.mul(&y);
                newret = newret.add(&yn.div_i64(i + 4).ldexp(-1));
                if newret == ret {
                    break;
                }
                ret = newret;
                yn = yn.mul(&my2);
                i += 6;
            }
            Constant::Pi3.value(n).add(&ret)
        } else {
            let y = absx.inverse();
            let mut yn = y.clone();
            let my2 = y.mul(&y).neg();
            let mut ret = y;
            let mut i = 3;
            loop {
                yn = yn.mul(&my2);
                let newret = ret.add(&yn.div_i64(i));
                if newret == ret {
                    break;
                }
                ret = newret;
                i += 2;
            }
            Constant::Pi2.value(n).sub(&ret)
        };

        ret.copysign(self)
    }

    /// Computes the angle of the point `(x, y)` with `self` as `y`: the arctangent of `y/x`
    /// corrected by `±π` in the left half-plane.
    pub fn atan2(&self, x: &Self) -> Self {
        let y = self;
        let n = y.prec().max(x.prec());

        if y.is_nan() || x.is_nan() {
            return Self::nan();
        }

        if y.is_inf() {
            let a = if x.is_inf() {
                if x.is_positive() {
                    Constant::Pi4.value(n)
                } else {
                    Constant::Pi4.value(n).mul_i64(3)
                }
            } else {
                Constant::Pi2.value(n)
            };
            return a.copysign(y);
        }

        if x.is_inf() {
            return if x.is_positive() {
                Self::signed_zero(y.s)
            } else {
                Constant::Pi.value(n).copysign(y)
            };
        }

        if y.is_zero() {
            return if x.is_positive() {
                y.clone()
            } else {
                Constant::Pi.value(n).copysign(y)
            };
        }

        if x.is_zero() {
            return Constant::Pi2.value(n).copysign(y);
        }

        let ret = y.div(x).atan();
        if x.is_negative() {
            let pi = Constant::Pi.value(n);
            if y.is_positive() {
                ret.add(&pi)
            } else {
                ret.sub(&pi)
            }
        } else {
            ret
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    fn close(x: &BigReal, f: f64) -> bool {
        (x.to_f64() - f).abs() <= 1e-15 * f.abs().max(1.0)
    }

    #[test]
    fn test_atan() {
        use core::f64::consts::*;

        assert!(BigReal::zero().atan().is_zero());
        assert!(BigReal::nan().atan().is_nan());
        assert!(close(&BigReal::inf().atan(), FRAC_PI_2));
        assert!(close(&BigReal::neg_inf().atan(), -FRAC_PI_2));
        assert!(close(&BigReal::from_f64(1.0).atan(), FRAC_PI_4));
        assert!(close(&BigReal::from_f64(-1.0).atan(), -FRAC_PI_4));
        assert!(close(&BigReal::from_u64(3).sqrt().atan(), FRAC_PI_3));

        // every region, both signs
        for f in [0.1, 0.49, 0.5, 0.9, 1.2, 1.49, 1.5, 1.73, 1.99, 2.0, 5.0, 1e10] {
            assert!(close(&BigReal::from_f64(f).atan(), f.atan()), "atan {}", f);
            assert!(close(&BigReal::from_f64(-f).atan(), -f.atan()), "atan {}", -f);
        }

        for _ in 0..300 {
            let f = (random::<f64>() - 0.5) * 20.0;
            let x = BigReal::from_f64(f);
            let a = x.atan();
            assert!(close(&a, f.atan()), "atan {}", f);

            let d = a.tan().sub(&x).abs();
            assert!(d.is_zero() || d.exponent() < x.exponent() - 470);
        }
    }

    #[test]
    fn test_atan2() {
        use core::f64::consts::*;

        let f = BigReal::from_f64;
        assert!(close(&f(1.0).atan2(&f(1.0)), FRAC_PI_4));
        assert!(close(&f(1.0).atan2(&f(-1.0)), 3.0 * FRAC_PI_4));
        assert!(close(&f(-1.0).atan2(&f(-1.0)), -3.0 * FRAC_PI_4));
        assert!(close(&f(-1.0).atan2(&f(1.0)), -FRAC_PI_4));

        // axes
        assert!(f(0.0).atan2(&f(1.0)).is_zero());
        assert!(f(-0.0).atan2(&f(0.0)).is_negative());
        assert!(close(&f(0.0).atan2(&f(-1.0)), PI));
        assert!(close(&f(-0.0).atan2(&f(-1.0)), -PI));
        assert!(close(&f(0.0).atan2(&f(-0.0)), PI));
        assert!(close(&f(2.0).atan2(&f(0.0)), FRAC_PI_2));
        assert!(close(&f(-2.0).atan2(&f(-0.0)), -FRAC_PI_2));

        // infinities
        assert!(close(&BigReal::inf().atan2(&f(1.0)), FRAC_PI_2));
        assert!(close(&BigReal::neg_inf().atan2(&BigReal::inf()), -FRAC_PI_4));
        assert!(close(&BigReal::inf().atan2(&BigReal::neg_inf()), 3.0 * FRAC_PI_4));
        assert!(f(-3.0).atan2(&BigReal::inf()).is_negative());
        assert!(close(&f(3.0).atan2(&BigReal::neg_inf()), PI));
        assert!(BigReal::nan().atan2(&f(1.0)).is_nan());

        for _ in 0..300 {
            let y = (random::<f64>() - 0.5) * 20.0;
            let x = (random::<f64>() - 0.5) * 20.0;
            assert!(close(&f(y).atan2(&f(x)), y.atan2(x)), "atan2 {} {}", y, x);
        }
    }
}
