//! Logarithms.

use crate::common::consts::ONE;
use crate::num::BigReal;
use crate::num::Flavor;
use crate::ops::consts::Constant;

impl BigReal {
    /// Natural logarithm of `x` in `[1, 2]`, as `4z(1 + z²/3 + z⁴/5 + ...)` where `z = (√x - 1)/(√x + 1)`.
    pub(crate) fn fast_log(x: &Self) -> Self {
        let y = x.sqrt();
        let z = y.sub(&ONE).div(&y.add(&ONE));
        let z2 = z.mul(&z);
        let mut zn = z2.clone();
        let mut sum = Self::from_u64_p(1, x.prec());

        let mut i = 3;
        loop {
            let newsum = sum.add(&zn.div_i64(i));
            if newsum == sum {
                break;
            }
            sum = newsum;
            zn = zn.mul(&z2);
            i += 2;
        }

        z.mul(&sum).mul_i64(4)
    }

    /// Special values of the logarithm functions: NaN for negative arguments and NaN,
    /// -∞ for zero, +∞ for +∞.
    fn log_special(&self) -> Option<Self> {
        match self.f {
            Flavor::NaN => Some(Self::nan()),
            Flavor::Inf if self.s.is_negative() => Some(Self::nan()),
            Flavor::Inf => Some(Self::inf()),
            Flavor::Value if self.m.is_empty() => Some(Self::neg_inf()),
            Flavor::Value if self.s.is_negative() => Some(Self::nan()),
            Flavor::Value => None,
        }
    }

    /// Computes the natural logarithm of a number.
    /// With `self = M × 2^E`, `M` in `[1, 2)`, the result is `E·ln(2) + ln(M)`.
    pub fn ln(&self) -> Self {
        if let Some(ret) = self.log_special() {
            return ret;
        }

        let (m, e) = self.frexp();
        let ret = Self::fast_log(&m);
        if e == 0 {
            return ret;
        }

        let n = self.m.len();
        Self::from_i64_p(e, n)
            .mul(&Constant::Ln2.value(n))
            .add(&ret)
    }

    /// Computes the natural logarithm of a number. Same as [`BigReal::ln`].
    pub fn log(&self) -> Self {
        self.ln()
    }

    /// Computes the logarithm base 2 of a number as `E + ln(M)·log2(e)`.
    /// Exact powers of two give exact results.
    pub fn log2(&self) -> Self {
        if let Some(ret) = self.log_special() {
            return ret;
        }

        let n = self.m.len();
        let (m, e) = self.frexp();
        let ret = Self::fast_log(&m).mul(&Constant::Log2E.value(n));

        Self::from_i64_p(e, n).add(&ret)
    }

    /// Computes the logarithm base 10 of a number as `ln(x)·log10(e)`.
    pub fn log10(&self) -> Self {
        if let Some(ret) = self.log_special() {
            return ret;
        }

        self.ln().mul(&Constant::Log10E.value(self.m.len()))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_ln() {
        assert!(BigReal::from_f64(1.0).ln().is_zero());
        assert!(BigReal::from_f64(-1.0).ln().is_nan());
        assert!(BigReal::nan().ln().is_nan());
        assert!(BigReal::neg_inf().ln().is_nan());
        assert!(BigReal::inf().ln().is_inf());
        let l = BigReal::zero().ln();
        assert!(l.is_inf() && l.is_negative());

        for _ in 0..300 {
            let f = random::<f64>() * 10f64.powi(random::<i32>() % 100) + 1e-300;
            let x = BigReal::from_f64(f);
            let l = x.ln();
            assert!((l.to_f64() - f.ln()).abs() <= f.ln().abs() * 4.0 * f64::EPSILON + 1e-300);
        }

        // e^k is recovered through ln at high precision
        let e = Constant::E.value(8);
        let l = e.ln().sub(&BigReal::from_u64_p(1, 8)).abs();
        assert!(l.is_zero() || l.exponent() < -240);
    }

    #[test]
    fn test_log2_log10() {
        assert_eq!(BigReal::from_f64(8.0).log2().to_f64(), 3.0);
        assert_eq!(BigReal::from_f64(0.125).log2().to_f64(), -3.0);
        assert!(BigReal::from_f64(1.0).log2().is_zero());
        assert!((BigReal::from_f64(1000.0).log10().to_f64() - 3.0).abs() <= 3.0 * f64::EPSILON);
        assert!((BigReal::from_f64(0.001).log10().to_f64() + 3.0).abs() <= 3.0 * f64::EPSILON);
        assert!((BigReal::from_f64(10.0).log2().to_f64() - 10f64.log2()).abs() <= 4.0 * f64::EPSILON);
        assert!(BigReal::from_f64(-2.0).log10().is_nan());
        assert!(BigReal::zero().log2().is_negative());
        assert!(BigReal::from_f64(1.5).log() == BigReal::from_f64(1.5).ln());
    }
}
