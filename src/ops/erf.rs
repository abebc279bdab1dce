//! Error function.

use crate::defs::BIGIT_BIT_SIZE;
use crate::num::BigReal;
use crate::num::Flavor;
use crate::ops::consts::Constant;

/// Boundary between the Taylor series and the asymptotic expansion.
const ERF_ASYMPTOTIC_FROM: u64 = 7;

/// The asymptotic series diverges: it is cut after this many terms.
const ERF_ASYMPTOTIC_TERMS: u64 = 30;

impl BigReal {
    /// Computes the error function.
    ///
    /// For `|x| < 7` the alternating Taylor series `2/√π Σ (-1)^k x^(2k+1) / (k! (2k+1))` is used,
    /// with extra bigits to absorb the cancellation between its terms.
    /// Beyond that the asymptotic expansion of `erfc` is cut after 30 terms,
    /// which limits the accuracy of the result to a few hundred bits.
    pub fn erf(&self) -> Self {
        match self.f {
            Flavor::NaN => return Self::nan(),
            Flavor::Inf => return Self::from_u64_p(1, self.prec()).copysign(self),
            Flavor::Value if self.m.is_empty() => return self.clone(),
            Flavor::Value => {}
        }

        if self.s.is_negative() {
            return self.neg().erf().neg();
        }

        let n = self.m.len();
        if *self < Self::from_u64_p(ERF_ASYMPTOTIC_FROM, 1) {
            self.erf_series(n)
        } else {
            self.erf_asymptotic(n)
        }
    }

    fn erf_series(&self, n: usize) -> Self {
        // the largest term is about e^(x²) times the result
        let x2f = self.to_f64() * self.to_f64();
        let guard = (x2f * core::f64::consts::LOG2_E) as usize / BIGIT_BIT_SIZE + 1;
        let p = n + guard;

        let x = self.with_bigit_count(p);
        let mx2 = x.mul(&x).neg();
        let mut xn = x.clone();
        let mut sum = x;

        let mut k: i64 = 1;
        loop {
            xn = xn.mul(&mx2).div_i64(k);
            let newsum = sum.add(&xn.div_i64(2 * k + 1));
            if newsum == sum {
                break;
            }
            sum = newsum;
            k += 1;
        }

        let mut ret = sum.mul(&Constant::TwoInvSqrtPi.value(p));
        ret.set_bigit_count(n);
        ret
    }

    fn erf_asymptotic(&self, n: usize) -> Self {
        let x2 = self.mul(self);
        let xmul = x2.ldexp(1).inverse();
        let mut xn = Self::from_u64_p(1, n);
        let mut sum = xn.clone();

        for k in 1..ERF_ASYMPTOTIC_TERMS {
            xn = xn.mul(&xmul);
            let tmp = xn.mul(&Self::fact(2 * k - 1, 2, n));
            let newsum = if k & 1 == 1 {
                sum.sub(&tmp)
            } else {
                sum.add(&tmp)
            };
            if newsum == sum {
                break;
            }
            sum = newsum;
        }

        let erfc = x2
            .neg()
            .exp()
            .div(&self.mul(&Constant::Pi.value(n).sqrt()))
            .mul(&sum);
        Self::from_u64_p(1, n).sub(&erfc)
    }
}
