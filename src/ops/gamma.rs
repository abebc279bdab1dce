//! Gamma function.

use crate::defs::BIGIT_BIT_SIZE;
use crate::num::BigReal;
use crate::num::Flavor;
use crate::ops::consts::Constant;

impl BigReal {
    /// Computes the gamma function using Spouge's approximation.
    ///
    /// `Γ(x) = (x + a - 1)^(x - 1/2) · e^-(x + a - 1) · (√(2π) + Σ c_k / (x + k - 1))`,
    /// where `c_k = (-1)^(k-1) (a - k)^(k - 1/2) e^(a - k) / (k - 1)!` and `a` grows linearly
    /// with the number of bits of precision.
    /// The coefficients alternate and are large, so the sum is computed with twice the precision of `self`.
    /// Arguments below 1/2 use the reflection formula `Γ(x) = π / (sin(πx) Γ(1 - x))`.
    ///
    /// The relative error grows slowly with the magnitude of the argument.
    pub fn gamma(&self) -> Self {
        match self.f {
            Flavor::NaN => return Self::nan(),
            Flavor::Inf if self.s.is_negative() => return Self::nan(),
            Flavor::Inf => return Self::inf(),
            Flavor::Value if self.m.is_empty() => return Self::signed_inf(self.s),
            Flavor::Value => {}
        }

        let n = self.m.len();

        if self.s.is_negative() && self.is_int() {
            return Self::nan();
        }

        let half = Self::from_u64_p(1, n).ldexp(-1);
        if *self < half {
            let pi = Constant::Pi.value(n);
            let one_minus_x = Self::from_u64_p(1, n).sub(self);
            let sin = pi.mul(self).sin();
            return pi.div(&sin.mul(&one_minus_x.gamma()));
        }

        let p = 2 * n;
        let x = self.with_bigit_count(p);
        let bits = (n * BIGIT_BIT_SIZE) as f64;
        let a = (core::f64::consts::LN_2 / core::f64::consts::TAU.ln() * bits).ceil() as u64;
        tracing::trace!(terms = a, bigits = p, "gamma series");

        let one = Self::from_u64_p(1, p);
        let mut sum = Constant::Tau.value(p).sqrt();
        let mut fact_k_1 = one.clone();

        for k in 1..a {
            let ak = Self::from_u64_p(a - k, p);
            let kh = Self::from_u64_p(2 * k - 1, p).ldexp(-1);
            let num = kh.mul(&ak.ln()).add(&ak).exp();
            let den = fact_k_1.mul(&x.add(&Self::from_u64_p(k - 1, p)));
            sum = sum.add(&num.div(&den));
            fact_k_1 = fact_k_1.mul_i64(-(k as i64));
        }

        let t = x.add(&Self::from_u64_p(a - 1, p));
        let f = x.sub(&one.ldexp(-1)).mul(&t.ln()).sub(&t).exp();

        let mut ret = sum.mul(&f);
        ret.set_bigit_count(n);
        ret
    }
}
