//! Exponentiation.

use crate::defs::Exponent;
use crate::defs::Sign;
use crate::num::BigReal;
use crate::num::Flavor;
use crate::ops::consts::Constant;
use core::cmp::Ordering;

/// Extra bigits used to keep the reduced argument of `exp` accurate.
const EXP_GUARD_BIGITS: usize = 2;

impl BigReal {
    /// `x!` with only every `step`-th factor, e.g. `fact(7, 2) = 7·5·3·1`.
    /// Powers of two go into the exponent, other factors are collected in a machine word.
    pub(crate) fn fact(x: u64, step: u64, n: usize) -> Self {
        if x < step {
            return Self::from_u64_p(1, n);
        }
        if x == step {
            return Self::from_u64_p(x, n);
        }

        let start = (x + step - 1) % step + 1;
        let mut ret = Self::from_u64_p(start, n);
        let mut multiplier: u64 = 1;
        let mut exponent: Exponent = 0;

        let mut i = start;
        while i < x {
            i += step;

            let tz = i.trailing_zeros();
            exponent += tz as Exponent;
            let odd = i >> tz;

            multiplier = match multiplier.checked_mul(odd) {
                Some(m) => m,
                None => {
                    ret = ret.mul(&Self::from_u64_p(multiplier, n));
                    odd
                }
            };
        }

        ret.mul(&Self::from_u64_p(multiplier, n)).ldexp(exponent)
    }

    /// Taylor series of `exp(x) - y` for small `|x|`, computed with `n` bigits.
    /// `y` is 0 or 1; with 1 the leading term is dropped, which keeps `exp(x) - 1` accurate near zero.
    /// The factorial is applied once at the end: each step multiplies the partial sum by the next index.
    pub(crate) fn exp_series(x: &Self, y: &Self, n: usize) -> Self {
        let mut ret = Self::from_u64_p(1, n).sub(y);
        let mut xn = x.clone();
        xn.set_bigit_count(n);

        let mut i = 1;
        loop {
            let newret = ret.add(&xn);
            if newret == ret {
                break;
            }
            i += 1;
            ret = newret.mul(&Self::from_u64_p(i, n));
            xn = xn.mul(x);
        }

        ret.div(&Self::fact(i, 1, n))
    }

    /// Result of `exp` and `exp2` for arguments beyond the exponent range.
    fn exp_overflow(&self) -> Self {
        if self.s.is_negative() {
            Self::zero()
        } else {
            Self::inf()
        }
    }

    /// Computes `e^self`.
    /// The argument is reduced as `x = E0·ln(2) + x0`, the series is evaluated for `x0`,
    /// and `2^E0` is applied to the exponent.
    pub fn exp(&self) -> Self {
        match self.f {
            Flavor::NaN => return Self::nan(),
            Flavor::Inf => return self.exp_overflow(),
            Flavor::Value if self.m.is_empty() => return Self::from_u64_p(1, self.prec()),
            Flavor::Value => {}
        }

        let n = self.m.len();
        let p = n + EXP_GUARD_BIGITS;
        let ln2 = Constant::Ln2.value(p);

        let q = self.div(&ln2);
        if q.e >= 63 {
            return self.exp_overflow();
        }

        let e0 = q.to_i64();
        let x0 = self.sub(&Self::from_i64_p(e0, p).mul(&ln2));

        let mut ret = Self::exp_series(&x0, &Self::zero(), p).ldexp(e0);
        ret.set_bigit_count(n);
        ret
    }

    /// Computes `2^self`.
    pub fn exp2(&self) -> Self {
        match self.f {
            Flavor::NaN => return Self::nan(),
            Flavor::Inf => return self.exp_overflow(),
            Flavor::Value if self.m.is_empty() => return Self::from_u64_p(1, self.prec()),
            Flavor::Value => {}
        }

        if self.e >= 63 {
            return self.exp_overflow();
        }

        let n = self.m.len();
        let p = n + EXP_GUARD_BIGITS;

        let e0 = self.to_i64();
        let x0 = self
            .sub(&Self::from_i64_p(e0, p))
            .mul(&Constant::Ln2.value(p));

        let mut ret = Self::exp_series(&x0, &Self::zero(), p).ldexp(e0);
        ret.set_bigit_count(n);
        ret
    }

    /// Computes `self^k` by binary exponentiation. Negative powers use the reciprocal of `self`.
    pub fn powi(&self, k: i64) -> Self {
        let mut ret = Self::from_u64_p(1, self.prec());
        let mut xn = if k < 0 { self.inverse() } else { self.clone() };
        let mut k = k.unsigned_abs();

        while k != 0 {
            if k & 1 != 0 {
                ret = ret.mul(&xn);
            }
            k >>= 1;
            if k != 0 {
                xn = xn.mul(&xn);
            }
        }

        ret
    }

    /// Returns true if the value is a finite integer.
    pub(crate) fn is_int(&self) -> bool {
        self.is_finite() && self.trunc() == *self
    }

    /// Returns true if the value is an odd integer.
    fn is_odd_int(&self) -> bool {
        self.is_int() && !self.ldexp(-1).is_int()
    }

    /// Computes `self^y`.
    ///
    /// Integer powers below 2^62 in magnitude are computed exactly by binary exponentiation,
    /// positive bases use `exp(y·ln(x))`. A negative base with a non-integer power has no real value:
    /// the result is `±exp(y·ln(-x))`, negative if `y` rounds to an odd integer.
    pub fn pow(&self, y: &Self) -> Self {
        if y.is_zero() {
            return Self::from_u64_p(1, self.prec());
        }
        if self.is_nan() || y.is_nan() {
            return Self::nan();
        }

        if self.is_zero() {
            let s = if y.is_odd_int() { self.s } else { Sign::Pos };
            return if y.is_positive() {
                Self::signed_zero(s)
            } else {
                Self::signed_inf(s)
            };
        }

        if y.is_inf() {
            let one = Self::from_u64_p(1, 1);
            return match self.abs().cmp(&one) {
                Some(Ordering::Equal) => Self::from_u64_p(1, self.prec()),
                Some(Ordering::Greater) if y.is_positive() => Self::inf(),
                Some(Ordering::Less) if y.is_negative() => Self::inf(),
                _ => Self::zero(),
            };
        }

        if self.is_inf() {
            let s = if self.is_negative() && y.is_odd_int() {
                Sign::Neg
            } else {
                Sign::Pos
            };
            return if y.is_positive() {
                Self::signed_inf(s)
            } else {
                Self::signed_zero(s)
            };
        }

        if y.e < 62 && y.is_int() {
            return self.powi(y.to_i64());
        }

        if self.is_positive() {
            return y.mul(&self.ln()).exp();
        }

        let ret = y.mul(&self.neg().ln()).exp();
        if y.round().is_odd_int() {
            ret.neg()
        } else {
            ret
        }
    }
}
