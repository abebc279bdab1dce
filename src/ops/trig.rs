//! Sine, cosine, and tangent.

use crate::defs::BIGIT_BIT_SIZE;
use crate::num::BigReal;
use crate::num::Flavor;
use crate::ops::consts::Constant;

/// Largest number of bigits added to the precision of the argument reduction.
/// Arguments of `2^(32 × REDUCTION_BIGITS_MAX)` and above have no meaningful remainder and give NaN.
const REDUCTION_BIGITS_MAX: usize = 64;

impl BigReal {
    /// Symmetric remainder of `|self|` modulo the constant `period`, in `[-period/2, period/2]`,
    /// and the precision it is computed with: the bigits of `self`, enough extra to cover
    /// the integer part, and one guard bigit. Results are folded and summed at this precision.
    /// Returns None if the argument is too large.
    fn reduce(&self, period: Constant) -> Option<(Self, usize)> {
        let extra = if self.e > 0 {
            self.e as usize / BIGIT_BIT_SIZE + 1
        } else {
            0
        };
        if extra > REDUCTION_BIGITS_MAX {
            return None;
        }

        let p = self.m.len() + extra + 1;
        let r = self.abs().with_bigit_count(p).fmod(&period.value(p));
        Some((r, p))
    }

    /// Taylor series of the sine for `|r| <= π/2`.
    /// The partial sum is kept multiplied by `i!`, the factorial is divided out once at the end.
    fn sin_series(r: &Self, n: usize) -> Self {
        let mut ret = Self::zero();
        let mut xn = r.clone();
        let mx2 = r.mul(r).neg();

        let mut i = 1;
        loop {
            let newret = ret.add(&xn);
            if newret == ret {
                break;
            }
            ret = newret.mul(&Self::from_u64_p((i + 1) * (i + 2), n));
            xn = xn.mul(&mx2);
            i += 2;
        }

        ret.div(&Self::fact(i, 1, n))
    }

    /// Computes the sine of a number.
    /// NaN and infinity give NaN, as do arguments too large to be reduced.
    pub fn sin(&self) -> Self {
        match self.f {
            Flavor::NaN | Flavor::Inf => return Self::nan(),
            Flavor::Value if self.m.is_empty() => return self.clone(),
            Flavor::Value => {}
        }

        let (mut r, p) = match self.reduce(Constant::Tau) {
            Some(v) => v,
            None => return Self::nan(),
        };

        let mut s = self.s;
        if r.is_negative() {
            r = r.neg();
            s = s.invert();
        }

        let pi = Constant::Pi.value(p);
        if r > pi {
            r = r.sub(&pi);
            s = s.invert();
        }
        if r > Constant::Pi2.value(p) {
            r = pi.sub(&r);
        }

        let mut ret = Self::sin_series(&r, p);
        ret.set_bigit_count(self.m.len());
        if !ret.is_zero() {
            ret.s = ret.s.xor(s);
        }
        ret
    }

    /// Computes the cosine of a number as the sine of `π/2 - |r|`,
    /// where `r` is the argument reduced to `[-π, π]`.
    pub fn cos(&self) -> Self {
        match self.f {
            Flavor::NaN | Flavor::Inf => return Self::nan(),
            Flavor::Value if self.m.is_empty() => return Self::from_u64_p(1, self.prec()),
            Flavor::Value => {}
        }

        match self.reduce(Constant::Tau) {
            Some((r, p)) => {
                let mut ret = Self::sin_series(&Constant::Pi2.value(p).sub(&r.abs()), p);
                ret.set_bigit_count(self.m.len());
                ret
            }
            None => Self::nan(),
        }
    }

    /// Computes the tangent of a number.
    /// The argument is reduced to `[-π/2, π/2]`; within `π/4` of zero the result is `sin/cos`,
    /// otherwise `cos/sin` of the distance to `±π/2`.
    pub fn tan(&self) -> Self {
        match self.f {
            Flavor::NaN | Flavor::Inf => return Self::nan(),
            Flavor::Value if self.m.is_empty() => return self.clone(),
            Flavor::Value => {}
        }

        let (y, p) = match self.reduce(Constant::Pi) {
            Some(v) => v,
            None => return Self::nan(),
        };

        let pi2 = Constant::Pi2.value(p);
        let cos = |v: &Self| Self::sin_series(&pi2.sub(&v.abs()), p);

        let mut ret = if y.abs() <= Constant::Pi4.value(p) {
            Self::sin_series(&y, p).div(&cos(&y))
        } else {
            let z = if y.is_positive() {
                pi2.sub(&y)
            } else {
                pi2.neg().sub(&y)
            };
            cos(&z).div(&Self::sin_series(&z, p))
        };
        ret.set_bigit_count(self.m.len());

        if self.s.is_negative() {
            ret.neg()
        } else {
            ret
        }
    }
}
