//! Hyperbolic functions.

use crate::common::consts::HALF;
use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::num::BigReal;
use crate::num::Flavor;

impl BigReal {
    /// `(e^x, e^-x)`, or `(e^x - 1, e^-x - 1)` for `|x| < 0.5`, where subtracting
    /// one from the exponent would cancel the leading bits. The flag tells which form is returned.
    fn exp_pair(&self) -> (Self, Self, bool) {
        let near_zero = self.abs() < *HALF;
        if near_zero {
            let n = self.m.len();
            (
                Self::exp_series(self, &ONE, n),
                Self::exp_series(&self.neg(), &ONE, n),
                true,
            )
        } else {
            (self.exp(), self.neg().exp(), false)
        }
    }

    /// Computes the hyperbolic sine of a number.
    pub fn sinh(&self) -> Self {
        match self.f {
            Flavor::NaN => return Self::nan(),
            Flavor::Inf => return self.clone(),
            Flavor::Value if self.m.is_empty() => return self.clone(),
            Flavor::Value => {}
        }

        let (x1, x2, _) = self.exp_pair();
        x1.sub(&x2).ldexp(-1)
    }

    /// Computes the hyperbolic cosine of a number.
    pub fn cosh(&self) -> Self {
        match self.f {
            Flavor::NaN => return Self::nan(),
            Flavor::Inf => return Self::inf(),
            Flavor::Value if self.m.is_empty() => return Self::from_u64_p(1, self.prec()),
            Flavor::Value => {}
        }

        self.exp().add(&self.neg().exp()).ldexp(-1)
    }

    /// Computes the hyperbolic tangent of a number.
    pub fn tanh(&self) -> Self {
        match self.f {
            Flavor::NaN => return Self::nan(),
            Flavor::Inf => return Self::from_u64_p(1, self.prec()).copysign(self),
            Flavor::Value if self.m.is_empty() => return self.clone(),
            Flavor::Value => {}
        }

        // e^-2|x| is below any precision
        if self.e >= 62 {
            return Self::from_u64_p(1, self.m.len()).copysign(self);
        }

        let (x1, x2, near_zero) = self.exp_pair();
        let den = if near_zero {
            x1.add(&x2).add(&TWO)
        } else {
            x1.add(&x2)
        };
        x1.sub(&x2).div(&den)
    }
}
