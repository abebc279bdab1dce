//! Rounding and remainder.

use crate::common::consts::HALF;
use crate::defs::BIGIT_BIT_SIZE;
use crate::defs::BIGIT_MAX;
use crate::num::BigReal;
use crate::num::Flavor;

impl BigReal {
    /// Clears the fraction bits below the binary point.
    fn clear_fraction(&self) -> Self {
        if self.e < 0 {
            return Self::signed_zero(self.s);
        }

        let mut ret = self.clone();
        let mut exponent = self.e;
        for d in ret.m.iter_mut() {
            if exponent <= 0 {
                *d = 0;
            } else if exponent < BIGIT_BIT_SIZE as i64 {
                *d &= !(BIGIT_MAX >> exponent);
            }
            exponent -= BIGIT_BIT_SIZE as i64;
        }

        ret
    }

    /// Returns the largest integer less than or equal to `self`.
    pub fn floor(&self) -> Self {
        if !self.is_regular() {
            return self.clone();
        }
        if self.s.is_negative() {
            return self.neg().ceil().neg();
        }
        self.clear_fraction()
    }

    /// Returns the smallest integer greater than or equal to `self`.
    pub fn ceil(&self) -> Self {
        if !self.is_regular() {
            return self.clone();
        }
        if self.s.is_negative() {
            return self.neg().floor().neg();
        }

        let ret = self.clear_fraction();
        if ret < *self {
            ret.add(&Self::from_u64_p(1, self.m.len()))
        } else {
            ret
        }
    }

    /// Returns the nearest integer, rounding half-way cases away from zero.
    pub fn round(&self) -> Self {
        if !self.is_regular() {
            return self.clone();
        }
        if self.s.is_negative() {
            return self.neg().round().neg();
        }
        self.add(&HALF).floor()
    }

    /// Returns the integer part of `self`, rounding toward zero.
    pub fn trunc(&self) -> Self {
        if !self.is_regular() {
            return self.clone();
        }
        self.clear_fraction()
    }

    /// Returns `self - floor(self)`.
    pub fn fract(&self) -> Self {
        self.sub(&self.floor())
    }

    /// Splits `self` into the fractional and the integer part, both carrying the sign of `self`.
    pub fn modf(&self) -> (Self, Self) {
        if self.is_inf() {
            return (Self::signed_zero(self.s), self.clone());
        }
        let absx = self.abs();
        let int = absx.floor();
        (absx.sub(&int).copysign(self), int.copysign(self))
    }

    /// Computes the symmetric remainder `self - round(self / y) × y`.
    /// The result is at most `|y| / 2` in magnitude and its sign can differ from the sign of `self`.
    /// Division by zero and an infinite `self` give NaN, an infinite `y` returns `self`.
    pub fn fmod(&self, y: &Self) -> Self {
        match (self.f, y.f) {
            (Flavor::NaN, _) | (_, Flavor::NaN) | (Flavor::Inf, _) => return Self::nan(),
            (Flavor::Value, Flavor::Inf) => return self.clone(),
            (Flavor::Value, Flavor::Value) => {}
        }
        if y.is_zero() {
            return Self::nan();
        }
        if self.is_zero() {
            return self.clone();
        }

        self.sub(&self.div(y).round().mul(y))
    }
}
