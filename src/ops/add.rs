//! Addition and subtraction.

use crate::defs::Sign;
use crate::defs::BIGIT_BIT_SIZE;
use crate::mantissa;
use crate::num::BigReal;
use crate::num::Flavor;
use core::cmp::Ordering;

impl BigReal {
    /// Adds `d2` to `self`. The result has the precision of the wider operand.
    pub fn add(&self, d2: &Self) -> Self {
        self.add_sub(d2, Sign::Pos)
    }

    /// Subtracts `d2` from `self`. The result has the precision of the wider operand.
    pub fn sub(&self, d2: &Self) -> Self {
        self.add_sub(d2, Sign::Neg)
    }

    /// `self + op × d2`
    fn add_sub(&self, d2: &Self, op: Sign) -> Self {
        let s2 = d2.s.xor(op);

        match (self.f, d2.f) {
            (Flavor::NaN, _) | (_, Flavor::NaN) => return Self::nan(),
            (Flavor::Inf, Flavor::Inf) => {
                return if self.s == s2 {
                    Self::signed_inf(s2)
                } else {
                    Self::nan()
                }
            }
            (Flavor::Inf, Flavor::Value) => return self.clone(),
            (Flavor::Value, Flavor::Inf) => return Self::signed_inf(s2),
            (Flavor::Value, Flavor::Value) => {}
        }

        if d2.is_zero() {
            if self.is_zero() {
                // -0 + -0 = -0, any other sum of zeroes is +0
                let s = if self.s.is_negative() && s2.is_negative() {
                    Sign::Neg
                } else {
                    Sign::Pos
                };
                return Self::signed_zero(s);
            }
            return self.clone();
        }

        if self.is_zero() {
            let mut ret = d2.clone();
            ret.s = s2;
            return ret;
        }

        let n = self.m.len().max(d2.m.len());

        // a is the operand with the larger magnitude
        let (a, sa, b, sb) = if self.cmp_abs(d2) == Ordering::Less {
            (d2, s2, self, self.s)
        } else {
            (self, self.s, d2, s2)
        };

        let d = a.e as i128 - b.e as i128;
        if d / BIGIT_BIT_SIZE as i128 > n as i128 {
            let mut ret = a.with_bigit_count(n);
            ret.s = sa;
            return ret;
        }
        let d = d as usize;

        if sa == sb {
            let (m, overflow) = mantissa::add(&a.m, &b.m, d, n);
            Self::from_parts_wide(m, a.e as i128 + overflow as i128, sa)
        } else {
            match mantissa::sub(&a.m, &b.m, d, n) {
                Some((m, shift)) => Self::from_parts_wide(m, a.e as i128 - shift as i128, sa),
                None => Self::zero(),
            }
        }
    }
}
