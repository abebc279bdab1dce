//! Mathematical constants, computed on first use and cached per bigit count.

mod pi;

use crate::common::buf::BigitBuf;
use crate::ctx::global_bigit_count;
use crate::defs::Sign;
use crate::defs::BIGIT_MAX;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::num::BigReal;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Named mathematical constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// Euler's number.
    E,
    /// log2(e)
    Log2E,
    /// log10(e)
    Log10E,
    /// ln(2)
    Ln2,
    /// ln(10)
    Ln10,
    /// π
    Pi,
    /// π/2
    Pi2,
    /// π/3
    Pi3,
    /// π/4
    Pi4,
    /// τ = 2π
    Tau,
    /// 1/π
    InvPi,
    /// 2/π
    TwoInvPi,
    /// 2/√π
    TwoInvSqrtPi,
    /// √2
    Sqrt2,
    /// √3
    Sqrt3,
    /// 1/√2
    Sqrt1_2,
    /// The smallest positive value: `1 × 2^i64::MIN`.
    Min,
    /// The largest finite value: all mantissa bits set, exponent `i64::MAX`.
    Max,
}

/// Bigits added to the working precision of a constant; the result is truncated back.
const GUARD_BIGITS: usize = 2;

lazy_static! {
    static ref CACHE: Mutex<HashMap<(Constant, usize), BigReal>> = Mutex::new(HashMap::new());
}

impl Constant {
    /// Returns the value of the constant with `n` bigits. A count of 0 is treated as 1.
    /// The value is computed once per bigit count and then served from a process-wide cache.
    pub fn value(self, n: usize) -> BigReal {
        let key = (self, n.max(1));

        // the lock is released while computing: constants depend on each other
        let cached = CACHE
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned();
        if let Some(v) = cached {
            return v;
        }

        tracing::debug!(constant = ?self, bigits = key.1, "computing constant");
        let v = self.compute(key.1);

        CACHE
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(v)
            .clone()
    }

    fn compute(self, n: usize) -> BigReal {
        let p = n + GUARD_BIGITS;
        let int = |v: u64| BigReal::from_u64_p(v, p);
        let mut ret = match self {
            Constant::E => BigReal::exp_series(&int(1), &BigReal::zero(), p),
            Constant::Log2E => Constant::Ln2.value(p).inverse(),
            Constant::Log10E => Constant::Ln10.value(p).inverse(),
            Constant::Ln2 => BigReal::fast_log(&int(2)),
            Constant::Ln10 => int(10).ln(),
            Constant::Pi => pi::machin(p),
            Constant::Pi2 => Constant::Pi.value(p).ldexp(-1),
            Constant::Pi3 => Constant::Pi.value(p).div(&int(3)),
            Constant::Pi4 => Constant::Pi.value(p).ldexp(-2),
            Constant::Tau => Constant::Pi.value(p).ldexp(1),
            Constant::InvPi => Constant::Pi.value(p).inverse(),
            Constant::TwoInvPi => Constant::InvPi.value(p).ldexp(1),
            Constant::TwoInvSqrtPi => Constant::Pi.value(p).sqrt().inverse().ldexp(1),
            Constant::Sqrt2 => int(2).sqrt(),
            Constant::Sqrt3 => int(3).sqrt(),
            Constant::Sqrt1_2 => Constant::Sqrt2.value(p).ldexp(-1),
            Constant::Min => {
                return BigReal::from_parts(BigitBuf::new(n), EXPONENT_MIN, Sign::Pos);
            }
            Constant::Max => {
                let mut m = BigitBuf::new(n);
                m.fill(BIGIT_MAX);
                return BigReal::from_parts(m, EXPONENT_MAX, Sign::Pos);
            }
        };
        ret.set_bigit_count(n);
        ret
    }
}

impl BigReal {
    /// Returns the constant `c` with the default precision.
    pub fn constant(c: Constant) -> Self {
        c.value(global_bigit_count())
    }

    /// Returns π with the default precision.
    pub fn pi() -> Self {
        Constant::Pi.value(global_bigit_count())
    }

    /// Returns Euler's number with the default precision.
    pub fn e() -> Self {
        Constant::E.value(global_bigit_count())
    }

    /// Returns the smallest positive number with the default precision.
    pub fn min_positive() -> Self {
        Constant::Min.value(global_bigit_count())
    }

    /// Returns the largest finite number with the default precision.
    pub fn max_value() -> Self {
        Constant::Max.value(global_bigit_count())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_consts() {
        let close = |c: Constant, f: f64| {
            let v = c.value(2);
            assert_eq!(v.bigit_count(), 2);
            assert!((v.to_f64() - f).abs() <= f * f64::EPSILON, "{:?}", c);
        };

        use core::f64::consts;
        close(Constant::E, consts::E);
        close(Constant::Log2E, consts::LOG2_E);
        close(Constant::Log10E, consts::LOG10_E);
        close(Constant::Ln2, consts::LN_2);
        close(Constant::Ln10, consts::LN_10);
        close(Constant::Pi, consts::PI);
        close(Constant::Pi2, consts::FRAC_PI_2);
        close(Constant::Pi3, consts::FRAC_PI_3);
        close(Constant::Pi4, consts::FRAC_PI_4);
        close(Constant::Tau, consts::TAU);
        close(Constant::InvPi, consts::FRAC_1_PI);
        close(Constant::TwoInvPi, consts::FRAC_2_PI);
        close(Constant::TwoInvSqrtPi, consts::FRAC_2_SQRT_PI);
        close(Constant::Sqrt2, consts::SQRT_2);
        close(Constant::Sqrt3, 3f64.sqrt());
        close(Constant::Sqrt1_2, consts::FRAC_1_SQRT_2);

        let min = Constant::Min.value(3);
        assert_eq!(min.as_raw_parts(), (&[0u32, 0, 0][..], EXPONENT_MIN, Sign::Pos));
        let max = Constant::Max.value(3);
        assert_eq!(max.as_raw_parts(), (&[BIGIT_MAX; 3][..], EXPONENT_MAX, Sign::Pos));

        // cached values are served per bigit count
        assert_eq!(Constant::Pi.value(5).bigit_count(), 5);
        assert!(Constant::Pi.value(5) == Constant::Pi.value(5));
        assert_eq!(Constant::Pi.value(0).bigit_count(), 1);

        // every bigit is right: the value agrees with a wider one truncated
        for c in [
            Constant::E,
            Constant::Log2E,
            Constant::Log10E,
            Constant::Ln2,
            Constant::Ln10,
            Constant::Pi,
            Constant::Pi3,
            Constant::InvPi,
            Constant::TwoInvSqrtPi,
            Constant::Sqrt3,
        ] {
            for n in [1, 2, 7, 16] {
                let v = c.value(n);
                let d = v.sub(&c.value(n + 3).with_bigit_count(n)).abs();
                let ulp = v.exponent() - 32 * n as i64;
                assert!(d.is_zero() || d.exponent() <= ulp, "{:?} n={}", c, n);
            }
        }

        // high precision digits of e: 0x2.b7e151628aed2a6abf7158809cf4f3c762e7160f3
        let e = Constant::E.value(4);
        assert_eq!(&e.as_raw_parts().0[..3], &[0x5bf0_a8b1, 0x4576_9535, 0x5fb8_ac40]);
    }
}
