//! Number definition and basic operations.

use crate::common::buf::BigitBuf;
use crate::ctx::global_bigit_count;
use crate::defs::Bigit;
#[cfg(feature = "random")]
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::BIGIT_BIT_SIZE;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use crate::mantissa;
use core::cmp::Ordering;

/// Kind of value held by a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flavor {
    Value,
    Inf,
    NaN,
}

/// An arbitrary precision real number.
///
/// A finite non-zero number is `±1.m × 2^e`, where the fraction `m` is stored as 32-bit
/// bigits, most significant bigit first, and the leading one is implicit.
/// An empty mantissa denotes zero. Zero keeps its sign.
///
/// The number of bigits determines the precision: `32 × bigit_count` fraction bits.
/// The result of an operation on two numbers of different precision has the precision of the wider one.
#[derive(Debug, Clone)]
pub struct BigReal {
    pub(crate) m: BigitBuf,
    pub(crate) e: Exponent,
    pub(crate) s: Sign,
    pub(crate) f: Flavor,
}

impl BigReal {
    /// Returns positive zero.
    pub fn zero() -> Self {
        Self::signed_zero(Sign::Pos)
    }

    /// Returns one with the default precision.
    pub fn one() -> Self {
        Self::from_u64_p(1, global_bigit_count())
    }

    /// Returns NaN.
    pub fn nan() -> Self {
        BigReal {
            m: BigitBuf::new(0),
            e: 0,
            s: Sign::Pos,
            f: Flavor::NaN,
        }
    }

    /// Returns positive infinity.
    pub fn inf() -> Self {
        Self::signed_inf(Sign::Pos)
    }

    /// Returns negative infinity.
    pub fn neg_inf() -> Self {
        Self::signed_inf(Sign::Neg)
    }

    pub(crate) fn signed_zero(s: Sign) -> Self {
        BigReal {
            m: BigitBuf::new(0),
            e: 0,
            s,
            f: Flavor::Value,
        }
    }

    pub(crate) fn signed_inf(s: Sign) -> Self {
        BigReal {
            m: BigitBuf::new(0),
            e: 0,
            s,
            f: Flavor::Inf,
        }
    }

    /// Finite number from normalized parts.
    pub(crate) fn from_parts(m: BigitBuf, e: Exponent, s: Sign) -> Self {
        BigReal {
            m,
            e,
            s,
            f: Flavor::Value,
        }
    }

    /// Finite number from parts whose exponent may be out of range:
    /// too large an exponent gives infinity, too small gives zero.
    pub(crate) fn from_parts_wide(m: BigitBuf, e: i128, s: Sign) -> Self {
        if e > EXPONENT_MAX as i128 {
            Self::signed_inf(s)
        } else if e < EXPONENT_MIN as i128 {
            Self::signed_zero(s)
        } else {
            Self::from_parts(m, e as Exponent, s)
        }
    }

    /// Constructs a number from the fraction bigits `m` (most significant first, implicit leading one),
    /// the binary exponent `e`, and the sign `s`. An empty `m` gives zero.
    pub fn from_raw_parts(m: &[Bigit], e: Exponent, s: Sign) -> Self {
        if m.is_empty() {
            Self::signed_zero(s)
        } else {
            Self::from_parts(BigitBuf::from_slice(m), e, s)
        }
    }

    /// Returns the fraction bigits, the exponent, and the sign.
    pub fn as_raw_parts(&self) -> (&[Bigit], Exponent, Sign) {
        (&self.m, self.e, self.s)
    }

    /// Returns the number of bigits in the mantissa; zero and special values have none.
    pub fn bigit_count(&self) -> usize {
        self.m.len()
    }

    /// Working precision in bigits: zero and special values fall back to the default.
    pub(crate) fn prec(&self) -> usize {
        if self.m.is_empty() {
            global_bigit_count()
        } else {
            self.m.len()
        }
    }

    /// Changes the number of mantissa bigits to `n`, truncating or extending with zeroes.
    /// Zero and special values are not changed. `n` of 0 is treated as 1.
    pub fn set_bigit_count(&mut self, n: usize) {
        if !self.m.is_empty() {
            self.m.resize(n.max(1));
        }
    }

    /// Returns a copy with the mantissa truncated or extended to `n` bigits.
    pub fn with_bigit_count(&self, n: usize) -> Self {
        let mut ret = self.clone();
        ret.set_bigit_count(n);
        ret
    }

    /// Returns the binary exponent.
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Returns the sign.
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns true if the value is zero of either sign.
    pub fn is_zero(&self) -> bool {
        self.f == Flavor::Value && self.m.is_empty()
    }

    /// Returns true if the value is NaN.
    pub fn is_nan(&self) -> bool {
        self.f == Flavor::NaN
    }

    /// Returns true if the value is positive or negative infinity.
    pub fn is_inf(&self) -> bool {
        self.f == Flavor::Inf
    }

    /// Returns true if the value is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        self.f == Flavor::Value
    }

    /// Returns true if the sign is negative. Applies to zero and infinity too; NaN is never negative.
    pub fn is_negative(&self) -> bool {
        self.f != Flavor::NaN && self.s == Sign::Neg
    }

    /// Returns true if the sign is positive. NaN is never positive.
    pub fn is_positive(&self) -> bool {
        self.f != Flavor::NaN && self.s == Sign::Pos
    }

    /// Returns true if the value is non-zero and not NaN.
    pub fn as_bool(&self) -> bool {
        !self.is_zero() && !self.is_nan()
    }

    /// Finite non-zero value.
    #[inline]
    pub(crate) fn is_regular(&self) -> bool {
        self.f == Flavor::Value && !self.m.is_empty()
    }

    /// Returns the number with the opposite sign.
    pub fn neg(&self) -> Self {
        let mut ret = self.clone();
        ret.s = ret.s.invert();
        ret
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        let mut ret = self.clone();
        ret.s = Sign::Pos;
        ret
    }

    /// Returns the absolute value.
    pub fn fabs(&self) -> Self {
        self.abs()
    }

    /// Returns the magnitude of `self` with the sign of `y`.
    pub fn copysign(&self, y: &Self) -> Self {
        let mut ret = self.clone();
        ret.s = y.s;
        ret
    }

    /// Returns `self × 2^exp`.
    pub fn ldexp(&self, exp: Exponent) -> Self {
        if !self.is_regular() {
            return self.clone();
        }
        Self::from_parts_wide(self.m.clone(), self.e as i128 + exp as i128, self.s)
    }

    /// Splits the number into a mantissa in `[1, 2)` carrying the sign of `self`, and a binary exponent.
    /// Zero and special values are returned unchanged with exponent 0.
    pub fn frexp(&self) -> (Self, Exponent) {
        if !self.is_regular() {
            return (self.clone(), 0);
        }
        let mut ret = self.clone();
        ret.e = 0;
        (ret, self.e)
    }

    /// Compares magnitudes of two finite numbers.
    pub(crate) fn cmp_abs(&self, d2: &Self) -> Ordering {
        match (self.m.is_empty(), d2.m.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self
                .e
                .cmp(&d2.e)
                .then_with(|| mantissa::cmp(&self.m, &d2.m)),
        }
    }

    /// Compares `self` to `d2`. Returns None if either is NaN.
    /// Positive and negative zero are equal.
    pub fn cmp(&self, d2: &Self) -> Option<Ordering> {
        match (self.f, d2.f) {
            (Flavor::NaN, _) | (_, Flavor::NaN) => None,
            (Flavor::Inf, Flavor::Inf) => Some((self.s as i8).cmp(&(d2.s as i8))),
            (Flavor::Inf, Flavor::Value) => Some(if self.s.is_positive() {
                Ordering::Greater
            } else {
                Ordering::Less
            }),
            (Flavor::Value, Flavor::Inf) => Some(if d2.s.is_positive() {
                Ordering::Less
            } else {
                Ordering::Greater
            }),
            (Flavor::Value, Flavor::Value) => {
                if self.is_zero() && d2.is_zero() {
                    return Some(Ordering::Equal);
                }
                let s1 = if self.is_zero() { d2.s.invert() } else { self.s };
                let s2 = if d2.is_zero() { self.s.invert() } else { d2.s };
                if s1 != s2 {
                    return Some(if s1.is_positive() {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    });
                }
                let ord = self.cmp_abs(d2);
                Some(if s1.is_positive() { ord } else { ord.reverse() })
            }
        }
    }

    /// Returns the smaller of two numbers. If one of them is NaN, the other is returned.
    pub fn min(&self, d2: &Self) -> Self {
        match self.cmp(d2) {
            Some(Ordering::Greater) => d2.clone(),
            Some(_) => self.clone(),
            None if self.is_nan() => d2.clone(),
            None => self.clone(),
        }
    }

    /// Returns the larger of two numbers. If one of them is NaN, the other is returned.
    pub fn max(&self, d2: &Self) -> Self {
        match self.cmp(d2) {
            Some(Ordering::Less) => d2.clone(),
            Some(_) => self.clone(),
            None if self.is_nan() => d2.clone(),
            None => self.clone(),
        }
    }

    /// Restricts the value to the range from `lo` to `hi`: `max(min(self, hi), lo)`.
    pub fn clamp(&self, lo: &Self, hi: &Self) -> Self {
        self.min(hi).max(lo)
    }

    /// Returns the total number of fraction bits.
    pub(crate) fn total_bits(&self) -> usize {
        self.prec() * BIGIT_BIT_SIZE
    }
}

#[cfg(feature = "random")]
impl BigReal {
    /// Returns a random normalized number with `n` bigits, a random sign,
    /// and an exponent in the range `[exp_from, exp_to)`. If `exp_from >= exp_to`, the exponent is `exp_from`.
    ///
    /// ## Errors
    ///
    ///  - InvalidBigitCount: `n` is zero.
    pub fn random_normal(n: usize, exp_from: Exponent, exp_to: Exponent) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidBigitCount(n));
        }

        let mut m = BigitBuf::new(n);
        for d in m.iter_mut() {
            *d = rand::random();
        }

        let e = if exp_from < exp_to {
            let span = (exp_to as i128 - exp_from as i128) as u128;
            (exp_from as i128 + (rand::random::<u128>() % span) as i128) as Exponent
        } else {
            exp_from
        };
        let s = if rand::random::<bool>() { Sign::Pos } else { Sign::Neg };

        Ok(Self::from_parts(m, e, s))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_number() {
        let d1 = BigReal::from_raw_parts(&[0x8000_0000, 0], 1, Sign::Neg);
        assert_eq!(d1.to_f64(), -3.0);
        assert_eq!(d1.bigit_count(), 2);
        let (m, e, s) = d1.as_raw_parts();
        assert_eq!(m, &[0x8000_0000, 0]);
        assert_eq!(e, 1);
        assert_eq!(s, Sign::Neg);

        assert!(BigReal::zero().is_zero());
        assert!(!BigReal::zero().as_bool());
        assert!(!BigReal::nan().as_bool());
        assert!(d1.as_bool());
        assert!(BigReal::inf().is_inf() && BigReal::inf().is_positive());
        assert!(BigReal::neg_inf().is_negative());
        assert!(!BigReal::nan().is_negative() && !BigReal::nan().is_positive());

        assert_eq!(d1.neg().to_f64(), 3.0);
        assert_eq!(d1.abs().to_f64(), 3.0);
        assert_eq!(d1.abs().copysign(&d1).to_f64(), -3.0);

        let mut d2 = d1.with_bigit_count(5);
        assert_eq!(d2.bigit_count(), 5);
        assert!(d2 == d1);
        d2.set_bigit_count(1);
        assert_eq!(d2.to_f64(), -3.0);
        let mut z = BigReal::zero();
        z.set_bigit_count(4);
        assert_eq!(z.bigit_count(), 0);
    }

    #[test]
    fn test_ldexp_frexp() {
        let d1 = BigReal::from_f64(1.5);
        assert_eq!(d1.ldexp(7).to_f64(), 192.0);
        assert_eq!(d1.ldexp(-7).to_f64(), 0.01171875);

        let (m, e) = BigReal::from_f64(-12.0).frexp();
        assert_eq!(m.to_f64(), -1.5);
        assert_eq!(e, 3);
        let (m, e) = BigReal::zero().frexp();
        assert!(m.is_zero() && e == 0);

        // exponent overflow
        let d2 = BigReal::from_f64(-1.0).ldexp(EXPONENT_MAX);
        assert!(d2.ldexp(1).is_inf() && d2.ldexp(1).is_negative());
        let d3 = BigReal::from_f64(1.0).ldexp(EXPONENT_MIN);
        assert!(d3.ldexp(-1).is_zero());
    }

    #[test]
    fn test_cmp() {
        let a = BigReal::from_f64(1.5);
        let b = BigReal::from_f64(-2.5);
        let z = BigReal::zero();
        let nz = BigReal::from_f64(-0.0);

        assert_eq!(a.cmp(&b), Some(Ordering::Greater));
        assert_eq!(b.cmp(&a), Some(Ordering::Less));
        assert_eq!(b.cmp(&BigReal::from_f64(-3.0)), Some(Ordering::Greater));
        assert_eq!(z.cmp(&nz), Some(Ordering::Equal));
        assert_eq!(z.cmp(&a), Some(Ordering::Less));
        assert_eq!(z.cmp(&b), Some(Ordering::Greater));
        assert_eq!(b.cmp(&nz), Some(Ordering::Less));
        assert_eq!(BigReal::inf().cmp(&a), Some(Ordering::Greater));
        assert_eq!(BigReal::neg_inf().cmp(&b), Some(Ordering::Less));
        assert_eq!(BigReal::neg_inf().cmp(&BigReal::inf()), Some(Ordering::Less));
        assert_eq!(BigReal::inf().cmp(&BigReal::inf()), Some(Ordering::Equal));
        assert_eq!(BigReal::nan().cmp(&a), None);

        // different precision
        assert_eq!(a.with_bigit_count(1).cmp(&a.with_bigit_count(20)), Some(Ordering::Equal));

        assert_eq!(a.min(&b).to_f64(), -2.5);
        assert_eq!(a.max(&b).to_f64(), 1.5);
        assert_eq!(a.min(&BigReal::nan()).to_f64(), 1.5);
        assert_eq!(BigReal::nan().max(&b).to_f64(), -2.5);
        assert_eq!(BigReal::from_f64(7.0).clamp(&b, &a).to_f64(), 1.5);
        assert_eq!(BigReal::from_f64(-7.0).clamp(&b, &a).to_f64(), -2.5);
        assert_eq!(BigReal::from_f64(0.5).clamp(&b, &a).to_f64(), 0.5);
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random_normal() {
        assert_eq!(BigReal::random_normal(0, 0, 1), Err(Error::InvalidBigitCount(0)));
        for _ in 0..100 {
            let x = BigReal::random_normal(3, -20, 20).unwrap();
            assert_eq!(x.bigit_count(), 3);
            assert!(x.exponent() >= -20 && x.exponent() < 20);
            assert!(x.is_finite() && !x.is_zero());
        }
        let x = BigReal::random_normal(1, EXPONENT_MIN, EXPONENT_MAX).unwrap();
        assert!(x.is_finite());
        assert_eq!(BigReal::random_normal(2, 7, 7).unwrap().exponent(), 7);
    }
}
