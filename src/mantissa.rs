//! Bigit-array primitives used by the arithmetic operations.
//!
//! A mantissa is stored most significant bigit first with the leading one implicit.
//! The primitives work on an explicit form of length `n + 2`: bigit 0 holds the
//! integer part, bigits `1..=n` hold the fraction, and one guard bigit at the end
//! keeps the bits shifted out of an aligned operand.

use crate::common::buf::BigitBuf;
use crate::defs::Bigit;
use crate::defs::DoubleBigit;
use crate::defs::SignedDoubleBigit;
use crate::defs::BIGIT_BASE;
use crate::defs::BIGIT_BIT_SIZE;
use crate::defs::BIGIT_MAX;
use core::cmp::Ordering;
use itertools::izip;

/// Explicit form of `m` padded or truncated to `n` fraction bigits.
fn explicit(m: &[Bigit], n: usize) -> BigitBuf {
    let mut ext = BigitBuf::new(n + 2);
    ext[0] = 1;
    let l = m.len().min(n);
    ext[1..1 + l].copy_from_slice(&m[..l]);
    ext
}

/// Shifts `m` right by `bits`, dropping the bits that fall off the end.
pub(crate) fn shift_right(m: &mut [Bigit], bits: usize) {
    let idx = bits / BIGIT_BIT_SIZE;
    let shift = bits % BIGIT_BIT_SIZE;
    let len = m.len();

    if idx >= len {
        m.fill(0);
        return;
    }

    for i in (0..len).rev() {
        let hi = if i >= idx { m[i - idx] } else { 0 };
        let lo = if i > idx { m[i - idx - 1] } else { 0 };
        m[i] = if shift == 0 {
            hi
        } else {
            (hi >> shift) | (lo << (BIGIT_BIT_SIZE - shift))
        };
    }
}

/// Shifts `m` left by `bits`, filling with zeroes.
pub(crate) fn shift_left(m: &mut [Bigit], bits: usize) {
    let idx = bits / BIGIT_BIT_SIZE;
    let shift = bits % BIGIT_BIT_SIZE;
    let len = m.len();

    if idx >= len {
        m.fill(0);
        return;
    }

    for i in 0..len {
        let hi = if i + idx < len { m[i + idx] } else { 0 };
        let lo = if i + idx + 1 < len { m[i + idx + 1] } else { 0 };
        m[i] = if shift == 0 {
            hi
        } else {
            (hi << shift) | (lo >> (BIGIT_BIT_SIZE - shift))
        };
    }
}

/// Number of leading zero bits, or None if all bits are zero.
fn leading_zeros(m: &[Bigit]) -> Option<usize> {
    m.iter()
        .position(|d| *d != 0)
        .map(|i| i * BIGIT_BIT_SIZE + m[i].leading_zeros() as usize)
}

/// Computes `1.m1 + 1.m2 * 2^-d` with `n` fraction bigits.
/// Returns the fraction and true if the sum reached 2, in which case it was
/// shifted right by one bit.
pub(crate) fn add(m1: &[Bigit], m2: &[Bigit], d: usize, n: usize) -> (BigitBuf, bool) {
    let x = explicit(m1, n);
    let mut y = explicit(m2, n);
    shift_right(&mut y, d);

    let mut r = BigitBuf::new(n + 2);
    let mut carry: DoubleBigit = 0;
    for (dst, a, b) in izip!(r.iter_mut().rev(), x.iter().rev(), y.iter().rev()) {
        carry += *a as DoubleBigit + *b as DoubleBigit;
        *dst = carry as Bigit;
        carry >>= BIGIT_BIT_SIZE;
    }

    let overflow = r[0] > 1;
    if overflow {
        shift_right(&mut r, 1);
    }

    (BigitBuf::from_slice(&r[1..=n]), overflow)
}

/// Computes `1.m1 - 1.m2 * 2^-d` with `n` fraction bigits. The first operand must not be smaller.
/// Returns the normalized fraction and the number of bits it was shifted left by,
/// or None if the difference is zero.
pub(crate) fn sub(m1: &[Bigit], m2: &[Bigit], d: usize, n: usize) -> Option<(BigitBuf, usize)> {
    let x = explicit(m1, n);
    let mut y = explicit(m2, n);
    shift_right(&mut y, d);

    let mut r = BigitBuf::new(n + 2);
    let mut borrow: SignedDoubleBigit = 0;
    for (dst, a, b) in izip!(r.iter_mut().rev(), x.iter().rev(), y.iter().rev()) {
        let v = *a as SignedDoubleBigit - *b as SignedDoubleBigit - borrow;
        if v < 0 {
            *dst = (v + BIGIT_BASE as SignedDoubleBigit) as Bigit;
            borrow = 1;
        } else {
            *dst = v as Bigit;
            borrow = 0;
        }
    }
    debug_assert!(borrow == 0);

    let shift = leading_zeros(&r)? + 1 - BIGIT_BIT_SIZE;
    shift_left(&mut r, shift);

    Some((BigitBuf::from_slice(&r[1..=n]), shift))
}

/// Computes `1.m1 * 1.m2` with `n` fraction bigits using schoolbook multiplication.
/// Returns the fraction and true if the product reached 2, in which case it was
/// shifted right by one bit.
pub(crate) fn mul(m1: &[Bigit], m2: &[Bigit], n: usize) -> (BigitBuf, bool) {
    let x = explicit(m1, n);
    let y = explicit(m2, n);

    // 2n + 2 bigits: prod[0] is always zero, prod[1] is the integer part.
    let mut prod = BigitBuf::new(2 * n + 2);
    for i in (0..=n).rev() {
        let xi = x[i] as DoubleBigit;
        if xi == 0 {
            continue;
        }

        let mut k: DoubleBigit = 0;
        for j in (0..=n).rev() {
            let p = i + j + 1;
            let v = xi * y[j] as DoubleBigit + prod[p] as DoubleBigit + k;
            prod[p] = v as Bigit;
            k = v >> BIGIT_BIT_SIZE;
        }
        prod[i] = k as Bigit;
    }

    let overflow = prod[1] > 1;
    if overflow {
        shift_right(&mut prod[1..], 1);
    }

    (BigitBuf::from_slice(&prod[2..2 + n]), overflow)
}

/// Compares two fractions; the shorter one is padded with zeroes.
pub(crate) fn cmp(m1: &[Bigit], m2: &[Bigit]) -> Ordering {
    let l = m1.len().max(m2.len());
    for i in 0..l {
        let a = m1.get(i).copied().unwrap_or(0);
        let b = m2.get(i).copied().unwrap_or(0);
        match a.cmp(&b) {
            Ordering::Equal => {}
            o => return o,
        }
    }
    Ordering::Equal
}

/// Adds one unit in the last place. Returns true if the carry left the most significant bigit.
pub(crate) fn inc(m: &mut [Bigit]) -> bool {
    for d in m.iter_mut().rev() {
        let (v, c) = d.overflowing_add(1);
        *d = v;
        if !c {
            return false;
        }
    }
    true
}

/// Subtracts one unit in the last place. Returns true if the borrow left the most significant bigit.
pub(crate) fn dec(m: &mut [Bigit]) -> bool {
    for d in m.iter_mut().rev() {
        if *d == 0 {
            *d = BIGIT_MAX;
        } else {
            *d -= 1;
            return false;
        }
    }
    true
}
