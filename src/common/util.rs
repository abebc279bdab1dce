//! Auxiliary functions.

/// integer logarithm base 2 of a number.
pub fn log2_ceil(mut n: usize) -> usize {
    let mut ret = 0;
    let mut sticky = 0;
    while n > 1 {
        if n & 1 != 0 {
            sticky = 1;
        }
        ret += 1;
        n >>= 1;
    }
    ret + sticky
}

/// Number of Newton-Raphson steps needed to refine a float32 seed
/// to a mantissa of `n` bigits: each step doubles the number of correct bits.
#[inline]
pub fn newton_steps(n: usize) -> usize {
    log2_ceil(n) + 1
}
