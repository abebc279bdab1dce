//! Precision settings: the process-wide default and the explicit precision context.

use crate::defs::Error;
use crate::defs::DEFAULT_BIGIT_COUNT;
use crate::num::BigReal;
use crate::ops::consts::Constant;
use core::sync::atomic::AtomicUsize;
use core::sync::atomic::Ordering;

static GLOBAL_BIGIT_COUNT: AtomicUsize = AtomicUsize::new(DEFAULT_BIGIT_COUNT);

/// Returns the number of mantissa bigits used by numbers created without an explicit precision.
pub fn global_bigit_count() -> usize {
    GLOBAL_BIGIT_COUNT.load(Ordering::Relaxed)
}

/// Sets the number of mantissa bigits used by numbers created without an explicit precision.
/// Numbers created earlier keep their precision.
/// Constants are cached per bigit count, so nothing is invalidated.
///
/// ## Errors
///
///  - InvalidBigitCount: `n` is zero.
pub fn set_global_bigit_count(n: usize) -> Result<(), Error> {
    if n == 0 {
        return Err(Error::InvalidBigitCount(n));
    }
    let prev = GLOBAL_BIGIT_COUNT.swap(n, Ordering::Relaxed);
    tracing::debug!(from = prev, to = n, "default bigit count changed");
    Ok(())
}

/// Precision context: creates numbers and constants with a chosen number of mantissa bigits.
///
/// ```
/// use bigreal::Context;
///
/// let mut ctx = Context::new();
/// ctx.bigits(4);
/// let x = ctx.from_f64(2.0).sqrt();
/// assert_eq!(x.bigit_count(), 4);
/// assert!((x.to_f64() - 2f64.sqrt()).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    n: usize,
}

impl Context {
    /// Create a new context with the current default bigit count.
    pub fn new() -> Self {
        Context {
            n: global_bigit_count(),
        }
    }

    /// Create a new context with `n` bigits.
    ///
    /// ## Errors
    ///
    ///  - InvalidBigitCount: `n` is zero.
    pub fn with_bigits(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidBigitCount(n));
        }
        Ok(Context { n })
    }

    /// Sets the bigit count of the context. A count of 0 is treated as 1.
    pub fn bigits(&mut self, n: usize) -> &mut Self {
        self.n = n.max(1);
        self
    }

    /// Returns the bigit count of the context.
    pub fn get_bigit_count(&self) -> usize {
        self.n
    }

    /// Converts `f` to a number with the precision of the context.
    pub fn from_f64(&self, f: f64) -> BigReal {
        BigReal::from_f64_p(f, self.n)
    }

    /// Converts `f` to a number with the precision of the context.
    pub fn from_f32(&self, f: f32) -> BigReal {
        BigReal::from_f64_p(f as f64, self.n)
    }

    /// Converts `i` to a number with the precision of the context.
    pub fn from_i64(&self, i: i64) -> BigReal {
        BigReal::from_i64_p(i, self.n)
    }

    /// Converts `u` to a number with the precision of the context.
    pub fn from_u64(&self, u: u64) -> BigReal {
        BigReal::from_u64_p(u, self.n)
    }

    /// Converts `i` to a number with the precision of the context.
    pub fn from_i32(&self, i: i32) -> BigReal {
        BigReal::from_i64_p(i as i64, self.n)
    }

    /// Converts `u` to a number with the precision of the context.
    pub fn from_u32(&self, u: u32) -> BigReal {
        BigReal::from_u64_p(u as u64, self.n)
    }

    /// Parses a number with the precision of the context.
    ///
    /// ## Errors
    ///
    ///  - ParseError: the string is not a valid number.
    pub fn parse(&self, s: &str) -> Result<BigReal, Error> {
        BigReal::parse_p(s, self.n)
    }

    /// Parses the longest valid prefix of `s` with the precision of the context.
    pub fn parse_lenient(&self, s: &str) -> BigReal {
        BigReal::parse_lenient_p(s, self.n)
    }

    /// Returns the constant `c` with the precision of the context.
    pub fn constant(&self, c: Constant) -> BigReal {
        c.value(self.n)
    }

    /// Returns the number π with the precision of the context.
    pub fn pi(&self) -> BigReal {
        Constant::Pi.value(self.n)
    }

    /// Returns Euler's number with the precision of the context.
    pub fn e(&self) -> BigReal {
        Constant::E.value(self.n)
    }

    /// Returns the natural logarithm of 2 with the precision of the context.
    pub fn ln_2(&self) -> BigReal {
        Constant::Ln2.value(self.n)
    }

    /// Returns the natural logarithm of 10 with the precision of the context.
    pub fn ln_10(&self) -> BigReal {
        Constant::Ln10.value(self.n)
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}
