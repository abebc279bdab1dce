//! Standard library trait implementations.

use crate::defs::Error;
use crate::defs::DEFAULT_DIGITS;
use crate::num::BigReal;
use core::cmp::Ordering;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::LowerHex;
use core::fmt::UpperHex;
use core::iter::Product;
use core::iter::Sum;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Div;
use core::ops::DivAssign;
use core::ops::Mul;
use core::ops::MulAssign;
use core::ops::Neg;
use core::ops::Not;
use core::ops::Sub;
use core::ops::SubAssign;
use core::str::FromStr;

//
// ops traits
//

macro_rules! impl_bin_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl $trait for BigReal {
            type Output = BigReal;
            fn $method(self, rhs: BigReal) -> BigReal {
                BigReal::$method(&self, &rhs)
            }
        }

        impl $trait<&BigReal> for BigReal {
            type Output = BigReal;
            fn $method(self, rhs: &BigReal) -> BigReal {
                BigReal::$method(&self, rhs)
            }
        }

        impl $trait<BigReal> for &BigReal {
            type Output = BigReal;
            fn $method(self, rhs: BigReal) -> BigReal {
                BigReal::$method(self, &rhs)
            }
        }

        impl $trait<&BigReal> for &BigReal {
            type Output = BigReal;
            fn $method(self, rhs: &BigReal) -> BigReal {
                BigReal::$method(self, rhs)
            }
        }

        impl $assign_trait for BigReal {
            fn $assign_method(&mut self, rhs: BigReal) {
                *self = BigReal::$method(self, &rhs)
            }
        }

        impl $assign_trait<&BigReal> for BigReal {
            fn $assign_method(&mut self, rhs: &BigReal) {
                *self = BigReal::$method(self, rhs)
            }
        }
    };
}

impl_bin_op!(Add, add, AddAssign, add_assign);
impl_bin_op!(Sub, sub, SubAssign, sub_assign);
impl_bin_op!(Mul, mul, MulAssign, mul_assign);
impl_bin_op!(Div, div, DivAssign, div_assign);

// Native right-hand operand; `$f` computes `&BigReal op native`.
macro_rules! impl_native_op {
    ($t:ty, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $f:expr) => {
        impl $trait<$t> for BigReal {
            type Output = BigReal;
            fn $method(self, rhs: $t) -> BigReal {
                ($f)(&self, rhs)
            }
        }

        impl $trait<$t> for &BigReal {
            type Output = BigReal;
            fn $method(self, rhs: $t) -> BigReal {
                ($f)(self, rhs)
            }
        }

        impl $assign_trait<$t> for BigReal {
            fn $assign_method(&mut self, rhs: $t) {
                *self = ($f)(&*self, rhs)
            }
        }
    };
}

impl_native_op!(i64, Add, add, AddAssign, add_assign, |a: &BigReal, b: i64| {
    BigReal::add(a, &BigReal::from_i64_p(b, a.prec()))
});
impl_native_op!(i64, Sub, sub, SubAssign, sub_assign, |a: &BigReal, b: i64| {
    BigReal::sub(a, &BigReal::from_i64_p(b, a.prec()))
});
impl_native_op!(i64, Mul, mul, MulAssign, mul_assign, |a: &BigReal, b: i64| a.mul_i64(b));
impl_native_op!(i64, Div, div, DivAssign, div_assign, |a: &BigReal, b: i64| a.div_i64(b));

impl_native_op!(f64, Add, add, AddAssign, add_assign, |a: &BigReal, b: f64| {
    BigReal::add(a, &BigReal::from_f64_p(b, a.prec()))
});
impl_native_op!(f64, Sub, sub, SubAssign, sub_assign, |a: &BigReal, b: f64| {
    BigReal::sub(a, &BigReal::from_f64_p(b, a.prec()))
});
impl_native_op!(f64, Mul, mul, MulAssign, mul_assign, |a: &BigReal, b: f64| {
    BigReal::mul(a, &BigReal::from_f64_p(b, a.prec()))
});
impl_native_op!(f64, Div, div, DivAssign, div_assign, |a: &BigReal, b: f64| {
    BigReal::div(a, &BigReal::from_f64_p(b, a.prec()))
});

impl Neg for BigReal {
    type Output = BigReal;
    fn neg(self) -> BigReal {
        BigReal::neg(&self)
    }
}

impl Neg for &BigReal {
    type Output = BigReal;
    fn neg(self) -> BigReal {
        BigReal::neg(self)
    }
}

/// `!x` is true when `x` is zero or NaN.
impl Not for BigReal {
    type Output = bool;
    fn not(self) -> bool {
        !self.as_bool()
    }
}

impl Not for &BigReal {
    type Output = bool;
    fn not(self) -> bool {
        !self.as_bool()
    }
}

//
// ordering traits
//

/// Zeroes of either sign are equal. NaN is not equal to anything, including itself.
impl PartialEq for BigReal {
    fn eq(&self, other: &Self) -> bool {
        BigReal::cmp(self, other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for BigReal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        BigReal::cmp(self, other)
    }
}

//
// conversions
//

impl From<f64> for BigReal {
    fn from(f: f64) -> Self {
        BigReal::from_f64(f)
    }
}

impl From<f32> for BigReal {
    fn from(f: f32) -> Self {
        BigReal::from_f32(f)
    }
}

macro_rules! impl_int_conv {
    ($s:ty, $from_s:ident, $via:ty) => {
        impl From<$s> for BigReal {
            fn from(i: $s) -> Self {
                BigReal::$from_s(i as $via)
            }
        }
    };
}

impl_int_conv!(i8, from_i64, i64);
impl_int_conv!(i16, from_i64, i64);
impl_int_conv!(i32, from_i64, i64);
impl_int_conv!(i64, from_i64, i64);
impl_int_conv!(u8, from_u64, u64);
impl_int_conv!(u16, from_u64, u64);
impl_int_conv!(u32, from_u64, u64);
impl_int_conv!(u64, from_u64, u64);

impl From<&BigReal> for bool {
    fn from(x: &BigReal) -> bool {
        x.as_bool()
    }
}

impl From<&BigReal> for f64 {
    fn from(x: &BigReal) -> f64 {
        x.to_f64()
    }
}

impl Default for BigReal {
    fn default() -> BigReal {
        BigReal::zero()
    }
}

impl FromStr for BigReal {
    type Err = Error;

    /// Parses the whole string with the default precision.
    fn from_str(src: &str) -> Result<BigReal, Self::Err> {
        BigReal::parse(src)
    }
}

//
// formatting
//

/// Decimal form. The precision of the format, as in `{:.30}`, sets the number of significant digits.
/// Without it, all digits the mantissa holds are written, up to a limit.
impl Display for BigReal {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let ndigits = f
            .precision()
            .unwrap_or_else(|| DEFAULT_DIGITS.min(self.decimal_digits()));
        f.write_str(&self.str(ndigits))
    }
}

impl LowerHex for BigReal {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.xstr())
    }
}

impl UpperHex for BigReal {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.xstr().to_uppercase())
    }
}

//
// iterators
//

impl Sum for BigReal {
    fn sum<I: Iterator<Item = BigReal>>(iter: I) -> Self {
        let mut acc = BigReal::zero();
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl<'a> Sum<&'a BigReal> for BigReal {
    fn sum<I: Iterator<Item = &'a BigReal>>(iter: I) -> Self {
        let mut acc = BigReal::zero();
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl Product for BigReal {
    fn product<I: Iterator<Item = BigReal>>(iter: I) -> Self {
        let mut acc = BigReal::one();
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl<'a> Product<&'a BigReal> for BigReal {
    fn product<I: Iterator<Item = &'a BigReal>>(iter: I) -> Self {
        let mut acc = BigReal::one();
        for v in iter {
            acc *= v;
        }
        acc
    }
}
