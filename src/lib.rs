//! Arbitrary precision real numbers implemented purely in Rust.
//!
//! A [`BigReal`] is `±1.m × 2^e` with a fraction `m` of 32-bit bigits and a 64-bit exponent.
//! The number of bigits is chosen per value; an operation on two values of different precision
//! gives a result with the precision of the wider one. Values created without an explicit
//! precision use the process-wide default, see [`set_global_bigit_count`], or a [`Context`].
//!
//! Besides arithmetic, the library provides roots, logarithms, exponentials, powers,
//! trigonometric and hyperbolic functions and their inverses, the gamma and error functions,
//! rounding, and mathematical constants cached per precision.
//! Invalid operations give NaN, overflow gives infinity.
//!
//! ## Example
//!
//! ```
//! use bigreal::{BigReal, Constant, Context};
//!
//! // 8 bigits give 256 bits of fraction
//! let ctx = Context::with_bigits(8).unwrap();
//!
//! // π = 6 × atan(1/√3)
//! let three = ctx.from_u64(3);
//! let pi = three.sqrt().inverse().atan().mul_i64(6);
//!
//! let d = pi.sub(&ctx.constant(Constant::Pi)).abs();
//! assert!(d.is_zero() || d.exponent() < -240);
//!
//! // operators work on owned and borrowed values
//! let x = &pi / 2 + 1.0;
//! assert_eq!(format!("{:.10}", x), "2.570796327");
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::module_inception)]

mod common;
mod conv;
pub mod ctx;
mod defs;
mod ext;
mod mantissa;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::ctx::global_bigit_count;
pub use crate::ctx::set_global_bigit_count;
pub use crate::ctx::Context;
pub use crate::defs::Bigit;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Sign;
pub use crate::num::BigReal;
pub use crate::ops::consts::Constant;

pub use crate::defs::BIGIT_BASE;
pub use crate::defs::BIGIT_BIT_SIZE;
pub use crate::defs::BIGIT_MAX;
pub use crate::defs::BIGIT_SIGNIFICANT_BIT;
pub use crate::defs::DEFAULT_BIGIT_COUNT;
pub use crate::defs::DEFAULT_DIGITS;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;

#[cfg(test)]
mod tests {

    #[test]
    fn test_bigreal() {
        use crate::BigReal;
        use crate::Constant;
        use crate::Context;

        // Precision with some space for error.
        let ctx = Context::with_bigits(33).unwrap();
        let n = 33;

        // pi = 6*arctan(1/sqrt(3))
        let three = ctx.from_u64(3);
        let pi = three.sqrt().inverse().atan().mul_i64(6);

        // compare with the cached constant, allow a few bits of error
        let d = pi.sub(&ctx.constant(Constant::Pi)).abs();
        assert!(d.is_zero() || d.exponent() < -(n as i64 * 32 - 8));

        // e = exp(1)
        let e = ctx.from_u64(1).exp();
        let d = e.sub(&ctx.e()).abs();
        assert!(d.is_zero() || d.exponent() < -(n as i64 * 32 - 8));

        // the digits of pi
        assert_eq!(
            pi.str(30),
            "3.14159265358979323846264338328"
        );

        // a value can be rebuilt from its decimal form
        let s = pi.str(300);
        let p2 = BigReal::parse_p(&s, n).unwrap();
        let d = p2.sub(&pi).abs();
        assert!(d.is_zero() || d.exponent() < -990);
    }
}
