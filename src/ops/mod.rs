//! Arithmetic and mathematical functions.

mod add;
mod asin;
mod atan;
mod cbrt;
pub mod consts;
mod div;
mod erf;
mod gamma;
mod log;
mod mul;
mod other;
mod pow;
mod round;
mod sqrt;
mod trig;
mod trigh;
