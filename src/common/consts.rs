//! Static constants.
//!
//! These are exact with a single bigit, so they can be combined with numbers of any precision:
//! the result takes the precision of the wider operand.

use crate::num::BigReal;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref ONE: BigReal = BigReal::from_u64_p(1, 1);
    pub static ref TWO: BigReal = BigReal::from_u64_p(2, 1);
    pub static ref THREE: BigReal = BigReal::from_u64_p(3, 1);
    pub static ref HALF: BigReal = BigReal::from_u64_p(1, 1).ldexp(-1);
}
