//! Definitions.

/// A bigit: one word of the mantissa.
pub type Bigit = u32;

/// Doubled bigit.
pub type DoubleBigit = u64;

/// Bigit with sign, doubled.
pub type SignedDoubleBigit = i64;

/// An exponent.
pub type Exponent = i64;

/// Maximum exponent value.
pub const EXPONENT_MAX: Exponent = Exponent::MAX;

/// Minimum exponent value.
pub const EXPONENT_MIN: Exponent = Exponent::MIN;

/// Maximum value of a bigit.
pub const BIGIT_MAX: Bigit = Bigit::MAX;

/// Base of bigits.
pub const BIGIT_BASE: DoubleBigit = BIGIT_MAX as DoubleBigit + 1;

/// Size of a bigit in bits.
pub const BIGIT_BIT_SIZE: usize = core::mem::size_of::<Bigit>() * 8;

/// Bigit with the most significant bit set.
pub const BIGIT_SIGNIFICANT_BIT: Bigit = BIGIT_MAX << (BIGIT_BIT_SIZE - 1);

/// Number of bigits in the mantissa of numbers created without explicit precision,
/// unless changed with [`crate::set_global_bigit_count`].
pub const DEFAULT_BIGIT_COUNT: usize = 16;

/// Number of decimal digits produced by `Display` when no precision is requested.
pub const DEFAULT_DIGITS: usize = 150;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }

    /// Returns true if the sign is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns true if the sign is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Sign of a product or a quotient of numbers with signs `self` and `other`.
    pub(crate) fn xor(&self, other: Sign) -> Self {
        if *self == other {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }
}

/// Possible errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A numeric string could not be parsed.
    #[error("unexpected character at position {pos} while parsing a number")]
    ParseError {
        /// Byte offset of the first character that could not be consumed.
        pos: usize,
    },

    /// The bigit count of a number must be at least 1.
    #[error("invalid bigit count: {0}")]
    InvalidBigitCount(usize),
}
