//! Parser of numbers in decimal and hexadecimal scientific notation.
//!
//! Accepted forms: an optional sign followed by
//!
//!  - decimal digits with an optional point and an optional exponent `e[+-]digits`,
//!  - `0x` and hexadecimal digits with an optional point and an optional binary exponent `p[+-]digits`,
//!  - `inf`, `infinity`, or `nan`, in any letter case.

use crate::ctx::global_bigit_count;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::num::BigReal;

/// Digits are accumulated with one more bigit than the result.
const PARSE_GUARD_BIGITS: usize = 1;

struct ParserState<'a> {
    s: &'a [u8],
    pos: usize,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            s: s.as_bytes(),
            pos: 0,
        }
    }

    // Current character in lower case, or None at the end of the string.
    fn cur_char(&self) -> Option<u8> {
        self.s.get(self.pos).map(u8::to_ascii_lowercase)
    }

    fn next_char(&mut self) {
        self.pos += 1;
    }

    fn skip(&mut self, c: u8) -> bool {
        if self.cur_char() == Some(c) {
            self.next_char();
            true
        } else {
            false
        }
    }

    // Consumes `w` ignoring the letter case.
    fn skip_word(&mut self, w: &str) -> bool {
        let end = self.pos + w.len();
        match self.s.get(self.pos..end) {
            Some(prefix) if prefix.eq_ignore_ascii_case(w.as_bytes()) => {
                self.pos = end;
                true
            }
            _ => false,
        }
    }

    fn digit(&self, radix: u32) -> Option<u64> {
        self.cur_char()
            .and_then(|c| (c as char).to_digit(radix))
            .map(u64::from)
    }
}

/// Parses the longest valid prefix of `s`.
/// Returns the value and the number of bytes consumed; nothing consumed gives zero.
fn parse_prefix(s: &str, n: usize) -> (BigReal, usize) {
    let mut ps = ParserState::new(s);

    let sign = if ps.skip(b'-') {
        Sign::Neg
    } else {
        ps.skip(b'+');
        Sign::Pos
    };

    if ps.skip_word("infinity") || ps.skip_word("inf") {
        return (BigReal::signed_inf(sign), ps.pos);
    }
    if ps.skip_word("nan") {
        return (BigReal::nan(), ps.pos);
    }

    let start = ps.pos;
    let mut ret = None;
    if ps.skip_word("0x") {
        ret = parse_hex(&mut ps, n);
        if ret.is_none() {
            // "0x" without hex digits is a zero followed by garbage
            ps.pos = start;
        }
    }
    if ret.is_none() {
        ret = parse_dec(&mut ps, n);
    }

    match ret {
        Some(mut v) => {
            if !v.is_nan() {
                v.s = sign;
            }
            (v, ps.pos)
        }
        None => (BigReal::zero(), 0),
    }
}

// Exponent after `e` or `p`. Nothing is consumed if no digits follow.
fn parse_exp(ps: &mut ParserState, marker: u8) -> Option<Exponent> {
    let save = ps.pos;
    if !ps.skip(marker) {
        return None;
    }

    let neg = if ps.skip(b'-') {
        true
    } else {
        ps.skip(b'+');
        false
    };

    let mut e: Exponent = 0;
    let mut digits = 0;
    while let Some(d) = ps.digit(10) {
        e = e.saturating_mul(10).saturating_add(d as Exponent);
        digits += 1;
        ps.next_char();
    }

    if digits == 0 {
        ps.pos = save;
        return None;
    }

    Some(if neg { -e } else { e })
}

fn parse_dec(ps: &mut ParserState, n: usize) -> Option<BigReal> {
    let p = n + PARSE_GUARD_BIGITS;
    let ten = BigReal::from_u64_p(10, p);
    let mut ret = BigReal::zero();
    let mut digits = 0;
    let mut e: Exponent = 0;

    while let Some(d) = ps.digit(10) {
        ret = ret.mul(&ten).add(&BigReal::from_u64_p(d, p));
        digits += 1;
        ps.next_char();
    }

    let save = ps.pos;
    if ps.skip(b'.') {
        while let Some(d) = ps.digit(10) {
            ret = ret.mul(&ten).add(&BigReal::from_u64_p(d, p));
            digits += 1;
            e = e.saturating_sub(1);
            ps.next_char();
        }
    }

    if digits == 0 {
        ps.pos = save;
        return None;
    }

    if let Some(x) = parse_exp(ps, b'e') {
        e = e.saturating_add(x);
    }

    if !ret.is_zero() && e != 0 {
        let scale = ten.powi(e.saturating_abs());
        ret = if e > 0 { ret.mul(&scale) } else { ret.div(&scale) };
    }

    ret.set_bigit_count(n);
    Some(ret)
}

fn parse_hex(ps: &mut ParserState, n: usize) -> Option<BigReal> {
    let p = n + PARSE_GUARD_BIGITS;
    let mut ret = BigReal::zero();
    let mut digits = 0;
    let mut e: Exponent = 0;

    // each hex digit is four bits of exponent, no multiplication is needed
    while let Some(d) = ps.digit(16) {
        ret = ret.ldexp(4).add(&BigReal::from_u64_p(d, p));
        digits += 1;
        ps.next_char();
    }

    let save = ps.pos;
    if ps.skip(b'.') {
        while let Some(d) = ps.digit(16) {
            ret = ret.ldexp(4).add(&BigReal::from_u64_p(d, p));
            digits += 1;
            e = e.saturating_sub(4);
            ps.next_char();
        }
    }

    if digits == 0 {
        ps.pos = save;
        return None;
    }

    if let Some(x) = parse_exp(ps, b'p') {
        e = e.saturating_add(x);
    }

    ret = ret.ldexp(e);
    ret.set_bigit_count(n);
    Some(ret)
}

impl BigReal {
    /// Parses a number with `n` bigits. The whole string must be a valid number.
    ///
    /// ## Errors
    ///
    ///  - ParseError: `s` is empty or contains a character that is not part of a number.
    pub fn parse_p(s: &str, n: usize) -> Result<Self, Error> {
        match parse_prefix(s, n.max(1)) {
            (v, len) if len == s.len() && len > 0 => Ok(v),
            (_, len) => Err(Error::ParseError { pos: len }),
        }
    }

    /// Parses a number with the default precision.
    ///
    /// ## Errors
    ///
    ///  - ParseError: `s` is empty or contains a character that is not part of a number.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Self::parse_p(s, global_bigit_count())
    }

    /// Parses the longest prefix of `s` that is a number, with `n` bigits, ignoring the rest.
    /// A string without such a prefix gives zero.
    pub fn parse_lenient_p(s: &str, n: usize) -> Self {
        parse_prefix(s, n.max(1)).0
    }

    /// Same as [`BigReal::parse_lenient_p`] with the default precision.
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse_lenient_p(s, global_bigit_count())
    }
}
