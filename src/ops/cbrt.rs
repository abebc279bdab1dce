//! Cube root.

use crate::common::buf::BigitBuf;
use crate::common::util::newton_steps;
use crate::num::BigReal;
use crate::num::Flavor;

impl BigReal {
    /// Computes the cube root of a number. The sign of the argument is kept.
    pub fn cbrt(&self) -> Self {
        match self.f {
            Flavor::NaN => return Self::nan(),
            Flavor::Inf => return self.clone(),
            Flavor::Value if self.m.is_empty() => return self.clone(),
            Flavor::Value => {}
        }

        let n = self.m.len();

        // exponent is made divisible by 3, the remainder goes into the seed, in [1, 8)
        let tweak = self.e.rem_euclid(3);
        let u = f32::from_bits((0x3f80_0000 + ((tweak as u32) << 23)) | (self.m[0] >> 9));
        let v = u.cbrt().to_bits();

        let mut m = BigitBuf::new(n);
        m[0] = v << 9;
        let e = (self.e - tweak) / 3 + (v >> 23) as i64 - 0x7f;

        let mut ret = Self::from_parts(m, e, self.s);
        let third = Self::from_u64_p(3, n).inverse();

        for _ in 0..newton_steps(n) {
            ret = third.mul(&self.div(&ret.mul(&ret)).add(&ret.ldexp(1)));
        }

        ret
    }
}
