//! Square root.

use crate::common::buf::BigitBuf;
use crate::common::consts::THREE;
use crate::common::util::newton_steps;
use crate::defs::Sign;
use crate::num::BigReal;
use crate::num::Flavor;

impl BigReal {
    /// Computes the square root of a number.
    /// The reciprocal square root is refined from a `f32` estimate, then multiplied by `self`.
    /// The square root of a negative number is NaN; the square root of -0 is -0.
    pub fn sqrt(&self) -> Self {
        match self.f {
            Flavor::NaN => return Self::nan(),
            Flavor::Inf if self.s.is_negative() => return Self::nan(),
            Flavor::Inf => return self.clone(),
            Flavor::Value if self.m.is_empty() => return self.clone(),
            Flavor::Value if self.s.is_negative() => return Self::nan(),
            Flavor::Value => {}
        }

        let n = self.m.len();

        // an even exponent is required for the halving; the odd bit goes into the seed, in [1, 4)
        let tweak = self.e.rem_euclid(2);
        let u = f32::from_bits((0x3f80_0000 + ((tweak as u32) << 23)) | (self.m[0] >> 9));
        let v = (1.0 / u.sqrt()).to_bits();

        let mut m = BigitBuf::new(n);
        m[0] = v << 9;
        let e = -((self.e - tweak) / 2) + (v >> 23) as i64 - 0x7f;

        let mut ret = Self::from_parts(m, e, Sign::Pos);

        for _ in 0..newton_steps(n) {
            ret = ret.mul(&THREE.sub(&ret.mul(&ret).mul(self))).ldexp(-1);
        }

        ret.mul(self)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    #[test]
    fn test_sqrt() {
        let r = BigReal::from_f64(4.0).sqrt();
        assert_eq!(r.as_raw_parts(), BigReal::from_f64(2.0).as_raw_parts());
        assert_eq!(BigReal::from_f64(0.25).sqrt().to_f64(), 0.5);
        assert_eq!(BigReal::from_f64(1.0).sqrt().to_f64(), 1.0);

        assert!(BigReal::from_f64(-4.0).sqrt().is_nan());
        assert!(BigReal::neg_inf().sqrt().is_nan());
        assert!(BigReal::inf().sqrt().is_inf());
        let nz = BigReal::from_f64(-0.0).sqrt();
        assert!(nz.is_zero() && nz.is_negative());

        for _ in 0..1000 {
            let f = random::<f64>() * 10f64.powi(random::<i32>() % 300);
            let x = BigReal::from_f64(f);
            let r = x.sqrt();
            assert!((r.to_f64() - f.sqrt()).abs() <= f.sqrt() * f64::EPSILON);

            let d = r.mul(&r).sub(&x).abs();
            assert!(d.is_zero() || d.exponent() < x.exponent() - 500);
        }

        // precision of the argument is kept
        let two = BigReal::from_u64_p(2, 3);
        let r = two.sqrt();
        assert_eq!(r.bigit_count(), 3);
        let d = r.mul(&r).sub(&two).abs();
        assert!(d.is_zero() || d.exponent() < -90);
    }
}
