//! π number

use crate::num::BigReal;

/// Computes π with `n` bigits using Machin's formula: `16·atan(1/5) - 4·atan(1/239)`.
/// Both arctangent series are summed together, term by term, until the sum stops changing.
pub(super) fn machin(n: usize) -> BigReal {
    let mut x0 = BigReal::from_u64_p(5, n);
    let mut x1 = BigReal::from_u64_p(239, n);
    let m0 = x0.mul(&x0).neg();
    let m1 = x1.mul(&x1).neg();
    let r16 = BigReal::from_u64_p(16, n);
    let r4 = BigReal::from_u64_p(4, n);

    let mut ret = BigReal::zero();
    let mut i = 1;
    loop {
        let newret = ret
            .add(&r16.div(&x0.mul_i64(i)))
            .sub(&r4.div(&x1.mul_i64(i)));
        if newret == ret {
            break;
        }
        ret = newret;
        x0 = x0.mul(&m0);
        x1 = x1.mul(&m1);
        i += 2;
    }

    ret
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::ops::consts::Constant;

    #[test]
    fn test_pi() {
        let pi = machin(1);
        assert_eq!(pi.bigit_count(), 1);
        assert!((pi.to_f64() - core::f64::consts::PI).abs() < 1e-8);

        // with the guard bigits of the cache, one bigit is within an ulp of 2^-31
        let pi = Constant::Pi.value(1);
        assert_eq!(pi.bigit_count(), 1);
        assert!((pi.to_f64() - core::f64::consts::PI).abs() < 2f64.powi(-31));

        // 0x3.243f6a8885a308d313198a2e03707344a4093822299f31d008
        let pi = machin(6);
        let (m, e, _) = pi.as_raw_parts();
        assert_eq!(e, 1);
        assert_eq!(&m[..5], &[0x921f_b544, 0x42d1_8469, 0x898c_c517, 0x01b8_39a2, 0x5204_9c11]);
    }
}
