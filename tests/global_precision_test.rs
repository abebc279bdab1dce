//! The process-wide default precision. This is a separate test binary,
//! so changing the default does not affect other tests.

use bigreal::{global_bigit_count, set_global_bigit_count, BigReal, Constant, Context, Error};
use bigreal::DEFAULT_BIGIT_COUNT;

#[test]
fn global_precision() {
    assert_eq!(global_bigit_count(), DEFAULT_BIGIT_COUNT);
    assert_eq!(BigReal::from_f64(1.5).bigit_count(), DEFAULT_BIGIT_COUNT);
    assert_eq!(BigReal::pi().bigit_count(), DEFAULT_BIGIT_COUNT);

    let old_pi = BigReal::pi();
    let old_third = BigReal::from_u64(1) / 3;

    assert_eq!(set_global_bigit_count(0), Err(Error::InvalidBigitCount(0)));
    assert_eq!(global_bigit_count(), DEFAULT_BIGIT_COUNT);

    set_global_bigit_count(3).unwrap();
    assert_eq!(global_bigit_count(), 3);

    // new values and constants use the new default
    assert_eq!(BigReal::from_f64(1.5).bigit_count(), 3);
    assert_eq!(BigReal::parse("2.5").unwrap().bigit_count(), 3);
    assert_eq!(Context::new().get_bigit_count(), 3);
    let pi = BigReal::pi();
    assert_eq!(pi.bigit_count(), 3);
    let d = pi.sub(&old_pi).abs();
    assert!(d.is_zero() || d.exponent() < -90);

    // existing values keep their precision, and so do their results
    assert_eq!(old_third.bigit_count(), DEFAULT_BIGIT_COUNT);
    assert_eq!(old_third.sqrt().bigit_count(), DEFAULT_BIGIT_COUNT);
    assert_eq!((&old_third + BigReal::from_f64(1.0)).bigit_count(), DEFAULT_BIGIT_COUNT);

    // an explicit context overrides the default
    let ctx = Context::with_bigits(7).unwrap();
    assert_eq!(ctx.pi().bigit_count(), 7);
    assert_eq!(ctx.constant(Constant::Sqrt2).bigit_count(), 7);
    assert_eq!(ctx.from_i64(-5).exp().bigit_count(), 7);
    assert_eq!(Context::with_bigits(0), Err(Error::InvalidBigitCount(0)));

    // the cache keeps constants of every precision
    set_global_bigit_count(DEFAULT_BIGIT_COUNT).unwrap();
    assert_eq!(BigReal::pi().as_raw_parts(), old_pi.as_raw_parts());
    assert_eq!(BigReal::constant(Constant::Pi).bigit_count(), DEFAULT_BIGIT_COUNT);
}

#[test]
fn constants_from_threads() {
    let handles: Vec<_> = (1..=8)
        .map(|n| std::thread::spawn(move || Constant::E.value(n)))
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let n = i + 1;
        let e = h.join().unwrap();
        assert_eq!(e.bigit_count(), n);
        // one ulp of e with n bigits, plus the rounding to f64
        let tol = 2f64.powi(1 - 32 * n as i32) + f64::EPSILON * 4.0;
        assert!((e.to_f64() - core::f64::consts::E).abs() <= tol, "n={}", n);
    }
}
