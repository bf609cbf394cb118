use std::f64::consts::PI;

use hel420_corelib::mix::{byte_delta, integral_mix, mix, mix_byte, mix_in_place};
use hel420_corelib::{DEFAULT_ROUNDS, DIGEST_LEN};

#[test]
fn scalar_function_is_positive_over_byte_range() {
    for b in 0..=255u8 {
        let v = integral_mix(f64::from(b) / 255.0 * PI);
        assert!(v.is_finite() && v > 0.0, "byte {b} -> {v}");
    }
}

#[test]
fn overflow_fallback_keeps_oscillation_and_reciprocal_terms() {
    for x in [200.0_f64, 1000.0, 1e6] {
        assert!(!63.0_f64.powf(x).is_finite());
        let expected = x.powf(x.sin()) * 1e10 + 1.0 / x;
        assert_eq!(integral_mix(x), expected, "x = {x}");
    }
}

#[test]
fn rounds_are_genuine_transformations() {
    let mut seed = [0u8; DIGEST_LEN];
    for (i, b) in seed.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(37).wrapping_add(11);
    }
    let one = mix(&seed, 1);
    let two = mix(&seed, 2);
    let three = mix(&seed, DEFAULT_ROUNDS);
    assert_ne!(seed, one);
    assert_ne!(one, three);
    assert_ne!(two, three);
}

#[test]
fn bytes_mix_independently() {
    let mut buf = [0u8; DIGEST_LEN];
    buf[5] = 200;
    mix_in_place(&mut buf, 1);
    assert_eq!(buf[5], mix_byte(200));
    assert_eq!(buf[5], 200 ^ byte_delta(200));
    for (i, b) in buf.iter().enumerate() {
        if i != 5 {
            assert_eq!(*b, 0xa0);
        }
    }
}
