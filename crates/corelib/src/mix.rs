//! Byte mixing stage: a scalar real-valued function folded back onto each
//! byte of the digest buffer, repeated for a number of rounds.
//!
//! Every byte is scaled into `[0, π]`, pushed through
//! `f(x) = x^sin(x) * 63^x + 1/x`, and the result is folded to a byte that is
//! XORed into the buffer. Bytes never read each other within a round; rounds
//! are strictly sequential.

use std::f64::consts::PI;

use tracing::debug;

use crate::crypto::hash::DIGEST_LEN;

/// Number of mixing passes HEL-420 applies between the two digests.
pub const DEFAULT_ROUNDS: u32 = 3;

const ZERO_SUBSTITUTE: f64 = 1e-10;
const GROWTH_BASE: f64 = 63.0;
const OVERFLOW_GROWTH: f64 = 1e10;
const FOLD_SCALE: f64 = 1e5;

/// `f(x) = x^sin(x) * 63^x + 1/x`.
///
/// `x == 0.0` is evaluated as `1e-10`. When `63^x` is not representable the
/// growth term is replaced by `1e10`; the other two terms are kept.
pub fn integral_mix(x: f64) -> f64 {
    let x = if x == 0.0 { ZERO_SUBSTITUTE } else { x };
    let oscillation = x.powf(x.sin());
    let growth = GROWTH_BASE.powf(x);
    if growth.is_finite() {
        oscillation * growth + 1.0 / x
    } else {
        debug!(x, "63^x overflowed, using fallback growth term");
        oscillation * OVERFLOW_GROWTH + 1.0 / x
    }
}

/// Value XORed into `byte` during one round.
pub fn byte_delta(byte: u8) -> u8 {
    let x = f64::from(byte) / 255.0 * PI;
    fold(integral_mix(x))
}

/// One round applied to a single byte.
#[inline]
pub fn mix_byte(byte: u8) -> u8 {
    byte ^ byte_delta(byte)
}

/// Apply `rounds` passes to `buf` in place.
pub fn mix_in_place(buf: &mut [u8; DIGEST_LEN], rounds: u32) {
    for _ in 0..rounds {
        for b in buf.iter_mut() {
            *b = mix_byte(*b);
        }
    }
}

/// Copying variant of [`mix_in_place`].
pub fn mix(data: &[u8; DIGEST_LEN], rounds: u32) -> [u8; DIGEST_LEN] {
    let mut out = *data;
    mix_in_place(&mut out, rounds);
    out
}

// floor(mixed * 1e5) mod 256, always in [0, 255].
fn fold(mixed: f64) -> u8 {
    let scaled = (mixed * FOLD_SCALE).floor() as i64;
    scaled.rem_euclid(256) as u8
}
