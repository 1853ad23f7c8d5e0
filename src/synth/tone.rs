//! Sine tone with a linear fade envelope.
//!
//! The fade in/out keeps the waveform from starting or ending on a
//! discontinuity, which would be audible as a click.

use std::f32::consts::TAU;

use super::{sample_count, to_i16};

/// Fade-in length in seconds (10 ms).
const FADE_IN_SEC: f32 = 0.01;

/// Fade-out length in seconds (50 ms).
const FADE_OUT_SEC: f32 = 0.05;

/// Peak amplitude relative to full scale.
const GAIN: f32 = 0.5;

/// Renders a sine tone at the given frequency and duration.
///
/// Produces exactly `sample_rate × duration_sec` (rounded) mono samples.
/// Amplitude ramps linearly from zero over the first 10 ms and back to
/// zero over the last 50 ms.
pub fn tone(sample_rate: u32, frequency: f32, duration_sec: f32) -> impl Iterator<Item = i16> {
    let total = sample_count(sample_rate, duration_sec);
    let rate = sample_rate as f32;
    let fade_in = (rate * FADE_IN_SEC).max(1.0);
    let fade_out = (rate * FADE_OUT_SEC).max(1.0);

    (0..total).map(move |i| {
        let t = i as f32 / rate;
        let wave = (TAU * frequency * t).sin();

        let envelope = if (i as f32) < fade_in {
            i as f32 / fade_in
        } else if (i as f32) > total as f32 - fade_out {
            (total - i) as f32 / fade_out
        } else {
            1.0
        };

        to_i16(GAIN * wave * envelope)
    })
}
