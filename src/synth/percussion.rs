//! Percussive hits built from a few sine harmonics under an exponential
//! decay envelope.
//!
//! Two presets are provided: a bright `click` for light interactions
//! (piece movement, button presses) and a lower, heavier `impact` for
//! more pronounced events (captures, collisions).

use std::f32::consts::TAU;

use super::{sample_count, to_i16};

/// Click preset: harmonics as (frequency Hz, amplitude) pairs.
static CLICK_HARMONICS: [(f32, f32); 3] = [(800.0, 0.4), (1600.0, 0.2), (2400.0, 0.1)];

/// Click decay rate (per second) for the `exp(-rate * t)` envelope.
const CLICK_DECAY: f32 = 15.0;

/// Click output gain.
const CLICK_GAIN: f32 = 0.5;

/// Click duration in seconds.
pub const CLICK_DURATION_SEC: f32 = 0.15;

/// Impact preset: lower frequencies for a heavier sound.
static IMPACT_HARMONICS: [(f32, f32); 3] = [(600.0, 0.5), (1200.0, 0.3), (400.0, 0.2)];

/// Impact decay rate (per second).
const IMPACT_DECAY: f32 = 10.0;

/// Impact output gain.
const IMPACT_GAIN: f32 = 0.6;

/// Impact duration in seconds.
pub const IMPACT_DURATION_SEC: f32 = 0.2;

/// Renders the bright click preset.
pub fn click(sample_rate: u32) -> impl Iterator<Item = i16> {
    decay_hit(
        sample_rate,
        CLICK_DURATION_SEC,
        &CLICK_HARMONICS,
        CLICK_DECAY,
        CLICK_GAIN,
    )
}

/// Renders the heavier impact preset.
pub fn impact(sample_rate: u32) -> impl Iterator<Item = i16> {
    decay_hit(
        sample_rate,
        IMPACT_DURATION_SEC,
        &IMPACT_HARMONICS,
        IMPACT_DECAY,
        IMPACT_GAIN,
    )
}

/// Shared renderer: sums the harmonic table per sample and applies an
/// exponential decay envelope.
fn decay_hit(
    sample_rate: u32,
    duration_sec: f32,
    harmonics: &'static [(f32, f32)],
    decay: f32,
    gain: f32,
) -> impl Iterator<Item = i16> {
    let total = sample_count(sample_rate, duration_sec);
    let rate = sample_rate as f32;

    (0..total).map(move |i| {
        let t = i as f32 / rate;
        let mix: f32 = harmonics
            .iter()
            .map(|&(freq, amp)| amp * (TAU * freq * t).sin())
            .sum();
        let envelope = (-decay * t).exp();
        to_i16(gain * mix * envelope)
    })
}
