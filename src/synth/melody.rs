//! Looping pentatonic background melody.
//!
//! A fixed note pattern over the C major pentatonic scale is rendered
//! note by note and repeated until the requested duration is filled.
//! Each note carries partials at 2x and 3x the fundamental and a linear
//! attack/release envelope so note transitions stay smooth.

use std::f32::consts::TAU;

use super::{sample_count, to_i16};

/// C major pentatonic note table: C4, D4, E4, G4, A4, C5.
static NOTES: [f32; 6] = [261.63, 293.66, 329.63, 392.00, 440.00, 523.25];

/// Melody pattern as (note index, duration in seconds) pairs.
/// One full pass lasts 13 seconds and the pattern loops from the top.
static PATTERN: [(usize, f32); 20] = [
    (4, 0.5),
    (3, 0.5),
    (2, 0.5),
    (1, 0.5),
    (0, 1.0),
    (2, 0.5),
    (3, 0.5),
    (4, 0.5),
    (5, 0.5),
    (4, 1.0),
    (3, 0.5),
    (2, 0.5),
    (1, 0.5),
    (0, 0.5),
    (1, 1.0),
    (2, 0.5),
    (1, 0.5),
    (2, 0.5),
    (3, 0.5),
    (2, 2.0),
];

/// Partials per note as (frequency multiple, amplitude) pairs.
const PARTIALS: [(f32, f32); 3] = [(1.0, 0.5), (2.0, 0.2), (3.0, 0.1)];

/// Linear attack length in seconds.
const ATTACK_SEC: f32 = 0.05;

/// Linear release length in seconds.
const RELEASE_SEC: f32 = 0.1;

/// Output gain, kept low so the melody sits in the background.
const GAIN: f32 = 0.15;

/// Renders the looping melody, truncated to exactly
/// `sample_rate × duration_sec` (rounded) samples.
///
/// The pattern repeats as many times as needed; the final note is cut
/// off wherever the target duration lands, so the output never exceeds
/// the requested length.
pub fn melody(sample_rate: u32, duration_sec: f32) -> impl Iterator<Item = i16> {
    let total = sample_count(sample_rate, duration_sec);
    PATTERN
        .iter()
        .cycle()
        .flat_map(move |&(index, note_sec)| note(sample_rate, NOTES[index], note_sec))
        .take(total)
}

/// Renders a single note with its partials and attack/release envelope.
fn note(sample_rate: u32, frequency: f32, duration_sec: f32) -> impl Iterator<Item = i16> {
    let len = sample_count(sample_rate, duration_sec);
    let rate = sample_rate as f32;

    (0..len).map(move |i| {
        let t = i as f32 / rate;
        let mix: f32 = PARTIALS
            .iter()
            .map(|&(mult, amp)| amp * (TAU * frequency * mult * t).sin())
            .sum();

        let envelope = if t < ATTACK_SEC {
            t / ATTACK_SEC
        } else if t > duration_sec - RELEASE_SEC {
            ((duration_sec - t) / RELEASE_SEC).max(0.0)
        } else {
            1.0
        };

        to_i16(GAIN * mix * envelope)
    })
}
