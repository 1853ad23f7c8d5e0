//! Waveform synthesizers.
//!
//! Each submodule produces one kind of sound as a lazy iterator of 16-bit
//! signed PCM samples, so output can stream straight to disk without
//! buffering a whole asset in memory.
//!
//! - [`tone`]: sine tone with linear fade in/out
//! - [`percussion`]: multi-harmonic hits with exponential decay
//! - [`melody`]: looping pentatonic background melody

pub mod melody;
pub mod percussion;
pub mod tone;

/// Converts a duration in seconds to a whole sample count.
pub fn sample_count(sample_rate: u32, duration_sec: f32) -> usize {
    (f64::from(sample_rate) * f64::from(duration_sec)).round() as usize
}

/// Converts a normalized amplitude in [-1.0, 1.0] to a 16-bit sample.
///
/// Values outside the range are clamped rather than wrapped.
pub fn to_i16(value: f32) -> i16 {
    (value * 32767.0).round().clamp(-32768.0, 32767.0) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_rounds() {
        assert_eq!(sample_count(44100, 1.0), 44100);
        assert_eq!(sample_count(44100, 0.15), 6615);
        assert_eq!(sample_count(8000, 0.5), 4000);
    }

    #[test]
    fn to_i16_scales_and_clamps() {
        assert_eq!(to_i16(0.0), 0);
        assert_eq!(to_i16(1.0), 32767);
        assert_eq!(to_i16(-1.0), -32767);
        assert_eq!(to_i16(2.0), 32767);
        assert_eq!(to_i16(-2.0), -32768);
    }
}
