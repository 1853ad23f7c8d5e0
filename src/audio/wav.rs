//! WAV file writer for audio output.
//!
//! Writes PCM samples to WAV format using the hound crate.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Result, SfxError};

/// Number of audio channels (mono).
pub const CHANNELS: u16 = 1;

/// Bits per sample (16-bit signed PCM).
pub const BITS_PER_SAMPLE: u16 = 16;

/// Writes PCM samples to a WAV file, streaming them to disk as the
/// source iterator produces them.
///
/// # Arguments
///
/// * `path` - Output file path
/// * `sample_rate` - Sample rate in Hz
/// * `samples` - Mono 16-bit signed PCM samples
///
/// Returns the number of samples written.
pub fn write_wav<I>(path: &Path, sample_rate: u32, samples: I) -> Result<u64>
where
    I: IntoIterator<Item = i16>,
{
    let spec = WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)
        .map_err(|e| SfxError::wav_write_failed(path.display().to_string(), e))?;

    let mut written = 0u64;
    for sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| SfxError::wav_write_failed(path.display().to_string(), e))?;
        written += 1;
    }

    writer
        .finalize()
        .map_err(|e| SfxError::wav_write_failed(path.display().to_string(), e))?;

    Ok(written)
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: u64, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}
