//! Generator configuration module.
//!
//! Contains the runtime configuration for sfxgen: output location,
//! sample rate, music duration, and the transcode step.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::encode::DEFAULT_ENCODER;
use crate::error::{Result, SfxError};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/audio";

/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Default background-music duration in seconds.
pub const DEFAULT_MUSIC_DURATION_SEC: f32 = 30.0;

/// Runtime configuration for the generator.
///
/// Typically built from environment variables and then overridden by
/// command-line arguments at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory where assets are written.
    /// If None, uses [`DEFAULT_OUTPUT_DIR`].
    pub output_dir: Option<PathBuf>,

    /// Sample rate in Hz for all generated assets.
    pub sample_rate: u32,

    /// Duration of the background music asset in seconds.
    pub music_duration_sec: f32,

    /// Encoder executable for the transcode step.
    pub encoder: String,

    /// Skip the transcode step and keep uncompressed WAV output.
    pub no_transcode: bool,
}

impl GeneratorConfig {
    /// Creates a new GeneratorConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a GeneratorConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `SFXGEN_OUTPUT_DIR` - Output directory for generated assets
    /// - `SFXGEN_SAMPLE_RATE` - Sample rate in Hz
    /// - `SFXGEN_MUSIC_DURATION` - Background music duration in seconds
    /// - `SFXGEN_ENCODER` - Encoder executable for the transcode step
    /// - `SFXGEN_NO_TRANSCODE` - Set to "1" or "true" to keep WAV output
    ///
    /// Falls back to defaults for unset or unparsable variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("SFXGEN_OUTPUT_DIR") {
            if !path.is_empty() {
                config.output_dir = Some(PathBuf::from(path));
            }
        }

        if let Ok(rate_str) = std::env::var("SFXGEN_SAMPLE_RATE") {
            if let Ok(rate) = rate_str.parse::<u32>() {
                if rate > 0 {
                    config.sample_rate = rate;
                }
            }
        }

        if let Ok(duration_str) = std::env::var("SFXGEN_MUSIC_DURATION") {
            if let Ok(duration) = duration_str.parse::<f32>() {
                if duration > 0.0 {
                    config.music_duration_sec = duration;
                }
            }
        }

        if let Ok(encoder) = std::env::var("SFXGEN_ENCODER") {
            if !encoder.is_empty() {
                config.encoder = encoder;
            }
        }

        if let Ok(flag) = std::env::var("SFXGEN_NO_TRANSCODE") {
            config.no_transcode = flag == "1" || flag.eq_ignore_ascii_case("true");
        }

        config
    }

    /// Returns the effective output directory, using the default if not
    /// specified.
    pub fn effective_output_dir(&self) -> PathBuf {
        if let Some(ref path) = self.output_dir {
            path.clone()
        } else {
            PathBuf::from(DEFAULT_OUTPUT_DIR)
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 || self.sample_rate > 192_000 {
            return Err(SfxError::invalid_sample_rate(self.sample_rate));
        }

        if !(1.0..=600.0).contains(&self.music_duration_sec) {
            return Err(SfxError::invalid_duration(self.music_duration_sec));
        }

        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            sample_rate: DEFAULT_SAMPLE_RATE,
            music_duration_sec: DEFAULT_MUSIC_DURATION_SEC,
            encoder: DEFAULT_ENCODER.to_string(),
            no_transcode: false,
        }
    }
}
