//! Error types for sfxgen.
//!
//! Defines all error codes and types used throughout the generator for
//! consistent error handling and reporting.

use std::fmt;

/// Error codes returned by the generator.
///
/// These allow callers (and the process exit path) to distinguish
/// specific failure conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Output directory could not be created.
    /// Trigger: missing permissions or the path exists as a file.
    OutputDirFailed,

    /// Failed to write a WAV file.
    /// Trigger: disk full, permissions, or an encoder-side I/O error.
    WavWriteFailed,

    /// Failed to write the asset manifest.
    /// Trigger: disk full or permissions on the output directory.
    ManifestWriteFailed,

    /// Configured sample rate is outside the valid range.
    /// Trigger: sample rate of zero or above 192 kHz.
    InvalidSampleRate,

    /// Configured music duration is outside the valid range.
    /// Trigger: duration of zero or above 600 seconds.
    InvalidDuration,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirFailed => "OUTPUT_DIR_FAILED",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
            ErrorCode::ManifestWriteFailed => "MANIFEST_WRITE_FAILED",
            ErrorCode::InvalidSampleRate => "INVALID_SAMPLE_RATE",
            ErrorCode::InvalidDuration => "INVALID_DURATION",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirFailed => "Output directory could not be created",
            ErrorCode::WavWriteFailed => "Failed to write a WAV file",
            ErrorCode::ManifestWriteFailed => "Failed to write the asset manifest",
            ErrorCode::InvalidSampleRate => "Sample rate must be between 1 and 192000 Hz",
            ErrorCode::InvalidDuration => "Music duration must be between 1 and 600 seconds",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirFailed => {
                "Check write permissions on the parent directory, or point \
                 --output-dir (or SFXGEN_OUTPUT_DIR) at a writable location"
            }
            ErrorCode::WavWriteFailed => {
                "Check free disk space and write permissions on the output \
                 directory, then re-run the generator"
            }
            ErrorCode::ManifestWriteFailed => {
                "Check free disk space and write permissions on the output \
                 directory; the audio files themselves may already be present"
            }
            ErrorCode::InvalidSampleRate => {
                "Specify a sample rate between 1 and 192000 Hz (e.g. --sample-rate 44100)"
            }
            ErrorCode::InvalidDuration => {
                "Specify a music duration between 1 and 600 seconds \
                 (e.g. --music-duration 30)"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for generator operations.
#[derive(Debug)]
pub struct SfxError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SfxError {
    /// Creates a new SfxError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new SfxError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an OUTPUT_DIR_FAILED error.
    pub fn output_dir_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::OutputDirFailed,
            format!("Could not create output directory: {}", path.into()),
            source,
        )
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(file: impl Into<String>, source: hound::Error) -> Self {
        Self::with_source(
            ErrorCode::WavWriteFailed,
            format!("Failed to write WAV file: {}", file.into()),
            source,
        )
    }

    /// Creates a MANIFEST_WRITE_FAILED error.
    pub fn manifest_write_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ManifestWriteFailed,
            format!("Failed to write manifest: {}", reason.into()),
        )
    }

    /// Creates an INVALID_SAMPLE_RATE error.
    pub fn invalid_sample_rate(rate: u32) -> Self {
        Self::new(
            ErrorCode::InvalidSampleRate,
            format!(
                "Invalid sample rate: {} Hz (must be between 1 and 192000)",
                rate
            ),
        )
    }

    /// Creates an INVALID_DURATION error.
    pub fn invalid_duration(duration: f32) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!(
                "Invalid music duration: {} seconds (must be between 1 and 600)",
                duration
            ),
        )
    }
}

impl fmt::Display for SfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for SfxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using SfxError.
pub type Result<T> = std::result::Result<T, SfxError>;
