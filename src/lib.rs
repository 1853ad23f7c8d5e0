//! sfxgen: procedural sound-effect and background-music generation for
//! game assets.
//!
//! Synthesizes a small, fixed set of mono 16-bit PCM audio files (move
//! click, capture impact, turn-alert tone, and a looping pentatonic
//! background melody), optionally transcodes them to MP3 through an
//! external encoder, and records the results in a JSON manifest.
//!
//! # Modules
//!
//! - [`synth`]: waveform synthesizers producing lazy sample streams
//! - [`audio`]: WAV encoding
//! - [`encode`]: external transcode step with WAV fallback
//! - [`manifest`]: asset manifest with content checksums
//! - [`pipeline`]: orchestration of a full generator run
//! - [`config`]: runtime configuration (env vars + CLI overrides)
//! - [`error`]: error codes and types

pub mod audio;
pub mod cli;
pub mod config;
pub mod encode;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod synth;

// Re-export commonly used types at crate root for convenience
pub use config::GeneratorConfig;
pub use error::{ErrorCode, Result, SfxError};
pub use manifest::{AssetEntry, AssetKind, Manifest};
