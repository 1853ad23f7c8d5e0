//! CLI argument parser.
//!
//! All arguments are optional overrides; running the binary with no
//! arguments generates the full asset set with default settings.

use std::path::PathBuf;

use clap::Parser;

use crate::config::GeneratorConfig;

/// sfxgen: procedural sound-effect and background-music generator for game assets
#[derive(Parser, Debug, Default)]
#[command(name = "sfxgen")]
#[command(about = "Procedural sound-effect and background-music generator for game assets")]
#[command(version)]
pub struct Cli {
    /// Directory to write generated audio files into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Sample rate in Hz for all generated assets
    #[arg(short, long)]
    pub sample_rate: Option<u32>,

    /// Background music duration in seconds
    #[arg(short, long)]
    pub music_duration: Option<f32>,

    /// Encoder executable for the transcode step
    #[arg(short, long)]
    pub encoder: Option<String>,

    /// Keep uncompressed WAV output and skip the transcode step
    #[arg(long)]
    pub no_transcode: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Applies CLI overrides on top of an environment-derived config.
    pub fn apply_to(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(ref dir) = self.output_dir {
            config.output_dir = Some(dir.clone());
        }
        if let Some(rate) = self.sample_rate {
            config.sample_rate = rate;
        }
        if let Some(duration) = self.music_duration {
            config.music_duration_sec = duration;
        }
        if let Some(ref encoder) = self.encoder {
            config.encoder = encoder.clone();
        }
        if self.no_transcode {
            config.no_transcode = true;
        }
        config
    }
}
