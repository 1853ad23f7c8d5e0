//! Generation pipeline.
//!
//! Renders each built-in asset, streams it into a WAV file in the output
//! directory, runs the optional transcode step, and records everything in
//! the asset manifest. Progress is printed to standard output.

use std::fs;
use std::path::PathBuf;

use crate::audio::{samples_to_duration, write_wav};
use crate::config::GeneratorConfig;
use crate::encode::{transcode, TranscodeOutcome};
use crate::error::{Result, SfxError};
use crate::manifest::{compute_checksum, AssetEntry, AssetKind, Manifest};
use crate::synth::{melody, percussion, tone};

/// Frequency of the turn-alert tone in Hz.
const TURN_ALERT_FREQ_HZ: f32 = 660.0;

/// Duration of the turn-alert tone in seconds.
const TURN_ALERT_DURATION_SEC: f32 = 0.3;

/// An asset rendered to disk but not yet transcoded or recorded.
struct RenderedAsset {
    name: &'static str,
    kind: AssetKind,
    samples: u64,
    path: PathBuf,
}

/// Generates the full built-in asset set into the configured output
/// directory and returns the resulting manifest.
///
/// Steps, in order: validate config, create the output directory, render
/// every asset as WAV, transcode each to MP3 unless disabled, write the
/// manifest.
pub fn generate_all(config: &GeneratorConfig) -> Result<Manifest> {
    config.validate()?;

    let dir = config.effective_output_dir();
    fs::create_dir_all(&dir).map_err(|e| SfxError::output_dir_failed(dir.display().to_string(), e))?;

    let rate = config.sample_rate;
    let mut rendered = Vec::new();

    for (name, kind, source) in builtin_assets(config) {
        println!("  - Generating {}.wav...", name);
        let path = dir.join(format!("{}.wav", name));
        let samples = write_wav(&path, rate, source)?;
        rendered.push(RenderedAsset {
            name,
            kind,
            samples,
            path,
        });
    }

    if !config.no_transcode {
        println!();
        println!("Attempting to convert to MP3...");
        for asset in &mut rendered {
            match transcode(&config.encoder, &asset.path) {
                TranscodeOutcome::Compressed(mp3_path) => {
                    println!("  ✓ Converted {}.wav to MP3", asset.name);
                    asset.path = mp3_path;
                }
                TranscodeOutcome::KeptWav(reason) => {
                    println!("  ! Could not convert {}.wav to MP3 ({})", asset.name, reason);
                    println!("    Keeping WAV output.");
                }
            }
        }
    }

    let mut entries = Vec::with_capacity(rendered.len());
    for asset in rendered {
        let checksum = compute_checksum(&asset.path)?;
        let file = asset
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        entries.push(AssetEntry {
            name: asset.name.to_string(),
            file,
            kind: asset.kind,
            duration_sec: samples_to_duration(asset.samples, rate),
            sample_rate: rate,
            samples: asset.samples,
            checksum,
        });
    }

    let manifest = Manifest::new(rate, entries);
    manifest.write(&dir)?;

    Ok(manifest)
}

/// The built-in asset set, in generation order.
fn builtin_assets(
    config: &GeneratorConfig,
) -> Vec<(&'static str, AssetKind, Box<dyn Iterator<Item = i16>>)> {
    let rate = config.sample_rate;
    vec![
        (
            "move_piece",
            AssetKind::Sfx,
            Box::new(percussion::click(rate)) as Box<dyn Iterator<Item = i16>>,
        ),
        (
            "capture_piece",
            AssetKind::Sfx,
            Box::new(percussion::impact(rate)),
        ),
        (
            "turn_alert",
            AssetKind::Sfx,
            Box::new(tone::tone(rate, TURN_ALERT_FREQ_HZ, TURN_ALERT_DURATION_SEC)),
        ),
        (
            "background_music",
            AssetKind::Music,
            Box::new(melody::melody(rate, config.music_duration_sec)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::sample_count;
    use tempfile::tempdir;

    fn test_config(dir: &std::path::Path) -> GeneratorConfig {
        let mut config = GeneratorConfig::new();
        config.output_dir = Some(dir.to_path_buf());
        // Small rate and short music keep the test fast
        config.sample_rate = 8000;
        config.music_duration_sec = 2.0;
        config.no_transcode = true;
        config
    }

    #[test]
    fn generates_all_assets_as_wav() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());

        let manifest = generate_all(&config).unwrap();
        assert_eq!(manifest.assets.len(), 4);

        for name in ["move_piece", "capture_piece", "turn_alert", "background_music"] {
            let path = dir.path().join(format!("{}.wav", name));
            assert!(path.exists(), "missing {}", name);

            let reader = hound::WavReader::open(&path).unwrap();
            assert_eq!(reader.spec().channels, 1);
            assert_eq!(reader.spec().sample_rate, 8000);
            assert_eq!(reader.spec().bits_per_sample, 16);
        }

        assert!(dir.path().join(crate::manifest::MANIFEST_FILE).exists());
    }

    #[test]
    fn manifest_matches_files() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());

        let manifest = generate_all(&config).unwrap();
        for entry in &manifest.assets {
            let path = dir.path().join(&entry.file);
            assert!(path.exists());
            assert_eq!(compute_checksum(&path).unwrap(), entry.checksum);
            assert_eq!(entry.sample_rate, 8000);

            let reader = hound::WavReader::open(&path).unwrap();
            assert_eq!(u64::from(reader.len()), entry.samples);
        }
    }

    #[test]
    fn music_duration_is_honored() {
        let dir = tempdir().unwrap();
        let config = test_config(dir.path());

        let manifest = generate_all(&config).unwrap();
        let music = manifest
            .assets
            .iter()
            .find(|a| a.kind == AssetKind::Music)
            .unwrap();
        assert_eq!(music.samples, sample_count(8000, 2.0) as u64);
        assert!(music.duration_sec <= 2.0 + f32::EPSILON);
    }

    #[test]
    fn missing_encoder_keeps_wav_files() {
        let dir = tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.no_transcode = false;
        config.encoder = "sfxgen-test-no-such-encoder".to_string();

        let manifest = generate_all(&config).unwrap();
        for entry in &manifest.assets {
            assert!(entry.file.ends_with(".wav"));
            assert!(dir.path().join(&entry.file).exists());
        }
    }

    #[test]
    fn unwritable_output_dir_is_reported() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, b"not a directory").unwrap();

        let mut config = test_config(dir.path());
        config.output_dir = Some(blocker);

        let err = generate_all(&config).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::OutputDirFailed);
    }

    #[test]
    fn invalid_config_is_rejected_before_writing() {
        let dir = tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.sample_rate = 0;

        assert!(generate_all(&config).is_err());
        assert!(!dir.path().join("move_piece.wav").exists());
    }
}
