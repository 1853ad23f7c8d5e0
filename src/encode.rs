//! External transcode step.
//!
//! Shells out to an MP3 encoder (lame by default) to compress generated
//! WAV files. Transcoding is best-effort: a missing or failing encoder
//! is not an error, the uncompressed WAV is kept instead.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default encoder executable.
pub const DEFAULT_ENCODER: &str = "lame";

/// Outcome of a transcode attempt.
#[derive(Debug)]
pub enum TranscodeOutcome {
    /// Compressed file written and the WAV source removed.
    Compressed(PathBuf),
    /// WAV kept, with the reason the encoder was skipped or failed.
    KeptWav(String),
}

impl TranscodeOutcome {
    /// Returns true if the asset was compressed.
    pub fn is_compressed(&self) -> bool {
        matches!(self, TranscodeOutcome::Compressed(_))
    }
}

/// Transcodes a WAV file to MP3 with the given encoder executable.
///
/// Runs `<encoder> --quiet <wav> <mp3>`, matching the lame CLI. The WAV
/// source is deleted only after the encoder exits successfully and the
/// MP3 exists on disk; on any failure the WAV is left untouched.
pub fn transcode(encoder: &str, wav_path: &Path) -> TranscodeOutcome {
    let mp3_path = wav_path.with_extension("mp3");

    let status = Command::new(encoder)
        .arg("--quiet")
        .arg(wav_path)
        .arg(&mp3_path)
        .status();

    match status {
        Ok(status) if status.success() => {
            if !mp3_path.is_file() {
                return TranscodeOutcome::KeptWav(format!(
                    "{} exited successfully but produced no output",
                    encoder
                ));
            }
            if let Err(e) = fs::remove_file(wav_path) {
                return TranscodeOutcome::KeptWav(format!("could not remove WAV source: {}", e));
            }
            TranscodeOutcome::Compressed(mp3_path)
        }
        Ok(status) => TranscodeOutcome::KeptWav(format!("{} exited with {}", encoder, status)),
        Err(e) => TranscodeOutcome::KeptWav(format!("{} not available: {}", encoder, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_dummy_wav(dir: &Path) -> PathBuf {
        let path = dir.join("asset.wav");
        fs::write(&path, b"RIFF fake wav payload").unwrap();
        path
    }

    #[test]
    fn missing_encoder_keeps_wav() {
        let dir = tempdir().unwrap();
        let wav = write_dummy_wav(dir.path());

        let outcome = transcode("sfxgen-test-no-such-encoder", &wav);
        assert!(!outcome.is_compressed());
        assert!(wav.exists());
        // Source content untouched
        assert_eq!(fs::read(&wav).unwrap(), b"RIFF fake wav payload");
    }

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn failing_encoder_keeps_wav() {
        let dir = tempdir().unwrap();
        let wav = write_dummy_wav(dir.path());
        let encoder = write_script(dir.path(), "bad-encoder", "#!/bin/sh\nexit 1\n");

        let outcome = transcode(encoder.to_str().unwrap(), &wav);
        assert!(!outcome.is_compressed());
        assert!(wav.exists());
    }

    #[cfg(unix)]
    #[test]
    fn encoder_without_output_keeps_wav() {
        let dir = tempdir().unwrap();
        let wav = write_dummy_wav(dir.path());
        let encoder = write_script(dir.path(), "noop-encoder", "#!/bin/sh\nexit 0\n");

        let outcome = transcode(encoder.to_str().unwrap(), &wav);
        assert!(!outcome.is_compressed());
        assert!(wav.exists());
    }

    #[cfg(unix)]
    #[test]
    fn successful_encoder_replaces_wav() {
        let dir = tempdir().unwrap();
        let wav = write_dummy_wav(dir.path());
        // Arguments arrive as: --quiet <wav> <mp3>
        let encoder = write_script(dir.path(), "ok-encoder", "#!/bin/sh\ncp \"$2\" \"$3\"\n");

        let outcome = transcode(encoder.to_str().unwrap(), &wav);
        match outcome {
            TranscodeOutcome::Compressed(mp3) => {
                assert!(mp3.exists());
                assert_eq!(mp3.extension().unwrap(), "mp3");
            }
            TranscodeOutcome::KeptWav(reason) => panic!("expected compression, got: {}", reason),
        }
        assert!(!wav.exists());
    }
}
