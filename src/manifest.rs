//! Asset manifest written alongside the generated audio files.
//!
//! The manifest records each asset's file name, timing parameters, and a
//! content checksum, so a game build can verify its audio assets without
//! decoding them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Result, SfxError};

/// File name of the manifest inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Category of a generated asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Short sound effect.
    Sfx,
    /// Background music.
    Music,
}

impl AssetKind {
    /// Returns the string representation of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Sfx => "sfx",
            AssetKind::Music => "music",
        }
    }
}

/// A generated audio asset as recorded in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Logical asset name, e.g. "move_piece".
    pub name: String,

    /// File name inside the output directory. The extension reflects
    /// whether the transcode step ran (.mp3) or the WAV was kept (.wav).
    pub file: String,

    /// Asset category.
    pub kind: AssetKind,

    /// Duration of the audio in seconds.
    pub duration_sec: f32,

    /// Sample rate in Hz.
    pub sample_rate: u32,

    /// Number of PCM samples rendered.
    pub samples: u64,

    /// First 16 hex characters of the SHA256 of the file bytes.
    pub checksum: String,
}

/// Manifest of all assets produced by one generator run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Sample rate shared by all assets.
    pub sample_rate: u32,

    /// Generated assets, in generation order.
    pub assets: Vec<AssetEntry>,
}

impl Manifest {
    /// Creates a manifest for the given assets.
    pub fn new(sample_rate: u32, assets: Vec<AssetEntry>) -> Self {
        Self {
            sample_rate,
            assets,
        }
    }

    /// Writes the manifest as pretty-printed JSON into `dir`.
    ///
    /// Returns the path of the written file.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SfxError::manifest_write_failed(e.to_string()))?;
        fs::write(&path, json)
            .map_err(|e| SfxError::manifest_write_failed(format!("{}: {}", path.display(), e)))?;
        Ok(path)
    }

    /// Reads a manifest back from `dir`.
    pub fn read(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let json = fs::read_to_string(&path)
            .map_err(|e| SfxError::manifest_write_failed(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&json).map_err(|e| SfxError::manifest_write_failed(e.to_string()))
    }
}

/// Computes the checksum of an asset file.
///
/// The checksum is the first 16 hex characters of the SHA256 hash of the
/// file bytes, enough to detect stale or corrupted assets.
pub fn compute_checksum(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| SfxError::manifest_write_failed(format!("checksum {}: {}", path.display(), e)))?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let digest = hasher.finalize();
    // Take first 8 bytes (16 hex chars)
    Ok(hex::encode(&digest[..8]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_entry() -> AssetEntry {
        AssetEntry {
            name: "move_piece".to_string(),
            file: "move_piece.wav".to_string(),
            kind: AssetKind::Sfx,
            duration_sec: 0.15,
            sample_rate: 44100,
            samples: 6615,
            checksum: "0123456789abcdef".to_string(),
        }
    }

    #[test]
    fn checksum_deterministic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("asset.bin");
        fs::write(&path, b"some pcm data").unwrap();

        let c1 = compute_checksum(&path).unwrap();
        let c2 = compute_checksum(&path).unwrap();
        assert_eq!(c1, c2);
        assert_eq!(c1.len(), 16);
        assert!(c1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn checksum_varies_with_content() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        fs::write(&a, b"aaaa").unwrap();
        fs::write(&b, b"bbbb").unwrap();

        assert_ne!(
            compute_checksum(&a).unwrap(),
            compute_checksum(&b).unwrap()
        );
    }

    #[test]
    fn manifest_round_trip() {
        let dir = tempdir().unwrap();
        let manifest = Manifest::new(44100, vec![sample_entry()]);

        let path = manifest.write(dir.path()).unwrap();
        assert!(path.exists());

        let read = Manifest::read(dir.path()).unwrap();
        assert_eq!(read.sample_rate, 44100);
        assert_eq!(read.assets.len(), 1);
        assert_eq!(read.assets[0].name, "move_piece");
        assert_eq!(read.assets[0].kind, AssetKind::Sfx);
    }

    #[test]
    fn asset_kind_serializes_lowercase() {
        let json = serde_json::to_string(&AssetKind::Music).unwrap();
        assert_eq!(json, "\"music\"");
        assert_eq!(AssetKind::Sfx.as_str(), "sfx");
    }
}
