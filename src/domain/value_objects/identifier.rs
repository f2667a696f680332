//! Asset Identifier Value Object
//!
//! A deterministic, hash-derived token written into a staged assembly's
//! side-car metadata. The same logical file always gets the same identifier,
//! so re-packaged assemblies are recognised as the same asset by the importer.

use std::fmt;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Identifier of a staged asset
///
/// Always [`AssetIdentifier::WIDTH`] lowercase hex characters.
///
/// Two different base names hashing to the same value collide; nothing
/// detects or resolves that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetIdentifier(String);

impl AssetIdentifier {
    /// Number of hex characters in an identifier (128 bits)
    pub const WIDTH: usize = 32;

    /// Derive the identifier for a file path.
    ///
    /// Uses the base name without extension, lowercased, so
    /// `Assets/Plugins/Game.Api.dll` and `game.api.DLL` map to the same value.
    pub fn derive(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Self::from_name(&stem)
    }

    /// Derive the identifier from an already-normalized name
    pub fn from_name(name: &str) -> Self {
        let digest = Sha256::digest(name.as_bytes());
        let hex: String = digest[..Self::WIDTH / 2]
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();
        Self(hex)
    }

    /// Parse an existing identifier string.
    ///
    /// Returns `None` unless it is exactly [`Self::WIDTH`] lowercase hex chars.
    pub fn parse(s: &str) -> Option<Self> {
        let valid = s.len() == Self::WIDTH
            && s
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        valid.then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AssetIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive the identifier for a path (free-function form)
pub fn derive_identifier(path: &Path) -> AssetIdentifier {
    AssetIdentifier::derive(path)
}
