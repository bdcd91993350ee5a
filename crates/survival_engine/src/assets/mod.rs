//! Asset loading
//!
//! Assets are loaded once at startup. A missing required asset is fatal: the
//! caller gets an error naming every path that was tried and is expected to
//! stop before entering the game loop.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Asset trait for loadable resources
pub trait Asset: Sized {
    /// Load asset from raw bytes
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError>;
}

/// An asset together with the path it came from
#[derive(Debug)]
pub struct LoadedAsset<T> {
    /// The decoded asset
    pub asset: T,
    /// File the asset was read from
    pub path: PathBuf,
}

/// Load the first candidate path that exists.
///
/// Candidates are tried in order; later ones are only consulted when earlier
/// ones do not exist. A file that exists but fails to read or decode is an
/// error right away rather than a reason to keep searching.
pub fn load_first<T, P>(candidates: &[P]) -> Result<LoadedAsset<T>, AssetError>
where
    T: Asset,
    P: AsRef<Path>,
{
    let mut found = None;
    for candidate in candidates {
        let candidate: &Path = candidate.as_ref();
        if candidate.is_file() {
            found = Some(candidate);
            break;
        }
    }

    let Some(path) = found else {
        return Err(AssetError::NotFound {
            searched: candidates
                .iter()
                .map(|candidate| candidate.as_ref().to_path_buf())
                .collect(),
        });
    };

    log::debug!("Loading asset from {}", path.display());
    let bytes = std::fs::read(path)?;
    let asset = T::from_bytes(&bytes)?;

    Ok(LoadedAsset {
        asset,
        path: path.to_path_buf(),
    })
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// None of the candidate paths exists
    #[error("asset not found, searched: {}", display_paths(.searched))]
    NotFound {
        /// Every path that was tried, in order
        searched: Vec<PathBuf>,
    },

    /// Invalid asset data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
