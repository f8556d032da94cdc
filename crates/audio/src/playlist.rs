//! Music directory listing.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::AudioError;

/// Tracks available for background music, in sorted path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    tracks: Vec<PathBuf>,
}

impl Playlist {
    /// List the regular files directly inside `dir`.
    ///
    /// Subdirectories are skipped. Whether a file is actually playable is only
    /// found out when it is first played.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, AudioError> {
        let dir = dir.as_ref();
        let dir_err = |source| AudioError::MusicDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut tracks = Vec::new();
        for entry in fs::read_dir(dir).map_err(dir_err)? {
            let entry = entry.map_err(dir_err)?;
            // Follows symlinks, so a link to a file counts as a track.
            let is_file = fs::metadata(entry.path())
                .map(|m| m.is_file())
                .unwrap_or(false);
            if is_file {
                tracks.push(entry.path());
            }
        }
        tracks.sort();

        log::info!("found {} track(s) in {}", tracks.len(), dir.display());
        Ok(Self { tracks })
    }

    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut tracks: Vec<PathBuf> = paths.into_iter().collect();
        tracks.sort();
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[PathBuf] {
        &self.tracks
    }

    /// Index of a uniformly chosen track.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.tracks.is_empty() {
            None
        } else {
            Some(rng.gen_range(0..self.tracks.len()))
        }
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.tracks.get(index).map(PathBuf::as_path)
    }

    /// Drop a track from the rotation.
    pub fn remove(&mut self, index: usize) -> Option<PathBuf> {
        if index < self.tracks.len() {
            Some(self.tracks.remove(index))
        } else {
            None
        }
    }
}
