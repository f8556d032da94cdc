//! Background music: keeps a random track playing.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::backend::MusicBackend;
use crate::playlist::Playlist;

pub struct Jukebox<B, R = StdRng> {
    backend: B,
    playlist: Playlist,
    volume: f32,
    rng: R,
}

impl<B: MusicBackend> Jukebox<B, StdRng> {
    pub fn new(backend: B, playlist: Playlist, volume: f32) -> Self {
        Self::with_rng(backend, playlist, volume, StdRng::from_entropy())
    }
}

impl<B: MusicBackend, R: Rng> Jukebox<B, R> {
    pub fn with_rng(backend: B, playlist: Playlist, volume: f32, rng: R) -> Self {
        Self {
            backend,
            playlist,
            volume: volume.clamp(0.0, 1.0),
            rng,
        }
    }

    /// Start a random track if the backend is idle. Call once per frame.
    ///
    /// Tracks that fail to play are dropped from the rotation; with nothing
    /// left to play this does nothing.
    pub fn ensure_playing(&mut self) {
        if !self.backend.is_idle() {
            return;
        }

        while let Some(index) = self.playlist.pick(&mut self.rng) {
            let Some(path) = self.playlist.get(index) else {
                return;
            };
            match self.backend.play(path, self.volume) {
                Ok(()) => {
                    log::debug!("playing {}", path.display());
                    return;
                }
                Err(err) => {
                    log::warn!("{err}; removing it from the playlist");
                    self.playlist.remove(index);
                }
            }
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
