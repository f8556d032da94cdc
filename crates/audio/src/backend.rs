//! Playback backends.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::error::AudioError;

/// Something that can play one track at a time.
pub trait MusicBackend {
    /// True when nothing is playing and the next track may start.
    fn is_idle(&self) -> bool;

    /// Start playing `path` at `volume` (1.0 is full scale).
    fn play(&mut self, path: &Path, volume: f32) -> Result<(), AudioError>;
}

/// Default output device through rodio.
pub struct RodioBackend {
    // Dropping the stream silences the sink.
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
}

impl RodioBackend {
    pub fn try_default() -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        Ok(Self {
            _stream: stream,
            _handle: handle,
            sink,
        })
    }
}

impl MusicBackend for RodioBackend {
    fn is_idle(&self) -> bool {
        self.sink.empty()
    }

    fn play(&mut self, path: &Path, volume: f32) -> Result<(), AudioError> {
        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        self.sink.set_volume(volume);
        self.sink.append(source);
        Ok(())
    }
}
