use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    /// The music directory could not be listed.
    #[error("cannot read music directory {}: {source}", path.display())]
    MusicDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no audio output device: {0}")]
    NoDevice(#[from] rodio::StreamError),
    #[error("cannot create audio sink: {0}")]
    Sink(#[from] rodio::PlayError),
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
