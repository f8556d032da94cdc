//! Music directory tests against real temporary directories

use std::fs;
use std::path::PathBuf;

use blockfall::audio::{AudioError, Playlist};

fn temp_dir(name: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "blockfall-{name}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn playlist_lists_regular_files_sorted() {
    let dir = temp_dir("playlist");
    fs::write(dir.join("b.ogg"), b"not really audio").unwrap();
    fs::write(dir.join("a.wav"), b"").unwrap();
    fs::create_dir(dir.join("nested")).unwrap();
    fs::write(dir.join("nested").join("c.ogg"), b"").unwrap();

    let playlist = Playlist::from_dir(&dir).unwrap();
    assert_eq!(playlist.tracks(), &[dir.join("a.wav"), dir.join("b.ogg")]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn playlist_of_empty_directory_is_empty() {
    let dir = temp_dir("empty");
    let playlist = Playlist::from_dir(&dir).unwrap();
    assert!(playlist.is_empty());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_directory_is_a_music_dir_error() {
    let dir = temp_dir("missing").join("does-not-exist");

    match Playlist::from_dir(&dir) {
        Err(AudioError::MusicDir { path, .. }) => assert_eq!(path, dir),
        other => panic!("expected MusicDir error, got {other:?}"),
    }
}
