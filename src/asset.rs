//! Asset lookup. Assets live under a configurable root directory and are read once at startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;

use crate::audio::{Sound, Track};
use crate::error::AssetError;
use crate::render::Image;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Music(Track),
    Sound(Sound),
    Image(Image),
}

impl Asset {
    /// Every asset the game needs, in load order.
    pub fn all() -> impl Iterator<Item = Asset> {
        Track::iter()
            .map(Asset::Music)
            .chain(Sound::iter().map(Asset::Sound))
            .chain(Image::iter().map(Asset::Image))
    }

    /// The path of the asset relative to the asset root.
    pub const fn path(self) -> &'static str {
        match self {
            Asset::Music(Track::Ambient) => "music/music.mp3",
            Asset::Sound(Sound::MusicStop) => "music/music-stop.mp3",
            Asset::Sound(Sound::Pickup) => "sounds/pickup.mp3",
            Asset::Sound(Sound::Jumpscare) => "sounds/jumpscare.mp3",
            Asset::Image(Image::Jumpscare) => "images/jumpscare.png",
        }
    }

    pub fn resolve(self, root: &Path) -> PathBuf {
        root.join(self.path())
    }

    /// Reads the whole asset into memory.
    pub fn get_bytes(self, root: &Path) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve(root);
        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AssetError::NotFound(path),
            _ => AssetError::Io(e),
        })
    }
}

/// Checks that every asset exists before anything is decoded, so a broken install is reported up front.
pub fn verify_all(root: &Path) -> Result<(), AssetError> {
    for asset in Asset::all() {
        let path = asset.resolve(root);
        if !path.is_file() {
            return Err(AssetError::NotFound(path));
        }
    }
    Ok(())
}
