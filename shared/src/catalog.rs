use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a catalog entry. Stable for the lifetime of the
/// catalog, unique within it, never reused.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(String);

impl SongId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SongId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Display theme for a song. Both fields are opaque style tokens that the
/// rendering layer maps to a background and a title treatment; the sync core
/// only carries them through.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub title: String,
}

/// One catalog entry: a song with its ordered lyric lines.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    #[serde(default)]
    pub artist: String,
    pub lyrics: Vec<String>,
    #[serde(default)]
    pub theme: Theme,
}

impl Song {
    pub fn line_count(&self) -> usize {
        self.lyrics.len()
    }
}

/// Ordered, immutable song catalog. Loaded once at startup by the embedder;
/// read-only to the synchronization core.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    /// Resolves a song id. A stale id (e.g. a retained reference to a song
    /// removed from a newer catalog build) resolves to `None`, never an
    /// error.
    pub fn get(&self, id: &SongId) -> Option<&Song> {
        self.songs.iter().find(|song| &song.id == id)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
