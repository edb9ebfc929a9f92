use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::catalog::SongId;
use crate::session::NO_LINE;

/// Opaque, case-sensitive identifier of the pub/sub channel shared by every
/// participant of one session. Chosen externally; the core never inspects
/// it.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChannelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One state transition on the wire.
///
/// JSON shape: `{"songId": string|null, "lineIndex"?: integer}`. The
/// `songId` key must be present; `null` means blackout. A missing
/// `lineIndex` means "no line highlighted". Encoding always writes
/// `lineIndex`, so every retained payload is fully normalized. Unknown
/// fields are ignored on decode; that tolerance is the forward
/// compatibility story in place of an explicit version field.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMessage {
    #[serde(deserialize_with = "nullable_song_id")]
    pub song_id: Option<SongId>,
    pub line_index: Option<i32>,
}

impl WireMessage {
    /// Activate a song with no line highlighted.
    pub fn song(id: SongId) -> Self {
        Self {
            song_id: Some(id),
            line_index: Some(NO_LINE),
        }
    }

    /// Highlight one line of a song.
    pub fn line(id: SongId, index: i32) -> Self {
        Self {
            song_id: Some(id),
            line_index: Some(index.max(NO_LINE)),
        }
    }

    /// Clear the display entirely.
    pub fn blackout() -> Self {
        Self {
            song_id: None,
            line_index: Some(NO_LINE),
        }
    }

    /// The line this message selects: a missing `lineIndex` means no line,
    /// and anything below the sentinel normalizes to it.
    pub fn effective_line(&self) -> i32 {
        self.line_index.unwrap_or(NO_LINE).max(NO_LINE)
    }
}

// A bare `Option` field would be defaulted to `None` when the key is
// missing, which would make `{}` decode as a blackout. Routing through
// `deserialize_with` keeps the key required while still accepting `null`.
fn nullable_song_id<'de, D>(deserializer: D) -> Result<Option<SongId>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<SongId>::deserialize(deserializer)
}

/// A delivered payload did not parse as a [`WireMessage`]. The reconciler
/// discards such payloads; this error never reaches a user.
#[derive(Debug, Error)]
#[error("malformed wire payload: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// A [`WireMessage`] could not be serialized. Treated like a dropped
/// publish by the client.
#[derive(Debug, Error)]
#[error("unencodable wire message: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

pub fn decode(payload: &[u8]) -> Result<WireMessage, DecodeError> {
    Ok(serde_json::from_slice(payload)?)
}

pub fn encode(message: &WireMessage) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(message)?)
}
