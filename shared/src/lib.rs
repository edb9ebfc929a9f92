//! # Lyricast Shared
//! Common functionality shared between the lyricast client runtime and its
//! embedders: the song catalog types, the replicated session state, the wire
//! protocol, the reconciler that folds delivered messages into state, and
//! the pure view projection consumed by rendering layers.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod catalog;
mod projection;
mod protocol;
mod reconciler;
mod session;
mod timer;

pub use catalog::{Catalog, Song, SongId, Theme};
pub use projection::{
    project, setlist, ActiveSong, LinePosition, LineView, RenderModel, SetlistEntry,
};
pub use protocol::{decode, encode, ChannelId, DecodeError, EncodeError, WireMessage};
pub use reconciler::{apply, apply_payload};
pub use session::{SessionState, NO_LINE};
pub use timer::Timer;
