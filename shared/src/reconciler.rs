//! Folds delivered wire messages into the locally owned [`SessionState`].

use log::debug;

use crate::protocol::{decode, WireMessage};
use crate::session::SessionState;

/// Applies one delivered message to the state. Returns `true` when the
/// state changed.
///
/// Messages are applied strictly in transport delivery order with no
/// deduplication: last delivered wins. With a single controller that
/// converges; with concurrent controllers last-delivered-wins is the
/// documented conflict policy, not a fairness guarantee. Applying the same
/// message twice is a no-op in effect, so a retained replay reproduces
/// exactly the state it captured, with no intermediate flicker.
///
/// A message without a `lineIndex` always resets the highlight: selecting a
/// song clears any previous line, even when the song is unchanged. Line
/// moves in either direction are accepted; a controller correcting a
/// skipped line moves backward on purpose.
pub fn apply(state: &mut SessionState, incoming: &WireMessage) -> bool {
    let next = match &incoming.song_id {
        None => SessionState::empty(),
        Some(id) => SessionState {
            active_song_id: Some(id.clone()),
            active_line_index: incoming.effective_line(),
        },
    };
    if next == *state {
        return false;
    }
    *state = next;
    true
}

/// Decodes and applies one delivered payload. Returns `true` when the state
/// changed. A malformed payload is discarded and leaves the state
/// untouched; a bad message must never blank or freeze a display that was
/// showing something valid.
pub fn apply_payload(state: &mut SessionState, payload: &[u8]) -> bool {
    match decode(payload) {
        Ok(message) => apply(state, &message),
        Err(err) => {
            debug!("discarding payload: {err}");
            false
        }
    }
}
