use crate::catalog::SongId;

/// Sentinel line index meaning "no line highlighted". Also the value of
/// [`SessionState::active_line_index`] whenever no song is active.
pub const NO_LINE: i32 = -1;

/// The single replicated value of a live session: which song (if any) is
/// active and which of its lines (if any) is highlighted.
///
/// Exactly one logical instance exists per session. Every client owns a
/// local copy, mutated only by the reconciler and only in delivery order,
/// so no locking is ever involved. `active_line_index` is meaningful only
/// while a song is active and ranges over `[-1, line_count - 1]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionState {
    pub active_song_id: Option<SongId>,
    pub active_line_index: i32,
}

impl SessionState {
    /// The blackout state: nothing active, nothing highlighted.
    pub fn empty() -> Self {
        Self {
            active_song_id: None,
            active_line_index: NO_LINE,
        }
    }

    /// True when no song is active (the audience shows the waiting screen).
    pub fn is_blank(&self) -> bool {
        self.active_song_id.is_none()
    }

    /// True when a song is active but no line is highlighted.
    pub fn has_line(&self) -> bool {
        self.active_song_id.is_some() && self.active_line_index > NO_LINE
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::empty()
    }
}
