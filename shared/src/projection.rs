//! Pure projection from session state and catalog to render models. No I/O,
//! no side effects; the rendering layer stays deterministic because the
//! same inputs always project to the same model.

use crate::catalog::{Catalog, SongId, Theme};
use crate::session::SessionState;

/// Where a lyric line sits relative to the highlighted line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinePosition {
    /// Already sung: `index < active_line_index`.
    Before,
    Active,
    After,
}

/// One lyric line of the active song, classified for rendering.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineView<'a> {
    pub index: usize,
    pub text: &'a str,
    pub position: LinePosition,
}

/// The active song resolved against the catalog, with every line
/// classified.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActiveSong<'a> {
    pub song_id: &'a SongId,
    pub title: &'a str,
    pub artist: &'a str,
    pub theme: &'a Theme,
    pub lines: Vec<LineView<'a>>,
}

/// What the audience display should show.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RenderModel<'a> {
    /// No active song, or a song id the catalog cannot resolve. The
    /// audience shows the waiting screen.
    Waiting,
    Active(ActiveSong<'a>),
}

impl<'a> RenderModel<'a> {
    pub fn active_song(&self) -> Option<&ActiveSong<'a>> {
        match self {
            RenderModel::Waiting => None,
            RenderModel::Active(song) => Some(song),
        }
    }
}

/// One catalog entry of the controller's setlist sidebar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SetlistEntry<'a> {
    pub song_id: &'a SongId,
    pub title: &'a str,
    pub is_active: bool,
}

/// Projects the replicated state onto the catalog.
///
/// Total over all states: an unresolvable song id projects to
/// [`RenderModel::Waiting`], never an error, so a stale retained reference
/// degrades to the waiting screen instead of breaking a display.
pub fn project<'a>(state: &SessionState, catalog: &'a Catalog) -> RenderModel<'a> {
    let Some(id) = &state.active_song_id else {
        return RenderModel::Waiting;
    };
    let Some(song) = catalog.get(id) else {
        return RenderModel::Waiting;
    };
    let lines = song
        .lyrics
        .iter()
        .enumerate()
        .map(|(index, text)| LineView {
            index,
            text,
            position: classify(index, state.active_line_index),
        })
        .collect();
    RenderModel::Active(ActiveSong {
        song_id: &song.id,
        title: &song.title,
        artist: &song.artist,
        theme: &song.theme,
        lines,
    })
}

/// Projects the catalog as the controller's setlist, marking the active
/// entry.
pub fn setlist<'a>(state: &SessionState, catalog: &'a Catalog) -> Vec<SetlistEntry<'a>> {
    catalog
        .songs()
        .iter()
        .map(|song| SetlistEntry {
            song_id: &song.id,
            title: &song.title,
            is_active: state.active_song_id.as_ref() == Some(&song.id),
        })
        .collect()
}

fn classify(index: usize, active_line: i32) -> LinePosition {
    let index = index as i64;
    let active_line = i64::from(active_line);
    if index < active_line {
        LinePosition::Before
    } else if index == active_line {
        LinePosition::Active
    } else {
        LinePosition::After
    }
}
