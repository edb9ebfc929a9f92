use lyricast_shared::{Catalog, ChannelId, Song, SongId, Theme};

/// Every test shares one session channel, treated as an opaque value.
pub const TEST_CHANNEL: &str = "concert/live/test-session";

pub fn test_channel() -> ChannelId {
    ChannelId::from(TEST_CHANNEL)
}

/// A small fixed catalog: song "1" with lines a/b/c, song "2" with two
/// lines.
pub fn test_catalog() -> Catalog {
    Catalog::new(vec![
        Song {
            id: SongId::from("1"),
            title: "First Song".to_string(),
            artist: "The Band".to_string(),
            lyrics: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            theme: Theme {
                background: "midnight".to_string(),
                title: "dawn".to_string(),
            },
        },
        Song {
            id: SongId::from("2"),
            title: "Second Song".to_string(),
            artist: "The Band".to_string(),
            lyrics: vec!["x".to_string(), "y".to_string()],
            theme: Theme::default(),
        },
    ])
}
