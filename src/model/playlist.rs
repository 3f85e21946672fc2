use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::Thumbnails;

/// A playlist on the platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// The ID that YouTube uses to uniquely identify the playlist.
    pub id: String,
    pub snippet: PlaylistSnippet,
    /// Present when the `contentDetails` part was requested.
    pub content_details: Option<PlaylistContentDetails>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSnippet {
    /// The playlist's title.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// The channel that owns the playlist.
    pub channel_id: Option<String>,
    /// The date and time that the playlist was created.
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistContentDetails {
    /// The number of videos in the playlist.
    pub item_count: u32,
}
