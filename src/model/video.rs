use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{deserialize_count, Thumbnails};

/// A video on the platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    pub snippet: VideoSnippet,
    /// Present when the `statistics` part was requested.
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    /// The video's title.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// The channel the video was uploaded to.
    pub channel_id: Option<String>,
    /// That channel's title.
    pub channel_title: Option<String>,
    /// The date and time that the video was published.
    pub published_at: Option<DateTime<Utc>>,
    /// Keyword tags, only visible to the uploader.
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// Video counters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub like_count: Option<u64>,
    /// Absent when the video disabled comments.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub comment_count: Option<u64>,
}
