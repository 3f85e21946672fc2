use serde::{Deserialize, Deserializer};

mod channel;
mod comment;
mod playlist;
mod subscription;
mod video;

pub use channel::{Channel, ChannelSnippet, ChannelStatistics};
pub use comment::{Comment, CommentSnippet, CommentTarget, CommentThread, CommentThreadSnippet, Replies};
pub use playlist::{Playlist, PlaylistContentDetails, PlaylistSnippet};
pub use subscription::{Subscription, SubscriptionSnippet};
pub use video::{Video, VideoSnippet, VideoStatistics};

/// The service serializes most counters as decimal strings.
pub(crate) fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(count) => Ok(Some(count.parse().map_err(serde::de::Error::custom)?)),
        None => Ok(None),
    }
}

/// A single rendering of a resource's artwork.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Thumbnail {
    /// The image's URL.
    pub url: String,
    /// The image's width in pixels.
    pub width: Option<u32>,
    /// The image's height in pixels.
    pub height: Option<u32>,
}

/// Every size the service rendered for a resource's artwork.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The total number of results the query matches, which can exceed the
    /// number of items in any one page.
    pub total_results: usize,
    /// The number of results included in the page.
    pub results_per_page: usize,
}

/// Pointer at the resource a subscription covers.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    /// The resource's type, e.g. `youtube#channel`.
    pub kind: String,
    pub channel_id: Option<String>,
    pub video_id: Option<String>,
}

/// Envelope every list endpoint responds with. `items` holds one page; the
/// page tokens are opaque cursors into the neighboring pages.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub next_page_token: Option<String>,
    pub prev_page_token: Option<String>,
    pub page_info: Option<PageInfo>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}
