use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The surface a comment was left on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentTarget {
    /// The channel's discussion tab.
    #[default]
    Channel,
    /// A video's comment section.
    Video,
}

/// A comment, either a thread's top level comment or one of its replies.
///
/// `target` and `replies` are not part of the wire resource; the operations
/// that receive a thread fill them in before handing the comment back.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// The ID that YouTube uses to uniquely identify the comment.
    pub id: String,
    pub snippet: CommentSnippet,
    /// Replies echoed with the thread, in response order.
    #[serde(skip)]
    pub replies: Vec<Comment>,
    /// The surface the comment was left on.
    #[serde(skip)]
    pub target: CommentTarget,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub author_display_name: Option<String>,
    pub author_channel_url: Option<String>,
    /// The channel the comment was left on.
    pub channel_id: Option<String>,
    /// The video the comment was left on, when it targets a video.
    pub video_id: Option<String>,
    /// The comment's text in HTML formatting.
    pub text_display: Option<String>,
    /// The comment as it was typed; echoed by mutations.
    pub text_original: Option<String>,
    #[serde(default)]
    pub like_count: u64,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A top level comment together with its reply metadata, as the
/// `commentThreads` endpoints respond.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    /// The ID that YouTube uses to uniquely identify the thread.
    pub id: String,
    pub snippet: CommentThreadSnippet,
    /// Only present when the response carries replies inline.
    pub replies: Option<Replies>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    /// The channel the thread belongs to.
    pub channel_id: Option<String>,
    /// The video the thread was left on, absent for channel discussions.
    pub video_id: Option<String>,
    pub top_level_comment: Comment,
    #[serde(default)]
    pub can_reply: bool,
    #[serde(default)]
    pub total_reply_count: u32,
    #[serde(default)]
    pub is_public: bool,
}

/// Replies echoed inline with a thread.
#[derive(Debug, Clone, Deserialize)]
pub struct Replies {
    #[serde(default = "Vec::new")]
    pub comments: Vec<Comment>,
}
