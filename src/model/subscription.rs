use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{ResourceId, Thumbnails};

/// A subscription of the authorized user to a channel.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// The ID that YouTube uses to uniquely identify the subscription.
    pub id: String,
    pub snippet: SubscriptionSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSnippet {
    /// The subscribed channel's title.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// The channel the subscription points at.
    pub resource_id: ResourceId,
    /// The subscriber's own channel.
    pub channel_id: Option<String>,
    /// The date and time that the subscription was created.
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}
