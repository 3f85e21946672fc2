use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{deserialize_count, Thumbnails};

/// A channel on the platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    pub snippet: ChannelSnippet,
    /// Present when the `statistics` part was requested.
    pub statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    /// The channel's title.
    pub title: String,
    /// The channel's description.
    #[serde(default)]
    pub description: String,
    /// The channel's custom URL, if it claimed one.
    pub custom_url: Option<String>,
    /// The date and time that the channel was created.
    pub published_at: Option<DateTime<Utc>>,
    /// The country the channel is associated with.
    pub country: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

/// Channel counters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub view_count: Option<u64>,
    /// Rounded by the service for larger channels.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub subscriber_count: Option<u64>,
    /// Whether the channel hides its subscriber count.
    #[serde(default)]
    pub hidden_subscriber_count: bool,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub video_count: Option<u64>,
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn counters_arrive_as_strings() {
        let channel: Channel = serde_json::from_value(json!({
            "id": "UC1",
            "snippet": {
                "title": "a channel",
                "description": "about things",
                "customUrl": "@achannel",
                "publishedAt": "2013-05-10T14:00:00Z",
                "thumbnails": {"default": {"url": "https://i.ytimg.com/x.jpg", "width": 88, "height": 88}}
            },
            "statistics": {
                "viewCount": "276714015",
                "subscriberCount": "2770000",
                "hiddenSubscriberCount": false,
                "videoCount": "387"
            }
        }))
        .unwrap();

        let statistics = channel.statistics.unwrap();
        assert_eq!(statistics.view_count, Some(276714015));
        assert_eq!(statistics.subscriber_count, Some(2770000));
        assert_eq!(statistics.video_count, Some(387));
        assert_eq!(channel.snippet.custom_url.as_deref(), Some("@achannel"));
        assert_eq!(channel.snippet.thumbnails.default.unwrap().width, Some(88));
    }

    #[test]
    fn statistics_and_most_snippet_fields_are_optional() {
        let channel: Channel = serde_json::from_value(json!({
            "id": "UC1",
            "snippet": {"title": "bare"}
        }))
        .unwrap();

        assert!(channel.statistics.is_none());
        assert_eq!(channel.snippet.description, "");
        assert!(channel.snippet.published_at.is_none());
    }
}
