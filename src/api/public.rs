use serde::de::DeserializeOwned;
use std::fmt::Debug;

use crate::model::{Channel, ListResponse, Playlist, Video};
use crate::request::{self, Transport};
use crate::{Error, YouTubeResponse};

use super::{YouTube, YouTubeRequest};

/// Fetch a single resource by id. Public reads carry the API key when one is
/// configured, falling back to the bearer token; with neither the service
/// reports the failure itself.
async fn single<R, T>(yt: &YouTube<T>, endpoint: &str, part: &str, id: &str) -> Result<R, Error>
where
    R: DeserializeOwned + Debug,
    T: Transport,
{
    let mut request = request::get!("{}", endpoint)
        .param("part", part)
        .param("id", id);
    if let Some(key) = yt.key.as_ref() {
        request = request.param("key", key);
    } else if let Some(token) = yt.token.as_ref() {
        request = request.token(token);
    }

    let found: ListResponse<R> = yt.transport.call(request).to_youtube_response().await?;
    found.items.into_iter().next().ok_or(Error::NoContent)
}

pub struct GetChannelBuilder<'a, T: Transport> {
    yt: &'a YouTube<T>,
    channel_id: String,
}

impl<'a, T: Transport> GetChannelBuilder<'a, T> {
    pub(crate) fn new(yt: &'a YouTube<T>, channel_id: String) -> Self {
        Self { yt, channel_id }
    }
}

impl<'a, T: Transport> YouTubeRequest<Channel> for GetChannelBuilder<'a, T> {
    async fn send(self) -> Result<Channel, Error> {
        single(self.yt, "channels", "snippet,statistics", &self.channel_id).await
    }
}

pub struct GetVideoBuilder<'a, T: Transport> {
    yt: &'a YouTube<T>,
    video_id: String,
}

impl<'a, T: Transport> GetVideoBuilder<'a, T> {
    pub(crate) fn new(yt: &'a YouTube<T>, video_id: String) -> Self {
        Self { yt, video_id }
    }
}

impl<'a, T: Transport> YouTubeRequest<Video> for GetVideoBuilder<'a, T> {
    async fn send(self) -> Result<Video, Error> {
        single(self.yt, "videos", "snippet,statistics", &self.video_id).await
    }
}

pub struct GetPlaylistBuilder<'a, T: Transport> {
    yt: &'a YouTube<T>,
    playlist_id: String,
}

impl<'a, T: Transport> GetPlaylistBuilder<'a, T> {
    pub(crate) fn new(yt: &'a YouTube<T>, playlist_id: String) -> Self {
        Self { yt, playlist_id }
    }
}

impl<'a, T: Transport> YouTubeRequest<Playlist> for GetPlaylistBuilder<'a, T> {
    async fn send(self) -> Result<Playlist, Error> {
        single(self.yt, "playlists", "snippet,contentDetails", &self.playlist_id).await
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::api::testing::Recorder;
    use crate::request::Request;

    fn param<'r>(request: &'r Request, key: &str) -> Option<&'r str> {
        request.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    fn video_body() -> String {
        json!({
            "items": [{
                "id": "v1",
                "snippet": {
                    "title": "a video",
                    "channelId": "UC1",
                    "tags": ["one", "two"]
                },
                "statistics": {"viewCount": "1234", "likeCount": "56"}
            }]
        })
        .to_string()
    }

    #[tokio::test]
    async fn public_reads_carry_the_api_key() {
        let yt = YouTube::with_transport(Recorder::replay([video_body()])).key("api-key");

        let video = yt.get_video("v1").send().await.unwrap();
        assert_eq!(video.id, "v1");
        assert_eq!(video.statistics.unwrap().view_count, Some(1234));

        let calls = yt.transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].endpoint, "videos");
        assert_eq!(param(&calls[0], "key"), Some("api-key"));
        assert_eq!(param(&calls[0], "id"), Some("v1"));
        assert!(calls[0].token.is_none());
    }

    #[tokio::test]
    async fn public_reads_fall_back_to_the_bearer_token() {
        let yt = YouTube::with_transport(Recorder::replay([json!({
            "items": [{"id": "UC1", "snippet": {"title": "a channel"}}]
        })
        .to_string()]))
        .token("token");

        let channel = yt.get_channel("UC1").send().await.unwrap();
        assert_eq!(channel.snippet.title, "a channel");

        let calls = yt.transport.calls();
        assert_eq!(param(&calls[0], "key"), None);
        assert_eq!(calls[0].token.as_deref(), Some("token"));
    }

    #[tokio::test]
    async fn an_unknown_id_is_no_content() {
        let yt = YouTube::with_transport(Recorder::replay([json!({"items": []}).to_string()])).key("api-key");
        assert!(matches!(yt.get_playlist("PL404").send().await, Err(Error::NoContent)));
    }
}
