use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::model::{Channel, Comment, CommentTarget, CommentThread, ListResponse, Playlist, Subscription};
use crate::request::{self, Transport};
use crate::{Error, NoContent, YouTubeResponse};

use super::{YouTube, YouTubeRequest};

/// Largest page the list endpoints will serve.
const PAGE_SIZE: i64 = 50;

/// Operations on behalf of the authorized user. Every one of them requires
/// the client to carry an access token and fails before any network I/O when
/// it is missing.
pub struct OAuthBuilder<'a, T: Transport> {
    yt: &'a YouTube<T>,
}

impl<'a, T: Transport> OAuthBuilder<'a, T> {
    pub(crate) fn new(yt: &'a YouTube<T>) -> Self {
        Self { yt }
    }

    /// The authorized user's own channel.
    pub fn get_me(self) -> GetMeBuilder<'a, T> {
        GetMeBuilder { yt: self.yt }
    }

    /// The authorized user's subscriptions, in response order.
    pub fn my_subscriptions(self) -> MySubscriptionsBuilder<'a, T> {
        MySubscriptionsBuilder { yt: self.yt, max_results: 10 }
    }

    /// The authorized user's playlists, in response order.
    pub fn my_playlists(self) -> MyPlaylistsBuilder<'a, T> {
        MyPlaylistsBuilder { yt: self.yt, max_results: 10 }
    }

    /// Post a comment on a channel discussion, or on one of the channel's
    /// videos with [`PostCommentBuilder::video`].
    pub fn post_comment<S1: Into<String>, S2: Into<String>>(self, text: S1, channel_id: S2) -> PostCommentBuilder<'a, T> {
        PostCommentBuilder {
            yt: self.yt,
            text: text.into(),
            channel_id: channel_id.into(),
            video_id: None,
        }
    }

    /// Replace the text of one of the authorized user's comments.
    pub fn edit_comment<S1: Into<String>, S2: Into<String>>(self, text: S1, comment_id: S2) -> EditCommentBuilder<'a, T> {
        EditCommentBuilder {
            yt: self.yt,
            text: text.into(),
            comment_id: comment_id.into(),
        }
    }

    /// Subscribe the authorized user to a channel.
    pub fn subscribe<S: Into<String>>(self, channel_id: S) -> SubscribeBuilder<'a, T> {
        SubscribeBuilder { yt: self.yt, channel_id: channel_id.into() }
    }

    /// Remove one of the authorized user's subscriptions by its id.
    pub fn unsubscribe<S: Into<String>>(self, subscription_id: S) -> UnsubscribeBuilder<'a, T> {
        UnsubscribeBuilder { yt: self.yt, subscription_id: subscription_id.into() }
    }
}

fn required(name: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidArgument(name));
    }
    Ok(())
}

/// Walk a `mine=true` list endpoint page by page, chaining `nextPageToken`,
/// until the service runs out of pages or `max_results` items have
/// accumulated. A cap of zero or less fetches everything. Pages are fetched
/// sequentially and a failing page aborts the whole accumulation.
async fn paginated<R, T>(yt: &YouTube<T>, token: &str, endpoint: &str, part: &str, max_results: i64) -> Result<Vec<R>, Error>
where
    R: DeserializeOwned + Debug,
    T: Transport,
{
    let mut items: Vec<R> = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let page_size = if max_results > 0 {
            PAGE_SIZE.min(max_results - items.len() as i64)
        } else {
            PAGE_SIZE
        };

        let mut request = request::get!("{}", endpoint)
            .param("part", part)
            .param("mine", "true")
            .param("maxResults", page_size)
            .token(token);
        if let Some(next) = page_token.as_ref() {
            request = request.param("pageToken", next);
        }

        let page: ListResponse<R> = yt.transport.call(request).to_youtube_response().await?;
        items.extend(page.items);
        page_token = page.next_page_token;

        if page_token.is_none() || (max_results > 0 && items.len() as i64 >= max_results) {
            break;
        }
    }

    if max_results > 0 {
        items.truncate(max_results as usize);
    }
    Ok(items)
}

/// Lift an echoed thread into the comment handed back to the caller: tag the
/// surface it was left on and wrap any inline replies in response order.
fn wrap_thread(thread: CommentThread) -> Comment {
    let target = if thread.snippet.video_id.is_some() {
        CommentTarget::Video
    } else {
        CommentTarget::Channel
    };

    let mut comment = thread.snippet.top_level_comment;
    comment.target = target;
    comment.replies = thread
        .replies
        .map(|replies| {
            replies
                .comments
                .into_iter()
                .map(|mut reply| {
                    reply.target = target;
                    reply
                })
                .collect()
        })
        .unwrap_or_default();
    comment
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentTextPayload {
    text_original: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TopLevelCommentPayload {
    snippet: CommentTextPayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadPayloadSnippet {
    #[serde(skip_serializing_if = "Option::is_none")]
    channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    video_id: Option<String>,
    top_level_comment: TopLevelCommentPayload,
}

/// Body of a `commentThreads` mutation. A fresh value is built per call;
/// concurrent calls never share one.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    snippet: CommentThreadPayloadSnippet,
}

impl CommentThreadPayload {
    /// A new thread on a channel discussion or one of its videos.
    fn thread(text: &str, channel_id: &str, video_id: Option<&str>) -> Self {
        Self {
            id: None,
            snippet: CommentThreadPayloadSnippet {
                channel_id: Some(channel_id.to_string()),
                video_id: video_id.map(str::to_string),
                top_level_comment: TopLevelCommentPayload {
                    snippet: CommentTextPayload { text_original: text.to_string() },
                },
            },
        }
    }

    /// Replacement text for an existing thread.
    fn edit(text: &str, comment_id: &str) -> Self {
        Self {
            id: Some(comment_id.to_string()),
            snippet: CommentThreadPayloadSnippet {
                channel_id: None,
                video_id: None,
                top_level_comment: TopLevelCommentPayload {
                    snippet: CommentTextPayload { text_original: text.to_string() },
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceIdPayload {
    kind: &'static str,
    channel_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscriptionPayloadSnippet {
    resource_id: ResourceIdPayload,
}

/// Body of a `subscriptions` insert.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscriptionPayload {
    snippet: SubscriptionPayloadSnippet,
}

impl SubscriptionPayload {
    fn channel(channel_id: &str) -> Self {
        Self {
            snippet: SubscriptionPayloadSnippet {
                resource_id: ResourceIdPayload {
                    kind: "youtube#channel",
                    channel_id: channel_id.to_string(),
                },
            },
        }
    }
}

pub struct GetMeBuilder<'a, T: Transport> {
    yt: &'a YouTube<T>,
}

impl<'a, T: Transport> YouTubeRequest<Channel> for GetMeBuilder<'a, T> {
    async fn send(self) -> Result<Channel, Error> {
        let token = self.yt.bearer()?;

        let channels: ListResponse<Channel> = self.yt.transport
            .call(request::get!("channels")
                .param("part", "snippet,statistics")
                .param("mine", "true")
                .token(token))
            .to_youtube_response()
            .await?;

        channels.items.into_iter().next().ok_or(Error::NoContent)
    }
}

pub struct MySubscriptionsBuilder<'a, T: Transport> {
    yt: &'a YouTube<T>,
    max_results: i64,
}

impl<'a, T: Transport> MySubscriptionsBuilder<'a, T> {
    /// Cap on the number of subscriptions to fetch. Fetches 10 by default;
    /// zero or less fetches all of them.
    pub fn max_results(mut self, max_results: i64) -> Self {
        self.max_results = max_results;
        self
    }
}

impl<'a, T: Transport> YouTubeRequest<Vec<Subscription>> for MySubscriptionsBuilder<'a, T> {
    async fn send(self) -> Result<Vec<Subscription>, Error> {
        let token = self.yt.bearer()?;
        paginated(self.yt, token, "subscriptions", "snippet", self.max_results).await
    }
}

pub struct MyPlaylistsBuilder<'a, T: Transport> {
    yt: &'a YouTube<T>,
    max_results: i64,
}

impl<'a, T: Transport> MyPlaylistsBuilder<'a, T> {
    /// Cap on the number of playlists to fetch. Fetches 10 by default; zero
    /// or less fetches all of them.
    pub fn max_results(mut self, max_results: i64) -> Self {
        self.max_results = max_results;
        self
    }
}

impl<'a, T: Transport> YouTubeRequest<Vec<Playlist>> for MyPlaylistsBuilder<'a, T> {
    async fn send(self) -> Result<Vec<Playlist>, Error> {
        let token = self.yt.bearer()?;
        paginated(self.yt, token, "playlists", "snippet,contentDetails", self.max_results).await
    }
}

pub struct PostCommentBuilder<'a, T: Transport> {
    yt: &'a YouTube<T>,
    text: String,
    channel_id: String,
    video_id: Option<String>,
}

impl<'a, T: Transport> PostCommentBuilder<'a, T> {
    /// Target one of the channel's videos instead of its discussion tab.
    pub fn video<S: Into<String>>(mut self, video_id: S) -> Self {
        self.video_id = Some(video_id.into());
        self
    }
}

impl<'a, T: Transport> YouTubeRequest<Comment> for PostCommentBuilder<'a, T> {
    async fn send(self) -> Result<Comment, Error> {
        let token = self.yt.bearer()?;
        required("comment text", &self.text)?;

        let payload = CommentThreadPayload::thread(&self.text, &self.channel_id, self.video_id.as_deref());
        let thread: CommentThread = self.yt.transport
            .call(request::post!("commentThreads")
                .param("part", "snippet")
                .token(token)
                .json(&payload))
            .to_youtube_response()
            .await?;

        Ok(wrap_thread(thread))
    }
}

pub struct EditCommentBuilder<'a, T: Transport> {
    yt: &'a YouTube<T>,
    text: String,
    comment_id: String,
}

impl<'a, T: Transport> YouTubeRequest<Comment> for EditCommentBuilder<'a, T> {
    async fn send(self) -> Result<Comment, Error> {
        let token = self.yt.bearer()?;
        required("comment text", &self.text)?;

        let payload = CommentThreadPayload::edit(&self.text, &self.comment_id);
        let thread: CommentThread = self.yt.transport
            .call(request::put!("commentThreads")
                .param("part", "snippet")
                .token(token)
                .json(&payload))
            .to_youtube_response()
            .await?;

        Ok(wrap_thread(thread))
    }
}

pub struct SubscribeBuilder<'a, T: Transport> {
    yt: &'a YouTube<T>,
    channel_id: String,
}

impl<'a, T: Transport> YouTubeRequest<Subscription> for SubscribeBuilder<'a, T> {
    async fn send(self) -> Result<Subscription, Error> {
        let token = self.yt.bearer()?;
        required("channel ID", &self.channel_id)?;

        let payload = SubscriptionPayload::channel(&self.channel_id);
        self.yt.transport
            .call(request::post!("subscriptions")
                .param("part", "snippet")
                .token(token)
                .json(&payload))
            .to_youtube_response()
            .await
    }
}

pub struct UnsubscribeBuilder<'a, T: Transport> {
    yt: &'a YouTube<T>,
    subscription_id: String,
}

impl<'a, T: Transport> YouTubeRequest<()> for UnsubscribeBuilder<'a, T> {
    async fn send(self) -> Result<(), Error> {
        let token = self.yt.bearer()?;
        required("subscription ID", &self.subscription_id)?;

        let NoContent = self.yt.transport
            .call(request::delete!("subscriptions")
                .param("id", &self.subscription_id)
                .token(token))
            .to_youtube_response()
            .await?;
        Ok(())
    }
}
