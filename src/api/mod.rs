use std::future::Future;

use crate::request::{Rest, Transport};
use crate::Error;

pub mod oauth;
pub mod public;

use oauth::OAuthBuilder;
use public::{GetChannelBuilder, GetPlaylistBuilder, GetVideoBuilder};

/// Handle to the API. Carries the transport plus whatever credentials the
/// caller configured: an API key for public reads, an access token for
/// operations on behalf of the authorized user.
///
/// The token is read as given on every call and never refreshed, mutated or
/// persisted; acquiring it is the caller's concern.
pub struct YouTube<T: Transport = Rest> {
    pub(crate) transport: T,
    pub(crate) key: Option<String>,
    pub(crate) token: Option<String>,
}

impl YouTube<Rest> {
    pub fn new() -> Self {
        Self::with_transport(Rest::new())
    }
}

impl Default for YouTube<Rest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> YouTube<T> {
    /// Build a client over a custom [`Transport`].
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            key: None,
            token: None,
        }
    }

    /// API key attached to public reads.
    pub fn key<S: ToString>(mut self, key: S) -> Self {
        self.key = Some(key.to_string());
        self
    }

    /// Access token for operations that act as the authorized user.
    pub fn token<S: ToString>(mut self, token: S) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub(crate) fn bearer(&self) -> Result<&str, Error> {
        self.token.as_deref().ok_or(Error::MissingToken)
    }

    /// Operations on behalf of the authorized user.
    pub fn oauth(&self) -> OAuthBuilder<'_, T> {
        OAuthBuilder::new(self)
    }

    /// Look up a channel by id.
    pub fn get_channel<S: Into<String>>(&self, channel_id: S) -> GetChannelBuilder<'_, T> {
        GetChannelBuilder::new(self, channel_id.into())
    }

    /// Look up a video by id.
    pub fn get_video<S: Into<String>>(&self, video_id: S) -> GetVideoBuilder<'_, T> {
        GetVideoBuilder::new(self, video_id.into())
    }

    /// Look up a playlist by id.
    pub fn get_playlist<S: Into<String>>(&self, playlist_id: S) -> GetPlaylistBuilder<'_, T> {
        GetPlaylistBuilder::new(self, playlist_id.into())
    }
}

/// A prepared call that resolves into `T` once sent.
pub trait YouTubeRequest<T> {
    fn send(self) -> impl Future<Output=Result<T, Error>>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::request::{Request, Transport};
    use crate::Error;

    /// Transport double: records every request it is handed and replays a
    /// queue of canned results, defaulting to an empty body once drained.
    pub struct Recorder {
        responses: Mutex<VecDeque<Result<String, Error>>>,
        pub calls: Mutex<Vec<Request>>,
    }

    impl Recorder {
        pub fn new() -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn replay<S: ToString, I: IntoIterator<Item=S>>(bodies: I) -> Self {
            let recorder = Self::new();
            for body in bodies {
                recorder.responses.lock().unwrap().push_back(Ok(body.to_string()));
            }
            recorder
        }

        pub fn queue(self, result: Result<String, Error>) -> Self {
            self.responses.lock().unwrap().push_back(result);
            self
        }

        pub fn calls(&self) -> Vec<Request> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Transport for Recorder {
        async fn call(&self, request: Request) -> Result<String, Error> {
            self.calls.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }
}
