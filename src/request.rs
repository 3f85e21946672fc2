use std::fmt::{Display, Formatter};
use std::future::Future;

use serde::Serialize;

use crate::Error;

/// Root path every endpoint is resolved against.
pub const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

#[macro_export]
macro_rules! tubify_request {
    ($type: ident, $url: literal) => {
        paste::paste! {
            $crate::request::Request::new($crate::request::Method::[<$type:upper>], format!($url))
        }
    };
    ($type: ident, $url: literal, $($param: expr),*) => {
        paste::paste! {
            $crate::request::Request::new($crate::request::Method::[<$type:upper>], format!($url, $($param,)*))
        }
    }
}

#[macro_export]
macro_rules! tubify_request_get {
    ($($rest: tt)*) => {
        $crate::tubify_request!(get, $($rest)*)
    }
}

#[macro_export]
macro_rules! tubify_request_post {
    ($($rest: tt)*) => {
        $crate::tubify_request!(post, $($rest)*)
    }
}

#[macro_export]
macro_rules! tubify_request_put {
    ($($rest: tt)*) => {
        $crate::tubify_request!(put, $($rest)*)
    }
}

#[macro_export]
macro_rules! tubify_request_delete {
    ($($rest: tt)*) => {
        $crate::tubify_request!(delete, $($rest)*)
    }
}

pub use crate::tubify_request_get as get;
pub use crate::tubify_request_post as post;
pub use crate::tubify_request_put as put;
pub use crate::tubify_request_delete as delete;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::GET => write!(f, "GET"),
            Method::POST => write!(f, "POST"),
            Method::PUT => write!(f, "PUT"),
            Method::DELETE => write!(f, "DELETE"),
        }
    }
}

/// A single call against the API: verb, endpoint path, query parameters,
/// bearer token and JSON body. Built fresh per call and never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub endpoint: String,
    pub params: Vec<(String, String)>,
    pub token: Option<String>,
    pub body: Option<String>,
}

impl Request {
    pub fn new<S: ToString>(method: Method, endpoint: S) -> Self {
        Self {
            method,
            endpoint: endpoint.to_string(),
            params: Vec::new(),
            token: None,
            body: None,
        }
    }

    /// Append a query parameter as given.
    ///
    /// The value is NOT encoded; it lands in the URL byte for byte, so
    /// pre-encoded values keep working. Use [`Request::param_encoded`] for
    /// values that may contain reserved characters.
    pub fn param<S1: ToString, S2: ToString>(mut self, key: S1, value: S2) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter, percent-encoding the value.
    pub fn param_encoded<S1: ToString, S2: AsRef<str>>(mut self, key: S1, value: S2) -> Self {
        self.params.push((key.to_string(), urlencoding::encode(value.as_ref()).into_owned()));
        self
    }

    /// Bearer token to authorize the call with.
    pub fn token<S: ToString>(mut self, token: S) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Serialize `body` as the JSON payload of the request.
    pub fn json<D: Serialize>(mut self, body: &D) -> Self {
        self.body = Some(serde_json::to_string(body).unwrap());
        self
    }

    /// Resolve the absolute URL for the request against `base`.
    pub fn url(&self, base: &str) -> String {
        let mut url = if self.endpoint.starts_with('/') {
            format!("{}{}", base, self.endpoint)
        } else {
            format!("{}/{}", base, self.endpoint)
        };

        for (key, value) in self.params.iter() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }

        url
    }
}

/// Issues a [`Request`] as exactly one network call and resolves with the raw
/// response body. No retries and no timeout beyond the client's defaults; a
/// connection-level failure is fatal to the call.
pub trait Transport {
    fn call(&self, request: Request) -> impl Future<Output=Result<String, Error>>;
}

/// [`Transport`] backed by a reqwest client talking to the live service.
pub struct Rest {
    client: reqwest::Client,
    base_url: String,
}

impl Rest {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Point the transport at a different API root.
    pub fn with_base_url<S: ToString>(base_url: S) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for Rest {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for Rest {
    async fn call(&self, request: Request) -> Result<String, Error> {
        let url = request.url(&self.base_url);
        log::debug!("{} {}", request.method, url);

        let mut builder = match request.method {
            Method::GET => self.client.get(&url),
            Method::POST => self.client.post(&url),
            Method::PUT => self.client.put(&url),
            Method::DELETE => self.client.delete(&url),
        };

        builder = builder.header("Content-Type", "application/json");
        if let Some(token) = request.token.as_ref() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = request.body {
            builder = builder.header("Content-Length", body.len()).body(body);
        }

        let response = builder.send().await?;
        let body = response.text().await?;
        log::trace!("{} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn urls_join_the_endpoint_against_the_base() {
        let request = Request::new(Method::GET, "channels");
        assert_eq!(request.url(API_BASE_URL), "https://www.googleapis.com/youtube/v3/channels");

        let request = Request::new(Method::GET, "/channels");
        assert_eq!(request.url(API_BASE_URL), "https://www.googleapis.com/youtube/v3/channels");
    }

    #[test]
    fn params_join_with_question_mark_then_ampersand() {
        let request = get!("subscriptions")
            .param("part", "snippet")
            .param("mine", "true")
            .param("maxResults", 50);
        assert_eq!(
            request.url("https://host/v3"),
            "https://host/v3/subscriptions?part=snippet&mine=true&maxResults=50"
        );
    }

    #[test]
    fn param_values_pass_through_verbatim() {
        // Pre-encoded and reserved characters are the caller's to manage.
        let request = get!("search").param("q", "cats%20%26%20dogs").param("raw", "a&b");
        assert_eq!(request.url("https://host"), "https://host/search?q=cats%20%26%20dogs&raw=a&b");
    }

    #[test]
    fn param_encoded_escapes_reserved_characters() {
        let request = get!("search").param_encoded("q", "cats & dogs");
        assert_eq!(request.url("https://host"), "https://host/search?q=cats%20%26%20dogs");
    }

    #[test]
    fn macros_pick_the_verb() {
        assert_eq!(get!("a").method, Method::GET);
        assert_eq!(post!("a").method, Method::POST);
        assert_eq!(put!("a").method, Method::PUT);
        assert_eq!(delete!("a").method, Method::DELETE);
        assert_eq!(get!("channels/{}", "UC123").endpoint, "channels/UC123");
    }

    #[test]
    fn json_bodies_serialize_in_place() {
        let request = post!("commentThreads").json(&serde_json::json!({"id": "ct-1"}));
        assert_eq!(request.body.as_deref(), Some(r#"{"id":"ct-1"}"#));
    }
}
