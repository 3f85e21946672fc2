use std::fmt::{Debug, Display, Formatter};
use std::future::Future;

use color_eyre::{Report, Section};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

mod api;
pub mod model;
pub mod request;

pub use api::{YouTube, YouTubeRequest};
pub use request::{Method, Request, Rest, Transport};

/// Error descriptor the service nests under the `error` field of a response
/// body. Sent with any HTTP status, including 200.
#[derive(Debug, Deserialize)]
struct ErrorData {
    #[serde(default)]
    pub code: u16,
    pub message: String,
}

#[derive(Debug, Clone)]
pub enum Error {
    /// An OAuth operation was attempted without an access token.
    MissingToken,
    /// A required string argument was empty or whitespace only.
    InvalidArgument(&'static str),
    /// The service reported an error inside the response envelope.
    Api { code: u16, message: String },
    /// The response carried no content where a resource was expected.
    NoContent,
    Json(String),
    Http(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingToken => write!(f, "Must have an access token for OAuth related methods"),
            Error::InvalidArgument(name) => write!(f, "Invalid {}", name),
            Error::Api { message, .. } => write!(f, "{}", message),
            Error::NoContent => write!(f, "No content in response when it was expected"),
            Error::Json(e) => write!(f, "{}", e),
            Error::Http(e) => write!(f, "{}", e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::Json(value.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Http(value.to_string())
    }
}

impl From<Error> for Report {
    fn from(value: Error) -> Self {
        match value {
            Error::MissingToken => Report::msg("Must have an access token for OAuth related methods")
                .suggestion("Set one with YouTube::token before calling oauth() operations"),
            Error::InvalidArgument(name) => Report::msg(format!("Invalid {}", name))
                .suggestion("The argument must be non-empty after trimming"),
            Error::Api { code, message } => Report::msg(format!("{}: {}", code, message)),
            Error::NoContent => Report::msg("No content in response when it was expected")
                .suggestion("Check that the id points at an existing resource"),
            Error::Json(e) => Report::msg(e),
            Error::Http(e) => Report::msg(e),
        }
    }
}

#[derive(Debug)]
pub struct NoContent;

impl<'de> Deserialize<'de> for NoContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Object(map) if map.len() == 0 => Ok(NoContent),
            Value::Null => Ok(NoContent),
            _ => Err(serde::de::Error::custom("Content in response when it was not expected")),
        }
    }
}

pub trait YouTubeResponse<T> {
    fn to_youtube_response(self) -> impl Future<Output=Result<T, Error>>;
}

impl<F, T> YouTubeResponse<T> for F
    where
        T: DeserializeOwned + Debug,
        F: Future<Output=Result<String, Error>>
{
    /// Parse the body a transport call resolved with.
    ///
    /// The service wraps failures in the body rather than the status line, so
    /// a response is a failure exactly when it carries an `error` field.
    async fn to_youtube_response(self) -> Result<T, Error> {
        let mut body = self.await?;

        if body.trim().is_empty() {
            body = String::from("null");
        }

        let envelope: Value = serde_json::from_str(&body)?;
        if let Some(error) = envelope.get("error") {
            let ErrorData { code, message } = serde_json::from_value(error.clone())?;
            return Err(Error::Api { code, message });
        }

        serde_path_to_error::deserialize(envelope).map_err(|e| Error::Json(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use serde::Deserialize;

    use super::*;

    async fn body(s: &str) -> Result<String, Error> {
        Ok(s.to_string())
    }

    #[derive(Debug, Deserialize)]
    struct Resource {
        id: String,
    }

    #[tokio::test]
    async fn error_envelopes_reject_with_the_remote_message() {
        let result: Result<Resource, Error> =
            body(r#"{"error":{"code":403,"message":"X"}}"#).to_youtube_response().await;
        assert!(matches!(result, Err(Error::Api { code: 403, message }) if message == "X"));
    }

    #[tokio::test]
    async fn error_envelopes_do_not_need_a_code() {
        let result: Result<Resource, Error> =
            body(r#"{"error":{"message":"X"}}"#).to_youtube_response().await;
        assert!(matches!(result, Err(Error::Api { code: 0, message }) if message == "X"));
    }

    #[tokio::test]
    async fn successful_bodies_deserialize() {
        let resource: Resource = body(r#"{"id":"UC123"}"#).to_youtube_response().await.unwrap();
        assert_eq!(resource.id, "UC123");
    }

    #[tokio::test]
    async fn empty_bodies_are_no_content() {
        let NoContent = body("").to_youtube_response().await.unwrap();
        let NoContent = body("{}").to_youtube_response().await.unwrap();
    }

    #[tokio::test]
    async fn malformed_bodies_are_json_errors() {
        let result: Result<Resource, Error> = body("<html>502</html>").to_youtube_response().await;
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn mismatched_bodies_name_the_failing_path() {
        let result: Result<Resource, Error> = body(r#"{"id":42}"#).to_youtube_response().await;
        match result {
            Err(Error::Json(message)) => assert!(message.contains("id")),
            other => panic!("expected a json error, got {other:?}"),
        }
    }
}
