//! Error type shared by every client operation.
//!
//! All failures surface as a single [`Error`] whose [`Kind`] tells the
//! caller what went wrong, replacing stringly-typed inspection with a
//! matchable discriminant:
//!
//! - [`Kind::Api`] — the server answered, but the response envelope
//!   carried a non-zero `code`; the message is the envelope's `msg`.
//! - [`Kind::Status`] — the server answered with a non-2xx HTTP status;
//!   the status, request method/path and raw body are attached.
//! - [`Kind::Connection`] — no response was received at all.
//! - [`Kind::Transport`] — any other failure in the underlying HTTP
//!   stack, preserved unchanged as the error's source.
//! - [`Kind::Validation`] — client construction rejected its inputs
//!   (bad base URL, API key unusable as a header value).

use std::fmt;

use reqwest::{Method, StatusCode};

/// Message used whenever no response was received from the server.
const NO_INTERNET_CONNECTION: &str = "noInternetConnection";

/// Discriminant for [`Error`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// The response envelope carried a non-zero `code`.
    Api,
    /// The server responded with a non-success HTTP status.
    Status,
    /// No response was received (connect failure or timeout).
    Connection,
    /// Some other transport-level failure.
    Transport,
    /// Client-side input validation failed.
    Validation,
}

/// Error returned by every fallible operation in this crate.
#[derive(Debug)]
pub struct Error {
    kind: Kind,
    message: String,
    status: Option<StatusCode>,
    method: Option<Method>,
    path: Option<String>,
    source: Option<reqwest::Error>,
}

impl Error {
    /// An application-level failure reported inside a response envelope.
    pub fn api(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Api,
            message: message.into(),
            status: None,
            method: None,
            path: None,
            source: None,
        }
    }

    /// A non-success HTTP response, with the raw body as the message.
    pub fn http_status(
        status: StatusCode,
        method: Method,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: Kind::Status,
            message: message.into(),
            status: Some(status),
            method: Some(method),
            path: Some(path.into()),
            source: None,
        }
    }

    /// No response was received from the server.
    #[must_use]
    pub fn connection() -> Self {
        Self {
            kind: Kind::Connection,
            message: NO_INTERNET_CONNECTION.to_owned(),
            status: None,
            method: None,
            path: None,
            source: None,
        }
    }

    /// A transport-level failure not covered by the other kinds.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Transport,
            message: message.into(),
            status: None,
            method: None,
            path: None,
            source: None,
        }
    }

    /// Invalid client construction input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: Kind::Validation,
            message: message.into(),
            status: None,
            method: None,
            path: None,
            source: None,
        }
    }

    /// What category of failure this is.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The failure message.
    ///
    /// For [`Kind::Api`] this is the envelope's `msg`; for
    /// [`Kind::Status`] it is the raw response body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status code, present only for [`Kind::Status`].
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Method of the failed request, present only for [`Kind::Status`].
    #[must_use]
    pub fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    /// Path of the failed request, present only for [`Kind::Status`].
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, &self.method, &self.path) {
            (Some(status), Some(method), Some(path)) => {
                write!(f, "{method} {path} returned {status}: {}", self.message)
            }
            _ => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // A connect failure or timeout means no response ever arrived;
        // everything else is propagated as-is via `source`.
        if err.is_connect() || err.is_timeout() {
            let mut error = Self::connection();
            error.source = Some(err);
            return error;
        }

        Self {
            kind: Kind::Transport,
            message: err.to_string(),
            status: None,
            method: None,
            path: None,
            source: Some(err),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::validation(format!("invalid base URL: {err}"))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(_: reqwest::header::InvalidHeaderValue) -> Self {
        Self::validation("API key is not a valid header value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_displays_fixed_message() {
        let err = Error::connection();
        assert_eq!(err.kind(), Kind::Connection);
        assert_eq!(err.to_string(), "noInternetConnection");
    }

    #[test]
    fn api_error_carries_only_message() {
        let err = Error::api("insufficient balance");
        assert_eq!(err.kind(), Kind::Api);
        assert_eq!(err.message(), "insufficient balance");
        assert_eq!(err.status(), None, "api errors carry no status");
        assert!(err.path().is_none(), "api errors carry no path");
    }

    #[test]
    fn status_error_display_includes_request_line() {
        let err = Error::http_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            Method::POST,
            "/v3/market/brc20/auction/create_bid",
            "server error",
        );
        assert_eq!(err.kind(), Kind::Status);
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.message(), "server error");
        assert_eq!(
            err.to_string(),
            "POST /v3/market/brc20/auction/create_bid returned 500 Internal Server Error: server error"
        );
    }

    #[test]
    fn invalid_url_maps_to_validation() {
        let err = Error::from("not a url".parse::<url::Url>().expect_err("should not parse"));
        assert_eq!(err.kind(), Kind::Validation);
    }
}
