//! Errors from the listing call.

/// Why a fetch produced no records.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS or timeout failure. The URL is stripped so query-param keys never show up.
    #[error("Request failed: {}", transport_chain(.0))]
    Transport(#[source] reqwest::Error),
    /// Any status other than 200. `body` is the raw response text.
    #[error("Error {code}")]
    HttpStatus { code: u16, body: String },
    /// Status 200 but the body is not JSON.
    #[error("Invalid response body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.without_url())
    }
}

/// `reqwest::Error` followed by its causes, so a timeout reads differently from a refused connection.
fn transport_chain(err: &reqwest::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = std::error::Error::source(cause);
    }
    parts.join(": ")
}

impl FetchError {
    /// Raw body for display below the error line, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            FetchError::HttpStatus { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}
