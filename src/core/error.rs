use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum UiError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),

    /// A response arrived but its body was not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The server answered without a success flag.
    #[error(
        "server rejected the update{}",
        .0.as_deref().map(|r| format!(": {r}")).unwrap_or_default()
    )]
    Rejected(Option<String>),

    #[error("dom error: {0}")]
    Dom(String),
}

impl From<gloo_net::Error> for UiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(inner) => UiError::Decode(inner.to_string()),
            other => UiError::Transport(other.to_string()),
        }
    }
}
