use thiserror::Error;

/// Unified error type for the crate.
///
/// This aggregates low-level failures into the categories the service and
/// the setup flow act on. The connectivity/authentication split matters:
/// setup-time validation reports them to the operator as distinct reasons.
#[derive(Debug, Error)]
pub enum Error {
    /// The completion endpoint could not be reached (DNS, connect, timeout).
    #[error("cannot reach completion endpoint: {0}")]
    Connect(String),

    /// The completion endpoint rejected the credentials.
    #[error("completion endpoint rejected credentials: {0}")]
    Auth(String),

    /// The completion endpoint answered with a non-success status.
    #[error("completion endpoint returned HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    /// The endpoint answered, but not with usable generated text.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),

    /// Invalid configuration, rejected once at construction.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedResponse(msg.into())
    }

    /// Whether this failure means the endpoint was unreachable, as opposed
    /// to reachable-but-unhappy. Setup validation branches on this.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Error::Connect(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Error::Connect(err.to_string())
        } else if err.is_decode() {
            Error::MalformedResponse(err.to_string())
        } else {
            // Request could not be carried out for another transport-level
            // reason (redirect loop, builder failure): the endpoint was
            // effectively not reached.
            Error::Connect(err.to_string())
        }
    }
}
