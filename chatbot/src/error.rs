use thiserror::Error;

/// Reasons a submission is refused before any request leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Please select a PDF first.")]
    NoFileSelected,
    #[error("Please type a question.")]
    EmptyQuestion,
    #[error("Please wait for the current request to finish.")]
    Busy,
}

#[derive(Debug, Error)]
pub enum BackendError {
    /// The service answered with a non-success status or an `error` field.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The task running the request ended without producing a result.
    #[error("request interrupted: {0}")]
    Interrupted(String),
}

impl BackendError {
    /// Detail fit to show the user verbatim, if the service provided one.
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            BackendError::Server { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum PickError {
    #[error("{0} is not a PDF file")]
    NotPdf(String),
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend origin {origin:?}: {reason}")]
    InvalidOrigin { origin: String, reason: String },
}
