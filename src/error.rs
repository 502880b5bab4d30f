use thiserror::Error;

/// Failures detected before any call to GitHub. Transport failures are `http::Error`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),
    #[error("GITHUB_EVENT_PATH is not set")]
    MissingEventPath,
    #[error("Failed to read event payload at {path}")]
    ReadEventPayload {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse event payload")]
    ParseEventPayload(#[source] serde_json::Error),
    #[error("Repository is missing from context")]
    MissingRepository,
    #[error("Pull request number is missing from context")]
    MissingPullRequestNumber,
    #[error("Event `{action}` carries no subject login")]
    MissingSubject { action: String },
}
