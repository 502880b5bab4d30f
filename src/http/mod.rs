use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder, StatusCode,
};
use serde::Deserialize;
use std::ops::Deref;
use thiserror::Error;

const GITHUB_API_VERSION: &str = "2022-11-28";
const AGENT: &str = "assign-review-sync";

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, AGENT)
    }
}

/// Turns a sent request into its body text, mapping non-2xx statuses to errors.
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::RequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if !status.is_success() {
            return Err(Error::GenericResponseError {
                message: error_message(status, &text),
            });
        }

        Ok(text)
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

fn error_message(status: StatusCode, text: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(text) {
        Ok(body) => format!("{} ({})", body.message, status.as_u16()),
        Err(_) if text.is_empty() => format!("Request failed with status {}", status.as_u16()),
        Err(_) => format!("{} ({})", text, status.as_u16()),
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    GenericResponseError { message: String },
    #[error("Failed to send request")]
    RequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
