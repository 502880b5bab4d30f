mod assignees_request;
mod reviewers_request;

pub use assignees_request::AssigneesRequest;
pub use reviewers_request::ReviewersRequest;

use anyhow::Result;
use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(self) -> Result<String>
    where
        Self: Serialize + Sized,
    {
        let body = serde_json::to_string(&self)?;

        Ok(body)
    }
}

impl SerializeRequest for AssigneesRequest {}
impl SerializeRequest for ReviewersRequest {}
