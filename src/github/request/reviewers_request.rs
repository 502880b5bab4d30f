use serde::{Deserialize, Serialize};

/// Body of the requested reviewers endpoints. Team reviewers are never mirrored.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewersRequest {
    pub reviewers: Vec<String>,
}

impl ReviewersRequest {
    pub fn new(reviewers: Vec<String>) -> Self {
        Self { reviewers }
    }
}
