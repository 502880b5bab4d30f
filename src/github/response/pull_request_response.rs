use crate::{context::Repository, pull_request::PullRequest};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PullRequestResponse {
    pub number: u64,
    pub user: UserResponse,
    #[serde(default)]
    pub assignees: Option<Vec<UserResponse>>,
    #[serde(default)]
    pub requested_reviewers: Option<Vec<UserResponse>>,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub login: String,
}

impl PullRequestResponse {
    pub fn into_pull_request(self, repository: Repository) -> PullRequest {
        let logins = |users: Option<Vec<UserResponse>>| {
            users
                .unwrap_or_default()
                .into_iter()
                .map(|user| user.login)
        };

        PullRequest::new(
            repository,
            self.number,
            self.user.login,
            logins(self.assignees),
            logins(self.requested_reviewers),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_tolerate_null_user_lists() -> anyhow::Result<()> {
        let response: PullRequestResponse = serde_json::from_str(
            r#"{"number":7,"user":{"login":"alice"},"assignees":null}"#,
        )?;

        let pr = response.into_pull_request(Repository::new("octo-org", "widgets"));

        assert_eq!(pr.author, "alice");
        assert!(pr.assignees.is_empty());
        assert!(pr.requested_reviewers.is_empty());

        Ok(())
    }
}
