use super::{
    handler::repository_handler::RepositoryHandler,
    request::{AssigneesRequest, ReviewersRequest, SerializeRequest},
    response::PullRequestResponse,
};
use crate::{
    context::Repository,
    delete, get,
    http::{Error, HttpClient},
    post,
    pull_request::PullRequest,
};
use anyhow::Result;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub struct GithubClient {
    http: HttpClient,
    token: String,
    api_url: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        GithubClient {
            http: HttpClient::new(),
            token: token.into(),
            api_url: api_url.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn repo<'a>(&'a self, repository: &'a Repository) -> RepositoryHandler<'a> {
        RepositoryHandler::new(self, repository)
    }

    pub(super) async fn fetch_pull_request(
        &self,
        repository: &Repository,
        number: u64,
    ) -> Result<PullRequest> {
        let uri = format!(
            "{}/repos/{}/{}/pulls/{}",
            self.api_url, repository.owner, repository.name, number
        );

        let response = get!(self, &uri)?;

        let pr = serde_json::from_str::<PullRequestResponse>(&response)
            .map_err(|cause| Error::ParseResponseError { cause })?;

        Ok(pr.into_pull_request(repository.clone()))
    }

    pub(super) async fn create_review_request(
        &self,
        repository: &Repository,
        number: u64,
        reviewers: Vec<String>,
    ) -> Result<()> {
        let uri = self.requested_reviewers_uri(repository, number);

        let body = ReviewersRequest::new(reviewers).into_request()?;

        post!(self, &uri, body)?;

        Ok(())
    }

    pub(super) async fn delete_review_request(
        &self,
        repository: &Repository,
        number: u64,
        reviewers: Vec<String>,
    ) -> Result<()> {
        let uri = self.requested_reviewers_uri(repository, number);

        let body = ReviewersRequest::new(reviewers).into_request()?;

        delete!(self, &uri, body)?;

        Ok(())
    }

    pub(super) async fn create_assignees(
        &self,
        repository: &Repository,
        issue_number: u64,
        assignees: Vec<String>,
    ) -> Result<()> {
        let uri = self.assignees_uri(repository, issue_number);

        let body = AssigneesRequest::new(assignees).into_request()?;

        post!(self, &uri, body)?;

        Ok(())
    }

    pub(super) async fn delete_assignees(
        &self,
        repository: &Repository,
        issue_number: u64,
        assignees: Vec<String>,
    ) -> Result<()> {
        let uri = self.assignees_uri(repository, issue_number);

        let body = AssigneesRequest::new(assignees).into_request()?;

        delete!(self, &uri, body)?;

        Ok(())
    }

    fn requested_reviewers_uri(&self, repository: &Repository, number: u64) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}/requested_reviewers",
            self.api_url, repository.owner, repository.name, number
        )
    }

    fn assignees_uri(&self, repository: &Repository, issue_number: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/assignees",
            self.api_url, repository.owner, repository.name, issue_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn repository() -> Repository {
        Repository::new("octo-org", "widgets")
    }

    #[tokio::test]
    async fn should_fetch_pull_request() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new("token", server.url());

        let m = server
            .mock("GET", "/repos/octo-org/widgets/pulls/42")
            .match_header("authorization", "Bearer token")
            .match_header("accept", "application/vnd.github+json")
            .with_body(
                json!({
                    "number": 42,
                    "user": { "login": "alice" },
                    "assignees": [{ "login": "dave" }, { "login": "eve" }],
                    "requested_reviewers": [{ "login": "carol" }],
                    "requested_teams": [{ "slug": "core" }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let pr = client.repo(&repository()).pull_request(42).get().await?;

        m.assert_async().await;
        assert_eq!(pr.number, 42);
        assert_eq!(pr.author, "alice");
        assert!(pr.is_assigned("dave"));
        assert!(pr.is_assigned("eve"));
        assert!(pr.is_review_requested("carol"));
        assert!(!pr.is_review_requested("core"));

        Ok(())
    }

    #[tokio::test]
    async fn should_request_reviewers() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new("token", server.url());

        let m = server
            .mock("POST", "/repos/octo-org/widgets/pulls/42/requested_reviewers")
            .match_header("authorization", "Bearer token")
            .match_body(Matcher::Json(json!({ "reviewers": ["carol"] })))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        client
            .repo(&repository())
            .pull_request(42)
            .request_reviewers(vec!["carol".to_owned()])
            .await?;

        m.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn should_remove_requested_reviewers() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new("token", server.url());

        let m = server
            .mock("DELETE", "/repos/octo-org/widgets/pulls/42/requested_reviewers")
            .match_body(Matcher::Json(json!({ "reviewers": ["carol"] })))
            .with_body("{}")
            .create_async()
            .await;

        client
            .repo(&repository())
            .pull_request(42)
            .remove_requested_reviewers(vec!["carol".to_owned()])
            .await?;

        m.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn should_add_assignees() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new("token", server.url());

        let m = server
            .mock("POST", "/repos/octo-org/widgets/issues/42/assignees")
            .match_body(Matcher::Json(json!({ "assignees": ["dave"] })))
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        client
            .repo(&repository())
            .issue(42)
            .add_assignees(vec!["dave".to_owned()])
            .await?;

        m.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn should_remove_assignees() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new("token", format!("{}/", server.url()));

        let m = server
            .mock("DELETE", "/repos/octo-org/widgets/issues/42/assignees")
            .match_body(Matcher::Json(json!({ "assignees": ["dave"] })))
            .with_body("{}")
            .create_async()
            .await;

        client
            .repo(&repository())
            .issue(42)
            .remove_assignees(vec!["dave".to_owned()])
            .await?;

        m.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn should_surface_api_error_message() -> Result<()> {
        let mut server = Server::new_async().await;
        let client = GithubClient::new("token", server.url());

        let m = server
            .mock("POST", "/repos/octo-org/widgets/pulls/42/requested_reviewers")
            .with_status(422)
            .with_body(
                r#"{"message":"Reviews may only be requested from collaborators."}"#,
            )
            .create_async()
            .await;

        let err = client
            .repo(&repository())
            .pull_request(42)
            .request_reviewers(vec!["mallory".to_owned()])
            .await
            .unwrap_err();

        m.assert_async().await;
        assert_eq!(
            err.to_string(),
            "Reviews may only be requested from collaborators. (422)"
        );

        Ok(())
    }
}
