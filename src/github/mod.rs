pub mod github_client;
mod handler;
mod macros;
mod request;
mod response;

use self::github_client::GithubClient;
use crate::{context::Repository, pull_request::PullRequest, sync::PullRequestApi};
use anyhow::Result;

impl PullRequestApi for GithubClient {
    async fn get_pull_request(&self, repository: &Repository, number: u64) -> Result<PullRequest> {
        self.repo(repository).pull_request(number).get().await
    }

    async fn request_reviewers(
        &self,
        repository: &Repository,
        number: u64,
        reviewers: Vec<String>,
    ) -> Result<()> {
        self.repo(repository)
            .pull_request(number)
            .request_reviewers(reviewers)
            .await
    }

    async fn remove_requested_reviewers(
        &self,
        repository: &Repository,
        number: u64,
        reviewers: Vec<String>,
    ) -> Result<()> {
        self.repo(repository)
            .pull_request(number)
            .remove_requested_reviewers(reviewers)
            .await
    }

    async fn add_assignees(
        &self,
        repository: &Repository,
        issue_number: u64,
        assignees: Vec<String>,
    ) -> Result<()> {
        self.repo(repository)
            .issue(issue_number)
            .add_assignees(assignees)
            .await
    }

    async fn remove_assignees(
        &self,
        repository: &Repository,
        issue_number: u64,
        assignees: Vec<String>,
    ) -> Result<()> {
        self.repo(repository)
            .issue(issue_number)
            .remove_assignees(assignees)
            .await
    }
}
