use crate::{context::Repository, github::github_client::GithubClient, pull_request::PullRequest};
use anyhow::Result;

pub struct PullRequestHandler<'a> {
    client: &'a GithubClient,
    repository: &'a Repository,
    number: u64,
}

impl<'a> PullRequestHandler<'a> {
    pub fn new(client: &'a GithubClient, repository: &'a Repository, number: u64) -> Self {
        PullRequestHandler {
            client,
            repository,
            number,
        }
    }

    pub async fn get(&self) -> Result<PullRequest> {
        self.client
            .fetch_pull_request(self.repository, self.number)
            .await
    }

    pub async fn request_reviewers(&self, reviewers: Vec<String>) -> Result<()> {
        self.client
            .create_review_request(self.repository, self.number, reviewers)
            .await
    }

    pub async fn remove_requested_reviewers(&self, reviewers: Vec<String>) -> Result<()> {
        self.client
            .delete_review_request(self.repository, self.number, reviewers)
            .await
    }
}
