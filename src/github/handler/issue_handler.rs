use crate::{context::Repository, github::github_client::GithubClient};
use anyhow::Result;

/// Assignees live on the issue side of a pull request.
pub struct IssueHandler<'a> {
    client: &'a GithubClient,
    repository: &'a Repository,
    number: u64,
}

impl<'a> IssueHandler<'a> {
    pub fn new(client: &'a GithubClient, repository: &'a Repository, number: u64) -> Self {
        IssueHandler {
            client,
            repository,
            number,
        }
    }

    pub async fn add_assignees(&self, assignees: Vec<String>) -> Result<()> {
        self.client
            .create_assignees(self.repository, self.number, assignees)
            .await
    }

    pub async fn remove_assignees(&self, assignees: Vec<String>) -> Result<()> {
        self.client
            .delete_assignees(self.repository, self.number, assignees)
            .await
    }
}
