use super::{issue_handler::IssueHandler, pull_request_handler::PullRequestHandler};
use crate::{context::Repository, github::github_client::GithubClient};

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    repository: &'a Repository,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, repository: &'a Repository) -> Self {
        RepositoryHandler { client, repository }
    }

    pub fn pull_request(&self, number: u64) -> PullRequestHandler<'a> {
        PullRequestHandler::new(self.client, self.repository, number)
    }

    pub fn issue(&self, number: u64) -> IssueHandler<'a> {
        IssueHandler::new(self.client, self.repository, number)
    }
}
