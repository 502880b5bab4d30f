use crate::context::Repository;
use itertools::Itertools;
use std::collections::BTreeSet;

/// Membership state of a pull request, read once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub repository: Repository,
    pub number: u64,
    pub author: String,
    pub assignees: BTreeSet<String>,
    pub requested_reviewers: BTreeSet<String>,
}

impl PullRequest {
    pub fn new<A, R>(
        repository: Repository,
        number: u64,
        author: impl Into<String>,
        assignees: A,
        requested_reviewers: R,
    ) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        PullRequest {
            repository,
            number,
            author: author.into(),
            assignees: assignees.into_iter().map(Into::into).collect(),
            requested_reviewers: requested_reviewers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_assigned(&self, login: &str) -> bool {
        self.assignees.contains(login)
    }

    pub fn is_review_requested(&self, login: &str) -> bool {
        self.requested_reviewers.contains(login)
    }

    pub fn assignees_display(&self) -> String {
        format!("[{}]", self.assignees.iter().join(","))
    }

    pub fn requested_reviewers_display(&self) -> String {
        format!("[{}]", self.requested_reviewers.iter().join(","))
    }
}
