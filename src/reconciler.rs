use crate::{context::Event, exclusion::ExclusionSet, pull_request::PullRequest};
use std::fmt;

/// The single mutation a run performs, always on the set opposite to the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RequestReviewer(String),
    RemoveRequestedReviewer(String),
    AddAssignee(String),
    RemoveAssignee(String),
    NoOp(String),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::RequestReviewer(login) => write!(f, "request review from {}", login),
            Action::RemoveRequestedReviewer(login) => {
                write!(f, "remove review request for {}", login)
            }
            Action::AddAssignee(login) => write!(f, "assign {}", login),
            Action::RemoveAssignee(login) => write!(f, "unassign {}", login),
            Action::NoOp(reason) => write!(f, "nothing to do: {}", reason),
        }
    }
}

/// Decides the mirrored mutation for `event`.
///
/// `exclusions` must already contain the pull request author. An excluded
/// login always yields [`Action::NoOp`].
pub fn reconcile(event: &Event, pr: &PullRequest, exclusions: &ExclusionSet) -> Action {
    let login = event.login();

    if exclusions.contains(login) {
        return Action::NoOp(format!("{} is excluded", login));
    }

    match event {
        Event::AssigneeAdded(login) if pr.is_review_requested(login) => {
            Action::NoOp("No reviewer to be added".to_owned())
        }
        Event::AssigneeAdded(login) => Action::RequestReviewer(login.to_owned()),
        Event::AssigneeRemoved(login) if pr.is_review_requested(login) => {
            Action::RemoveRequestedReviewer(login.to_owned())
        }
        Event::AssigneeRemoved(_) => Action::NoOp("No reviewer to be removed".to_owned()),
        Event::ReviewerRequested(login) if pr.is_assigned(login) => {
            Action::NoOp("No assignees to be added".to_owned())
        }
        Event::ReviewerRequested(login) => Action::AddAssignee(login.to_owned()),
        Event::ReviewerRequestRemoved(login) if pr.is_assigned(login) => {
            Action::RemoveAssignee(login.to_owned())
        }
        Event::ReviewerRequestRemoved(_) => Action::NoOp("No assignees to be removed".to_owned()),
    }
}
