use crate::{
    context::{Context, Repository},
    error::Error,
    exclusion::ExclusionSet,
    pull_request::PullRequest,
    reconciler::{self, Action},
};
use anyhow::{Context as _, Result};

/// Remote operations a run may perform. Every mutation takes a list, which
/// the run always fills with exactly one login.
pub trait PullRequestApi {
    async fn get_pull_request(&self, repository: &Repository, number: u64) -> Result<PullRequest>;

    async fn request_reviewers(
        &self,
        repository: &Repository,
        number: u64,
        reviewers: Vec<String>,
    ) -> Result<()>;

    async fn remove_requested_reviewers(
        &self,
        repository: &Repository,
        number: u64,
        reviewers: Vec<String>,
    ) -> Result<()>;

    async fn add_assignees(
        &self,
        repository: &Repository,
        issue_number: u64,
        assignees: Vec<String>,
    ) -> Result<()>;

    async fn remove_assignees(
        &self,
        repository: &Repository,
        issue_number: u64,
        assignees: Vec<String>,
    ) -> Result<()>;
}

/// Mirrors the membership change described by `context` onto the opposite set.
pub async fn run<A: PullRequestApi>(
    context: &Context,
    exclude: &ExclusionSet,
    api: &A,
) -> Result<Action> {
    let pull_number = context.pull_number.ok_or(Error::MissingPullRequestNumber)?;
    let issue_number = context.issue_number.unwrap_or(pull_number);

    let event = match &context.event {
        Some(event) => event,
        None => {
            log::info!("Ignoring action : {}", context.action);
            return Ok(Action::NoOp(format!("unhandled action {}", context.action)));
        }
    };

    let pr = api
        .get_pull_request(&context.repository, pull_number)
        .await
        .with_context(|| format!("Cannot fetch pull request #{}", pull_number))?;

    log::debug!("fetched {}#{} by {}", pr.repository, pr.number, pr.author);

    // The author can never be a reviewer of their own pull request.
    let exclusions = exclude.with(&pr.author);

    log::info!("Workflow triggered on action : {}", context.action);
    log::info!("Current reviewers : {}", pr.requested_reviewers_display());
    log::info!("Current assignees : {}", pr.assignees_display());
    log::info!("Will ignore these users : {}", exclusions);

    let action = reconciler::reconcile(event, &pr, &exclusions);
    apply(&action, &context.repository, pull_number, issue_number, api).await?;

    Ok(action)
}

async fn apply<A: PullRequestApi>(
    action: &Action,
    repository: &Repository,
    pull_number: u64,
    issue_number: u64,
    api: &A,
) -> Result<()> {
    match action {
        Action::RequestReviewer(login) => {
            log::info!("Request to add reviewers : [{}]", login);
            api.request_reviewers(repository, pull_number, vec![login.to_owned()])
                .await?;
            log::info!("Reviewers added : [{}]", login);
        }
        Action::RemoveRequestedReviewer(login) => {
            log::info!("Request to remove reviewers : [{}]", login);
            api.remove_requested_reviewers(repository, pull_number, vec![login.to_owned()])
                .await?;
            log::info!("Reviewers removed : [{}]", login);
        }
        Action::AddAssignee(login) => {
            log::info!("Request to add assignees : [{}]", login);
            api.add_assignees(repository, issue_number, vec![login.to_owned()])
                .await?;
            log::info!("Assignees added : [{}]", login);
        }
        Action::RemoveAssignee(login) => {
            log::info!("Request to remove assignees : [{}]", login);
            api.remove_assignees(repository, issue_number, vec![login.to_owned()])
                .await?;
            log::info!("Assignees removed : [{}]", login);
        }
        Action::NoOp(reason) => log::info!("{}", reason),
    }

    Ok(())
}
