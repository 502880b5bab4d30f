use crate::error::Error;
use serde::Deserialize;
use std::{env, fmt, path::Path};

const ASSIGNED: &str = "assigned";
const UNASSIGNED: &str = "unassigned";
const REVIEW_REQUESTED: &str = "review_requested";
const REVIEW_REQUEST_REMOVED: &str = "review_request_removed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Repository {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parses the `owner/name` form used by `GITHUB_REPOSITORY`.
    pub fn parse(full_name: &str) -> Option<Repository> {
        match full_name.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
                Some(Repository::new(owner, name))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A single membership change on one side of the pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    AssigneeAdded(String),
    AssigneeRemoved(String),
    ReviewerRequested(String),
    ReviewerRequestRemoved(String),
}

impl Event {
    pub fn login(&self) -> &str {
        match self {
            Event::AssigneeAdded(login)
            | Event::AssigneeRemoved(login)
            | Event::ReviewerRequested(login)
            | Event::ReviewerRequestRemoved(login) => login,
        }
    }
}

/// Everything the run needs to know about its trigger, read once up front.
#[derive(Debug, Clone)]
pub struct Context {
    pub repository: Repository,
    pub action: String,
    pub pull_number: Option<u64>,
    pub issue_number: Option<u64>,
    pub event: Option<Event>,
}

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    action: Option<String>,
    pull_request: Option<Numbered>,
    issue: Option<Numbered>,
    assignee: Option<User>,
    requested_reviewer: Option<User>,
    requested_team: Option<Team>,
    repository: Option<PayloadRepository>,
}

#[derive(Debug, Deserialize)]
struct Numbered {
    number: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct User {
    login: String,
}

#[derive(Debug, Deserialize)]
struct Team {
    slug: String,
}

#[derive(Debug, Deserialize)]
struct PayloadRepository {
    name: String,
    owner: User,
}

impl Context {
    /// Loads the context from the runner environment.
    pub fn load() -> Result<Context, Error> {
        let path = env::var("GITHUB_EVENT_PATH").map_err(|_| Error::MissingEventPath)?;
        let repository = env::var("GITHUB_REPOSITORY").ok();

        Context::from_file(path, repository.as_deref())
    }

    pub fn from_file(path: impl AsRef<Path>, repository: Option<&str>) -> Result<Context, Error> {
        let path = path.as_ref();
        let payload = std::fs::read_to_string(path).map_err(|source| Error::ReadEventPayload {
            path: path.display().to_string(),
            source,
        })?;

        Context::from_payload(&payload, repository)
    }

    pub fn from_payload(payload: &str, repository: Option<&str>) -> Result<Context, Error> {
        let payload: Payload = serde_json::from_str(payload).map_err(Error::ParseEventPayload)?;
        log::debug!("event payload: {:#?}", payload);

        let repository = repository
            .and_then(Repository::parse)
            .or_else(|| {
                payload
                    .repository
                    .as_ref()
                    .map(|repo| Repository::new(&repo.owner.login, &repo.name))
            })
            .ok_or(Error::MissingRepository)?;

        let action = payload.action.clone().unwrap_or_default();
        let pull_number = payload.pull_request.as_ref().and_then(|pr| pr.number);
        let issue_number = payload
            .issue
            .as_ref()
            .and_then(|issue| issue.number)
            .or(pull_number);

        let event = parse_event(&action, &payload)?;

        Ok(Context {
            repository,
            action,
            pull_number,
            issue_number,
            event,
        })
    }
}

fn parse_event(action: &str, payload: &Payload) -> Result<Option<Event>, Error> {
    let subject = match action {
        ASSIGNED | UNASSIGNED => &payload.assignee,
        REVIEW_REQUESTED | REVIEW_REQUEST_REMOVED => &payload.requested_reviewer,
        _ => return Ok(None),
    };

    let login = match (subject, &payload.requested_team) {
        (Some(user), _) => user.login.to_owned(),
        // Team review requests have no user to mirror.
        (None, Some(team)) if action != ASSIGNED && action != UNASSIGNED => {
            log::info!("Ignoring team review request for {}", team.slug);
            return Ok(None);
        }
        (None, None) => {
            return Err(Error::MissingSubject {
                action: action.to_owned(),
            })
        }
    };

    let event = match action {
        ASSIGNED => Event::AssigneeAdded(login),
        UNASSIGNED => Event::AssigneeRemoved(login),
        REVIEW_REQUESTED => Event::ReviewerRequested(login),
        _ => Event::ReviewerRequestRemoved(login),
    };

    Ok(Some(event))
}
