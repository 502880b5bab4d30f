use itertools::Itertools;
use std::{collections::BTreeSet, fmt};

/// Logins that are never mirrored from one set to the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    /// Parses a comma separated input. Entries are trimmed and blanks dropped.
    pub fn parse(input: &str) -> Self {
        ExclusionSet(
            input
                .split(',')
                .map(str::trim)
                .filter(|login| !login.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Returns a copy that also excludes `login`.
    pub fn with(&self, login: &str) -> Self {
        let mut logins = self.0.clone();
        logins.insert(login.to_owned());
        ExclusionSet(logins)
    }

    pub fn contains(&self, login: &str) -> bool {
        self.0.contains(login)
    }
}

impl fmt::Display for ExclusionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_empty_input() {
        assert_eq!(ExclusionSet::parse(""), ExclusionSet::default());
        assert_eq!(ExclusionSet::parse(" , ,").to_string(), "[]");
        assert!(!ExclusionSet::parse("").contains(""));
    }

    #[test]
    fn should_trim_entries() {
        let exclusions = ExclusionSet::parse("bob, renovate-bot ,");

        assert!(exclusions.contains("bob"));
        assert!(exclusions.contains("renovate-bot"));
        assert_eq!(exclusions.to_string(), "[bob,renovate-bot]");
    }

    #[test]
    fn should_add_author_idempotently() {
        let configured = ExclusionSet::parse("bob");

        let once = configured.with("alice");
        let twice = once.with("alice");

        assert_eq!(once, twice);
        assert_eq!(twice.to_string(), "[alice,bob]");
        assert!(!configured.contains("alice"));
    }
}
