use crate::{error::Error, exclusion::ExclusionSet, github::github_client::DEFAULT_API_URL};
use std::env;

const TOKEN_INPUT: &str = "token";
const EXCLUDE_INPUT: &str = "exclude";

pub struct Config {
    pub token: String,
    pub exclude: ExclusionSet,
    pub api_url: String,
}

impl Config {
    pub fn load() -> Result<Config, Error> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from action inputs, exposed by the runner as `INPUT_<NAME>`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, Error> {
        let input = |name: &str| {
            lookup(&format!("INPUT_{}", name.to_uppercase()))
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let token = input(TOKEN_INPUT).ok_or(Error::MissingInput(TOKEN_INPUT))?;
        let exclude = ExclusionSet::parse(&input(EXCLUDE_INPUT).unwrap_or_default());
        let api_url = lookup("GITHUB_API_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        Ok(Config {
            token,
            exclude,
            api_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn should_require_token() {
        let result = Config::from_lookup(lookup(&[("INPUT_EXCLUDE", "bob")]));

        assert!(matches!(result, Err(Error::MissingInput("token"))));
    }

    #[test]
    fn should_reject_blank_token() {
        let result = Config::from_lookup(lookup(&[("INPUT_TOKEN", "  ")]));

        assert!(matches!(result, Err(Error::MissingInput("token"))));
    }

    #[test]
    fn should_default_to_no_exclusions() -> Result<(), Error> {
        let config = Config::from_lookup(lookup(&[("INPUT_TOKEN", "secret")]))?;

        assert_eq!(config.token, "secret");
        assert_eq!(config.exclude, ExclusionSet::default());
        assert_eq!(config.api_url, DEFAULT_API_URL);

        Ok(())
    }

    #[test]
    fn should_read_exclusions_and_api_url() -> Result<(), Error> {
        let config = Config::from_lookup(lookup(&[
            ("INPUT_TOKEN", "secret"),
            ("INPUT_EXCLUDE", "bob,dependabot[bot]"),
            ("GITHUB_API_URL", "https://ghe.example.com/api/v3"),
        ]))?;

        assert!(config.exclude.contains("bob"));
        assert!(config.exclude.contains("dependabot[bot]"));
        assert_eq!(config.api_url, "https://ghe.example.com/api/v3");

        Ok(())
    }
}
