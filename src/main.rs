mod config;
mod context;
mod error;
mod exclusion;
mod github;
mod http;
mod logger;
mod pull_request;
mod reconciler;
mod sync;

use anyhow::{Context as _, Result};
use config::Config;
use context::Context;
use github::github_client::GithubClient;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = logger::init() {
        eprintln!("Cannot initialise logger: {}", err);
    }

    match execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            println!("{}", workflow_error(&format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}

async fn execute() -> Result<()> {
    let config = Config::load()?;
    let context = Context::load().context("Cannot load the workflow context")?;

    let client = GithubClient::new(&config.token, &config.api_url);

    let action = sync::run(&context, &config.exclude, &client).await?;
    log::debug!("finished: {}", action);

    Ok(())
}

/// Formats an `::error::` workflow command, which marks the step as failed.
fn workflow_error(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");

    format!("::error::{}", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_single_line_error() {
        assert_eq!(
            workflow_error("Pull request number is missing from context"),
            "::error::Pull request number is missing from context"
        );
    }

    #[test]
    fn should_escape_multi_line_error() {
        let message = "Cannot fetch pull request #7: <html>\r\n<h1>502</h1>\n100% down</html> (502)";

        assert_eq!(
            workflow_error(message),
            "::error::Cannot fetch pull request #7: <html>%0D%0A<h1>502</h1>%0A100%25 down</html> (502)"
        );
    }
}
