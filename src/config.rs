use std::path::PathBuf;

use crate::cli::Cli;
use crate::errors::NotifyError;

/// Resolved run configuration. Precedence for the webhook URL is
/// explicit flag > `SLACK_WEBHOOK_URL` > error; the repo identifier used in
/// the message header falls back to `GITHUB_REPOSITORY` when the report
/// itself carries none.
#[derive(Debug)]
pub struct NotifyConfig {
    pub alerts_json_path: PathBuf,
    pub max_items: i64,
    pub webhook_url: String,
    pub send_on_empty: bool,
    pub repo_fallback: Option<String>,
}

impl NotifyConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, NotifyError> {
        Self::resolve(
            cli,
            std::env::var("SLACK_WEBHOOK_URL").ok(),
            std::env::var("GITHUB_REPOSITORY").ok(),
        )
    }

    /// Pure resolution over the three configuration layers. Fails fast when
    /// no webhook URL is available; this check runs before any file or
    /// network I/O.
    pub fn resolve(
        cli: &Cli,
        env_webhook: Option<String>,
        env_repo: Option<String>,
    ) -> Result<Self, NotifyError> {
        let webhook_url =
            resolve_webhook_url(cli.webhook_url.as_deref(), env_webhook.as_deref())?;

        Ok(Self {
            alerts_json_path: PathBuf::from(&cli.alerts_json),
            max_items: cli.max_items,
            webhook_url,
            send_on_empty: cli.send_on_empty,
            repo_fallback: env_repo.filter(|r| !r.is_empty()),
        })
    }
}

fn resolve_webhook_url(flag: Option<&str>, env: Option<&str>) -> Result<String, NotifyError> {
    flag.filter(|u| !u.is_empty())
        .or_else(|| env.filter(|u| !u.is_empty()))
        .map(str::to_string)
        .ok_or_else(|| NotifyError::Config("Missing --webhook-url or SLACK_WEBHOOK_URL".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_takes_precedence_over_env() {
        let url = resolve_webhook_url(Some("https://flag"), Some("https://env")).unwrap();
        assert_eq!(url, "https://flag");
    }

    #[test]
    fn env_fills_in_when_flag_absent() {
        let url = resolve_webhook_url(None, Some("https://env")).unwrap();
        assert_eq!(url, "https://env");
    }

    #[test]
    fn empty_flag_falls_through_to_env() {
        let url = resolve_webhook_url(Some(""), Some("https://env")).unwrap();
        assert_eq!(url, "https://env");
    }

    #[test]
    fn missing_everywhere_is_a_config_error() {
        let err = resolve_webhook_url(None, None).unwrap_err();
        assert!(matches!(err, NotifyError::Config(_)));
    }

    #[test]
    fn empty_repo_fallback_is_dropped() {
        use clap::Parser;
        let cli = Cli::parse_from(["polywatch-notify", "--webhook-url", "https://hook"]);
        let config = NotifyConfig::resolve(&cli, None, Some(String::new())).unwrap();
        assert!(config.repo_fallback.is_none());
    }
}
