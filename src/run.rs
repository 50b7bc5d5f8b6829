use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::NotifyConfig;
use crate::errors::NotifyError;
use crate::{format, gate, report, slack};

/// Full pipeline: resolve config, load the report, gate, format, post.
/// The webhook URL check is fatal and runs before any file I/O.
pub async fn run(cli: Cli) -> Result<(), NotifyError> {
    let config = NotifyConfig::from_cli(&cli)?;

    let loaded = report::load_report(&config.alerts_json_path).await.into_report();
    let new_alerts = loaded.new_alerts();
    let total_alerts = loaded.alerts().len();

    if !gate::should_send(total_alerts == 0, new_alerts, config.send_on_empty) {
        info!(new_alerts, total_alerts, "nothing to report, skipping notification");
        return Ok(());
    }

    let text = format::build_message(&loaded, config.max_items, config.repo_fallback.as_deref());
    debug!(chars = text.len(), "posting Slack message");

    let client = slack::build_client()?;
    slack::post_message(&client, &config.webhook_url, &text).await?;

    info!(new_alerts, total_alerts, "Slack notification sent");
    Ok(())
}
