use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

use crate::errors::NotifyError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Serialize)]
struct SlackPayload<'a> {
    text: &'a str,
}

pub fn build_client() -> Result<Client, NotifyError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| NotifyError::Network(format!("Failed to build HTTP client: {e}")))
}

/// Posts `{"text": ...}` to the webhook. One attempt, no retry; any transport
/// failure or non-2xx status is surfaced to the caller.
pub async fn post_message(
    client: &Client,
    webhook_url: &str,
    text: &str,
) -> Result<(), NotifyError> {
    let resp = client
        .post(webhook_url)
        .header("Content-Type", "application/json")
        .json(&SlackPayload { text })
        .send()
        .await
        .map_err(|e| NotifyError::Network(format!("Slack webhook request failed: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(NotifyError::Network(format!(
            "Slack webhook returned status {status}"
        )));
    }

    // Drain the acknowledgement body; Slack replies with a short "ok".
    resp.bytes()
        .await
        .map_err(|e| NotifyError::Network(format!("Failed to read webhook response: {e}")))?;

    Ok(())
}
