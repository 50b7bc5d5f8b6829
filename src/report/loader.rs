use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::model::{AlertsReport, ReportSource};

/// Reads and parses the alerts report. A missing, unreadable, or malformed
/// file is not an error here; the caller sees `Empty` and proceeds as if the
/// report had no alerts.
pub async fn load_report(path: &Path) -> ReportSource {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), "alerts file not readable: {}", e);
            return ReportSource::Empty;
        }
    };

    match serde_json::from_str::<Value>(&content) {
        Ok(value) => ReportSource::Parsed(AlertsReport::new(value)),
        Err(e) => {
            debug!(path = %path.display(), "alerts file is not valid JSON: {}", e);
            ReportSource::Empty
        }
    }
}
