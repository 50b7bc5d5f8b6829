use chrono::{LocalResult, TimeZone, Utc};
use serde_json::Value;

use crate::report::model::{raw_display, Alert, AlertsReport};

const HEADER: &str = "Polymarket Watch update";

/// Assembles the notification body. Alert lines come from the first
/// `max(0, max_items)` raw entries of the alerts array; non-object entries
/// inside that window are skipped without backfilling from later positions.
pub fn build_message(report: &AlertsReport, max_items: i64, repo_fallback: Option<&str>) -> String {
    let alerts = report.alerts();

    let mut header = HEADER.to_string();
    if let Some(repo) = report.repo().or(repo_fallback) {
        header = format!("{header} ({repo})");
    }

    let generated_at = report.generated_at().map(iso_utc).unwrap_or_default();
    let mut lines = vec![
        header,
        format!(
            "generated_at={} new_alerts={} total_alerts={}",
            generated_at,
            report.new_alerts(),
            alerts.len()
        ),
    ];
    if let Some(run_url) = report.run_url() {
        lines.push(format!("run_url={run_url}"));
    }

    let window = usize::try_from(max_items).unwrap_or(0);
    for entry in alerts.iter().take(window) {
        if !entry.is_object() {
            continue;
        }
        lines.push(format_alert_line(&Alert::new(entry)));
    }

    lines.join("\n")
}

fn format_alert_line(alert: &Alert) -> String {
    format!(
        "- score={} notional={} market={} url={}",
        alert.score_display(),
        format_notional(alert.notional()),
        alert.title(),
        alert.url_display()
    )
}

/// US-currency rendering when the value is numeric (or a numeric string),
/// raw text otherwise.
pub fn format_notional(v: Option<&Value>) -> String {
    let numeric = match v {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match numeric {
        Some(n) => format_usd(n),
        None => raw_display(v),
    }
}

fn format_usd(n: f64) -> String {
    if !n.is_finite() {
        return format!("${n}");
    }
    let rendered = format!("{n:.2}");
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac) = digits.split_once('.').unwrap_or((digits, "00"));
    format!("${sign}{}.{frac}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// ISO-8601 UTC rendering of a Unix timestamp; empty when out of range.
pub fn iso_utc(ts: i64) -> String {
    match Utc.timestamp_opt(ts, 0) {
        LocalResult::Single(dt) => dt.to_rfc3339(),
        _ => String::new(),
    }
}
