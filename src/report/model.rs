use serde_json::{Map, Value};

/// Outcome of loading the alerts report file. Read and parse failures all
/// collapse into `Empty`, which behaves exactly like a report with no fields.
pub enum ReportSource {
    Parsed(AlertsReport),
    Empty,
}

impl ReportSource {
    pub fn into_report(self) -> AlertsReport {
        match self {
            ReportSource::Parsed(report) => report,
            ReportSource::Empty => AlertsReport::default(),
        }
    }
}

/// The parsed alerts report. Upstream writes this file loosely, so every
/// accessor states its own fallback instead of assuming shape.
pub struct AlertsReport {
    raw: Value,
}

impl Default for AlertsReport {
    fn default() -> Self {
        Self {
            raw: Value::Object(Map::new()),
        }
    }
}

impl AlertsReport {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The raw alerts array, or an empty slice when absent or not an array.
    pub fn alerts(&self) -> &[Value] {
        self.raw
            .get("alerts")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Count of newly detected alerts; 0 when missing or unconvertible.
    pub fn new_alerts(&self) -> i64 {
        self.raw
            .get("new_alerts")
            .and_then(coerce_i64)
            .unwrap_or(0)
    }

    /// Report generation timestamp as Unix seconds. An absent field means 0
    /// (the epoch), while a present-but-unconvertible value means no
    /// timestamp at all.
    pub fn generated_at(&self) -> Option<i64> {
        match self.raw.get("generated_at") {
            None => Some(0),
            Some(v) => coerce_i64(v),
        }
    }

    pub fn repo(&self) -> Option<&str> {
        nonempty_str(self.raw.get("repo"))
    }

    pub fn run_url(&self) -> Option<&str> {
        nonempty_str(self.raw.get("workflow_run_url"))
    }
}

/// View over one alert entry of the report's alerts array.
pub struct Alert<'a> {
    raw: &'a Value,
}

impl<'a> Alert<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    pub fn score_display(&self) -> String {
        raw_display(self.raw.get("score"))
    }

    pub fn notional(&self) -> Option<&Value> {
        self.raw.get("notional")
    }

    pub fn url_display(&self) -> String {
        raw_display(self.raw.get("url"))
    }

    /// `trade.title` when present and non-empty, else `market.question`,
    /// else empty.
    pub fn title(&self) -> &str {
        self.nested_str("trade", "title")
            .or_else(|| self.nested_str("market", "question"))
            .unwrap_or("")
    }

    fn nested_str(&self, outer: &str, key: &str) -> Option<&str> {
        nonempty_str(self.raw.get(outer)?.get(key))
    }
}

/// Renders a JSON value the way it reads: strings without quotes, everything
/// else (including a missing value) as its canonical JSON text.
pub fn raw_display(v: Option<&Value>) -> String {
    match v {
        None => Value::Null.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn nonempty_str(v: Option<&Value>) -> Option<&str> {
    v.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Best-effort integer conversion: integers pass through, floats truncate,
/// integer-looking strings parse, anything else is rejected.
fn coerce_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
