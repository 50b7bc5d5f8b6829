use clap::Parser;

#[derive(Parser)]
#[command(
    name = "polywatch-notify",
    version,
    about = "Post a Polymarket Watch alerts report to a Slack webhook"
)]
pub struct Cli {
    /// Path to the alerts report JSON file
    #[arg(long, default_value = "docs/alerts.json")]
    pub alerts_json: String,

    /// Maximum number of alert lines to include in the message
    #[arg(long, default_value_t = 10)]
    pub max_items: i64,

    /// Slack incoming-webhook URL (or use SLACK_WEBHOOK_URL)
    #[arg(long)]
    pub webhook_url: Option<String>,

    /// Send a message even when the report contains no alerts
    #[arg(long)]
    pub send_on_empty: bool,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
