pub mod loader;
pub mod model;

pub use loader::load_report;
pub use model::{Alert, AlertsReport, ReportSource};
