pub mod cli;
pub mod config;
pub mod errors;
pub mod format;
pub mod gate;
pub mod report;
pub mod run;
pub mod slack;
