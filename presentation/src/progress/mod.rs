//! Progress reporters for the analysis stages

pub mod reporter;

pub use reporter::{LogProgress, ProgressReporter, SimpleProgress};
