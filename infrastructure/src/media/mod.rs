//! Local staging of uploaded videos

mod staging;

pub use staging::{StagingError, stage_bytes, stage_file};
