//! Use cases (application services)

pub mod analyze_video;
pub mod await_processing;
pub mod run_agent;

#[cfg(test)]
pub(crate) mod test_support;
