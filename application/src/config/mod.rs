//! Application-level configuration.
//!
//! - [`PollPolicy`]: how long and how often to wait for the provider to
//!   finish processing an uploaded video

pub mod poll_policy;

pub use poll_policy::PollPolicy;
