//! Agent domain.
//!
//! The video agent pairs a multimodal model with optional web search.
//! [`profile::AgentProfile`] captures that pairing as plain data so it can be
//! built per request instead of living in process-wide state.

pub mod profile;
