//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: Gemini models that accept video input
//! - [`query::AnalysisQuery`]: a validated question about a video
//! - [`credential::ApiKey`]: the provider credential, redacted in logs
//! - [`error::DomainError`]: domain-level errors

pub mod credential;
pub mod error;
pub mod model;
pub mod query;
