//! Video domain.
//!
//! - [`format::VideoFormat`]: container formats accepted for upload
//! - [`remote::RemoteVideo`]: the provider's handle to an uploaded video
//! - [`remote::RemoteFileState`]: readiness of that handle

pub mod format;
pub mod remote;
