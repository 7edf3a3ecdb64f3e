//! LLM conversation domain.
//!
//! - [`entities::Conversation`]: the turns exchanged with the model during one analysis
//! - [`entities::Message`]: a single turn made of [`entities::MessagePart`]s
//! - [`response::LlmResponse`]: a structured reply (text and/or tool calls)

pub mod entities;
pub mod response;
