//! # IO Module
//!
//! The adapter layer between the browser UI and the domain: the REST API the
//! frontend calls, and the outbound Gemini client the assistant uses.
//!
//! Handlers translate shared DTOs into domain commands, call a service, and
//! translate the result back. Domain errors become HTTP status codes here and
//! nowhere else.

pub mod gemini;
pub mod rest;

pub use gemini::GeminiClient;
pub use rest::*;
