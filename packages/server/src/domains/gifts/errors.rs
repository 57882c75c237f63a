//! Infrastructure failures the pipeline cannot mask.
//!
//! Content problems (unparseable text, missing fields, wrong arity) never
//! become errors; they are absorbed by repair, defaulting, and fallback.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GiftError {
    /// No credentials for the Completion Service
    #[error("Completion service is not configured")]
    MissingCredentials,

    /// Completion Service unreachable or returned a non-success status
    #[error("Completion service error: {0}")]
    Completion(String),
}
