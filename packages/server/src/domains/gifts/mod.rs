//! Gift ideas domain: prompt a language model, then recover its loosely
//! structured answer into a fixed-size list of validated gift records.

pub mod activities;
pub mod errors;
pub mod fallback;
pub mod models;
pub mod prompts;

pub use activities::{assemble_gifts, generate_gift_ideas, recover_gifts};
pub use errors::GiftError;
pub use fallback::{fallback_pool, FallbackPolicy};
pub use models::{Budget, GiftRecord, GiftRequest, GiftResponse, PipelineSettings};
