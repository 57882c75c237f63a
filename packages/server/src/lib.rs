// Gift Finder - API Core
//
// This crate provides the backend for the gift finder: a single route that
// prompts a hosted language model for gift ideas and recovers its loosely
// structured answer into a fixed-size list of validated records.
//
// Domain logic lives in domains/gifts; external services sit behind the
// traits in kernel/.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
