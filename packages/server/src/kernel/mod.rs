//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod together_completion;
pub mod traits;
pub mod unsplash_client;

pub use deps::ServerDeps;
pub use test_dependencies::{MockCompletionService, MockImageLookup, TestDependencies};
pub use together_completion::TogetherCompletionService;
pub use traits::*;
pub use unsplash_client::UnsplashClient;
