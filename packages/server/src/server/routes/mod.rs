// HTTP routes
pub mod gifts;
pub mod health;

pub use gifts::*;
pub use health::*;
