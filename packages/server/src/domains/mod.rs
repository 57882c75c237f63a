// Business domains
pub mod gifts;
