pub mod budget;
pub mod gift;
pub mod request;
pub mod settings;

pub use budget::{max_price, Budget};
pub use gift::{GiftRecord, FALLBACK_PRICE_RANGE};
pub use request::{GiftRequest, GiftResponse, DEFAULT_BUDGET, DEFAULT_INTERESTS, DEFAULT_OCCASION};
pub use settings::PipelineSettings;
