pub mod budget_filter;
pub mod extract;
pub mod generate;
pub mod images;
pub mod links;
pub mod reconcile;
pub mod recover;
pub mod repair;
pub mod validate;

pub use budget_filter::apply_budget;
pub use extract::{extract_array, EMPTY_ARRAY};
pub use generate::generate_gift_ideas;
pub use images::{attach_images, image_query};
pub use links::{attach_retailer_links, retailer_search_url};
pub use reconcile::reconcile;
pub use recover::{assemble_gifts, recover_gifts};
pub use repair::{parse_candidates, repair, split_fragments};
pub use validate::validate;
