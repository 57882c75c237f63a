use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domains::gifts::models::GiftRecord;
use crate::kernel::BaseImageLookup;

/// Tokens kept in an image query
const MAX_QUERY_TOKENS: usize = 3;

/// Short photo-search query from a search term: lower-cased, punctuation
/// stripped, tokens of two characters or fewer dropped.
pub fn image_query(search_term: &str) -> String {
    let cleaned: String = search_term
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .take(MAX_QUERY_TOKENS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decorate every record with an image, looked up concurrently.
///
/// Never fails and never changes the record count: a missing lookup service,
/// an empty query, an empty result, or a lookup error all map to `placeholder`.
pub async fn attach_images(
    gifts: Vec<GiftRecord>,
    lookup: Option<&Arc<dyn BaseImageLookup>>,
    placeholder: &str,
) -> Vec<GiftRecord> {
    let Some(lookup) = lookup else {
        return gifts
            .into_iter()
            .map(|gift| with_image(gift, placeholder.to_string()))
            .collect();
    };

    let lookups = gifts.into_iter().map(|gift| async move {
        let query = image_query(&gift.search_term);
        if query.is_empty() {
            return with_image(gift, placeholder.to_string());
        }

        let url = match lookup.find_image(&query).await {
            Ok(Some(url)) if !url.trim().is_empty() => url,
            Ok(_) => {
                debug!(query = %query, "No image found, using placeholder");
                placeholder.to_string()
            }
            Err(e) => {
                warn!(error = %e, query = %query, "Image lookup failed, using placeholder");
                placeholder.to_string()
            }
        };
        with_image(gift, url)
    });

    join_all(lookups).await
}

fn with_image(mut gift: GiftRecord, url: String) -> GiftRecord {
    gift.image_url = Some(url);
    gift
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::MockImageLookup;

    fn gift(search_term: &str) -> GiftRecord {
        GiftRecord::new("Gift", "", search_term, &["$10"], &[], &[])
    }

    #[test]
    fn test_image_query_normalizes() {
        assert_eq!(image_query("Wireless Meat Thermometer for Grilling"), "wireless meat thermometer");
        assert_eq!(image_query("BBQ Tool-Set, 20 pc!"), "bbq tool set");
        assert_eq!(image_query("A TV"), "");
    }

    #[tokio::test]
    async fn test_no_lookup_uses_placeholder() {
        let gifts = attach_images(vec![gift("golf net"), gift("coffee mug")], None, "/p.jpg").await;

        assert_eq!(gifts.len(), 2);
        assert!(gifts.iter().all(|g| g.image_url.as_deref() == Some("/p.jpg")));
    }

    #[tokio::test]
    async fn test_lookup_results_are_attached() {
        let mock = Arc::new(MockImageLookup::new().with_url("https://img/1.jpg"));
        let lookup: Arc<dyn BaseImageLookup> = mock.clone();

        let gifts = attach_images(vec![gift("golf practice net")], Some(&lookup), "/p.jpg").await;

        assert_eq!(gifts[0].image_url.as_deref(), Some("https://img/1.jpg"));
        assert_eq!(mock.calls(), vec!["golf practice net"]);
    }

    #[tokio::test]
    async fn test_failing_lookup_maps_to_placeholder() {
        let lookup: Arc<dyn BaseImageLookup> = Arc::new(MockImageLookup::failing());
        let gifts: Vec<GiftRecord> = (0..6).map(|_| gift("coffee station")).collect();

        let gifts = attach_images(gifts, Some(&lookup), "/p.jpg").await;

        assert_eq!(gifts.len(), 6);
        assert!(gifts.iter().all(|g| g.image_url.as_deref() == Some("/p.jpg")));
    }

    #[tokio::test]
    async fn test_empty_query_skips_lookup() {
        let mock = Arc::new(MockImageLookup::new());
        let lookup: Arc<dyn BaseImageLookup> = mock.clone();

        let gifts = attach_images(vec![gift("a b")], Some(&lookup), "/p.jpg").await;

        assert_eq!(gifts[0].image_url.as_deref(), Some("/p.jpg"));
        assert_eq!(mock.call_count(), 0);
    }
}
