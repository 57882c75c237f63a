use crate::domains::gifts::models::GiftRecord;

/// Retailer search URL for a search term
pub fn retailer_search_url(base: &str, search_term: &str) -> String {
    format!("{}{}", base, urlencoding::encode(search_term.trim()))
}

/// Attach a retailer search link to every record that has a search term
pub fn attach_retailer_links(gifts: Vec<GiftRecord>, base: &str) -> Vec<GiftRecord> {
    gifts
        .into_iter()
        .map(|mut gift| {
            if !gift.search_term.trim().is_empty() {
                gift.retailer_url = Some(retailer_search_url(base, &gift.search_term));
            }
            gift
        })
        .collect()
}
