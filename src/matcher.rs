use crate::model::{CatalogItem, SupplierOffer};
use std::collections::HashSet;

/// Lower-cases and whitespace-splits every input, unioning the words.
pub fn build_tokens<'a, I>(parts: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    parts
        .into_iter()
        .flat_map(|p| p.split_whitespace())
        .map(|w| w.to_lowercase())
        .collect()
}

pub fn item_tokens(item: &CatalogItem) -> HashSet<String> {
    build_tokens([
        item.name.as_str(),
        item.manufacturer.as_str(),
        item.model.as_str(),
        item.color.as_str(),
        item.storage.as_str(),
    ])
}

pub fn offer_tokens(offer: &SupplierOffer) -> HashSet<String> {
    build_tokens([offer.name.as_str()])
}

/// Any single shared word is a match. Deliberately coarse: recall over
/// precision, the recommender only leans on the minimum matched price.
pub fn tokens_match(a: &HashSet<String>, b: &HashSet<String>) -> bool {
    !a.is_disjoint(b)
}

/// Scans the whole offer table and returns the offers sharing at least one
/// token with the item, preserving supplier input order.
pub fn match_offers<'a>(item: &CatalogItem, offers: &'a [SupplierOffer]) -> Vec<&'a SupplierOffer> {
    let item_set = item_tokens(item);
    offers
        .iter()
        .filter(|offer| tokens_match(&item_set, &offer_tokens(offer)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Availability;

    fn item(name: &str, manufacturer: &str, model: &str) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            manufacturer: manufacturer.to_string(),
            model: model.to_string(),
            color: String::new(),
            storage: String::new(),
            external_code: "x1".to_string(),
            article: None,
            cost: String::new(),
            quantity: String::new(),
            sales_month: String::new(),
            sales_week: String::new(),
            last_sale_date: String::new(),
            last_sale_price: None,
            ordered: String::new(),
            current_prices: Vec::new(),
        }
    }

    fn offer(name: &str, supplier: &str) -> SupplierOffer {
        SupplierOffer {
            article: "1".to_string(),
            name: name.to_string(),
            price: 10000,
            status: Availability::OutOfStock,
            color: None,
            seen_at: None,
            supplier: supplier.to_string(),
        }
    }

    #[test]
    fn shared_word_matches() {
        let a = build_tokens(["iPhone 15 Black"]);
        let b = build_tokens(["iphone 15 128gb"]);
        assert!(tokens_match(&a, &b));
    }

    #[test]
    fn disjoint_sets_do_not_match() {
        let a = build_tokens(["iPhone 15"]);
        let b = build_tokens(["Galaxy S24"]);
        assert!(!tokens_match(&a, &b));
    }

    #[test]
    fn tokens_are_case_insensitive_and_unioned() {
        let item = item("iPhone 15", "Apple", "A3090");
        let tokens = item_tokens(&item);
        assert!(tokens.contains("iphone"));
        assert!(tokens.contains("apple"));
        assert!(tokens.contains("a3090"));
    }

    #[test]
    fn match_set_preserves_input_order() {
        let item = item("iPhone 15", "Apple", "");
        let offers = vec![
            offer("iphone 15 pro", "b-trade"),
            offer("galaxy s24", "c-mobile"),
            offer("apple watch", "a-phone"),
        ];
        let matched = match_offers(&item, &offers);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].supplier, "b-trade");
        assert_eq!(matched[1].supplier, "a-phone");
    }
}
