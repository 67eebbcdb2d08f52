use crate::model::{Availability, Recommendation, SupplierOffer, SupplierQuote};
use chrono::NaiveDateTime;

/// Fixed resale markup on top of the cheapest matched offer. Uniform across
/// regions for now.
const MARKUP: f64 = 1.10;

/// How many candidate suppliers are exposed per item.
const SHORTLIST_SLOTS: usize = 3;

/// Trait defining the interface for a price recommender.
pub trait Recommender {
    fn recommend(
        &self,
        matches: &[&SupplierOffer],
        region_count: usize,
        now: NaiveDateTime,
    ) -> Recommendation;
}

/// Implementation of the price recommender.
pub struct RecommenderImpl;

impl RecommenderImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Recommender for RecommenderImpl {
    /// Derives the recommendation for one catalog item from its match set.
    ///
    /// The recommended price is the minimum price across all matched offers
    /// plus the markup; status, color and timestamp come from the first
    /// offer in input order, not the cheapest one. The shortlist is the
    /// first three offers in input order. An empty match set degrades to
    /// absent prices, out-of-stock and an empty shortlist.
    fn recommend(
        &self,
        matches: &[&SupplierOffer],
        region_count: usize,
        now: NaiveDateTime,
    ) -> Recommendation {
        let Some(first) = matches.first() else {
            return Recommendation {
                region_prices: vec![None; region_count],
                status: Availability::OutOfStock,
                color: None,
                days_in_stock: None,
                shortlist: Vec::new(),
            };
        };

        let min_price = matches
            .iter()
            .map(|offer| offer.price)
            .min()
            .unwrap_or(first.price);
        let recommended = (min_price as f64 * MARKUP).round() as u32;

        let days_in_stock = match (first.status, first.seen_at) {
            (Availability::InStock, Some(seen_at)) => Some((now - seen_at).num_days()),
            _ => None,
        };

        Recommendation {
            region_prices: vec![Some(recommended); region_count],
            status: first.status,
            color: first.color.clone(),
            days_in_stock,
            shortlist: matches
                .iter()
                .take(SHORTLIST_SLOTS)
                .map(|offer| SupplierQuote {
                    supplier: offer.supplier.clone(),
                    price: offer.price,
                })
                .collect(),
        }
    }
}
