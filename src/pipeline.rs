use crate::allocator::ArticleAllocator;
use crate::analyzer::recommendation::{Recommender, RecommenderImpl};
use crate::colors;
use crate::matcher;
use crate::model::{Availability, CatalogItem, ResultRecord, SupplierOffer};
use chrono::NaiveDateTime;
use rand::Rng;
use tracing::debug;

/// Fixed connectivity suffix appended to every synthesized display name.
const CONNECTIVITY_SUFFIX: &str = "nano SIM + eSIM";

/// Runs the full reconciliation pass: for each catalog item, select the
/// matching offers, derive the recommendation, synthesize the display name
/// and resolve the article number. One bounded in-memory batch; offers are
/// never mutated.
pub fn reconcile<R: Rng>(
    catalog: &[CatalogItem],
    offers: &[SupplierOffer],
    region_count: usize,
    allocator: &mut ArticleAllocator<R>,
    now: NaiveDateTime,
) -> Vec<ResultRecord> {
    let recommender = RecommenderImpl::new();
    let mut results = Vec::with_capacity(catalog.len());

    for item in catalog {
        let matches = matcher::match_offers(item, offers);
        debug!("{}: {} matched offers", item.external_code, matches.len());

        let rec = recommender.recommend(&matches, region_count, now);

        let english_color = rec
            .color
            .as_deref()
            .and_then(colors::translate)
            .unwrap_or("");
        let display_name = format!(
            "{} ({}) {} {}",
            item.name, english_color, item.storage, CONNECTIVITY_SUFFIX
        );

        let article = match item.article {
            Some(article) => article,
            None => allocator.allocate(),
        };

        results.push(ResultRecord {
            article,
            external_code: item.external_code.clone(),
            display_name,
            status: rec.status,
            in_stock: rec.status == Availability::InStock,
            days_in_stock: rec.days_in_stock,
            cost: item.cost.clone(),
            quantity: item.quantity.clone(),
            sales_month: item.sales_month.clone(),
            sales_week: item.sales_week.clone(),
            last_sale_date: item.last_sale_date.clone(),
            last_sale_price: item.last_sale_price,
            ordered: item.ordered.clone(),
            current_prices: item.current_prices.clone(),
            recommended_prices: rec.region_prices,
            shortlist: rec.shortlist,
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ListingParser, Parser};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn item(name: &str, article: Option<u32>) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            manufacturer: "Apple".to_string(),
            model: String::new(),
            color: "черный".to_string(),
            storage: "128GB".to_string(),
            external_code: "ext-1".to_string(),
            article,
            cost: "51000".to_string(),
            quantity: "3".to_string(),
            sales_month: "7".to_string(),
            sales_week: "2".to_string(),
            last_sale_date: "01.03.2024".to_string(),
            last_sale_price: Some(61990),
            ordered: "1".to_string(),
            current_prices: vec![Some(62000), None],
        }
    }

    fn offers() -> Vec<SupplierOffer> {
        let parser = ListingParser::new();
        vec![
            parser
                .parse("10 iPhone 15 черный JP 11223 65000 есть [15.03.2024 09:30]", "alpha")
                .unwrap(),
            parser.parse("11 iPhone 15 Pro 64200", "beta").unwrap(),
            parser.parse("12 Galaxy S24 55000", "gamma").unwrap(),
        ]
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn assembles_full_record_for_a_matched_item() {
        let catalog = vec![item("iPhone 15", Some(15001))];
        let offers = offers();
        let mut allocator = ArticleAllocator::with_rng(StdRng::seed_from_u64(1));

        let results = reconcile(&catalog, &offers, 2, &mut allocator, now());
        assert_eq!(results.len(), 1);
        let rec = &results[0];

        assert_eq!(rec.article, 15001);
        assert_eq!(rec.display_name, "iPhone 15 (Black) 128GB nano SIM + eSIM");
        assert_eq!(rec.status, Availability::InStock);
        assert!(rec.in_stock);
        assert_eq!(rec.days_in_stock, Some(5));
        // min of the two matched iphone offers is 64200
        assert_eq!(rec.recommended_prices, vec![Some(70620), Some(70620)]);
        assert_eq!(rec.shortlist.len(), 2);
        assert_eq!(rec.shortlist[0].supplier, "alpha");
        assert_eq!(rec.shortlist[1].supplier, "beta");
        // pass-through fields survive untouched
        assert_eq!(rec.cost, "51000");
        assert_eq!(rec.current_prices, vec![Some(62000), None]);
    }

    #[test]
    fn unmatched_item_degrades_and_keeps_empty_parens() {
        let mut catalog_item = item("Redmi Note", Some(15002));
        catalog_item.manufacturer = "Xiaomi".to_string();
        catalog_item.color = String::new();
        let offers: Vec<SupplierOffer> = Vec::new();
        let mut allocator = ArticleAllocator::with_rng(StdRng::seed_from_u64(1));

        let results = reconcile(&[catalog_item], &offers, 2, &mut allocator, now());
        let rec = &results[0];
        assert_eq!(rec.display_name, "Redmi Note () 128GB nano SIM + eSIM");
        assert_eq!(rec.status, Availability::OutOfStock);
        assert!(!rec.in_stock);
        assert_eq!(rec.recommended_prices, vec![None, None]);
        assert!(rec.shortlist.is_empty());
    }

    #[test]
    fn missing_article_is_allocated() {
        let catalog = vec![item("iPhone 15", None)];
        let offers = offers();
        let mut allocator = ArticleAllocator::with_rng(StdRng::seed_from_u64(1));

        let results = reconcile(&catalog, &offers, 2, &mut allocator, now());
        assert!((14000..=14020).contains(&results[0].article));
    }

    #[test]
    fn rerun_with_same_seed_is_identical() {
        let catalog = vec![item("iPhone 15", None), item("iPhone 15", Some(15005))];
        let offers = offers();

        let mut alloc_a = ArticleAllocator::with_rng(StdRng::seed_from_u64(42));
        let mut alloc_b = ArticleAllocator::with_rng(StdRng::seed_from_u64(42));
        let run_a = reconcile(&catalog, &offers, 2, &mut alloc_a, now());
        let run_b = reconcile(&catalog, &offers, 2, &mut alloc_b, now());
        assert_eq!(run_a, run_b);
    }
}
