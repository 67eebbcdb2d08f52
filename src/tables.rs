// Tabular boundary: CSV catalog/supplier ingestion and result export.
use crate::model::{CatalogItem, ResultRecord, SupplierOffer, TableError};
use crate::parser::{ListingParser, Parser};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::{debug, warn};

fn column(headers: &StringRecord, name: &str) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| TableError::MissingColumn(name.to_string()))
}

fn optional_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn field(record: &StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| record.get(i))
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Lenient price coercion: empty or non-numeric cells become absent,
/// numeric ones are rounded to whole currency units.
fn parse_price(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().map(|v| v.round() as u32)
}

/// Reads the retailer catalog. The descriptive columns are required; the
/// commercial pass-through columns and the per-region price columns are
/// tolerated when missing.
pub fn read_catalog(path: &str, regions: &[String]) -> Result<Vec<CatalogItem>, TableError> {
    let mut reader = ReaderBuilder::new().from_path(path)?;
    let headers = reader.headers()?.clone();

    let name = column(&headers, "name")?;
    let manufacturer = column(&headers, "manufacturer")?;
    let model = column(&headers, "model")?;
    let color = column(&headers, "color")?;
    let storage = column(&headers, "storage")?;
    let external_code = column(&headers, "external_code")?;

    let article = optional_column(&headers, "article");
    let cost = optional_column(&headers, "cost");
    let quantity = optional_column(&headers, "quantity");
    let sales_month = optional_column(&headers, "sales_30d");
    let sales_week = optional_column(&headers, "sales_week");
    let last_sale_date = optional_column(&headers, "last_sale_date");
    let last_sale_price = optional_column(&headers, "last_sale_price");
    let ordered = optional_column(&headers, "ordered");
    let region_columns: Vec<Option<usize>> = regions
        .iter()
        .map(|region| optional_column(&headers, &format!("price: {region}")))
        .collect();

    let mut items = Vec::new();
    for record in reader.records() {
        let record = record?;
        items.push(CatalogItem {
            name: field(&record, Some(name)),
            manufacturer: field(&record, Some(manufacturer)),
            model: field(&record, Some(model)),
            color: field(&record, Some(color)),
            storage: field(&record, Some(storage)),
            external_code: field(&record, Some(external_code)),
            article: field(&record, article).parse().ok(),
            cost: field(&record, cost),
            quantity: field(&record, quantity),
            sales_month: field(&record, sales_month),
            sales_week: field(&record, sales_week),
            last_sale_date: field(&record, last_sale_date),
            last_sale_price: parse_price(&field(&record, last_sale_price)),
            ordered: field(&record, ordered),
            current_prices: region_columns
                .iter()
                .map(|idx| parse_price(&field(&record, *idx)))
                .collect(),
        });
    }
    Ok(items)
}

/// Reads the supplier table and runs every listing line through the parser.
/// Unparsable lines are dropped and counted, never fatal.
pub fn read_offers(path: &str, parser: &ListingParser) -> Result<Vec<SupplierOffer>, TableError> {
    let mut reader = ReaderBuilder::new().from_path(path)?;
    let headers = reader.headers()?.clone();
    let listing = column(&headers, "listing")?;
    let supplier = column(&headers, "supplier")?;

    let mut offers = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record?;
        let raw = record.get(listing).unwrap_or("");
        let supplier_id = record.get(supplier).unwrap_or("").trim();
        match parser.parse(raw, supplier_id) {
            Ok(offer) => offers.push(offer),
            Err(e) => {
                dropped += 1;
                debug!("dropped listing line: {e}");
            }
        }
    }
    if dropped > 0 {
        warn!("{dropped} supplier listing lines could not be parsed");
    }
    Ok(offers)
}

fn format_price(price: &Option<u32>) -> String {
    price.map(|p| p.to_string()).unwrap_or_default()
}

/// Writes the result table with its fixed column order: identity and
/// status columns, pass-through commercial fields, per-region current and
/// recommended prices, then three supplier shortlist pairs.
pub fn write_results(
    path: &str,
    results: &[ResultRecord],
    regions: &[String],
) -> Result<(), TableError> {
    let mut writer = WriterBuilder::new().from_path(path)?;

    let mut header: Vec<String> = [
        "article",
        "external_code",
        "name",
        "status",
        "in_stock",
        "days_in_stock",
        "cost",
        "quantity",
        "sales_30d",
        "sales_week",
        "last_sale_date",
        "last_sale_price",
        "ordered",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for region in regions {
        header.push(format!("price: {region}"));
    }
    for region in regions {
        header.push(format!("recommended: {region}"));
    }
    for slot in 1..=3 {
        header.push(format!("supplier {slot}"));
        header.push(format!("supplier {slot} price"));
    }
    writer.write_record(&header)?;

    for result in results {
        let mut row = vec![
            result.article.to_string(),
            result.external_code.clone(),
            result.display_name.clone(),
            result.status.to_string(),
            if result.in_stock { "yes" } else { "no" }.to_string(),
            result
                .days_in_stock
                .map(|d| d.to_string())
                .unwrap_or_default(),
            result.cost.clone(),
            result.quantity.clone(),
            result.sales_month.clone(),
            result.sales_week.clone(),
            result.last_sale_date.clone(),
            format_price(&result.last_sale_price),
            result.ordered.clone(),
        ];
        for price in &result.current_prices {
            row.push(format_price(price));
        }
        for price in &result.recommended_prices {
            row.push(format_price(price));
        }
        for slot in 0..3 {
            match result.shortlist.get(slot) {
                Some(quote) => {
                    row.push(quote.supplier.clone());
                    row.push(quote.price.to_string());
                }
                None => {
                    row.push(String::new());
                    row.push(String::new());
                }
            }
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
