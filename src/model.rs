// Core structs: CatalogItem, SupplierOffer, Recommendation, ResultRecord
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    InStock,
    OutOfStock,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::InStock => "in stock",
            Availability::OutOfStock => "out of stock",
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the retailer's catalog table. Immutable during a pass;
/// commercial fields are carried through to the result untouched.
/// Optional prices are absent when the source cell was empty or
/// non-numeric. `current_prices` is indexed by the configured region order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub color: String,
    pub storage: String,
    pub external_code: String,
    pub article: Option<u32>,
    pub cost: String,
    pub quantity: String,
    pub sales_month: String,
    pub sales_week: String,
    pub last_sale_date: String,
    pub last_sale_price: Option<u32>,
    pub ordered: String,
    pub current_prices: Vec<Option<u32>>,
}

/// A structured offer extracted from one free-text supplier listing line.
/// Only the parser produces these; a line without a usable name or price
/// never becomes an offer.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierOffer {
    pub article: String,
    pub name: String,
    pub price: u32,
    pub status: Availability,
    pub color: Option<String>,
    pub seen_at: Option<NaiveDateTime>,
    pub supplier: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierQuote {
    pub supplier: String,
    pub price: u32,
}

/// Derived output for one catalog item. `region_prices` is indexed by the
/// configured region order; `color` is the raw (untranslated) color of the
/// representative offer.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub region_prices: Vec<Option<u32>>,
    pub status: Availability,
    pub color: Option<String>,
    pub days_in_stock: Option<i64>,
    pub shortlist: Vec<SupplierQuote>,
}

/// Final flattened row, one per catalog item, in export shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub article: u32,
    pub external_code: String,
    pub display_name: String,
    pub status: Availability,
    pub in_stock: bool,
    pub days_in_stock: Option<i64>,
    pub cost: String,
    pub quantity: String,
    pub sales_month: String,
    pub sales_week: String,
    pub last_sale_date: String,
    pub last_sale_price: Option<u32>,
    pub ordered: String,
    pub current_prices: Vec<Option<u32>>,
    pub recommended_prices: Vec<Option<u32>>,
    pub shortlist: Vec<SupplierQuote>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("listing line is empty")]
    Empty,
    #[error("listing line does not start with a numeric article code")]
    MissingArticle,
    #[error("listing line has no name segment")]
    MissingName,
    #[error("no usable 5-digit price token")]
    MissingPrice,
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing required column: {0}")]
    MissingColumn(String),
}
