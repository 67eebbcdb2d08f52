// Supplier listing-line parsing
use crate::model::{Availability, ParseError, SupplierOffer};
use chrono::NaiveDateTime;
use regex::Regex;

const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";

pub trait Parser {
    fn parse(&self, raw: &str, supplier: &str) -> Result<SupplierOffer, ParseError>;
}

pub struct ListingParser {
    color_re: Regex,
    timestamp_re: Regex,
}

impl ListingParser {
    pub fn new() -> Self {
        Self {
            color_re: Regex::new(r"(?i)\b(\w+)\s+jp\s+\d{5}\b").unwrap(),
            timestamp_re: Regex::new(r"\[(\d{2}\.\d{2}\.\d{4}\s+\d{2}:\d{2})\]").unwrap(),
        }
    }

    /// Returns the calendar-latest bracketed timestamp in the line, if any.
    fn latest_timestamp(&self, raw: &str) -> Option<NaiveDateTime> {
        self.timestamp_re
            .captures_iter(raw)
            .filter_map(|c| NaiveDateTime::parse_from_str(&c[1], TIMESTAMP_FORMAT).ok())
            .max()
    }

    fn extract_color(&self, name: &str) -> Option<String> {
        self.color_re
            .captures(name)
            .map(|c| c[1].to_lowercase())
    }
}

impl Parser for ListingParser {
    /// Parses one raw listing line into a structured offer.
    ///
    /// Expected shape: `<article> <name...> <5-digit price> [annotation...]`.
    /// A `JP <5-digit>` pair inside the name is a color marker, never the
    /// price. Any annotation after the price means the offer is in stock.
    fn parse(&self, raw: &str, supplier: &str) -> Result<SupplierOffer, ParseError> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let (article, rest) = tokens.split_first().ok_or(ParseError::Empty)?;
        if !article.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::MissingArticle);
        }

        let mut price = None;
        for (i, tok) in rest.iter().enumerate() {
            if tok.len() == 5 && tok.bytes().all(|b| b.is_ascii_digit()) {
                if i > 0 && rest[i - 1].eq_ignore_ascii_case("jp") {
                    continue; // color code, not a price
                }
                if let Ok(p) = tok.parse::<u32>() {
                    price = Some((i, p));
                    break;
                }
            }
        }
        let (price_idx, price) = price.ok_or(ParseError::MissingPrice)?;
        if price_idx == 0 {
            return Err(ParseError::MissingName);
        }

        let name = rest[..price_idx].join(" ");
        let status = if price_idx + 1 < rest.len() {
            Availability::InStock
        } else {
            Availability::OutOfStock
        };

        Ok(SupplierOffer {
            article: article.to_string(),
            name: name.clone(),
            price,
            status,
            color: self.extract_color(&name),
            seen_at: self.latest_timestamp(raw),
            supplier: supplier.to_string(),
        })
    }
}
