//! Recovers quote metadata from text scraped out of a PDF.
//!
//! Expects lines shaped like the ones this tool draws:
//! - `Preventivo per <cliente>`
//! - `Data: YYYY-MM-DD`
//! - `Totale: € N,NN`
//!
//! Each pattern is searched independently over the whole text. A pattern that
//! doesn't match falls back to a default, so extraction never fails.

pub mod pdf;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

pub use pdf::{LopdfTextSource, PdfTextSource};

pub const DEFAULT_TOTAL: &str = "0,00";

static CLIENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Preventivo per\s+(.+)").expect("valid client regex"));
static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Data:\s*([0-9]{4}-[0-9]{2}-[0-9]{2})").expect("valid date regex")
});
static TOTAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Totale:\s*€\s*([0-9]+,[0-9]{2})").expect("valid total regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteMetadata {
    pub cliente: String,
    pub data: String,
    pub totale: String,
}

fn first_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract client, date and total from `text`, using `today` when no date is found.
pub fn parse_quote_text(text: &str, today: NaiveDate) -> QuoteMetadata {
    let cliente = first_capture(&CLIENT, text)
        .map(|c| c.trim().to_string())
        .unwrap_or_default();

    let data = first_capture(&DATE, text)
        .map(str::to_string)
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());

    let totale = first_capture(&TOTAL, text)
        .unwrap_or(DEFAULT_TOTAL)
        .to_string();

    log::debug!("extracted cliente={cliente:?} data={data} totale={totale}");

    QuoteMetadata {
        cliente,
        data,
        totale,
    }
}
