//! Deterministic quote logic for the talks.
//!
//! Quotes are seeded from the symbol so every run of a talk shows the same
//! numbers, and each quote can be shaped two ways: the ambiguous payload
//! that motivates the talk, and the annotated payload that resolves it.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde_json::{json, Value};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::schema::{FieldKind, FieldSpec, PayloadSchema, SchemaError};

/// Errors raised by the quote demo logic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("invalid price unit '{value}', expected one of dollars, cents")]
    InvalidPriceUnit { value: String },
}

/// Unit a price figure is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceUnit {
    Dollars,
    Cents,
}

impl PriceUnit {
    pub const ALL: [Self; 2] = [Self::Dollars, Self::Cents];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dollars => "dollars",
            Self::Cents => "cents",
        }
    }

    /// Convert an amount denominated in `self` into `target`.
    pub fn convert(self, amount: f64, target: Self) -> f64 {
        match (self, target) {
            (Self::Dollars, Self::Cents) => amount * 100.0,
            (Self::Cents, Self::Dollars) => amount / 100.0,
            _ => amount,
        }
    }
}

impl Display for PriceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceUnit {
    type Err = QuoteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dollars" => Ok(Self::Dollars),
            "cents" => Ok(Self::Cents),
            other => Err(QuoteError::InvalidPriceUnit {
                value: other.to_owned(),
            }),
        }
    }
}

/// A deterministic demo quote.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoQuote {
    pub symbol: String,
    pub price_cents: u64,
    pub currency: String,
    pub venue: String,
    pub as_of: OffsetDateTime,
}

/// Venues the schema enumerates; the lookup only ever picks from these.
pub const VENUES: [&str; 3] = ["nasdaq", "nyse", "otc"];

impl DemoQuote {
    /// Look up a quote. Values are seeded from the symbol, so repeated
    /// lookups agree.
    pub fn lookup(symbol: &str) -> Result<Self, QuoteError> {
        let symbol = symbol.trim().to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(QuoteError::EmptySymbol);
        }

        let seed = symbol_seed(&symbol);
        let price_cents = 9_000 + seed % 35_000;
        let venue = VENUES[(seed % VENUES.len() as u64) as usize].to_owned();
        let as_of = OffsetDateTime::UNIX_EPOCH + Duration::seconds(1_741_104_000);

        Ok(Self {
            symbol,
            price_cents,
            currency: "USD".to_owned(),
            venue,
            as_of,
        })
    }

    /// Price expressed in the requested unit.
    pub fn price_in(&self, unit: PriceUnit) -> f64 {
        PriceUnit::Cents.convert(self.price_cents as f64, unit)
    }

    /// The payload shape that motivates the talk: bare numbers, no units,
    /// nothing a consumer could anchor on.
    pub fn ambiguous_payload(&self) -> Value {
        json!({
            "symbol": self.symbol,
            "price": self.price_cents,
            "venue": self.venue,
        })
    }

    /// The same quote with its metadata made explicit.
    pub fn annotated_payload(&self) -> Value {
        json!({
            "symbol": self.symbol,
            "price": self.price_cents,
            "price_unit": PriceUnit::Cents.as_str(),
            "currency": self.currency,
            "venue": self.venue,
            "as_of": self.as_of_rfc3339(),
        })
    }

    fn as_of_rfc3339(&self) -> String {
        self.as_of
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.as_of.unix_timestamp().to_string())
    }
}

/// The annotated quote payload's schema: every field carries the metadata
/// the ambiguous payload lacks.
pub fn quote_schema() -> Result<PayloadSchema, SchemaError> {
    PayloadSchema::new("quote", "v1.0.0")?
        .with_field(FieldSpec::new(
            "symbol",
            FieldKind::String,
            "upper-case market symbol",
        )?)?
        .with_field(
            FieldSpec::new("price", FieldKind::Integer, "last trade price")?.with_unit("cents"),
        )?
        .with_field(
            FieldSpec::new("price_unit", FieldKind::String, "unit of the price field")?
                .with_choices(PriceUnit::ALL.map(PriceUnit::as_str))?,
        )?
        .with_field(
            FieldSpec::new("currency", FieldKind::String, "ISO 4217 currency code")?
                .with_default(json!("USD"))?,
        )?
        .with_field(
            FieldSpec::new("venue", FieldKind::String, "listing venue")?
                .with_choices(VENUES)?,
        )?
        .with_field(
            FieldSpec::new("as_of", FieldKind::String, "RFC 3339 quote timestamp")?.optional(),
        )
}

fn symbol_seed(symbol: &str) -> u64 {
    symbol
        .bytes()
        .fold(0u64, |acc, byte| acc.wrapping_mul(31).wrapping_add(u64::from(byte)))
}
