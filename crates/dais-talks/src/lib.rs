//! Demo content for the `dais` talks.
//!
//! This crate contains:
//! - The schema metadata model and its interchange conversion
//! - Deterministic quote logic with explicit price units
//! - A fake AI consumer with simulated latency
//! - The bundled talk decks and their registry

pub mod agent;
pub mod quotes;
pub mod schema;
pub mod talks;

pub use agent::{AgentReading, MockAgent};
pub use quotes::{quote_schema, DemoQuote, PriceUnit, QuoteError};
pub use schema::{FieldKind, FieldSpec, PayloadSchema, SchemaError, SchemaViolation};
pub use talks::{TalkError, TalkId};
