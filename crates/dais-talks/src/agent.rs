//! A fake AI consumer.
//!
//! The agent is deterministic in what it answers: without schema metadata it
//! guesses the way real consumers guess, and with metadata it reads what is
//! written. Latency is simulated so interactive talks have a beat of
//! suspense before the model "responds".

use std::time::Duration;

use serde_json::Value;
use tokio::time::sleep;
use uuid::Uuid;

use crate::quotes::PriceUnit;
use crate::schema::PayloadSchema;

/// Outcome of one simulated model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentReading {
    pub request_id: String,
    pub answer: String,
    pub reasoning: Vec<String>,
}

impl AgentReading {
    /// Transcript lines for a slide body: the answer, then the reasoning.
    pub fn transcript(&self) -> Vec<String> {
        let mut lines = vec![format!("model> {}", self.answer)];
        lines.extend(self.reasoning.iter().map(|step| format!("  · {step}")));
        lines
    }
}

/// Pretend model consumer for quote payloads.
#[derive(Debug, Clone)]
pub struct MockAgent {
    latency: Duration,
}

impl Default for MockAgent {
    fn default() -> Self {
        Self::new(Duration::from_millis(600))
    }
}

impl MockAgent {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Agent with no simulated latency, for tests and batch playback.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Interpret a quote payload, optionally with its schema document.
    pub async fn interpret_quote(
        &self,
        payload: &Value,
        schema: Option<&PayloadSchema>,
    ) -> AgentReading {
        sleep(self.latency).await;

        let request_id = Uuid::new_v4().to_string();
        let symbol = payload
            .get("symbol")
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_owned();
        let price = payload.get("price").and_then(Value::as_f64).unwrap_or(0.0);

        let unit = schema
            .and_then(|schema| schema.field("price"))
            .and_then(|field| field.unit.as_deref());

        match unit {
            Some("cents") => {
                let dollars = PriceUnit::Cents.convert(price, PriceUnit::Dollars);
                AgentReading {
                    request_id,
                    answer: format!("{symbol} last traded at ${dollars:.2}"),
                    reasoning: vec![
                        "schema says price carries x-unit: cents".to_owned(),
                        format!("{price} cents -> ${dollars:.2}"),
                    ],
                }
            }
            Some(unit) => AgentReading {
                request_id,
                answer: format!("{symbol} last traded at {price} {unit}"),
                reasoning: vec![format!("schema says price carries x-unit: {unit}")],
            },
            None => AgentReading {
                request_id,
                answer: format!("{symbol} last traded at ${price:.2}"),
                reasoning: vec![
                    "no unit metadata on price".to_owned(),
                    "assuming dollars, the way most consumers do".to_owned(),
                ],
            },
        }
    }
}
