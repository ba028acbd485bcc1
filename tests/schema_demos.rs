//! Behavior-driven tests for the demo content behind the talks.

use dais_tests::quiet_config;
use dais_talks::talks::{self, TalkId};
use dais_talks::{quote_schema, DemoQuote, MockAgent, PriceUnit};
use serde_json::json;

#[tokio::test]
async fn an_agent_without_metadata_inflates_the_price() {
    // Given: the ambiguous quote payload from the talk
    let quote = DemoQuote::lookup("ACME").expect("must look up");
    let agent = MockAgent::instant();

    // When: the agent interprets it without a schema
    let reading = agent.interpret_quote(&quote.ambiguous_payload(), None).await;

    // Then: cents are read as dollars, a 100x error
    let inflated = format!("${:.2}", quote.price_cents as f64);
    let actual = format!("${:.2}", quote.price_in(PriceUnit::Dollars));
    assert!(reading.answer.contains(&inflated));
    assert!(!reading.answer.contains(&actual));
}

#[tokio::test]
async fn the_schema_turns_the_same_question_into_the_right_answer() {
    // Given: the annotated payload and its schema
    let quote = DemoQuote::lookup("ACME").expect("must look up");
    let schema = quote_schema().expect("schema must build");
    let agent = MockAgent::instant();

    // When: the agent interprets with the schema in hand
    let reading = agent
        .interpret_quote(&quote.annotated_payload(), Some(&schema))
        .await;

    // Then: the answer is the true dollar price
    let actual = format!("${:.2}", quote.price_in(PriceUnit::Dollars));
    assert!(reading.answer.contains(&actual), "got: {}", reading.answer);
}

#[test]
fn the_interchange_document_carries_the_talk_metadata() {
    let schema = quote_schema().expect("schema must build");
    let doc = schema.to_interchange();

    assert_eq!(doc["properties"]["price"]["x-unit"], json!("cents"));
    assert_eq!(
        doc["properties"]["venue"]["enum"],
        json!(["nasdaq", "nyse", "otc"])
    );
    assert_eq!(doc["properties"]["currency"]["default"], json!("USD"));
}

#[test]
fn the_schema_rejects_the_guardrail_payload_from_the_talk() {
    let schema = quote_schema().expect("schema must build");
    let suspect = json!({
        "symbol": "ACME",
        "price": "129.00",
        "price_unit": "cents",
        "venue": "darkpool",
    });

    let violations = schema.validate(&suspect);
    assert!(violations.iter().any(|v| v.path == "$/price"));
    assert!(violations.iter().any(|v| v.path == "$/venue"));
}

#[tokio::test]
async fn every_bundled_talk_plays_through_in_batch() {
    for talk in TalkId::ALL {
        // Given: the talk's deck with assertable output
        let mut presenter = talks::build(talk, quiet_config()).expect("deck must build");
        let slides = presenter.slide_count();

        // When: it plays non-interactively
        let mut out = Vec::new();
        presenter.run_batch(&mut out).await.expect("must play");

        // Then: at least one frame per slide reached the output
        let text = String::from_utf8(out).expect("frames are utf-8");
        assert!(
            text.matches("Slide ").count() >= slides,
            "{talk}: too few frames"
        );
    }
}
