//! The bundled talks and their registry.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use dais_core::{Presenter, PresenterConfig, RevealMode, Slide, Stage, StageRenderFn, Text};
use serde_json::json;
use thiserror::Error;

use crate::agent::MockAgent;
use crate::quotes::{quote_schema, DemoQuote, QuoteError};
use crate::schema::SchemaError;

/// Errors raised while resolving or building a talk.
#[derive(Debug, Error)]
pub enum TalkError {
    #[error("unknown talk '{value}', expected one of schema-clarity, staged-reveal")]
    UnknownTalk { value: String },

    #[error(transparent)]
    Validation(#[from] dais_core::ValidationError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Quote(#[from] QuoteError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Identifiers for the bundled talks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TalkId {
    SchemaClarity,
    StagedReveal,
}

impl TalkId {
    pub const ALL: [Self; 2] = [Self::SchemaClarity, Self::StagedReveal];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SchemaClarity => "schema-clarity",
            Self::StagedReveal => "staged-reveal",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::SchemaClarity => "Say What You Mean: Schema Metadata for AI Consumers",
            Self::StagedReveal => "Staged Reveals: A Tour of the Presenter",
        }
    }
}

impl Display for TalkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TalkId {
    type Err = TalkError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "schema-clarity" => Ok(Self::SchemaClarity),
            "staged-reveal" => Ok(Self::StagedReveal),
            other => Err(TalkError::UnknownTalk {
                value: other.to_owned(),
            }),
        }
    }
}

/// Build the presenter deck for a talk.
pub fn build(talk: TalkId, config: PresenterConfig) -> Result<Presenter, TalkError> {
    match talk {
        TalkId::SchemaClarity => schema_clarity(config),
        TalkId::StagedReveal => staged_reveal(config),
    }
}

fn schema_clarity(config: PresenterConfig) -> Result<Presenter, TalkError> {
    let quote = DemoQuote::lookup("ACME")?;
    let schema = quote_schema()?;
    let agent = MockAgent::default();

    let mut presenter = Presenter::new(config);

    presenter.add_slide(
        Slide::new("Why schemas?")?
            .with_base([
                "Structured data is only half a contract.",
                "The other half is what the numbers mean.",
            ])
            .with_footer("dais · schema-clarity"),
    );

    let payload_json = serde_json::to_string_pretty(&quote.ambiguous_payload())?;
    let misread_agent = agent.clone();
    let misread_payload = quote.ambiguous_payload();
    let misread: StageRenderFn = Arc::new(move |_ctx| {
        let agent = misread_agent.clone();
        let payload = misread_payload.clone();
        Box::pin(async move {
            let reading = agent.interpret_quote(&payload, None).await;
            Ok(Text::Lines(reading.transcript()))
        })
    });

    presenter.add_slide(
        Slide::new("A quote, as shipped")?
            .with_base(payload_json)
            .with_stage(Stage::text([
                "",
                "What does price: 12900 mean to a model?",
            ]))
            .with_stage(Stage::deferred(misread)),
    );

    let schema_json = serde_json::to_string_pretty(&schema.to_interchange())?;
    presenter.add_slide(
        Slide::new("Say what you mean")?
            .with_base(schema_json)
            .with_stage(Stage::text(["", "units ride along: price carries x-unit: cents"]))
            .with_stage(Stage::text(
                "choices are closed: venue is one of nasdaq, nyse, otc",
            ))
            .with_stage(Stage::text(
                "defaults are explicit: currency falls back to USD",
            )),
    );

    let reread_agent = agent.clone();
    let reread_payload = quote.annotated_payload();
    let reread_schema = schema.clone();
    let reread: StageRenderFn = Arc::new(move |_ctx| {
        let agent = reread_agent.clone();
        let payload = reread_payload.clone();
        let schema = reread_schema.clone();
        Box::pin(async move {
            let reading = agent.interpret_quote(&payload, Some(&schema)).await;
            Ok(Text::Lines(reading.transcript()))
        })
    });

    let annotated_json = serde_json::to_string_pretty(&quote.annotated_payload())?;
    presenter.add_slide(
        Slide::new("The same quote, annotated")?
            .with_base(annotated_json)
            .with_stage(Stage::text(["", "Same consumer, same question:"]))
            .with_stage(Stage::deferred(reread)),
    );

    let suspect = json!({
        "symbol": "ACME",
        "price": "129.00",
        "price_unit": "cents",
        "venue": "darkpool",
    });
    let mut guardrails = vec![
        "Schemas also catch payloads before a model ever sees them:".to_owned(),
        String::new(),
        serde_json::to_string(&suspect)?,
        String::new(),
    ];
    for violation in schema.validate(&suspect) {
        guardrails.push(format!("  ✗ {violation}"));
    }

    presenter.add_slide(
        Slide::new("Guardrails")?
            .with_stage(Stage::text(Text::Lines(guardrails)))
            .with_stage(Stage::text([
                "",
                "Reject at the boundary, not in the prompt.",
            ])),
    );

    presenter.add_slide(
        Slide::new("Takeaways")?
            .with_base([
                "· every number gets a unit",
                "· every open string becomes a closed choice",
                "· every optional field states its default",
            ])
            .with_footer("dais · schema-clarity"),
    );

    Ok(presenter)
}

fn staged_reveal(config: PresenterConfig) -> Result<Presenter, TalkError> {
    let mut presenter = Presenter::new(config);

    presenter.add_slide(Slide::new("One slide, one body")?.with_base([
        "A slide without stages is its own single frame.",
        "Space moves on; left arrow comes back.",
    ]));

    presenter.add_slide(
        Slide::new("Accumulate")?
            .with_base("Points stack up as you advance:")
            .with_stage(Stage::text("  1. the base stays put"))
            .with_stage(Stage::text("  2. each stage adds below it"))
            .with_stage(Stage::text("  3. stepping back peels them off")),
    );

    presenter.add_slide(
        Slide::new("Replace")?
            .with_base("Only one of these is visible at a time:")
            .with_stage(Stage::text("  a sketch...").with_mode(RevealMode::Replace))
            .with_stage(Stage::text("  ...a draft...").with_mode(RevealMode::Replace))
            .with_stage(Stage::text("  ...the finished thing.").with_mode(RevealMode::Replace)),
    );

    let progress: StageRenderFn = Arc::new(|ctx| {
        Box::pin(async move {
            Ok(Text::Lines(vec![
                format!("this text was rendered on demand by '{}'", ctx.slide.title()),
                format!("the viewer is on step {} of {}", ctx.stage_index + 1, ctx.total_stages),
            ]))
        })
    });

    presenter.add_slide(
        Slide::new("Deferred content")?
            .with_base("Stages can compute their text when shown:")
            .with_stage(Stage::deferred(progress.clone()))
            .with_stage(Stage::deferred(progress)),
    );

    presenter.add_slide(
        Slide::new("That's the tour")?
            .with_header("appendix")
            .with_base("This slide overrides the deck header, if one is set.")
            .with_footer("dais · staged-reveal"),
    );

    Ok(presenter)
}
