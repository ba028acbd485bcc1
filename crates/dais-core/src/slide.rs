use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use crate::error::{DeckError, ValidationError};
use crate::text::{StageContent, StageContext, StageRenderFn, Text};

/// Policy governing which prior stages' content stays visible when a given
/// stage is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RevealMode {
    Replace,
    Append,
    #[default]
    Accumulate,
}

impl RevealMode {
    pub const ALL: [Self; 3] = [Self::Replace, Self::Append, Self::Accumulate];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Append => "append",
            Self::Accumulate => "accumulate",
        }
    }
}

impl Display for RevealMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RevealMode {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "append" => Ok(Self::Append),
            "accumulate" => Ok(Self::Accumulate),
            other => Err(ValidationError::InvalidRevealMode {
                value: other.to_owned(),
            }),
        }
    }
}

/// One incremental reveal step within a slide.
#[derive(Debug, Clone)]
pub struct Stage {
    content: StageContent,
    mode: RevealMode,
}

impl Stage {
    /// Stage with static text content.
    pub fn text(content: impl Into<Text>) -> Self {
        let content = match content.into() {
            Text::Raw(value) => StageContent::Text(value),
            Text::Lines(lines) => StageContent::Lines(lines),
        };
        Self {
            content,
            mode: RevealMode::default(),
        }
    }

    /// Stage whose content is produced by a deferred renderer.
    pub fn deferred(renderer: StageRenderFn) -> Self {
        Self {
            content: StageContent::Deferred(renderer),
            mode: RevealMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: RevealMode) -> Self {
        self.mode = mode;
        self
    }

    pub const fn mode(&self) -> RevealMode {
        self.mode
    }
}

/// One titled unit of presentation content with an optional staged reveal
/// sequence. Immutable once handed to the deck.
pub struct Slide {
    title: String,
    header: Option<String>,
    footer: Option<String>,
    base: Option<Text>,
    renderer: Option<StageRenderFn>,
    stages: Vec<Stage>,
}

impl Slide {
    /// Create a slide. Fails if the title is empty or whitespace.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::EmptySlideTitle);
        }

        Ok(Self {
            title,
            header: None,
            footer: None,
            base: None,
            renderer: None,
            stages: Vec::new(),
        })
    }

    /// Header shown for this slide only, overriding the deck default.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Footer shown for this slide only, overriding the deck default.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Base content: always shown above staged content, and used as the
    /// entire body when the slide has no stages.
    pub fn with_base(mut self, base: impl Into<Text>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Custom renderer used in place of the base content when the slide has
    /// no stages.
    pub fn with_renderer(mut self, renderer: StageRenderFn) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn with_stages(mut self, stages: impl IntoIterator<Item = Stage>) -> Self {
        self.stages.extend(stages);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    pub fn has_stages(&self) -> bool {
        !self.stages.is_empty()
    }

    /// Number of stages, with a floor of 1: a slide with zero stages behaves
    /// as having exactly one implicit stage (its default body).
    pub fn stage_count(&self) -> usize {
        self.stages.len().max(1)
    }

    /// Produce the body text for the requested stage.
    ///
    /// Out-of-range indices clamp to the last stage rather than failing, so
    /// callers that mismanage indices still get a frame.
    pub async fn render_stage(&self, requested: usize) -> Result<String, DeckError> {
        if self.stages.is_empty() {
            if let Some(renderer) = &self.renderer {
                let ctx = StageContext {
                    stage_index: 0,
                    total_stages: 1,
                    slide: self,
                };
                return Ok(renderer(ctx).await?.joined());
            }
            return Ok(self.base.as_ref().map(Text::joined).unwrap_or_default());
        }

        let current = requested.min(self.stages.len() - 1);
        let mut lines = self.base.as_ref().map(Text::to_lines).unwrap_or_default();

        match self.stages[current].mode {
            // Append is observably identical to replace: base plus only the
            // selected stage's content.
            RevealMode::Replace | RevealMode::Append => {
                lines.extend(self.realize(current, current).await?);
            }
            RevealMode::Accumulate => {
                for index in 0..=current {
                    lines.extend(self.realize(index, current).await?);
                }
            }
        }

        Ok(lines.join("\n"))
    }

    /// Resolve the body of stage `index`. Renderers always receive
    /// `selected`, the stage the viewer is on, even while earlier stages
    /// are realized for accumulation.
    async fn realize(&self, index: usize, selected: usize) -> Result<Vec<String>, DeckError> {
        match &self.stages[index].content {
            StageContent::Text(value) => Ok(Text::Raw(value.clone()).to_lines()),
            StageContent::Lines(lines) => Ok(Text::Lines(lines.clone()).to_lines()),
            StageContent::Deferred(renderer) => {
                let ctx = StageContext {
                    stage_index: selected,
                    total_stages: self.stages.len(),
                    slide: self,
                };
                Ok(renderer(ctx).await?.to_lines())
            }
        }
    }
}

impl Debug for Slide {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slide")
            .field("title", &self.title)
            .field("header", &self.header)
            .field("footer", &self.footer)
            .field("base", &self.base)
            .field("renderer", &self.renderer.as_ref().map(|_| "<fn>"))
            .field("stages", &self.stages)
            .finish()
    }
}
