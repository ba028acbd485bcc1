use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ValidationError;

/// How batch playback expands multi-stage slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StageExpansion {
    /// One frame per stage, first to last.
    #[default]
    All,
    /// A single frame at the last stage.
    Final,
}

impl StageExpansion {
    pub const ALL: [Self; 2] = [Self::All, Self::Final];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Final => "final",
        }
    }
}

impl Display for StageExpansion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageExpansion {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "final" => Ok(Self::Final),
            other => Err(ValidationError::InvalidExpansion {
                value: other.to_owned(),
            }),
        }
    }
}

/// Presentation-level configuration, fixed when the presenter is built.
#[derive(Debug, Clone)]
pub struct PresenterConfig {
    /// Printed once per frame above the slide indicator.
    pub title: Option<String>,
    /// Default header, shown unless a slide overrides it.
    pub header: Option<String>,
    /// Default footer, shown unless a slide overrides it.
    pub footer: Option<String>,
    pub clear_on_render: bool,
    pub show_controls: bool,
    pub show_slide_indicator: bool,
    pub show_stage_indicator: bool,
    /// Enables the interactive key loop when stdin is a terminal.
    pub keyboard_navigation: bool,
    /// Advancing past the final stage ends the run instead of showing a
    /// notice.
    pub exit_on_last_slide: bool,
    pub expansion: StageExpansion,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            title: None,
            header: None,
            footer: None,
            clear_on_render: true,
            show_controls: true,
            show_slide_indicator: true,
            show_stage_indicator: true,
            keyboard_navigation: true,
            exit_on_last_slide: false,
            expansion: StageExpansion::All,
        }
    }
}

impl PresenterConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_clear_on_render(mut self, clear_on_render: bool) -> Self {
        self.clear_on_render = clear_on_render;
        self
    }

    pub fn with_show_controls(mut self, show_controls: bool) -> Self {
        self.show_controls = show_controls;
        self
    }

    pub fn with_show_slide_indicator(mut self, show: bool) -> Self {
        self.show_slide_indicator = show;
        self
    }

    pub fn with_show_stage_indicator(mut self, show: bool) -> Self {
        self.show_stage_indicator = show;
        self
    }

    pub fn with_keyboard_navigation(mut self, enabled: bool) -> Self {
        self.keyboard_navigation = enabled;
        self
    }

    pub fn with_exit_on_last_slide(mut self, exit: bool) -> Self {
        self.exit_on_last_slide = exit;
        self
    }

    pub fn with_expansion(mut self, expansion: StageExpansion) -> Self {
        self.expansion = expansion;
        self
    }
}
