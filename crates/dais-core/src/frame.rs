use owo_colors::OwoColorize;

use crate::config::PresenterConfig;
use crate::slide::Slide;

/// One-line legend shown at the bottom of interactive frames.
pub const CONTROLS_HINT: &str = "space/→ next · ← back · q quit";

/// Notices for navigation at the sequence boundaries.
pub const LAST_SLIDE_NOTICE: &str = "Already on the last slide";
pub const FIRST_SLIDE_NOTICE: &str = "Already on the first slide";

/// Printed after the interactive loop releases the terminal.
pub const EXIT_NOTICE: &str = "Presentation closed";

/// Everything needed to lay out one frame.
///
/// Composition is pure so tests can assert on frame text without a terminal;
/// the presenter owns the actual write.
pub struct Frame<'a> {
    pub config: &'a PresenterConfig,
    pub slide: &'a Slide,
    /// 1-based position counters.
    pub slide_number: usize,
    pub slide_total: usize,
    pub stage_number: usize,
    pub stage_total: usize,
    pub body: &'a str,
    pub notice: Option<&'a str>,
    pub color: bool,
}

impl Frame<'_> {
    /// Compose the frame top to bottom: presentation title, indicators,
    /// header, slide title, body, footer, notice, controls.
    pub fn compose(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        if let Some(title) = &self.config.title {
            lines.push(self.paint(title, Paint::DeckTitle));
            lines.push(String::new());
        }

        if self.config.show_slide_indicator {
            let mut indicator = format!("Slide {}/{}", self.slide_number, self.slide_total);
            if self.config.show_stage_indicator && self.stage_total > 1 {
                indicator.push_str(&format!(" · Step {}/{}", self.stage_number, self.stage_total));
            }
            lines.push(self.paint(&indicator, Paint::Dim));
        }

        if let Some(header) = self.slide.header().or(self.config.header.as_deref()) {
            lines.push(self.paint(header, Paint::Dim));
        }

        lines.push(self.paint(self.slide.title(), Paint::SlideTitle));
        lines.push("─".repeat(self.slide.title().chars().count().max(4)));

        if !self.body.is_empty() {
            lines.push(self.body.to_owned());
        }

        if let Some(footer) = self.slide.footer().or(self.config.footer.as_deref()) {
            lines.push(String::new());
            lines.push(self.paint(footer, Paint::Dim));
        }

        if let Some(notice) = self.notice {
            lines.push(String::new());
            lines.push(self.paint(notice, Paint::Notice));
        }

        if self.config.show_controls {
            lines.push(String::new());
            lines.push(self.paint(CONTROLS_HINT, Paint::Dim));
        }

        lines.join("\n")
    }

    fn paint(&self, value: &str, role: Paint) -> String {
        if !self.color {
            return value.to_owned();
        }

        match role {
            Paint::DeckTitle => value.bold().bright_cyan().to_string(),
            Paint::SlideTitle => value.bold().to_string(),
            Paint::Dim => value.dimmed().to_string(),
            Paint::Notice => value.yellow().to_string(),
        }
    }
}

#[derive(Clone, Copy)]
enum Paint {
    DeckTitle,
    SlideTitle,
    Dim,
    Notice,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PresenterConfig;
    use crate::slide::Slide;

    fn plain_config() -> PresenterConfig {
        PresenterConfig::default()
            .with_clear_on_render(false)
            .with_show_controls(false)
    }

    fn frame<'a>(config: &'a PresenterConfig, slide: &'a Slide, body: &'a str) -> Frame<'a> {
        Frame {
            config,
            slide,
            slide_number: 2,
            slide_total: 5,
            stage_number: 1,
            stage_total: 3,
            body,
            notice: None,
            color: false,
        }
    }

    #[test]
    fn indicator_includes_stage_counter_for_multi_stage_slides() {
        let config = plain_config();
        let slide = Slide::new("Topic").expect("title must be valid");
        let composed = frame(&config, &slide, "body").compose();

        assert!(composed.contains("Slide 2/5 · Step 1/3"));
    }

    #[test]
    fn stage_counter_hidden_for_single_stage_slides() {
        let config = plain_config();
        let slide = Slide::new("Topic").expect("title must be valid");
        let mut single = frame(&config, &slide, "body");
        single.stage_total = 1;

        let composed = single.compose();
        assert!(composed.contains("Slide 2/5"));
        assert!(!composed.contains("Step"));
    }

    #[test]
    fn slide_header_overrides_deck_default() {
        let config = plain_config().with_header("deck header");
        let slide = Slide::new("Topic")
            .expect("title must be valid")
            .with_header("slide header");

        let composed = frame(&config, &slide, "body").compose();
        assert!(composed.contains("slide header"));
        assert!(!composed.contains("deck header"));
    }

    #[test]
    fn notice_and_controls_render_when_present() {
        let config = plain_config().with_show_controls(true);
        let slide = Slide::new("Topic").expect("title must be valid");
        let mut with_notice = frame(&config, &slide, "body");
        with_notice.notice = Some(LAST_SLIDE_NOTICE);

        let composed = with_notice.compose();
        assert!(composed.contains(LAST_SLIDE_NOTICE));
        assert!(composed.contains(CONTROLS_HINT));
    }
}
