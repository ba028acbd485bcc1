use std::io::{self, Write};

use crate::config::{PresenterConfig, StageExpansion};
use crate::error::{DeckError, ValidationError};
use crate::frame::{Frame, EXIT_NOTICE, FIRST_SLIDE_NOTICE, LAST_SLIDE_NOTICE};
use crate::slide::Slide;
use crate::terminal::{self, NavKey, RawModeGuard};

/// Deck controller: owns the slide sequence, the per-slide stage cursors,
/// and the input loop.
pub struct Presenter {
    config: PresenterConfig,
    slides: Vec<Slide>,
    current: usize,
    cursors: Vec<usize>,
    running: bool,
}

impl Presenter {
    pub fn new(config: PresenterConfig) -> Self {
        Self {
            config,
            slides: Vec::new(),
            current: 0,
            cursors: Vec::new(),
            running: false,
        }
    }

    /// Append a slide; its stage cursor starts at 0.
    pub fn add_slide(&mut self, slide: Slide) -> &mut Self {
        self.slides.push(slide);
        self.cursors.push(0);
        self
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Current `(slide index, stage cursor)` pair.
    pub fn position(&self) -> (usize, usize) {
        (self.current, self.cursors.get(self.current).copied().unwrap_or(0))
    }

    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    /// Advance one stage, or move to the next slide once the current one is
    /// exhausted. Returns whether any movement happened.
    pub fn next(&mut self) -> bool {
        if self.slides.is_empty() {
            return false;
        }

        let last_stage = self.slides[self.current].stage_count() - 1;
        if self.cursors[self.current] < last_stage {
            self.cursors[self.current] += 1;
            return true;
        }

        if self.current + 1 < self.slides.len() {
            // The target slide resumes at whatever stage it was left on.
            self.current += 1;
            return true;
        }

        false
    }

    /// Mirror of [`Presenter::next`] at the opposite boundary.
    pub fn prev(&mut self) -> bool {
        if self.slides.is_empty() {
            return false;
        }

        if self.cursors[self.current] > 0 {
            self.cursors[self.current] -= 1;
            return true;
        }

        if self.current > 0 {
            self.current -= 1;
            return true;
        }

        false
    }

    /// Play the deck: interactive when stdin is a terminal and keyboard
    /// navigation is enabled, batch otherwise. Idempotent while running.
    pub async fn run(&mut self) -> Result<(), DeckError> {
        if self.slides.is_empty() {
            return Err(ValidationError::EmptyDeck.into());
        }
        if self.running {
            return Ok(());
        }

        self.running = true;
        let result = if terminal::stdin_is_interactive() && self.config.keyboard_navigation {
            self.run_interactive().await
        } else {
            let mut stdout = io::stdout();
            self.run_batch(&mut stdout).await
        };
        self.running = false;
        result
    }

    /// Batch playback: emit every frame in order without reading input.
    ///
    /// Multi-stage slides expand according to the configured policy: one
    /// frame per stage for `all`, a single final-stage frame for `final`.
    pub async fn run_batch<W: Write>(&mut self, out: &mut W) -> Result<(), DeckError> {
        if self.slides.is_empty() {
            return Err(ValidationError::EmptyDeck.into());
        }

        for index in 0..self.slides.len() {
            self.current = index;
            let stage_count = self.slides[index].stage_count();

            if stage_count > 1 && self.config.expansion == StageExpansion::All {
                for stage in 0..stage_count {
                    self.cursors[index] = stage;
                    self.write_frame(out, None, false, false).await?;
                }
            } else {
                self.cursors[index] = stage_count - 1;
                self.write_frame(out, None, false, false).await?;
            }
        }

        Ok(())
    }

    async fn run_interactive(&mut self) -> Result<(), DeckError> {
        let mut guard = RawModeGuard::acquire()?;
        let outcome = self.interactive_loop().await;
        guard.release()?;

        if outcome.is_ok() {
            println!("{EXIT_NOTICE}");
        }
        outcome
    }

    async fn interactive_loop(&mut self) -> Result<(), DeckError> {
        let mut stdout = io::stdout();
        self.write_frame(&mut stdout, None, true, true).await?;

        loop {
            match terminal::read_nav_key()? {
                NavKey::Quit => return Ok(()),
                NavKey::Advance => {
                    if self.next() {
                        self.write_frame(&mut stdout, None, true, true).await?;
                    } else if self.config.exit_on_last_slide {
                        return Ok(());
                    } else {
                        self.write_frame(&mut stdout, Some(LAST_SLIDE_NOTICE), true, true)
                            .await?;
                    }
                }
                NavKey::Retreat => {
                    if self.prev() {
                        self.write_frame(&mut stdout, None, true, true).await?;
                    } else {
                        self.write_frame(&mut stdout, Some(FIRST_SLIDE_NOTICE), true, true)
                            .await?;
                    }
                }
            }
        }
    }

    async fn write_frame<W: Write>(
        &self,
        out: &mut W,
        notice: Option<&str>,
        color: bool,
        raw: bool,
    ) -> Result<(), DeckError> {
        let slide = &self.slides[self.current];
        let stage = self.cursors[self.current];
        let body = slide.render_stage(stage).await?;

        if self.config.clear_on_render {
            terminal::clear_screen(out)?;
        }

        let frame = Frame {
            config: &self.config,
            slide,
            slide_number: self.current + 1,
            slide_total: self.slides.len(),
            stage_number: stage + 1,
            stage_total: slide.stage_count(),
            body: &body,
            notice,
            color,
        };

        if raw {
            // Raw mode leaves output post-processing off, so the carriage
            // return has to be supplied by hand.
            let text = frame.compose().replace('\n', "\r\n");
            write!(out, "{text}\r\n")?;
        } else {
            writeln!(out, "{}", frame.compose())?;
        }
        out.flush()?;
        Ok(())
    }
}
