//! CLI argument definitions for dais.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `list` | List the bundled talks |
//! | `play` | Play a talk in the terminal |

use clap::{Args, Parser, Subcommand, ValueEnum};

use dais_core::StageExpansion;

/// dais - staged terminal talks about schema metadata
///
/// Plays conference demo decks that show why explicit units, enumerated
/// choices, and defaults keep AI consumers honest.
#[derive(Debug, Parser)]
#[command(name = "dais", version, about = "Staged terminal talks about schema metadata")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the bundled talks.
    List,

    /// Play a talk.
    ///
    /// Interactive when run on a terminal: space or right-arrow advances,
    /// left-arrow goes back, q quits. Piped or in CI the deck plays through
    /// automatically.
    Play(PlayArgs),
}

/// Arguments for the `play` command.
#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Talk to play (see `dais list`).
    pub talk: String,

    /// How non-interactive playback expands multi-stage slides.
    #[arg(long, value_enum, default_value_t = ExpandMode::All)]
    pub expand: ExpandMode,

    /// Do not clear the screen between frames.
    #[arg(long, default_value_t = false)]
    pub no_clear: bool,

    /// Hide the controls legend.
    #[arg(long, default_value_t = false)]
    pub no_controls: bool,

    /// Hide the slide and step indicators.
    #[arg(long, default_value_t = false)]
    pub no_indicators: bool,

    /// Force non-interactive playback even on a terminal.
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// End the run when advancing past the last stage of the last slide.
    #[arg(long, default_value_t = false)]
    pub exit_on_end: bool,
}

/// Batch expansion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExpandMode {
    /// One frame per stage.
    All,
    /// Only each slide's final stage.
    Final,
}

impl From<ExpandMode> for StageExpansion {
    fn from(mode: ExpandMode) -> Self {
        match mode {
            ExpandMode::All => Self::All,
            ExpandMode::Final => Self::Final,
        }
    }
}
