mod cli;
mod error;

use std::str::FromStr;

use clap::Parser;

use dais_core::PresenterConfig;
use dais_talks::talks::{self, TalkId};

use crate::cli::{Cli, Command, PlayArgs};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::List => list(),
        Command::Play(args) => play(args).await,
    }
}

fn list() -> Result<(), CliError> {
    for talk in TalkId::ALL {
        println!("{:<16} {}", talk.as_str(), talk.title());
    }
    Ok(())
}

async fn play(args: PlayArgs) -> Result<(), CliError> {
    let talk = TalkId::from_str(&args.talk)?;

    let config = PresenterConfig::default()
        .with_title(talk.title())
        .with_clear_on_render(!args.no_clear)
        .with_show_controls(!args.no_controls)
        .with_show_slide_indicator(!args.no_indicators)
        .with_show_stage_indicator(!args.no_indicators)
        .with_keyboard_navigation(!args.batch)
        .with_exit_on_last_slide(args.exit_on_end)
        .with_expansion(args.expand.into());

    let mut presenter = talks::build(talk, config)?;
    presenter.run().await?;
    Ok(())
}
