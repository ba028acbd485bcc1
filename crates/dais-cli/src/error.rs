use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Talk(#[from] dais_talks::TalkError),

    #[error(transparent)]
    Deck(#[from] dais_core::DeckError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Talk(_) => 2,
            Self::Deck(_) | Self::Io(_) => 10,
        }
    }
}
