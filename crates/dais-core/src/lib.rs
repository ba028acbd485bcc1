//! Staged slide presenter for terminal talks.
//!
//! This crate contains:
//! - Slide and stage primitives with reveal modes
//! - The deck controller and its navigation state machine
//! - Terminal lifecycle helpers (raw mode, key decoding)
//! - Frame composition for indicators, notices, and controls

pub mod config;
pub mod error;
pub mod frame;
pub mod presenter;
pub mod slide;
pub mod terminal;
pub mod text;

pub use config::{PresenterConfig, StageExpansion};
pub use error::{DeckError, ValidationError};
pub use frame::Frame;
pub use presenter::Presenter;
pub use slide::{RevealMode, Slide, Stage};
pub use text::{StageContent, StageContext, StageRenderFn, Text};
