use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::DeckError;
use crate::slide::Slide;

/// Static text supplied either as a single string or as ordered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Raw(String),
    Lines(Vec<String>),
}

impl Text {
    /// Flatten into an ordered line sequence, splitting embedded line breaks.
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            Self::Raw(value) => split_lines(value),
            Self::Lines(lines) => lines.iter().flat_map(|line| split_lines(line)).collect(),
        }
    }

    /// Join without re-splitting: raw text as-is, lines with line breaks.
    pub fn joined(&self) -> String {
        match self {
            Self::Raw(value) => value.clone(),
            Self::Lines(lines) => lines.join("\n"),
        }
    }
}

fn split_lines(value: &str) -> Vec<String> {
    value.split('\n').map(str::to_owned).collect()
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_owned())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<Vec<String>> for Text {
    fn from(value: Vec<String>) -> Self {
        Self::Lines(value)
    }
}

impl From<Vec<&str>> for Text {
    fn from(value: Vec<&str>) -> Self {
        Self::Lines(value.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Text {
    fn from(value: [&str; N]) -> Self {
        Self::Lines(value.into_iter().map(str::to_owned).collect())
    }
}

/// Immutable snapshot handed to a deferred renderer.
///
/// `stage_index` is always the stage the viewer is currently on, even when
/// an earlier stage is being realized for accumulation.
#[derive(Clone, Copy)]
pub struct StageContext<'a> {
    pub stage_index: usize,
    pub total_stages: usize,
    pub slide: &'a Slide,
}

/// Deferred renderer producing stage text, possibly asynchronously.
pub type StageRenderFn =
    Arc<dyn for<'a> Fn(StageContext<'a>) -> BoxFuture<'a, Result<Text, DeckError>> + Send + Sync>;

/// Content carried by a stage, resolved exhaustively at render time.
#[derive(Clone)]
pub enum StageContent {
    Text(String),
    Lines(Vec<String>),
    Deferred(StageRenderFn),
}

impl Debug for StageContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.debug_tuple("Text").field(value).finish(),
            Self::Lines(lines) => f.debug_tuple("Lines").field(lines).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
