//! Shared types used across scenefix.
//! Includes the `Vec2` coordinate pair, the image `OutputFormat`, and the
//! `BaselineScope` that decides which keyframe literals get rebased.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D coordinate pair as it appears in scene-file literals.
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, by: Vec2) -> Vec2 {
        Vec2::new(self.x + by.x, self.y + by.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", format_float(self.x), format_float(self.y))
    }
}

/// Format a float the way scene files spell them: integral values keep `.0`.
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    PNG,
    JPEG, // Lossy, quality 100
}

impl OutputFormat {
    /// Pick the encoder from the output file extension.
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "png" => Ok(OutputFormat::PNG),
            "jpg" | "jpeg" => Ok(OutputFormat::JPEG),
            _ => Err(Error::InvalidArgument {
                arg: "output",
                value: path.display().to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::PNG => write!(f, "PNG"),
            OutputFormat::JPEG => write!(f, "JPEG"),
        }
    }
}

/// Which `Vector2(x, N)` literals the baseline rewriter touches.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BaselineScope {
    /// Rebase every matching literal, whatever its value.
    #[default]
    All,
    /// Rebase only literals whose value lies in the reporting band.
    Band,
}

impl std::fmt::Display for BaselineScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaselineScope::All => write!(f, "all"),
            BaselineScope::Band => write!(f, "band"),
        }
    }
}
