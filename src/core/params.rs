use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{BaselineScope, Vec2};

/// One input/output file name pair for the downscaler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownscaleJob {
    pub input: String,
    pub output: String,
}

impl DownscaleJob {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Background downscaling parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownscaleParams {
    /// Directory the job file names are resolved against
    pub dir: PathBuf,
    pub jobs: Vec<DownscaleJob>,
    pub target_width: u32,
    pub target_height: u32,
}

impl Default for DownscaleParams {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets/art/environment/backgrounds"),
            jobs: vec![
                DownscaleJob::new("far_background_4k.png", "far_background_1080p.png"),
                DownscaleJob::new("far_floor_4k.png", "far_floor_1080p.png"),
            ],
            target_width: 1920,
            target_height: 1080,
        }
    }
}

/// `Vector2(from_x, Y)` -> `Vector2(to_x, Y)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbsoluteRewriteParams {
    pub file: PathBuf,
    /// Name of the literal constructor, e.g. `Vector2`
    pub literal: String,
    pub from_x: i64,
    pub to_x: i64,
}

impl Default for AbsoluteRewriteParams {
    fn default() -> Self {
        Self {
            file: PathBuf::from("entities/player/PlayerRigv2-m.tscn"),
            literal: "Vector2".to_string(),
            from_x: 407,
            to_x: 0,
        }
    }
}

/// `Vector2(x, N)` -> `Vector2(x, N - baseline)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineRewriteParams {
    pub file: PathBuf,
    pub literal: String,
    pub x: i64,
    pub baseline: i64,
    /// Inclusive value range counted before and after rewriting
    pub band: (i64, i64),
    pub scope: BaselineScope,
}

impl BaselineRewriteParams {
    pub fn in_band(&self, value: i64) -> bool {
        (self.band.0..=self.band.1).contains(&value)
    }
}

impl Default for BaselineRewriteParams {
    fn default() -> Self {
        Self {
            file: PathBuf::from("entities/player/PlayerRigv2-m.tscn"),
            literal: "Vector2".to_string(),
            x: 0,
            baseline: 280,
            band: (270, 299),
            scope: BaselineScope::All,
        }
    }
}

/// Constant translation applied to every pair of every array literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolygonParams {
    pub file: PathBuf,
    pub literal: String,
    pub offset: Vec2,
    /// Appended to the file name to form the backup path
    pub backup_suffix: String,
}

impl Default for PolygonParams {
    fn default() -> Self {
        Self {
            file: PathBuf::from("entities/player/PlayerRig.tscn"),
            literal: "PackedVector2Array".to_string(),
            offset: Vec2::new(-380.0, -200.0),
            backup_suffix: ".bak_coords".to_string(),
        }
    }
}

/// All tool parameters, suitable for a JSON config file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub downscale: DownscaleParams,
    pub hip_x: AbsoluteRewriteParams,
    pub hip_y: BaselineRewriteParams,
    pub polygons: PolygonParams,
}

impl ToolConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
