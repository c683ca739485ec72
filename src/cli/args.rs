use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scenefix::BaselineScope;

#[derive(Parser)]
#[command(name = "scenefix", version, about = "Asset and scene-file fixers")]
pub struct CliArgs {
    /// Enable debug logging
    #[arg(long, default_value_t = false, global = true)]
    pub log: bool,

    /// JSON config file overriding the built-in defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Downscale background images to a fixed resolution
    Downscale {
        /// Directory containing the background images
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Target width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Target height in pixels
        #[arg(long)]
        height: Option<u32>,
    },

    /// Replace the first component of Vector2(FROM_X, Y) keyframes
    HipX {
        /// Scene file to rewrite in place
        file: Option<PathBuf>,

        #[arg(long, allow_hyphen_values = true)]
        from_x: Option<i64>,

        #[arg(long, allow_hyphen_values = true)]
        to_x: Option<i64>,
    },

    /// Subtract a baseline from the second component of Vector2(0, N) keyframes
    HipY {
        /// Scene file to rewrite in place
        file: Option<PathBuf>,

        #[arg(long, allow_hyphen_values = true)]
        baseline: Option<i64>,

        /// Rebase every literal (all) or only those in the reporting band (band)
        #[arg(long, value_enum)]
        scope: Option<BaselineScope>,
    },

    /// Translate every PackedVector2Array pair by a constant offset
    Polygons {
        /// Scene file to rewrite in place (a backup is written first)
        file: Option<PathBuf>,

        #[arg(long, allow_hyphen_values = true)]
        offset_x: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        offset_y: Option<f64>,

        /// Suffix appended to the file name for the backup copy
        #[arg(long)]
        backup_suffix: Option<String>,
    },
}
