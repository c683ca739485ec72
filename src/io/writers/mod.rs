//! Image encoders for downscaled outputs.
pub mod jpeg;
pub mod png;

use std::path::Path;

use crate::core::processing::raster::Raster;
use crate::error::Result;
use crate::types::OutputFormat;

pub use jpeg::write_jpeg;
pub use png::write_png;

pub fn write_raster(output: &Path, format: OutputFormat, raster: &Raster) -> Result<()> {
    match format {
        OutputFormat::PNG => write_png(output, raster),
        OutputFormat::JPEG => write_jpeg(output, raster),
    }
}
