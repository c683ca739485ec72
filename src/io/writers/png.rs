use image::ImageEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::core::processing::raster::Raster;
use crate::error::Result;

/// Write a raster as a PNG in its own colour type, with maximum compression.
pub fn write_png(output: &Path, raster: &Raster) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(&raster.data, raster.width, raster.height, raster.color)?;
    Ok(())
}
