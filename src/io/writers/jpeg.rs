use image::ExtendedColorType;
use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::core::processing::raster::Raster;
use crate::error::{Error, Result};

/// Write an 8-bit grey, RGB or RGBA raster as a quality-100 JPEG; alpha is dropped.
pub fn write_jpeg(output: &Path, raster: &Raster) -> Result<()> {
    let (Ok(width), Ok(height)) = (u16::try_from(raster.width), u16::try_from(raster.height))
    else {
        return Err(Error::InvalidArgument {
            arg: "jpeg size",
            value: format!("{}x{}", raster.width, raster.height),
        });
    };

    let color_type = match raster.color {
        ExtendedColorType::L8 => ColorType::Luma,
        ExtendedColorType::Rgb8 => ColorType::Rgb,
        ExtendedColorType::Rgba8 => ColorType::Rgba,
        other => {
            return Err(Error::InvalidArgument {
                arg: "jpeg color type",
                value: format!("{:?}", other),
            });
        }
    };

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, 100);
    encoder.encode(&raster.data, width, height, color_type)?;
    Ok(())
}
