use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::{debug, warn};

use crate::core::processing::raster::Raster;
use crate::error::{Error, Result};

/// Resize a raster to exactly `target_cols` x `target_rows` in its own pixel type.
///
/// The aspect ratio is not preserved: the output always has the requested
/// dimensions. Uses a Lanczos3 convolution, the closest match to a
/// high-quality area/Lanczos downscale.
pub fn resize_raster(src: &Raster, target_cols: u32, target_rows: u32) -> Result<Raster> {
    if target_cols == 0 || target_rows == 0 {
        return Err(Error::InvalidArgument {
            arg: "target size",
            value: format!("{}x{}", target_cols, target_rows),
        });
    }

    if target_cols > src.width || target_rows > src.height {
        warn!(
            "Target size {}x{} is larger than original {}x{}; image will be upscaled",
            target_cols, target_rows, src.width, src.height
        );
    }

    if (src.width, src.height) == (target_cols, target_rows) {
        debug!("Image already at {}x{}, skipping resize", target_cols, target_rows);
        return Ok(src.clone());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(src.width, src.height, src.data.clone(), src.pixel_type)?;
    let mut dst_image = Image::new(target_cols, target_rows, src.pixel_type);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(Raster {
        width: target_cols,
        height: target_rows,
        pixel_type: src.pixel_type,
        color: src.color,
        data: dst_image.into_vec(),
    })
}
