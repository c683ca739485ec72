use fast_image_resize::PixelType;
use image::{ColorType, DynamicImage, ExtendedColorType};
use tracing::debug;

/// Decoded pixels in their source layout, ready for resizing and encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixel_type: PixelType,
    pub color: ExtendedColorType,
    /// Interleaved samples; 16-bit samples are native-endian
    pub data: Vec<u8>,
}

fn layout(color: ColorType) -> Option<(PixelType, ExtendedColorType)> {
    Some(match color {
        ColorType::L8 => (PixelType::U8, ExtendedColorType::L8),
        ColorType::La8 => (PixelType::U8x2, ExtendedColorType::La8),
        ColorType::Rgb8 => (PixelType::U8x3, ExtendedColorType::Rgb8),
        ColorType::Rgba8 => (PixelType::U8x4, ExtendedColorType::Rgba8),
        ColorType::L16 => (PixelType::U16, ExtendedColorType::L16),
        ColorType::La16 => (PixelType::U16x2, ExtendedColorType::La16),
        ColorType::Rgb16 => (PixelType::U16x3, ExtendedColorType::Rgb16),
        ColorType::Rgba16 => (PixelType::U16x4, ExtendedColorType::Rgba16),
        _ => return None,
    })
}

impl Raster {
    /// Keep the decoded colour type. Float images fall back to 8-bit RGB(A).
    pub fn from_image(img: DynamicImage) -> Self {
        let img = match layout(img.color()) {
            Some(_) => img,
            None if img.color().has_alpha() => DynamicImage::ImageRgba8(img.to_rgba8()),
            None => DynamicImage::ImageRgb8(img.to_rgb8()),
        };
        Self::from_supported(img)
    }

    /// 8-bit grey or RGB only, the layouts a baseline JPEG can carry.
    pub fn from_image_for_jpeg(img: DynamicImage) -> Self {
        let img = match img.color() {
            ColorType::L8 | ColorType::Rgb8 => img,
            ColorType::L16 => DynamicImage::ImageLuma8(img.to_luma8()),
            ColorType::La8 | ColorType::La16 => {
                debug!("Dropping alpha for JPEG output");
                DynamicImage::ImageLuma8(img.to_luma8())
            }
            _ => {
                debug!("Converting {:?} to Rgb8 for JPEG output", img.color());
                DynamicImage::ImageRgb8(img.to_rgb8())
            }
        };
        Self::from_supported(img)
    }

    fn from_supported(img: DynamicImage) -> Self {
        let (pixel_type, color) =
            layout(img.color()).unwrap_or((PixelType::U8x4, ExtendedColorType::Rgba8));
        Self {
            width: img.width(),
            height: img.height(),
            pixel_type,
            color,
            data: img.into_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Rgb, RgbaImage, RgbImage};

    #[test]
    fn rgb_stays_three_channel() {
        let raster = Raster::from_image(DynamicImage::ImageRgb8(RgbImage::new(4, 2)));
        assert_eq!(raster.pixel_type, PixelType::U8x3);
        assert_eq!(raster.color, ExtendedColorType::Rgb8);
        assert_eq!(raster.data.len(), 4 * 2 * 3);
    }

    #[test]
    fn sixteen_bit_keeps_depth() {
        let img: ImageBuffer<Rgb<u16>, Vec<u16>> = ImageBuffer::new(3, 3);
        let raster = Raster::from_image(DynamicImage::ImageRgb16(img));
        assert_eq!(raster.pixel_type, PixelType::U16x3);
        assert_eq!(raster.data.len(), 3 * 3 * 3 * 2);
    }

    #[test]
    fn float_falls_back_to_eight_bit() {
        let img = DynamicImage::ImageRgb32F(image::Rgb32FImage::new(2, 2));
        assert_eq!(Raster::from_image(img).color, ExtendedColorType::Rgb8);
    }

    #[test]
    fn jpeg_layout_drops_alpha() {
        let rgba = Raster::from_image_for_jpeg(DynamicImage::ImageRgba8(RgbaImage::new(2, 2)));
        assert_eq!(rgba.color, ExtendedColorType::Rgb8);

        let grey = Raster::from_image_for_jpeg(DynamicImage::ImageLuma8(GrayImage::new(2, 2)));
        assert_eq!(grey.color, ExtendedColorType::L8);
    }
}
