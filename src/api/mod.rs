//! High-level library API: each entrypoint loads its file(s), runs one pure
//! transform from `core`, and writes the result. Prefer these over the
//! low-level processing modules when embedding scenefix.
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::params::{
    AbsoluteRewriteParams, BaselineRewriteParams, DownscaleParams, PolygonParams,
};
use crate::core::processing::keyframe::{KeyframeReport, rebase_y, rewrite_absolute_x};
use crate::core::processing::polygon::{PolygonReport, translate_arrays};
use crate::core::processing::raster::Raster;
use crate::core::processing::resize::resize_raster;
use crate::error::Result;
use crate::io::writers::write_raster;
use crate::io::{backup_path, file_size_mb, read_text, write_text};
use crate::types::OutputFormat;

/// Result of downscaling a single image
#[derive(Debug, Clone, PartialEq)]
pub struct DownscaleOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub original_size: (u32, u32),
    pub new_size: (u32, u32),
    pub original_mb: f64,
    pub new_mb: f64,
}

/// Summary of a downscale batch
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub outcomes: Vec<DownscaleOutcome>,
    /// Input names that were not found
    pub missing: Vec<String>,
}

/// Resize `input` to exactly `target` and encode it to `output`.
///
/// The encoder is picked from the output extension (`png`, `jpg`, `jpeg`).
pub fn downscale_image(input: &Path, output: &Path, target: (u32, u32)) -> Result<DownscaleOutcome> {
    let format = OutputFormat::from_path(output)?;

    let img = image::open(input)?;
    let original_size = (img.width(), img.height());
    let raster = match format {
        OutputFormat::PNG => Raster::from_image(img),
        OutputFormat::JPEG => Raster::from_image_for_jpeg(img),
    };

    let resized = resize_raster(&raster, target.0, target.1)?;
    write_raster(output, format, &resized)?;

    let outcome = DownscaleOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        original_size,
        new_size: target,
        original_mb: file_size_mb(input)?,
        new_mb: file_size_mb(output)?,
    };

    debug!(
        "{:?}: {}x{} ({:.1}MB) -> {}x{} ({:.1}MB) as {}",
        input,
        original_size.0,
        original_size.1,
        outcome.original_mb,
        target.0,
        target.1,
        outcome.new_mb,
        format
    );

    Ok(outcome)
}

/// Run every job in `params`, skipping inputs that do not exist.
///
/// Any other failure aborts the batch; outputs already written are kept.
pub fn downscale_backgrounds(params: &DownscaleParams) -> Result<BatchReport> {
    let target = (params.target_width, params.target_height);
    let mut report = BatchReport::default();

    for job in &params.jobs {
        let input_path = params.dir.join(&job.input);
        let output_path = params.dir.join(&job.output);

        if !input_path.exists() {
            warn!("Skipping {} (not found)", job.input);
            report.skipped += 1;
            report.missing.push(job.input.clone());
            continue;
        }

        let outcome = downscale_image(&input_path, &output_path, target)?;
        report.processed += 1;
        report.outcomes.push(outcome);
    }

    debug!(
        "Downscale complete: processed={}, skipped={}",
        report.processed, report.skipped
    );
    Ok(report)
}

/// Outcome of a keyframe rewrite against a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRewrite {
    pub path: PathBuf,
    pub report: KeyframeReport,
    /// True when the file was written back
    pub changed: bool,
}

/// Rewrite `Vector2(from_x, Y)` to `Vector2(to_x, Y)` in place.
///
/// The file is written only if at least one literal was replaced. No backup.
pub fn rewrite_keyframe_x_in_file(params: &AbsoluteRewriteParams) -> Result<FileRewrite> {
    let content = read_text(&params.file)?;
    let report = rewrite_absolute_x(&content, params)?;

    let changed = report.replaced > 0;
    if changed {
        write_text(&params.file, &report.content)?;
        debug!("Updated {:?}: {} replacement(s)", params.file, report.replaced);
    } else {
        debug!("No changes made to {:?}", params.file);
    }

    Ok(FileRewrite {
        path: params.file.clone(),
        report,
        changed,
    })
}

/// Subtract the baseline from `Vector2(x, N)` second components in place.
///
/// The file is written if any band literal was present or replaced. No backup.
pub fn rebase_keyframe_y_in_file(params: &BaselineRewriteParams) -> Result<FileRewrite> {
    let content = read_text(&params.file)?;
    let report = rebase_y(&content, params)?;

    let changed = report.replaced > 0 || report.before > 0;
    if changed {
        write_text(&params.file, &report.content)?;
        debug!(
            "Updated {:?}: {} band replacement(s), {} out-of-band",
            params.file, report.replaced, report.out_of_band
        );
    } else {
        debug!("No changes made to {:?}", params.file);
    }

    Ok(FileRewrite {
        path: params.file.clone(),
        report,
        changed,
    })
}

/// Outcome of a polygon translation against a file
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonRewrite {
    pub path: PathBuf,
    pub backup: PathBuf,
    pub report: PolygonReport,
}

/// Translate every array literal in the file by `params.offset`.
///
/// The unmodified original is written to the backup path before the file is
/// overwritten. Nothing is written if any array is malformed.
pub fn transform_polygons_in_file(params: &PolygonParams) -> Result<PolygonRewrite> {
    let content = read_text(&params.file)?;
    let report = translate_arrays(&content, params)?;

    let backup = backup_path(&params.file, &params.backup_suffix);
    write_text(&backup, &content)?;
    write_text(&params.file, &report.content)?;

    debug!(
        "Translated {} array(s), {} pair(s) in {:?}; backup at {:?}",
        report.arrays, report.pairs, params.file, backup
    );

    Ok(PolygonRewrite {
        path: params.file.clone(),
        backup,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::core::params::DownscaleJob;
    use crate::types::Vec2;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    fn write_png(path: &Path, cols: u32, rows: u32) {
        RgbaImage::from_fn(cols, rows, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 90, 255]))
            .save(path)
            .unwrap();
    }

    fn small_params(dir: &Path) -> DownscaleParams {
        DownscaleParams {
            dir: dir.to_path_buf(),
            jobs: vec![
                DownscaleJob::new("missing_4k.png", "missing_1080p.png"),
                DownscaleJob::new("wide_4k.png", "wide_1080p.png"),
                DownscaleJob::new("tall_4k.png", "tall_1080p.jpg"),
            ],
            target_width: 64,
            target_height: 36,
        }
    }

    #[test]
    fn downscale_batch_skips_missing_and_hits_exact_target() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write_png(&dir.path().join("wide_4k.png"), 256, 100);
        write_png(&dir.path().join("tall_4k.png"), 90, 200);

        let report = downscale_backgrounds(&small_params(dir.path()))?;

        assert_eq!(report.processed, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.missing, vec!["missing_4k.png".to_string()]);
        assert!(!dir.path().join("missing_1080p.png").exists());

        for name in ["wide_1080p.png", "tall_1080p.jpg"] {
            let out = image::open(dir.path().join(name))?;
            assert_eq!((out.width(), out.height()), (64, 36), "{}", name);
        }
        assert_eq!(report.outcomes[0].original_size, (256, 100));
        assert_eq!(report.outcomes[1].original_size, (90, 200));
        Ok(())
    }

    #[test]
    fn downscale_keeps_source_color_type() -> Result<()> {
        let dir = tempfile::tempdir()?;

        let rgb = dir.path().join("far_floor_4k.png");
        RgbImage::from_fn(200, 100, |x, _| Rgb([(x % 256) as u8, 40, 200])).save(&rgb)?;
        let grey = dir.path().join("far_mask_4k.png");
        GrayImage::from_fn(120, 80, |x, y| Luma([((x + y) % 256) as u8])).save(&grey)?;
        let rgba = dir.path().join("far_fog_4k.png");
        write_png(&rgba, 100, 100);

        for (input, output) in [
            (&rgb, "far_floor_1080p.png"),
            (&grey, "far_mask_1080p.png"),
            (&rgba, "far_fog_1080p.png"),
        ] {
            let output = dir.path().join(output);
            downscale_image(input, &output, (64, 36))?;

            let src = image::open(input)?;
            let dst = image::open(&output)?;
            assert_eq!(src.color(), dst.color(), "{:?}", output);
            assert_eq!((dst.width(), dst.height()), (64, 36));
        }
        Ok(())
    }

    #[test]
    fn downscale_to_jpeg_drops_alpha() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("far_background_4k.png");
        write_png(&input, 100, 60);
        let output = dir.path().join("far_background_1080p.jpg");

        downscale_image(&input, &output, (64, 36))?;

        assert_eq!(image::open(&output)?.color(), image::ColorType::Rgb8);
        Ok(())
    }

    #[test]
    fn downscale_batch_with_nothing_present_is_not_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let report = downscale_backgrounds(&DownscaleParams {
            dir: dir.path().to_path_buf(),
            ..Default::default()
        })?;

        assert_eq!(report.processed, 0);
        assert_eq!(report.skipped, 2);
        Ok(())
    }

    #[test]
    fn downscale_rejects_unknown_output_extension() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("bg.png");
        write_png(&input, 32, 32);

        let result = downscale_image(&input, &dir.path().join("bg.bmp"), (16, 9));
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
        Ok(())
    }

    #[test]
    fn keyframe_x_writes_only_when_changed() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("PlayerRigv2-m.tscn");
        std::fs::write(&path, "values = [Vector2(407, 280), Vector2(407, 290)]\n")?;
        let params = AbsoluteRewriteParams {
            file: path.clone(),
            ..Default::default()
        };

        let first = rewrite_keyframe_x_in_file(&params)?;
        assert!(first.changed);
        assert_eq!(first.report.replaced, 2);
        assert_eq!(
            std::fs::read_to_string(&path)?,
            "values = [Vector2(0, 280), Vector2(0, 290)]\n"
        );

        let second = rewrite_keyframe_x_in_file(&params)?;
        assert!(!second.changed);
        assert_eq!(second.report.replaced, 0);
        Ok(())
    }

    #[test]
    fn keyframe_y_rebases_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("PlayerRigv2-m.tscn");
        std::fs::write(&path, "[Vector2(0, 285), Vector2(0, 280)]")?;
        let params = BaselineRewriteParams {
            file: path.clone(),
            ..Default::default()
        };

        let result = rebase_keyframe_y_in_file(&params)?;
        assert!(result.changed);
        assert_eq!(
            std::fs::read_to_string(&path)?,
            "[Vector2(0, 5), Vector2(0, 0)]"
        );
        Ok(())
    }

    #[test]
    fn keyframe_y_without_band_literals_leaves_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("rig.tscn");
        std::fs::write(&path, "[Vector2(0, 12)]")?;
        let params = BaselineRewriteParams {
            file: path.clone(),
            ..Default::default()
        };

        let result = rebase_keyframe_y_in_file(&params)?;
        assert!(!result.changed);
        assert_eq!(std::fs::read_to_string(&path)?, "[Vector2(0, 12)]");
        Ok(())
    }

    #[test]
    fn missing_scene_file_is_io_error() {
        let params = AbsoluteRewriteParams {
            file: PathBuf::from("/definitely/not/here.tscn"),
            ..Default::default()
        };
        assert!(matches!(
            rewrite_keyframe_x_in_file(&params),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn polygon_backup_matches_original_and_pairs_are_offset() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("PlayerRig.tscn");
        let original = "polygon = PackedVector2Array(400, 250, 380.5, 200)\r\nuv = PackedVector2Array(0, 0)\n";
        std::fs::write(&path, original)?;
        let params = PolygonParams {
            file: path.clone(),
            ..Default::default()
        };

        let result = transform_polygons_in_file(&params)?;

        assert_eq!(result.backup, dir.path().join("PlayerRig.tscn.bak_coords"));
        assert_eq!(std::fs::read(&result.backup)?, original.as_bytes());
        assert_eq!(result.report.offset, Vec2::new(-380.0, -200.0));
        assert_eq!(
            std::fs::read_to_string(&path)?,
            "polygon = PackedVector2Array(20.0, 50.0, 0.5, 0.0)\r\nuv = PackedVector2Array(-380.0, -200.0)\n"
        );
        Ok(())
    }

    #[test]
    fn malformed_polygon_writes_nothing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("PlayerRig.tscn");
        std::fs::write(&path, "PackedVector2Array(1, 2, 3)")?;
        let params = PolygonParams {
            file: path.clone(),
            ..Default::default()
        };

        assert!(matches!(
            transform_polygons_in_file(&params),
            Err(Error::UnpairedCoordinate { .. })
        ));
        assert!(!dir.path().join("PlayerRig.tscn.bak_coords").exists());
        assert_eq!(std::fs::read_to_string(&path)?, "PackedVector2Array(1, 2, 3)");
        Ok(())
    }
}
