use std::path::PathBuf;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use scenefix::api::FileRewrite;
use scenefix::{
    AbsoluteRewriteParams, BaselineRewriteParams, BaselineScope, DownscaleParams, PolygonParams,
    ToolConfig, Vec2, downscale_backgrounds, rebase_keyframe_y_in_file,
    rewrite_keyframe_x_in_file, transform_polygons_in_file,
};

use super::args::{CliArgs, Command};
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when `run` is called more than once
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn load_config(args: &CliArgs) -> Result<ToolConfig, AppError> {
    match &args.config {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::MissingConfig {
                    path: path.display().to_string(),
                });
            }
            info!("Loading config from {:?}", path);
            Ok(ToolConfig::from_json_file(path)?)
        }
        None => Ok(ToolConfig::default()),
    }
}

fn apply_downscale_overrides(
    params: &mut DownscaleParams,
    dir: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<(), AppError> {
    if let Some(dir) = dir {
        params.dir = dir;
    }
    if let Some(width) = width {
        params.target_width = width;
    }
    if let Some(height) = height {
        params.target_height = height;
    }
    if params.target_width == 0 {
        return Err(AppError::ZeroDimension { axis: "width" });
    }
    if params.target_height == 0 {
        return Err(AppError::ZeroDimension { axis: "height" });
    }
    Ok(())
}

fn apply_hip_x_overrides(
    params: &mut AbsoluteRewriteParams,
    file: Option<PathBuf>,
    from_x: Option<i64>,
    to_x: Option<i64>,
) {
    if let Some(file) = file {
        params.file = file;
    }
    if let Some(from_x) = from_x {
        params.from_x = from_x;
    }
    if let Some(to_x) = to_x {
        params.to_x = to_x;
    }
}

fn apply_hip_y_overrides(
    params: &mut BaselineRewriteParams,
    file: Option<PathBuf>,
    baseline: Option<i64>,
    scope: Option<BaselineScope>,
) {
    if let Some(file) = file {
        params.file = file;
    }
    if let Some(baseline) = baseline {
        params.baseline = baseline;
    }
    if let Some(scope) = scope {
        params.scope = scope;
    }
}

fn apply_polygon_overrides(
    params: &mut PolygonParams,
    file: Option<PathBuf>,
    offset_x: Option<f64>,
    offset_y: Option<f64>,
    backup_suffix: Option<String>,
) {
    if let Some(file) = file {
        params.file = file;
    }
    params.offset = Vec2::new(
        offset_x.unwrap_or(params.offset.x),
        offset_y.unwrap_or(params.offset.y),
    );
    if let Some(suffix) = backup_suffix {
        params.backup_suffix = suffix;
    }
}

fn print_rewrite(result: &FileRewrite, title: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
    println!("Target file: {}", result.path.display());
    println!("Found {} targeted instance(s)", result.report.before);
    println!("Replaced {} instance(s)", result.report.replaced);
    println!("Remaining instances: {}", result.report.remaining());
    if result.changed {
        println!("Successfully updated {}", result.path.display());
    } else {
        println!("No changes made");
    }
}

fn exit_for(changed: bool) -> ExitCode {
    if changed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

pub fn run(args: CliArgs) -> Result<ExitCode, AppError> {
    init_logging(args.log);
    let mut config = load_config(&args)?;

    match args.command {
        Command::Downscale { dir, width, height } => {
            let params = &mut config.downscale;
            apply_downscale_overrides(params, dir, width, height)?;

            println!(
                "Downscaling backgrounds in {} to {}x{}",
                params.dir.display(),
                params.target_width,
                params.target_height
            );

            // missing inputs are already reported by a warning per file
            let report = downscale_backgrounds(params)?;

            for outcome in &report.outcomes {
                println!("{}", outcome.input.display());
                println!(
                    "   {}x{} ({:.1}MB) -> {}x{} ({:.1}MB)",
                    outcome.original_size.0,
                    outcome.original_size.1,
                    outcome.original_mb,
                    outcome.new_size.0,
                    outcome.new_size.1,
                    outcome.new_mb
                );
                println!("   Saved as: {}", outcome.output.display());
            }
            println!(
                "Done: processed={}, skipped={}",
                report.processed, report.skipped
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::HipX { file, from_x, to_x } => {
            let params = &mut config.hip_x;
            apply_hip_x_overrides(params, file, from_x, to_x);

            let result = rewrite_keyframe_x_in_file(params)?;
            print_rewrite(
                &result,
                &format!(
                    "Keyframe X rewrite: {}({}, Y) -> {}({}, Y)",
                    params.literal, params.from_x, params.literal, params.to_x
                ),
            );
            Ok(exit_for(result.changed))
        }
        Command::HipY {
            file,
            baseline,
            scope,
        } => {
            let params = &mut config.hip_y;
            apply_hip_y_overrides(params, file, baseline, scope);

            let result = rebase_keyframe_y_in_file(params)?;
            print_rewrite(
                &result,
                &format!(
                    "Keyframe Y rebase: {}({}, N) -> {}({}, N - {}), scope={}",
                    params.literal, params.x, params.literal, params.x, params.baseline, params.scope
                ),
            );
            Ok(exit_for(result.changed))
        }
        Command::Polygons {
            file,
            offset_x,
            offset_y,
            backup_suffix,
        } => {
            let params = &mut config.polygons;
            apply_polygon_overrides(params, file, offset_x, offset_y, backup_suffix);

            let result = transform_polygons_in_file(params)?;
            println!("Fixed coordinates in {}", result.path.display());
            println!("Backup saved to {}", result.backup.display());
            println!(
                "Applied offset: X={}, Y={} ({} array(s), {} pair(s))",
                result.report.offset.x,
                result.report.offset.y,
                result.report.arrays,
                result.report.pairs
            );
            Ok(ExitCode::SUCCESS)
        }
    }
}
