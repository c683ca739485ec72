#![doc = r#"
scenefix — single-run asset and scene-file fixers for a 2D Godot project.

Three independent tools, each "load file → transform → write file":

- **Image downscaler**: resizes background images to exactly 1920×1080 with a
  Lanczos3 filter and writes compressed PNG (or JPEG) outputs, skipping inputs
  that are not present.
- **Keyframe coordinate rewriters**: lexical rewrites of `Vector2(x, y)`
  keyframe literals in `.tscn` files, either replacing a fixed first component
  (`Vector2(407, Y)` → `Vector2(0, Y)`) or subtracting a baseline from the
  second one (`Vector2(0, N)` → `Vector2(0, N - 280)`).
- **Polygon coordinate transformer**: translates every pair in every
  `PackedVector2Array(...)` literal by a constant offset, after writing a
  `.bak_coords` backup of the original.

Scene files are treated as opaque text. Any literal with the targeted textual
shape is rewritten, whether or not it belongs to the animation or polygon the
edit was meant for.

Rewrite a scene in memory
-------------------------
```rust
use scenefix::core::params::AbsoluteRewriteParams;
use scenefix::core::processing::keyframe::rewrite_absolute_x;

fn main() -> scenefix::Result<()> {
    let report = rewrite_absolute_x(
        "\"values\": [Vector2(407, 280), Vector2(407, 281)]",
        &AbsoluteRewriteParams::default(),
    )?;
    assert_eq!(report.replaced, 2);
    assert_eq!(report.content, "\"values\": [Vector2(0, 280), Vector2(0, 281)]");
    Ok(())
}
```

Downscale the configured backgrounds
------------------------------------
```rust,no_run
use std::path::PathBuf;
use scenefix::{DownscaleParams, downscale_backgrounds};

fn main() -> scenefix::Result<()> {
    let params = DownscaleParams {
        dir: PathBuf::from("/game/assets/art/environment/backgrounds"),
        ..Default::default()
    };
    let report = downscale_backgrounds(&params)?;
    println!("processed={} skipped={}", report.processed, report.skipped);
    Ok(())
}
```

Error handling
--------------
All public functions return `scenefix::Result<T>`; match on `scenefix::Error`
to tell I/O, codec and malformed-literal failures apart.

Useful modules
--------------
- [`api`] — file-level entry points.
- [`core`] — typed parameters and the pure transforms.
- [`io`] — text helpers and image writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::{
    AbsoluteRewriteParams, BaselineRewriteParams, DownscaleJob, DownscaleParams, PolygonParams,
    ToolConfig,
};
pub use error::{Error, Result};
pub use types::{BaselineScope, OutputFormat, Vec2};

// Pure transforms
pub use crate::core::processing::keyframe::{KeyframeReport, rebase_y, rewrite_absolute_x};
pub use crate::core::processing::polygon::{PolygonReport, translate_arrays};

// High-level API re-exports
pub use api::{
    BatchReport, DownscaleOutcome, FileRewrite, PolygonRewrite, downscale_backgrounds,
    downscale_image, rebase_keyframe_y_in_file, rewrite_keyframe_x_in_file,
    transform_polygons_in_file,
};
