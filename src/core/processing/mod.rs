pub mod keyframe;
pub mod polygon;
pub mod raster;
pub mod resize;
