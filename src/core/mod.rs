//! Core building blocks: typed parameters, image resizing, and the lexical
//! keyframe and polygon rewrites. These are pure primitives consumed by the
//! high-level `api` module, which owns all file I/O.
pub mod params;
pub mod processing;
