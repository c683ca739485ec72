//! I/O layer: whole-file text reads and writes for scene files, backup
//! paths, and `writers` for PNG/JPEG image outputs.
pub mod text;
pub use text::{backup_path, file_size_mb, read_text, write_text};

pub mod writers;
