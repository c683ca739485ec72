use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Target {axis} must be greater than 0")]
    ZeroDimension { axis: &'static str },

    #[error("Config file not found: {path}")]
    MissingConfig { path: String },

    #[error(transparent)]
    Lib(#[from] scenefix::Error),
}
