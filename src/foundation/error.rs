use std::path::Path;

pub type StampResult<T> = Result<T, StampError>;

#[derive(thiserror::Error, Debug)]
pub enum StampError {
    #[error("invalid color name: '{}' not found. Choose from: {}", .name, .valid.join(", "))]
    InvalidColorName { name: String, valid: Vec<String> },

    #[error("image load error: '{path}': {reason}")]
    ImageLoad { path: String, reason: String },

    #[error("font load error: '{path}': {reason}")]
    FontLoad { path: String, reason: String },

    #[error("output write error: '{path}': {reason}")]
    OutputWrite { path: String, reason: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StampError {
    pub fn invalid_color_name(name: impl Into<String>, valid: &[&str]) -> Self {
        Self::InvalidColorName {
            name: name.into(),
            valid: valid.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn image_load(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::ImageLoad {
            path: path.display().to_string(),
            reason: format!("{reason:#}"),
        }
    }

    pub fn font_load(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::FontLoad {
            path: path.display().to_string(),
            reason: format!("{reason:#}"),
        }
    }

    pub fn output_write(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::OutputWrite {
            path: path.display().to_string(),
            reason: format!("{reason:#}"),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
