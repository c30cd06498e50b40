//! Typed failures raised while generating scaffolding.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Directory {} already exists", .0.display())]
    DirectoryExists(PathBuf),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl CodegenError {
    pub fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
