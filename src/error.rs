use thiserror::Error;

use crate::models::CategoryTag;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("No products in the {0} bucket; cannot generate a menu")]
    Precondition(CategoryTag),

    #[error("No menu within tolerance after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("Invalid weekly target for {name}: {value}")]
    InvalidTarget { name: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;
