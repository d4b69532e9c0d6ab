use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcoError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("Meal not found: {0}")]
    MealNotFound(u32),

    #[error("Invalid quantity: {0} (must be a positive number of kg)")]
    InvalidQuantity(String),

    #[error("Invalid footprint: {0} (must be non-negative)")]
    InvalidFootprint(f64),

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

pub type Result<T> = std::result::Result<T, EcoError>;
