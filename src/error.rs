use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacroError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No feasible selection satisfies the nutrition constraints")]
    Infeasible,

    #[error("Solver did not converge within {iterations} pivots")]
    NonConvergence { iterations: usize },

    #[error("Objective is unbounded below")]
    Unbounded,

    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl MacroError {
    /// True for failures caused by the request itself rather than the environment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            MacroError::InvalidInput(_) | MacroError::Infeasible | MacroError::FoodNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MacroError>;
