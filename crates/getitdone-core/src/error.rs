use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Malformed todo file")]
    Json(#[from] serde_json::Error),

    #[error("Todo not found: {0}")]
    NotFound(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
