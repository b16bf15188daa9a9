use axum::http::StatusCode;
use thiserror::Error;

/// Backend errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sales rep not found: {0}")]
    SalesRepNotFound(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::SalesRepNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidPeriod(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::SalesRepNotFound("rep9".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Config("bad".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::SalesRepNotFound("rep9".into()).to_string(),
            "Sales rep not found: rep9"
        );
    }
}
