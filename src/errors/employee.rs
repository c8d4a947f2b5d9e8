use axum::http::StatusCode;
use thiserror::Error;

use super::{impl_into_response, AppError};

/// Errors related to employee operations
#[derive(Error, Debug)]
pub enum EmployeeError {
    #[error("Employee not found")]
    NotFound,

    #[error("Invalid employee id '{id}'")]
    InvalidId { id: String },

    #[error("Invalid request body: {details}")]
    InvalidBody { details: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl AppError for EmployeeError {
    fn status_code(&self) -> StatusCode {
        match self {
            EmployeeError::NotFound => StatusCode::NOT_FOUND,
            EmployeeError::InvalidId { .. } | EmployeeError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            EmployeeError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn user_message(&self) -> String {
        match self {
            EmployeeError::NotFound => "Employee not found".to_string(),
            EmployeeError::InvalidId { .. } => "Invalid ID format".to_string(),
            EmployeeError::InvalidBody { .. } => "Invalid request body".to_string(),
            EmployeeError::Database { .. } => "An internal error occurred".to_string(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EmployeeError::NotFound => "EMPLOYEE_NOT_FOUND",
            EmployeeError::InvalidId { .. } => "EMPLOYEE_INVALID_ID",
            EmployeeError::InvalidBody { .. } => "EMPLOYEE_INVALID_BODY",
            EmployeeError::Database { .. } => "EMPLOYEE_DATABASE_ERROR",
        }
    }
}

impl_into_response!(EmployeeError);

impl From<anyhow::Error> for EmployeeError {
    fn from(err: anyhow::Error) -> Self {
        EmployeeError::Database { message: format!("{:#}", err) }
    }
}
