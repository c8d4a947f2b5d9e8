use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use mongodb::bson::oid::ObjectId;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::info;

use crate::{
    errors::employee::EmployeeError,
    models::{CreateEmployee, CreatedResponse, Employee, EmployeeResponse, MessageResponse, UpdateEmployee},
    AppState,
};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/{id}", get(get_employee).put(update_employee).delete(delete_employee))
}

pub fn parse_object_id(id: &str) -> Result<ObjectId, EmployeeError> {
    ObjectId::parse_str(id).map_err(|_| EmployeeError::InvalidId { id: id.to_string() })
}

/// Decodes a JSON request body regardless of the declared content type.
pub fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, EmployeeError> {
    serde_json::from_slice(bytes).map_err(|e| EmployeeError::InvalidBody { details: e.to_string() })
}

#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    responses(
        (status = 200, description = "List of all employees", body = Vec<EmployeeResponse>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EmployeeResponse>>, EmployeeError> {
    let employees = state.db.get_all_employees().await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "employees",
    params(
        ("id" = String, Path, description = "Employee ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Employee information", body = EmployeeResponse),
        (status = 400, description = "Invalid ID format"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<EmployeeResponse>, EmployeeError> {
    let id = parse_object_id(&id)?;
    let employee = state
        .db
        .get_employee_by_id(id)
        .await?
        .ok_or(EmployeeError::NotFound)?;

    Ok(Json(employee.into()))
}

#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = CreatedResponse),
        (status = 400, description = "Invalid request body or ID format"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    payload: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), EmployeeError> {
    let data: CreateEmployee = decode_body(&payload)?;
    let id = data.id.as_deref().map(parse_object_id).transpose()?;

    let employee = Employee {
        id,
        username: data.username,
        password: data.password,
        skills: data.skills,
    };
    let id = state.db.create_employee(employee).await?;
    info!("Created employee {}", id);

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: id.to_hex() })))
}

#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "employees",
    params(
        ("id" = String, Path, description = "Employee ObjectId (24 hex characters)")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = MessageResponse),
        (status = 400, description = "Invalid request body or ID format"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Bytes,
) -> Result<Json<MessageResponse>, EmployeeError> {
    let id = parse_object_id(&id)?;
    let update: UpdateEmployee = decode_body(&payload)?;

    let outcome = state.db.update_employee(id, &update).await?;
    if outcome.matched_count == 0 {
        return Err(EmployeeError::NotFound);
    }
    info!(
        "Updated employee {} (matched {}, modified {})",
        id, outcome.matched_count, outcome.modified_count
    );

    Ok(Json(MessageResponse::new("Employee updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "employees",
    params(
        ("id" = String, Path, description = "Employee ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 400, description = "Invalid ID format"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, EmployeeError> {
    let id = parse_object_id(&id)?;

    if state.db.delete_employee(id).await? == 0 {
        return Err(EmployeeError::NotFound);
    }
    info!("Deleted employee {}", id);

    Ok(Json(MessageResponse::new("Employee deleted successfully")))
}
