use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use axum::Router;
use std::sync::Arc;

use crate::{
    models::{CreateEmployee, CreatedResponse, EmployeeResponse, MessageResponse, UpdateEmployee},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::employees::list_employees,
        crate::routes::employees::get_employee,
        crate::routes::employees::create_employee,
        crate::routes::employees::update_employee,
        crate::routes::employees::delete_employee,
    ),
    components(
        schemas(
            CreateEmployee, UpdateEmployee, EmployeeResponse, CreatedResponse, MessageResponse
        )
    ),
    tags(
        (name = "employees", description = "Employee record management endpoints"),
    ),
    info(
        title = "Staffdb API",
        version = "0.1.0",
        description = "CRUD API over the employee collection"
    )
)]
pub struct ApiDoc;

pub fn create_swagger_router() -> Router<Arc<AppState>> {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
