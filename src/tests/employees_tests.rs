/// Router tests for requests that are rejected before any database call,
/// so they run without a MongoDB server.

#[cfg(test)]
mod tests {
    use crate::errors::AppError;
    use crate::models::UpdateEmployee;
    use crate::routes::employees::{decode_body, parse_object_id};
    use crate::test_utils::TestContext;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::json;

    #[test]
    fn test_parse_object_id() {
        let hex = "507f1f77bcf86cd799439011";
        assert_eq!(parse_object_id(hex).unwrap().to_hex(), hex);

        assert!(parse_object_id("123").is_err());
        assert!(parse_object_id("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert!(parse_object_id("").is_err());
    }

    #[tokio::test]
    async fn test_get_employee_invalid_id() {
        let ctx = TestContext::without_database().await;

        let (status, body) = ctx.request("GET", "/api/employees/not-an-id", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid ID format");
        assert_eq!(body["code"], "EMPLOYEE_INVALID_ID");
    }

    #[tokio::test]
    async fn test_delete_employee_invalid_id() {
        let ctx = TestContext::without_database().await;

        let (status, body) = ctx.request("DELETE", "/api/employees/1234", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_update_employee_invalid_id() {
        let ctx = TestContext::without_database().await;
        let update = json!({ "username": "Kong", "password": 2222, "skills": [] });

        let (status, _) = ctx.request("PUT", "/api/employees/xyz", Some(update)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_employee_malformed_body() {
        let ctx = TestContext::without_database().await;
        let request = Request::builder()
            .method("PUT")
            .uri("/api/employees/507f1f77bcf86cd799439011")
            .header("Content-Type", "application/json")
            .body(Body::from("{\"username\": "))
            .unwrap();

        let (status, body) = ctx.send(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request body");
        assert_eq!(body["code"], "EMPLOYEE_INVALID_BODY");
    }

    #[tokio::test]
    async fn test_create_employee_wrong_field_type() {
        let ctx = TestContext::without_database().await;
        let create = json!({ "username": "PP", "password": "not-a-number" });

        let (status, body) = ctx.request("POST", "/api/employees", Some(create)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid request body");
    }

    #[tokio::test]
    async fn test_create_employee_without_content_type_reaches_database() {
        let ctx = TestContext::without_database().await;
        let request = Request::builder()
            .method("POST")
            .uri("/api/employees")
            .body(Body::from(r#"{"username":"PP","password":1}"#))
            .unwrap();

        let (status, body) = ctx.send(request).await;

        // No server is listening, so the insert itself fails
        assert_ne!(status, StatusCode::BAD_REQUEST);
        assert_ne!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_ne!(body["code"], "EMPLOYEE_INVALID_BODY");
    }

    #[tokio::test]
    async fn test_update_employee_form_content_type_reaches_database() {
        let ctx = TestContext::without_database().await;
        let request = Request::builder()
            .method("PUT")
            .uri("/api/employees/507f1f77bcf86cd799439011")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(r#"{"username":"Kong","password":2222,"skills":[]}"#))
            .unwrap();

        let (status, body) = ctx.send(request).await;

        assert_ne!(status, StatusCode::BAD_REQUEST);
        assert_ne!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_ne!(body["code"], "EMPLOYEE_INVALID_BODY");
    }

    #[test]
    fn test_decode_body() {
        let update: UpdateEmployee =
            decode_body(br#"{"username":"Kong","password":2222}"#).unwrap();
        assert_eq!(update.username, "Kong");
        assert!(update.skills.is_empty());

        let err = decode_body::<UpdateEmployee>(b"{\"username\": ").unwrap_err();
        assert_eq!(err.user_message(), "Invalid request body");
        assert!(decode_body::<UpdateEmployee>(b"").is_err());
    }

    #[tokio::test]
    async fn test_create_employee_invalid_supplied_id() {
        let ctx = TestContext::without_database().await;
        let create = json!({ "id": "bogus", "username": "PP", "password": 1122 });

        let (status, body) = ctx.request("POST", "/api/employees", Some(create)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "EMPLOYEE_INVALID_ID");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let ctx = TestContext::without_database().await;

        let (status, body) = ctx.request("GET", "/api/nothing-here", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let ctx = TestContext::without_database().await;

        let (status, body) = ctx.request("GET", "/api-docs/openapi.json", None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/employees/{id}"].is_object());
    }
}
