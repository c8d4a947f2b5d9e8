//! Test utilities for building an application instance backed by either a
//! throwaway MongoDB container or a client that never reaches a server.

#[cfg(any(test, feature = "test-utils"))]
use std::sync::Arc;
#[cfg(any(test, feature = "test-utils"))]
use crate::{config::Config, db::Database, AppState};
#[cfg(any(test, feature = "test-utils"))]
use axum::{body::Body, http::{Request, StatusCode}, Router};
#[cfg(any(test, feature = "test-utils"))]
use mongodb::bson::oid::ObjectId;
#[cfg(any(test, feature = "test-utils"))]
use testcontainers::{runners::AsyncRunner, ContainerAsync};
#[cfg(any(test, feature = "test-utils"))]
use testcontainers_modules::mongo::Mongo;
#[cfg(any(test, feature = "test-utils"))]
use tower::util::ServiceExt;

/// Config pointing at `mongo_uri` with a database name unique to this call.
#[cfg(any(test, feature = "test-utils"))]
pub fn test_config(mongo_uri: &str) -> Config {
    Config {
        mongo_uri: mongo_uri.to_string(),
        database_name: format!("staffdb_test_{}", ObjectId::new().to_hex()),
        collection_name: crate::config::DEFAULT_COLLECTION.to_string(),
        server_address: "127.0.0.1:0".to_string(),
        connect_timeout_seconds: 1,
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub struct TestContext {
    pub app: Router,
    pub state: Arc<AppState>,
    _container: Option<ContainerAsync<Mongo>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestContext {
    /// Starts a MongoDB container and connects to a fresh database on it.
    /// Requires a running Docker daemon.
    pub async fn new() -> Self {
        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start mongo container");
        let host = container.get_host().await.expect("Failed to get mongo host");
        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get mongo port");

        let mut config = test_config(&format!("mongodb://{}:{}", host, port));
        config.connect_timeout_seconds = 10;
        let db = Database::new(&config).await.expect("Failed to connect to test database");

        Self::from_parts(db, config, Some(container))
    }

    /// Builds the app around a client that has not contacted any server.
    /// Only suitable for requests rejected before reaching the database.
    pub async fn without_database() -> Self {
        let config = test_config("mongodb://127.0.0.1:27017");
        let db = Database::new_lazy(&config).await.expect("Failed to build lazy client");
        Self::from_parts(db, config, None)
    }

    fn from_parts(db: Database, config: Config, container: Option<ContainerAsync<Mongo>>) -> Self {
        let state = Arc::new(AppState { db, config });
        Self {
            app: crate::app(state.clone()),
            state,
            _container: container,
        }
    }

    pub fn db(&self) -> &Database {
        &self.state.db
    }

    /// Sends one request through the router and decodes the JSON reply.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_uses_unique_database_names() {
        let a = test_config("mongodb://localhost:27017");
        let b = test_config("mongodb://localhost:27017");

        assert_ne!(a.database_name, b.database_name);
        assert!(a.database_name.starts_with("staffdb_test_"));
        assert_eq!(a.collection_name, "employee");
    }
}
