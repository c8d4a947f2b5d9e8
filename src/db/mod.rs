use anyhow::{Context, Result};
use mongodb::{
    bson::doc,
    options::ClientOptions,
    Client, Collection,
};

use crate::config::Config;
use crate::models::Employee;

pub mod employees;

/// Owns the MongoDB client and the employee collection handle.
#[derive(Clone, Debug)]
pub struct Database {
    client: Client,
    employees: Collection<Employee>,
}

/// Parses `MONGO_URI`. Timeouts and app name given in the URI win over
/// `CONNECT_TIMEOUT_SECONDS` and the crate name.
pub async fn client_options(config: &Config) -> Result<ClientOptions> {
    let mut options = ClientOptions::parse(&config.mongo_uri)
        .await
        .context("Failed to parse MONGO_URI")?;
    if options.connect_timeout.is_none() {
        options.connect_timeout = Some(config.connect_timeout());
    }
    if options.server_selection_timeout.is_none() {
        options.server_selection_timeout = Some(config.connect_timeout());
    }
    if options.app_name.is_none() {
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    }
    Ok(options)
}

impl Database {
    /// Connects and pings the server so a bad URI fails at startup.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = Self::new_lazy(config).await?;
        db.ping().await?;
        tracing::info!(
            "Connected to MongoDB (database '{}', collection '{}')",
            config.database_name,
            config.collection_name
        );
        Ok(db)
    }

    /// Builds the client without contacting the server. The driver only
    /// opens connections on the first operation.
    pub async fn new_lazy(config: &Config) -> Result<Self> {
        let options = client_options(config).await?;
        let client = Client::with_options(options)?;
        let employees = client
            .database(&config.database_name)
            .collection::<Employee>(&config.collection_name);

        Ok(Self { client, employees })
    }

    pub async fn ping(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .context("Cannot connect to MongoDB")?;
        Ok(())
    }

    pub fn employees(&self) -> &Collection<Employee> {
        &self.employees
    }

    /// Shuts the client down, waiting for in-flight operations to finish.
    pub async fn close(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_config;
    use std::time::Duration;

    #[tokio::test]
    async fn test_config_timeout_applies_when_uri_is_silent() {
        let config = test_config("mongodb://localhost:27017");
        let options = client_options(&config).await.unwrap();

        assert_eq!(options.connect_timeout, Some(Duration::from_secs(1)));
        assert_eq!(options.server_selection_timeout, Some(Duration::from_secs(1)));
        assert_eq!(options.app_name.as_deref(), Some("staffdb"));
    }

    #[tokio::test]
    async fn test_uri_timeouts_take_precedence() {
        let config = test_config(
            "mongodb://localhost:27017/?connectTimeoutMS=2500&serverSelectionTimeoutMS=4000&appName=hr",
        );
        let options = client_options(&config).await.unwrap();

        assert_eq!(options.connect_timeout, Some(Duration::from_millis(2500)));
        assert_eq!(options.server_selection_timeout, Some(Duration::from_millis(4000)));
        assert_eq!(options.app_name.as_deref(), Some("hr"));
    }

    #[tokio::test]
    async fn test_invalid_uri_is_rejected() {
        let config = test_config("not-a-mongo-uri");
        let err = client_options(&config).await.unwrap_err();
        assert!(err.to_string().contains("MONGO_URI"));
    }
}
