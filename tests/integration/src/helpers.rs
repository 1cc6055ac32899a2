//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use marine_api::{create_app, create_app_state, serve};
use marine_common::AppConfig;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Key whitelisted on every test server
pub const ADMIN_KEY: &str = "integration-admin-key";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    data_dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with default access settings
    pub async fn start() -> Result<Self> {
        Self::start_with(&[]).await
    }

    /// Start a test server with extra configuration variables
    pub async fn start_with(vars: &[(&str, &str)]) -> Result<Self> {
        let data_dir = tempfile::tempdir()?;
        let config = test_config(&data_dir, vars)?;

        let state = create_app_state(config)?;
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            data_dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Path of the JSON document backing this server
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.path().join("db.json")
    }

    /// Parsed contents of the data file
    pub fn document(&self) -> Result<serde_json::Value> {
        let raw = std::fs::read_to_string(self.data_file())?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a DELETE request with JSON body
    pub async fn delete_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).json(body).send().await?)
    }

    /// Make a GET request as the admin
    pub async fn get_admin(&self, path: &str) -> Result<Response> {
        Ok(admin(self.client.get(self.url(path))).send().await?)
    }

    /// Make a POST request as the admin
    pub async fn post_admin<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(admin(self.client.post(self.url(path))).json(body).send().await?)
    }

    /// Make a PATCH request as the admin
    pub async fn patch_admin<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(admin(self.client.patch(self.url(path))).json(body).send().await?)
    }

    /// Make a DELETE request as the admin
    pub async fn delete_admin(&self, path: &str) -> Result<Response> {
        Ok(admin(self.client.delete(self.url(path))).send().await?)
    }
}

fn admin(builder: RequestBuilder) -> RequestBuilder {
    builder.header("x-api-key", ADMIN_KEY)
}

/// Create a test configuration rooted in `data_dir`
pub fn test_config(data_dir: &TempDir, vars: &[(&str, &str)]) -> Result<AppConfig> {
    let mut values: HashMap<String, String> = HashMap::from([
        ("HOST".to_string(), "127.0.0.1".to_string()),
        ("WHITELIST_KEYS".to_string(), ADMIN_KEY.to_string()),
        (
            "DATA_FILE".to_string(),
            data_dir.path().join("db.json").display().to_string(),
        ),
    ]);
    for (key, value) in vars {
        values.insert((*key).to_string(), (*value).to_string());
    }

    AppConfig::from_lookup(|key| values.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
