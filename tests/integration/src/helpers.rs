//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and preparing PostgreSQL test data.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use invite_api::{create_app, create_app_state};
use invite_common::AppConfig;
use reqwest::{Client, Method, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Secret shared by test servers and token assertions
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Table used by PostgreSQL-backed end-to-end tests
pub const E2E_TABLE: &str = "invitation_codes_e2e";

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by an in-memory store seeded with `codes`
    pub async fn start_memory(codes: &[&str]) -> Result<Self> {
        let seed = codes.join(",");
        let config = config_from(&[
            ("STORE_BACKEND", "memory"),
            ("MEMORY_SEED_CODES", seed.as_str()),
            ("JWT_SECRET", TEST_JWT_SECRET),
        ])?;
        Self::start_with_config(config).await
    }

    /// Start a server backed by PostgreSQL using `DATABASE_URL`
    pub async fn start_postgres(lookup: &str) -> Result<Self> {
        dotenvy::dotenv().ok();
        let url = std::env::var("DATABASE_URL")?;
        let config = config_from(&[
            ("STORE_BACKEND", "postgres"),
            ("STORE_LOOKUP", lookup),
            ("DATABASE_URL", url.as_str()),
            ("INVITATION_TABLE", E2E_TABLE),
            ("JWT_SECRET", TEST_JWT_SECRET),
        ])?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to port
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with a raw body
    pub async fn post_raw(&self, path: &str, body: &'static str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?)
    }

    /// Make a request with an arbitrary method and no body
    pub async fn request(&self, method: Method, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.request(method, &url).send().await?)
    }
}

/// Build a configuration from explicit variables only
pub fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();

    AppConfig::from_vars(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Helper to check if the PostgreSQL test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Connect to the test database and make sure the end-to-end table exists
pub async fn test_pool() -> Result<PgPool> {
    let pool = PgPool::connect(&std::env::var("DATABASE_URL")?).await?;
    sqlx::query(&format!(
        "CREATE TABLE IF NOT EXISTS {E2E_TABLE} (code TEXT PRIMARY KEY, used BOOLEAN)"
    ))
    .execute(&pool)
    .await?;
    Ok(pool)
}

/// Insert an invitation row; `used = None` leaves the attribute NULL
pub async fn insert_code(pool: &PgPool, code: &str, used: Option<bool>) -> Result<()> {
    sqlx::query(&format!("INSERT INTO {E2E_TABLE} (code, used) VALUES ($1, $2)"))
        .bind(code)
        .bind(used)
        .execute(pool)
        .await?;
    Ok(())
}

/// Read back the `used` attribute of a row
pub async fn fetch_used(pool: &PgPool, code: &str) -> Result<Option<bool>> {
    let used: Option<bool> =
        sqlx::query_scalar(&format!("SELECT used FROM {E2E_TABLE} WHERE code = $1"))
            .bind(code)
            .fetch_one(pool)
            .await?;
    Ok(used)
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
