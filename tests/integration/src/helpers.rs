//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests
//! with the session cookie, and asserting on responses.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use auth_api::{create_app, create_app_state_with_repository};
use auth_common::AppConfig;
use auth_db::InMemoryUserRepository;
use reqwest::{header, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{Envelope, LoginData, LoginRequest, RegisterRequest};

/// Session cookie name
pub const SESSION_COOKIE: &str = "auth_token";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub repo: Arc<InMemoryUserRepository>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server backed by an in-memory user directory
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config(&[])?).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let repo = Arc::new(InMemoryUserRepository::new());

        // Create app state
        let state = create_app_state_with_repository(repo.clone(), config)?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            repo,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with the session cookie
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .header(header::COOKIE, cookie_header(token))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with the session cookie
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header(header::COOKIE, cookie_header(token))
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request with the session cookie
    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .header(header::COOKIE, cookie_header(token))
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with the session cookie
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .header(header::COOKIE, cookie_header(token))
            .send()
            .await?)
    }

    /// Register an account, failing on anything but 201
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let response = self.post("/api/v1/users/register", request).await?;
        assert_status(response, StatusCode::CREATED).await
    }

    /// Log in and return the session token
    pub async fn login(&self, request: &RegisterRequest) -> Result<String> {
        let response = self
            .post("/api/v1/users/login", &LoginRequest::from_register(request))
            .await?;
        let body: Envelope<LoginData> = assert_json(response, StatusCode::OK).await?;
        Ok(body.data.token)
    }

    /// Register then log in
    pub async fn register_and_login(&self, request: &RegisterRequest) -> Result<String> {
        self.register(request).await?;
        self.login(request).await
    }
}

/// Render the `Cookie` header for a session token
///
/// The session cookie is `Secure`, so it is sent by hand over plain http.
pub fn cookie_header(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}")
}

/// Find the session cookie among a response's `Set-Cookie` headers
pub fn session_set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{SESSION_COOKIE}=")))
        .map(String::from)
}

/// Create a test configuration
///
/// Starts from a minimal variable set; `overrides` replace or add entries.
pub fn test_config(overrides: &[(&'static str, &str)]) -> Result<AppConfig> {
    let mut vars: Vec<(&'static str, String)> = vec![
        ("DATABASE_URL", "postgres://unused@localhost/auth".to_string()),
        ("DATABASE_RUN_MIGRATIONS", "false".to_string()),
        ("JWT_SECRET", "integration-secret".to_string()),
        ("COOKIE_SECURE", "true".to_string()),
    ];

    for &(key, value) in overrides {
        vars.retain(|(k, _)| *k != key);
        vars.push((key, value.to_string()));
    }

    let config = AppConfig::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
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
