//! HTTP repository over the REST API.
//!
//! Mirrors the repository interfaces of the API tier, but each call is a
//! reqwest round trip carrying the session's bearer token when one is
//! available.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{AuthResponse, AuthenticationRequest};

use super::USER_API_PATH;

/// Typed HTTP client for the Parky API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_token(req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(t) if !t.is_empty() => req.bearer_auth(t),
            _ => req,
        }
    }

    /// Fetch every resource under `path`.
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<Vec<T>, reqwest::Error> {
        let resp = Self::with_token(self.http.get(self.url(path)), token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Ok(Vec::new());
        }
        resp.json().await
    }

    /// Fetch a single resource, `None` when the API answers with an
    /// error status (missing, unauthorized).
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        id: i32,
        token: Option<&str>,
    ) -> Result<Option<T>, reqwest::Error> {
        let resp = Self::with_token(self.http.get(self.url(&format!("{}/{}", path, id))), token)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Ok(None);
        }
        Ok(Some(resp.json().await?))
    }

    /// Create a resource, true when the API accepted it.
    pub async fn create<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: Option<&str>,
    ) -> Result<bool, reqwest::Error> {
        let resp = Self::with_token(self.http.post(self.url(path)), token)
            .json(body)
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Update a resource, true when the API accepted it.
    pub async fn update<T: Serialize>(
        &self,
        path: &str,
        id: i32,
        body: &T,
        token: Option<&str>,
    ) -> Result<bool, reqwest::Error> {
        let resp = Self::with_token(
            self.http.patch(self.url(&format!("{}/{}", path, id))),
            token,
        )
        .json(body)
        .send()
        .await?;
        Ok(resp.status().is_success())
    }

    /// Delete a resource, true when the API accepted it.
    pub async fn delete(
        &self,
        path: &str,
        id: i32,
        token: Option<&str>,
    ) -> Result<bool, reqwest::Error> {
        let resp = Self::with_token(
            self.http.delete(self.url(&format!("{}/{}", path, id))),
            token,
        )
        .send()
        .await?;
        Ok(resp.status().is_success())
    }

    /// Exchange credentials for a JWT, `None` when they are rejected.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthResponse>, reqwest::Error> {
        let resp = self
            .http
            .post(self.url(&format!("{}/authenticate", USER_API_PATH)))
            .json(&AuthenticationRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Ok(None);
        }
        Ok(Some(resp.json().await?))
    }

    /// Register a new account, true when the API accepted it.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, reqwest::Error> {
        let resp = self
            .http
            .post(self.url(USER_API_PATH))
            .json(&AuthenticationRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        Ok(resp.status().is_success())
    }
}
