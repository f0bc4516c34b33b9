// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filters::{build_query, FilterParams};
use crate::models::{
    FinanceEntry, LoginRequest, LoginResponse, NewTransaction, Page, RegisterRequest,
    RegisterResponse, ResetPasswordRequest, Session, UpdatePasswordRequest,
};
use crate::utils::http_client;
use reqwest::blocking::{multipart, RequestBuilder, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("not signed in or session expired")]
    Unauthorized,
    #[error("access denied")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("rejected: {0}")]
    Validation(String),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("invalid base url '{0}'")]
    InvalidUrl(String),
    #[error("failed to build http client: {0}")]
    Setup(String),
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Picks the human-readable message out of an error body. The backend uses
/// `message` for validation failures and `error` elsewhere.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error"]
                .iter()
                .find_map(|k| v.get(*k).and_then(Value::as_str).map(str::to_string))
        })
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "unknown error".to_string())
}

pub fn error_for_status(status: u16, body: &str) -> ClientError {
    match status {
        401 => ClientError::Unauthorized,
        403 => ClientError::Forbidden,
        404 => ClientError::NotFound,
        409 => ClientError::Conflict(error_message(body)),
        400 | 422 => ClientError::Validation(error_message(body)),
        _ => ClientError::Server {
            status,
            message: error_message(body),
        },
    }
}

fn body_value(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::blocking::Client,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut raw = base_url.trim().to_string();
        // Url::join drops the last path segment unless it ends with '/'.
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw).map_err(|_| ClientError::InvalidUrl(base_url.into()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        let http = http_client().map_err(|e| ClientError::Setup(e.to_string()))?;
        Ok(Self {
            base_url,
            http,
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| ClientError::InvalidUrl(format!("{}{}", self.base_url, path)))
    }

    fn authed(&self, rb: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(t) => rb.bearer_auth(t),
            None => rb,
        }
    }

    fn check(res: Response) -> Result<Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let url = res.url().to_string();
        let body = res.text().unwrap_or_default();
        tracing::warn!(%url, status = status.as_u16(), "request failed");
        Err(error_for_status(status.as_u16(), &body))
    }

    fn decode<T: DeserializeOwned>(res: Response) -> Result<T> {
        let text = Self::check(res)?.text()?;
        Ok(serde_json::from_str(&text)?)
    }

    fn value(res: Response) -> Result<Value> {
        let text = Self::check(res)?.text()?;
        Ok(body_value(&text))
    }

    pub fn login(&self, req: &LoginRequest) -> Result<Session> {
        let url = self.endpoint("api/auth/signin")?;
        tracing::debug!(%url, username = %req.username, "signing in");
        let res = self.http.post(url).json(req).send()?;
        let login: LoginResponse = Self::decode(res)?;
        tracing::info!(username = %login.username, "signed in");
        Ok(Session::from(login))
    }

    pub fn register(&self, req: &RegisterRequest) -> Result<RegisterResponse> {
        let url = self.endpoint("api/auth/signup")?;
        let mut form = multipart::Form::new()
            .text("username", req.username.clone())
            .text("email", req.email.clone())
            .text("password", req.password.clone());
        for role in &req.roles {
            form = form.text("roles", role.clone());
        }
        if let Some(path) = &req.profile_image {
            let part = multipart::Part::file(path)?
                .file_name("profile.jpg")
                .mime_str("image/jpeg")?;
            form = form.part("profileImage", part);
        }
        tracing::debug!(%url, username = %req.username, "registering");
        let res = self.http.post(url).multipart(form).send()?;
        Self::decode(res)
    }

    pub fn logout(&self) -> Result<()> {
        let url = self.endpoint("api/auth/logout")?;
        let res = self.authed(self.http.post(url)).send()?;
        let v = Self::value(res)?;
        // A 200 with an `error` field is still a failed logout.
        if let Some(err) = v.get("error").and_then(Value::as_str).filter(|e| !e.is_empty()) {
            return Err(ClientError::Validation(err.to_string()));
        }
        Ok(())
    }

    pub fn search(&self, params: &FilterParams) -> Result<Page<FinanceEntry>> {
        let url = self.endpoint("api/search")?;
        let query = build_query(params);
        tracing::debug!(%url, ?query, "searching transactions");
        let res = self.authed(self.http.get(url).query(&query)).send()?;
        let page: Page<FinanceEntry> = Self::decode(res)?;
        tracing::info!(
            page = page.number,
            total_pages = page.total_pages,
            entries = page.content.len(),
            "fetched transactions"
        );
        Ok(page)
    }

    pub fn add_transaction(&self, tx: &NewTransaction) -> Result<Value> {
        let url = self.endpoint("api/post")?;
        let res = self.authed(self.http.post(url).json(tx)).send()?;
        Self::value(res)
    }

    pub fn upload_csv(&self, path: &Path) -> Result<Value> {
        let url = self.endpoint("api/import-csv")?;
        let part = multipart::Part::file(path)?.mime_str("text/csv")?;
        let form = multipart::Form::new().part("file", part);
        tracing::debug!(%url, path = %path.display(), "uploading CSV");
        let res = self.authed(self.http.post(url).multipart(form)).send()?;
        Self::value(res)
    }

    pub fn update_password(&self, user_id: &str, req: &UpdatePasswordRequest) -> Result<()> {
        let url = self.endpoint(&format!("api/users/{}/password", user_id))?;
        let res = self.authed(self.http.put(url).json(req)).send()?;
        Self::check(res)?;
        Ok(())
    }

    pub fn check_user(&self, username: &str) -> Result<()> {
        let url = self.endpoint("api/auth/forgot-password")?;
        let res = self.http.post(url).json(&username).send()?;
        Self::check(res)?;
        Ok(())
    }

    pub fn reset_password(&self, req: &ResetPasswordRequest) -> Result<()> {
        let url = self.endpoint("api/auth/reset-password")?;
        let res = self.http.post(url).json(req).send()?;
        Self::check(res)?;
        Ok(())
    }
}
