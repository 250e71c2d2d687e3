//! Stored OAuth credentials for the calendar service.

use crate::config::GoogleConfig;
use crate::errors::{AppError, AppResult};
use chrono::Utc;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Seconds of validity a token must have left to be used as-is.
const EXPIRY_SLACK: i64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix timestamp; 0 means "unknown", which is treated as expired.
    #[serde(default)]
    pub expires_at: i64,
}

impl StoredToken {
    pub fn is_fresh(&self, now: i64) -> bool {
        self.expires_at > now + EXPIRY_SLACK
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    3600
}

pub fn load_token(path: &Path) -> AppResult<StoredToken> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Auth(format!("cannot read token file {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::Auth(format!("invalid token file {}: {e}", path.display())))
}

pub fn save_token(path: &Path, token: &StoredToken) -> AppResult<()> {
    let json = serde_json::to_string_pretty(token)
        .map_err(|e| AppError::Auth(format!("cannot serialize token: {e}")))?;
    fs::write(path, json)?;
    Ok(())
}

/// Return a usable access token, refreshing (and rewriting) the stored one
/// when it has expired.
pub fn ensure_access_token(client: &Client, cfg: &GoogleConfig) -> AppResult<String> {
    let path = cfg.token_path();
    let stored = load_token(&path)?;

    if stored.is_fresh(Utc::now().timestamp()) {
        return Ok(stored.access_token);
    }

    let refresh_token = stored.refresh_token.as_deref().ok_or_else(|| {
        AppError::Auth("access token expired and no refresh token is stored".into())
    })?;

    let updated = refresh_access_token(client, cfg, refresh_token)?;
    save_token(&path, &updated)?;
    Ok(updated.access_token)
}

fn refresh_access_token(
    client: &Client,
    cfg: &GoogleConfig,
    refresh_token: &str,
) -> AppResult<StoredToken> {
    if cfg.client_id.trim().is_empty() || cfg.client_secret.trim().is_empty() {
        return Err(AppError::Auth(
            "google.client_id and google.client_secret are required to refresh the token".into(),
        ));
    }

    let resp = client
        .post(&cfg.token_url)
        .form(&[
            ("client_id", cfg.client_id.as_str()),
            ("client_secret", cfg.client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ])
        .send()
        .map_err(|e| AppError::Auth(format!("token refresh failed: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        return Err(AppError::Auth(format!(
            "token refresh failed: HTTP {status} - {body}"
        )));
    }

    let token: TokenResponse = resp
        .json()
        .map_err(|e| AppError::Auth(format!("invalid token response: {e}")))?;

    Ok(StoredToken {
        access_token: token.access_token,
        refresh_token: token
            .refresh_token
            .or_else(|| Some(refresh_token.to_string())),
        expires_at: Utc::now().timestamp() + token.expires_in,
    })
}
