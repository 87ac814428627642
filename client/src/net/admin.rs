//! Admin API calls with forced re-authentication.
//!
//! Any 401 or 403 from an admin endpoint means the stored admin token is no
//! longer accepted. The token is cleared and the browser is sent to the
//! admin login page before the error is returned.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::util::storage::{self, ADMIN_TOKEN_KEY};

pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("not logged in as admin")]
    NotLoggedIn,
    #[error("admin session expired")]
    SessionExpired,
    #[error("admin request failed: {0}")]
    Request(String),
}

#[must_use]
pub fn admin_endpoint(path: &str) -> String {
    format!("/api/admin/{}", path.trim_start_matches('/'))
}

/// Status codes that end the admin session.
#[must_use]
pub fn requires_reauth(status: u16) -> bool {
    matches!(status, 401 | 403)
}

/// Classify a response status. `Ok(())` for 2xx.
pub fn check_status(status: u16) -> Result<(), AdminError> {
    if (200..300).contains(&status) {
        Ok(())
    } else if requires_reauth(status) {
        Err(AdminError::SessionExpired)
    } else {
        Err(AdminError::Request(format!("HTTP {status}")))
    }
}

/// Drop the admin token and go to the login page.
pub fn end_session() {
    storage::remove(ADMIN_TOKEN_KEY);
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.location().set_href(ADMIN_LOGIN_PATH).is_err() {
            leptos::logging::warn!("admin: redirect to {ADMIN_LOGIN_PATH} failed");
        }
    }
}

fn admin_token() -> Result<String, AdminError> {
    storage::load(ADMIN_TOKEN_KEY).ok_or(AdminError::NotLoggedIn)
}

#[cfg(feature = "csr")]
async fn finish<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, AdminError> {
    if let Err(err) = check_status(resp.status()) {
        if err == AdminError::SessionExpired {
            leptos::logging::warn!("admin: session rejected with {}", resp.status());
            end_session();
        }
        return Err(err);
    }
    resp.json::<T>().await.map_err(|e| AdminError::Request(e.to_string()))
}

/// `GET /api/admin/{path}`.
pub async fn admin_get<T: DeserializeOwned>(path: &str) -> Result<T, AdminError> {
    let token = admin_token()?;
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&admin_endpoint(path))
            .header("Authorization", &super::files::bearer(&token))
            .send()
            .await
            .map_err(|e| AdminError::Request(e.to_string()))?;
        finish(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, token);
        Err(AdminError::Request("admin calls require a browser".to_owned()))
    }
}

/// `POST /api/admin/{path}` with a JSON body.
pub async fn admin_post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, AdminError> {
    let token = admin_token()?;
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&admin_endpoint(path))
            .header("Authorization", &super::files::bearer(&token))
            .json(body)
            .map_err(|e| AdminError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| AdminError::Request(e.to_string()))?;
        finish(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body, token);
        Err(AdminError::Request("admin calls require a browser".to_owned()))
    }
}
