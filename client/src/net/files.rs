//! Authenticated file download and preview.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: a missing token short-circuits to `Unauthenticated`;
//! everything else returns `Unknown` since downloads only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`FetchError`], whose `Display` text is what
//! the UI shows. No path panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use thiserror::Error;

use crate::util::storage::{self, USER_TOKEN_KEY};

/// Download or preview failure, phrased for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Please log in to download files")]
    Unauthenticated,
    #[error("You do not have permission to access this file")]
    Forbidden,
    #[error("File not found")]
    NotFound,
    #[error("Download failed: {0}")]
    Unknown(String),
}

impl FetchError {
    /// Map a response status. `None` for 2xx.
    #[must_use]
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::Unauthenticated),
            403 => Some(Self::Forbidden),
            404 => Some(Self::NotFound),
            other => Some(Self::Unknown(format!("HTTP {other}"))),
        }
    }

    /// Whether the UI should send the user to log in.
    #[must_use]
    pub fn needs_login(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

/// A downloaded file body plus the name the browser should save it as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[must_use]
pub fn download_endpoint(file_id: &str) -> String {
    format!("/api/files/{file_id}/download")
}

/// `Authorization` header value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract the file name from a `Content-Disposition` header.
///
/// Handles `filename="a b.txt"` and bare `filename=a.txt`. Falls back to
/// `fallback` when the header is absent or carries no name.
#[must_use]
pub fn file_name_from_disposition(header: Option<&str>, fallback: &str) -> String {
    header
        .and_then(|value| {
            value.split(';').map(str::trim).find_map(|part| {
                let name = part.strip_prefix("filename=")?;
                let name = name.trim_matches('"');
                (!name.is_empty()).then(|| name.to_owned())
            })
        })
        .unwrap_or_else(|| fallback.to_owned())
}

fn token() -> Result<String, FetchError> {
    storage::load(USER_TOKEN_KEY).ok_or(FetchError::Unauthenticated)
}

/// `GET /api/files/{id}/download` with the bearer header; non-2xx mapped.
///
/// Downloads and previews share this one endpoint.
#[cfg(feature = "csr")]
async fn get_file(file_id: &str, token: &str) -> Result<gloo_net::http::Response, FetchError> {
    let resp = gloo_net::http::Request::get(&download_endpoint(file_id))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| FetchError::Unknown(e.to_string()))?;
    if let Some(err) = FetchError::from_status(resp.status()) {
        leptos::logging::warn!("file {file_id} request failed: {}", resp.status());
        return Err(err);
    }
    Ok(resp)
}

/// Download `file_id` with the stored session token.
pub async fn download_file(file_id: &str, fallback_name: &str) -> Result<Download, FetchError> {
    let token = token()?;
    #[cfg(feature = "csr")]
    {
        let resp = get_file(file_id, &token).await?;
        let file_name = file_name_from_disposition(resp.headers().get("content-disposition").as_deref(), fallback_name);
        let bytes = resp.binary().await.map_err(|e| FetchError::Unknown(e.to_string()))?;
        Ok(Download { file_name, bytes })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (file_id, fallback_name, token);
        Err(FetchError::Unknown("downloads require a browser".to_owned()))
    }
}

/// Delay before the object URL of a saved download is revoked.
///
/// Revoking synchronously after `click()` cancels the save in some browsers.
pub const REVOKE_DELAY_MS: u32 = 0;

/// Hand a finished download to the browser's save flow.
#[cfg(feature = "csr")]
pub fn save_to_disk(download: &Download) -> Result<(), FetchError> {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;

    let failed = |_: wasm_bindgen::JsValue| FetchError::Unknown("could not save file".to_owned());
    let bytes = js_sys::Uint8Array::from(download.bytes.as_slice());
    let blob = web_sys::Blob::new_with_u8_array_sequence(&js_sys::Array::of1(&bytes)).map_err(failed)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(failed)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FetchError::Unknown("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(failed)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| FetchError::Unknown("could not save file".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(&download.file_name);
    anchor.click();
    Timeout::new(REVOKE_DELAY_MS, move || {
        if web_sys::Url::revoke_object_url(&url).is_err() {
            leptos::logging::warn!("download: failed to revoke {url}");
        }
    })
    .forget();
    Ok(())
}

/// Fetch `file_id` as text for previews, with the stored session token.
pub async fn fetch_preview(file_id: &str) -> Result<String, FetchError> {
    let token = token()?;
    #[cfg(feature = "csr")]
    {
        let resp = get_file(file_id, &token).await?;
        resp.text().await.map_err(|e| FetchError::Unknown(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (file_id, token);
        Err(FetchError::Unknown("previews require a browser".to_owned()))
    }
}
