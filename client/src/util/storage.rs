//! `localStorage` access for session tokens.
//!
//! Native builds no-op: reads return `None` and removals are dropped.

/// Key holding the end-user session token.
pub const USER_TOKEN_KEY: &str = "token";
/// Key holding the admin session token.
pub const ADMIN_TOKEN_KEY: &str = "adminToken";

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a non-empty string for `key`.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        local_storage()?.get_item(key).ok().flatten().filter(|v| !v.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Remove `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            if storage.remove_item(key).is_err() {
                leptos::logging::warn!("storage: failed to remove {key}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
