use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn success_statuses_are_not_errors() {
    assert_eq!(FetchError::from_status(200), None);
    assert_eq!(FetchError::from_status(204), None);
}

#[test]
fn known_statuses_map_to_variants() {
    assert_eq!(FetchError::from_status(401), Some(FetchError::Unauthenticated));
    assert_eq!(FetchError::from_status(403), Some(FetchError::Forbidden));
    assert_eq!(FetchError::from_status(404), Some(FetchError::NotFound));
}

#[test]
fn other_statuses_are_unknown() {
    assert_eq!(FetchError::from_status(500), Some(FetchError::Unknown("HTTP 500".to_owned())));
    assert_eq!(FetchError::from_status(302), Some(FetchError::Unknown("HTTP 302".to_owned())));
}

#[test]
fn messages_are_user_facing() {
    assert_eq!(FetchError::Unauthenticated.to_string(), "Please log in to download files");
    assert_eq!(FetchError::Forbidden.to_string(), "You do not have permission to access this file");
    assert_eq!(FetchError::NotFound.to_string(), "File not found");
    assert_eq!(FetchError::Unknown("HTTP 500".to_owned()).to_string(), "Download failed: HTTP 500");
}

#[test]
fn only_unauthenticated_needs_login() {
    assert!(FetchError::Unauthenticated.needs_login());
    assert!(!FetchError::Forbidden.needs_login());
    assert!(!FetchError::NotFound.needs_login());
}

// =============================================================
// Request helpers
// =============================================================

#[test]
fn download_endpoint_formats_expected_path() {
    assert_eq!(download_endpoint("f42"), "/api/files/f42/download");
}

#[test]
fn bearer_formats_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn disposition_quoted_name() {
    let header = Some(r#"attachment; filename="q3 report.pdf""#);
    assert_eq!(file_name_from_disposition(header, "download"), "q3 report.pdf");
}

#[test]
fn disposition_bare_name() {
    assert_eq!(file_name_from_disposition(Some("attachment; filename=a.txt"), "x"), "a.txt");
}

#[test]
fn disposition_missing_uses_fallback() {
    assert_eq!(file_name_from_disposition(None, "notes.md"), "notes.md");
    assert_eq!(file_name_from_disposition(Some("inline"), "notes.md"), "notes.md");
    assert_eq!(file_name_from_disposition(Some(r#"attachment; filename="""#), "notes.md"), "notes.md");
}

#[test]
fn object_url_revoke_is_queued_not_inline() {
    // A zero-delay Timeout still runs after the click's default action.
    assert_eq!(REVOKE_DELAY_MS, 0);
}

// =============================================================
// Without a token
// =============================================================

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = future.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

#[test]
fn download_without_token_is_unauthenticated() {
    assert_eq!(block_on(download_file("f1", "f1.bin")), Err(FetchError::Unauthenticated));
}

#[test]
fn preview_without_token_is_unauthenticated() {
    assert_eq!(block_on(fetch_preview("f1")), Err(FetchError::Unauthenticated));
}
