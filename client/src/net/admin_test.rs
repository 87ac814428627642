use super::*;

#[test]
fn endpoint_joins_path_once() {
    assert_eq!(admin_endpoint("users"), "/api/admin/users");
    assert_eq!(admin_endpoint("/users/7"), "/api/admin/users/7");
}

#[test]
fn unauthorized_and_forbidden_require_reauth() {
    assert!(requires_reauth(401));
    assert!(requires_reauth(403));
    assert!(!requires_reauth(404));
    assert!(!requires_reauth(500));
}

#[test]
fn check_status_classifies() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(401), Err(AdminError::SessionExpired));
    assert_eq!(check_status(403), Err(AdminError::SessionExpired));
    assert_eq!(check_status(500), Err(AdminError::Request("HTTP 500".to_owned())));
}

#[test]
fn errors_display() {
    assert_eq!(AdminError::NotLoggedIn.to_string(), "not logged in as admin");
    assert_eq!(AdminError::SessionExpired.to_string(), "admin session expired");
}
