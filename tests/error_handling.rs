use axum::http::StatusCode;
use github_stars_api::error::{ErrorKind, Result, StarsError};
use github_stars_api::server::status_for;
use std::error::Error;

#[test]
fn test_error_display() {
    let error = StarsError::NotFound;
    assert_eq!(format!("{}", error), "repository not found");

    let error = StarsError::FailedPrecondition("GitHub API returned status 500".to_string());
    assert_eq!(format!("{}", error), "GitHub API returned status 500");

    let error = StarsError::Internal("failed to parse Link header for star count".to_string());
    assert_eq!(format!("{}", error), "failed to parse Link header for star count");
}

#[test]
fn test_error_kind() {
    assert_eq!(StarsError::NotFound.kind(), ErrorKind::NotFound);
    assert_eq!(
        StarsError::FailedPrecondition("x".to_string()).kind(),
        ErrorKind::FailedPrecondition
    );
    assert_eq!(StarsError::Internal("x".to_string()).kind(), ErrorKind::Internal);
}

#[test]
fn test_error_kind_codes() {
    assert_eq!(ErrorKind::Unavailable.as_str(), "unavailable");
    assert_eq!(ErrorKind::NotFound.as_str(), "not_found");
    assert_eq!(ErrorKind::FailedPrecondition.to_string(), "failed_precondition");
    assert_eq!(ErrorKind::Internal.to_string(), "internal");
}

#[test]
fn test_status_mapping() {
    assert_eq!(status_for(ErrorKind::Unavailable), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
    assert_eq!(status_for(ErrorKind::FailedPrecondition), StatusCode::BAD_REQUEST);
    assert_eq!(status_for(ErrorKind::Internal), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_error_source() {
    let error = StarsError::NotFound;
    assert!(error.source().is_none());
}

#[test]
fn test_result_type() {
    fn returns_error() -> Result<u64> {
        Err(StarsError::Internal("bad".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
