use super::*;

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(503).to_string(), "tasks request failed: 503");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "invalid tasks payload: eof");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_tasks_is_unavailable_off_browser() {
    let result = futures::executor::block_on(fetch_tasks("/api/tasks"));
    assert!(matches!(result, Err(ApiError::Unavailable)));
}
