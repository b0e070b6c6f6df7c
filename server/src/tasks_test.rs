use std::io::Write;

use super::*;

#[test]
fn load_tasks_without_file_is_empty() {
    assert!(load_tasks(None).unwrap().is_empty());
}

#[test]
fn load_tasks_parses_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"id":"t-1","title":"Ship it","done":true}},{{"id":"t-2","title":"Test it"}}]"#).unwrap();

    let tasks = load_tasks(Some(file.path())).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0], Task { id: "t-1".to_owned(), title: "Ship it".to_owned(), done: true });
    assert!(!tasks[1].done);
}

#[test]
fn load_tasks_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_tasks(Some(dir.path().join("absent.json").as_path())).unwrap_err();
    assert!(matches!(err, TasksFileError::Read { .. }));
}

#[test]
fn load_tasks_malformed_file_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{").unwrap();
    let err = load_tasks(Some(file.path())).unwrap_err();
    assert!(matches!(err, TasksFileError::Parse { .. }));
}
