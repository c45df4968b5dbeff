use crate::UpdateStatus;

use std::str::FromStr;

#[test]
fn test_update_status_as_str() {
    assert_eq!(UpdateStatus::New.as_str(), "new");
    assert_eq!(UpdateStatus::Running.as_str(), "running");
    assert_eq!(UpdateStatus::Successful.as_str(), "successful");
    assert_eq!(UpdateStatus::Canceled.as_str(), "canceled");
}

#[test]
fn test_update_status_from_str() {
    assert_eq!(
        UpdateStatus::from_str("pending").unwrap(),
        UpdateStatus::Pending
    );
    assert_eq!(
        UpdateStatus::from_str("waiting").unwrap(),
        UpdateStatus::Waiting
    );
    assert_eq!(
        UpdateStatus::from_str("failed").unwrap(),
        UpdateStatus::Failed
    );
    assert_eq!(
        UpdateStatus::from_str("error").unwrap(),
        UpdateStatus::Error
    );
    assert!(UpdateStatus::from_str("finished").is_err());
}

#[test]
fn test_update_status_is_terminal() {
    assert!(UpdateStatus::Successful.is_terminal());
    assert!(UpdateStatus::Failed.is_terminal());
    assert!(UpdateStatus::Error.is_terminal());
    assert!(UpdateStatus::Canceled.is_terminal());

    assert!(!UpdateStatus::New.is_terminal());
    assert!(!UpdateStatus::Pending.is_terminal());
    assert!(!UpdateStatus::Waiting.is_terminal());
    assert!(!UpdateStatus::Running.is_terminal());
}

#[test]
fn test_update_status_wire_format() {
    assert_eq!(
        serde_json::to_string(&UpdateStatus::Running).unwrap(),
        "\"running\""
    );
    assert_eq!(
        serde_json::from_str::<UpdateStatus>("\"successful\"").unwrap(),
        UpdateStatus::Successful
    );
}
