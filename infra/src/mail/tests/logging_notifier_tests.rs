//! Unit tests for the logging notifier

use mv_core::services::VerificationNotifier;

use crate::mail::LoggingNotifier;

#[tokio::test]
async fn test_logging_notifier_send_success() {
    let notifier = LoggingNotifier::with_options(false, false);

    let message_id = notifier
        .send_verification("alice", "alice@example.com", "AB12CD")
        .await
        .unwrap();

    assert!(message_id.starts_with("log_"));
    assert_eq!(notifier.get_message_count(), 1);
}

#[tokio::test]
async fn test_logging_notifier_simulate_failure() {
    let mut notifier = LoggingNotifier::new();
    notifier.set_simulate_failure(true);

    let result = notifier
        .send_verification("alice", "alice@example.com", "AB12CD")
        .await;

    assert!(result.is_err());
    assert_eq!(notifier.get_message_count(), 0);
}

#[tokio::test]
async fn test_logging_notifier_counter_shared_between_clones() {
    let notifier = LoggingNotifier::new();
    let clone = notifier.clone();

    for i in 1..=3 {
        clone
            .send_verification("bob", "bob@example.com", "ZZ99ZZ")
            .await
            .unwrap();
        assert_eq!(notifier.get_message_count(), i);
    }
}

#[test]
fn test_provider_name() {
    assert_eq!(LoggingNotifier::new().provider_name(), "log");
}
