use homework_status_bot::services::homework::HomeworkError;
use homework_status_bot::services::poller::{Delivery, NO_UPDATES_MESSAGE};
use serde_json::json;

use crate::common::{poller, RecordingChannel, ScriptedSource};

#[tokio::test]
async fn test_unchanged_status_sent_once() {
    let source = ScriptedSource::new(vec![
        Ok(json!({
            "homeworks": [{"homework_name": "hw1", "status": "reviewing"}],
            "current_date": 1000
        })),
        Ok(json!({
            "homeworks": [{"homework_name": "hw1", "status": "reviewing"}],
            "current_date": 1600
        })),
    ]);
    let channel = RecordingChannel::new();
    let mut poller = poller(source, channel.clone());

    let first = poller.run_cycle().await;
    let second = poller.run_cycle().await;

    assert_eq!(first.delivery, Delivery::Sent);
    assert_eq!(second.delivery, Delivery::Duplicate);
    assert_eq!(channel.attempts(), 1);
    // The suppressed cycle still moves the cursor forward.
    assert_eq!(poller.state().from_date, 1600);
}

#[tokio::test]
async fn test_status_change_after_duplicate_is_sent() {
    let source = ScriptedSource::new(vec![
        Ok(json!({"homeworks": [{"homework_name": "hw1", "status": "reviewing"}], "current_date": 1})),
        Ok(json!({"homeworks": [{"homework_name": "hw1", "status": "reviewing"}], "current_date": 2})),
        Ok(json!({"homeworks": [{"homework_name": "hw1", "status": "approved"}], "current_date": 3})),
    ]);
    let channel = RecordingChannel::new();
    let mut poller = poller(source, channel.clone());

    for _ in 0..3 {
        poller.run_cycle().await;
    }

    let sent = channel.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].ends_with("Работа взята на проверку ревьюером."));
    assert!(sent[1].ends_with("Работа проверена: ревьюеру всё понравилось. Ура!"));
}

#[tokio::test]
async fn test_no_updates_message_is_deduplicated() {
    let source = ScriptedSource::new(vec![
        Ok(json!({"homeworks": [], "current_date": 1000})),
        Ok(json!({"homeworks": []})),
        Ok(json!({"homeworks": [], "current_date": 2000})),
    ]);
    let channel = RecordingChannel::new();
    let mut poller = poller(source, channel.clone());

    for _ in 0..3 {
        poller.run_cycle().await;
    }

    assert_eq!(channel.sent(), vec![NO_UPDATES_MESSAGE.to_string()]);
    assert_eq!(poller.state().from_date, 2000);
}

#[tokio::test]
async fn test_repeated_failure_reported_once() {
    let source = ScriptedSource::new(vec![Err(HomeworkError::UpstreamCall(500))]);
    let channel = RecordingChannel::new();
    let mut poller = poller(source, channel.clone());

    for _ in 0..5 {
        poller.run_cycle().await;
    }

    assert_eq!(
        channel.sent(),
        vec!["Сбой в работе программы: Статус-код ответа не 200 - 500".to_string()]
    );
}

#[tokio::test]
async fn test_failed_delivery_is_retried_next_cycle() {
    let source = ScriptedSource::always(json!({
        "homeworks": [{"homework_name": "hw1", "status": "rejected"}],
        "current_date": 1000
    }));
    let channel = RecordingChannel::failing();
    let mut poller = poller(source, channel.clone());

    let first = poller.run_cycle().await;
    assert_eq!(first.delivery, Delivery::Failed);
    assert_eq!(poller.state().last_message, None);

    channel.set_failing(false);
    let second = poller.run_cycle().await;

    assert_eq!(second.delivery, Delivery::Sent);
    assert_eq!(
        channel.sent(),
        vec!["Изменился статус проверки работы \"hw1\". Работа проверена: у ревьюера есть замечания.".to_string()]
    );
}

#[tokio::test]
async fn test_always_failing_channel_never_breaks_the_loop() {
    let source = ScriptedSource::new(vec![
        Ok(json!({"homeworks": [{"homework_name": "hw1", "status": "approved"}], "current_date": 10})),
        Err(HomeworkError::UpstreamCall(502)),
        Ok(json!({"homeworks": [], "current_date": 20})),
        Ok(json!({"current_date": 30})),
    ]);
    let channel = RecordingChannel::failing();
    let mut poller = poller(source, channel.clone());

    for _ in 0..50 {
        let report = poller.run_cycle().await;
        assert_eq!(report.delivery, Delivery::Failed);
    }

    assert_eq!(channel.attempts(), 50);
    assert!(channel.sent().is_empty());
    assert_eq!(poller.state().last_message, None);
    assert_eq!(poller.state().from_date, 20);
}
