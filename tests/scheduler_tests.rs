#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveDateTime};
use pickup_match_bot::bot::commands::match_info::handle_venue_choice;
use pickup_match_bot::bot::handlers::message::{route_wizard_reply, run_command};
use pickup_match_bot::models::{MatchRecord, SharedMatch, VenuePrices, WizardStep};
use pickup_match_bot::services::notifier::Notifier;
use pickup_match_bot::services::scheduler::{
    check_alarms, sweep_expired, MatchScheduler, EXPIRED_NOTICE,
};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use teloxide::types::ChatId;
use tokio_test::assert_ok;

const CHAT: ChatId = ChatId(-1001234567890);

/// Keeps every notification instead of sending it.
#[derive(Clone, Default)]
struct RecordingNotifier {
    sent: Arc<Mutex<Vec<(ChatId, String)>>>,
    fail: bool,
}

impl RecordingNotifier {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn sent(&self) -> Vec<(ChatId, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(
        &self,
        chat_id: ChatId,
        text: String,
    ) -> impl Future<Output = anyhow::Result<()>> + Send {
        let sent = self.sent.clone();
        let fail = self.fail;
        async move {
            if fail {
                anyhow::bail!("transport unavailable");
            }
            sent.lock().unwrap().push((chat_id, text));
            Ok(())
        }
    }
}

fn at(day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

/// Created small-pitch match kicking off at `kickoff`, with `players` signed up.
async fn created_match(kickoff: &str, players: usize) -> SharedMatch {
    let state = MatchRecord::new(VenuePrices::default()).into_shared();
    {
        let mut record = state.lock().await;
        record.set_chat(CHAT);
        assert_ok!(record.start_creation());
        assert!(record.submit_location("Club Norte"));
        assert_ok!(record.submit_date_time(kickoff));
        assert_ok!(record.select_venue("venue_small"));
        for i in 0..players {
            assert_ok!(record.register(&format!("P{i}")));
        }
    }
    state
}

#[tokio::test]
async fn test_alarm_fires_once_per_offset() {
    let state = created_match("25-12-2024 20:30", 0).await;
    state.lock().await.add_alarm(3).unwrap();
    let notifier = RecordingNotifier::default();

    // One tick per minute around the three hour mark
    assert_eq!(check_alarms(&state, &notifier, at(25, 17, 28, 0)).await, 0);
    assert_eq!(check_alarms(&state, &notifier, at(25, 17, 29, 0)).await, 0);
    assert_eq!(check_alarms(&state, &notifier, at(25, 17, 30, 0)).await, 1);
    assert_eq!(check_alarms(&state, &notifier, at(25, 17, 31, 0)).await, 0);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, CHAT);
    assert!(sent[0].1.contains("starts in 3 hours"));
}

#[tokio::test]
async fn test_alarm_tick_off_the_minute_still_fires() {
    let state = created_match("25-12-2024 20:30", 0).await;
    state.lock().await.add_alarm(1).unwrap();
    let notifier = RecordingNotifier::default();

    assert_eq!(check_alarms(&state, &notifier, at(25, 19, 29, 10)).await, 0);
    assert_eq!(check_alarms(&state, &notifier, at(25, 19, 30, 10)).await, 1);
}

#[tokio::test]
async fn test_several_offsets() {
    let state = created_match("25-12-2024 20:30", 0).await;
    {
        let mut record = state.lock().await;
        record.add_alarm(24).unwrap();
        record.add_alarm(2).unwrap();
    }
    let notifier = RecordingNotifier::default();

    assert_eq!(check_alarms(&state, &notifier, at(24, 20, 30, 0)).await, 1);
    assert_eq!(check_alarms(&state, &notifier, at(25, 18, 30, 0)).await, 1);
    assert_eq!(notifier.sent().len(), 2);
}

#[tokio::test]
async fn test_alarm_without_chat_is_not_sent() {
    let state = MatchRecord::new(VenuePrices::default()).into_shared();
    {
        let mut record = state.lock().await;
        record.start_creation().unwrap();
        record.submit_location("Club Norte");
        record.submit_date_time("25-12-2024 20:30").unwrap();
        record.select_venue("venue_large").unwrap();
        record.add_alarm(1).unwrap();
    }
    let notifier = RecordingNotifier::default();

    assert_eq!(check_alarms(&state, &notifier, at(25, 19, 30, 0)).await, 0);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_failed_alarm_delivery_is_not_counted() {
    let state = created_match("25-12-2024 20:30", 0).await;
    state.lock().await.add_alarm(1).unwrap();

    let notifier = RecordingNotifier::failing();
    assert_eq!(check_alarms(&state, &notifier, at(25, 19, 30, 0)).await, 0);
}

#[tokio::test]
async fn test_sweep_resets_past_match() {
    let state = created_match("25-12-2024 20:30", 10).await;
    {
        let mut record = state.lock().await;
        record.assign_random(&mut rand::rng()).unwrap();
    }
    let notifier = RecordingNotifier::default();

    assert!(!sweep_expired(&state, &notifier, at(25, 20, 30, 0)).await);
    assert!(state.lock().await.is_created());

    assert!(sweep_expired(&state, &notifier, at(25, 20, 30, 1)).await);
    {
        let record = state.lock().await;
        assert!(!record.is_created());
        assert_eq!(record.step(), WizardStep::Idle);
        assert!(record.roster().is_empty());
        assert!(record.teams().primary.is_empty());
        assert!(record.teams().opposing.is_empty());
    }
    assert_eq!(notifier.sent(), vec![(CHAT, EXPIRED_NOTICE.to_string())]);

    // Nothing left to expire
    assert!(!sweep_expired(&state, &notifier, at(26, 0, 0, 0)).await);
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_sweep_ignores_uncreated_match() {
    let state = MatchRecord::new(VenuePrices::default()).into_shared();
    let notifier = RecordingNotifier::default();
    assert!(!sweep_expired(&state, &notifier, at(25, 20, 30, 0)).await);
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_match_can_be_recreated_after_expiry() {
    let state = created_match("25-12-2024 20:30", 3).await;
    let notifier = RecordingNotifier::default();
    assert!(sweep_expired(&state, &notifier, at(26, 9, 0, 0)).await);

    let mut record = state.lock().await;
    assert_ok!(record.start_creation());
    assert_eq!(record.step(), WizardStep::AwaitingLocation);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_scheduler_manual_triggers() {
    let state = created_match("01-01-2020 10:00", 2).await;
    let notifier = RecordingNotifier::default();
    let scheduler = MatchScheduler::new(notifier.clone(), state.clone()).await.unwrap();

    assert_eq!(scheduler.check_alarms_now().await, 0);
    assert!(scheduler.sweep_now().await);
    assert!(!state.lock().await.is_created());
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_scheduler_start_and_stop() {
    let state = MatchRecord::new(VenuePrices::default()).into_shared();
    let mut scheduler = MatchScheduler::new(RecordingNotifier::default(), state)
        .await
        .unwrap();

    assert!(scheduler.start().await.is_ok());
    assert!(scheduler.stop().await.is_ok());
}

/// A record is either a created match whose teams cover its roster, or an
/// empty uncreated one. Never something in between.
fn assert_consistent(record: &MatchRecord) {
    let teams = record.teams();
    if record.is_created() {
        if teams.is_assigned() {
            assert_eq!(
                teams.primary.len() + teams.opposing.len(),
                record.roster().len()
            );
        }
    } else {
        assert!(record.roster().is_empty());
        assert!(!teams.is_assigned());
        assert!(record.alarm_offsets().is_empty());
        assert_eq!(record.venue(), None);
        if record.step() == WizardStep::Idle {
            assert!(record.location().is_empty());
            assert_eq!(record.scheduled_at(), None);
        }
    }
}

/// One step of the chat side, under the lock like the message handler.
async fn chat_step(state: &SharedMatch, input: &str) {
    let mut record = state.lock().await;
    if input.starts_with('/') {
        run_command(input, "Ana", CHAT.0, &mut record);
    } else if input.starts_with("venue_") {
        handle_venue_choice(&mut record, input);
    } else {
        route_wizard_reply(input, CHAT.0, &mut record);
    }
    assert_consistent(&record);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sweep_and_commands_share_the_lock() {
    let state = MatchRecord::new(VenuePrices::default()).into_shared();
    state.lock().await.set_chat(CHAT);
    let notifier = RecordingNotifier::default();

    let mut script: Vec<String> = vec![
        "/crearpartido".to_string(),
        "Club Norte".to_string(),
        "25-12-2024 20:30".to_string(),
        "venue_small".to_string(),
        "/ponerAlarma:2".to_string(),
    ];
    script.extend((0..10).map(|i| format!("/sumoa P{i}")));
    script.push("/crearEquiposAlAzar".to_string());
    script.push("/bajoa P3".to_string());
    script.push("/intercambia 1 1".to_string());

    let chat_done = Arc::new(AtomicBool::new(false));

    let chat_state = state.clone();
    let chat_finished = chat_done.clone();
    let chat = tokio::spawn(async move {
        for _ in 0..50 {
            for input in &script {
                chat_step(&chat_state, input).await;
                tokio::task::yield_now().await;
            }
        }
        chat_finished.store(true, Ordering::SeqCst);
    });

    // Every tick is past kickoff, so each created match gets swept
    let sweep_state = state.clone();
    let sweep_notifier = notifier.clone();
    let sweeper = tokio::spawn(async move {
        let mut resets = 0;
        while !chat_done.load(Ordering::SeqCst) {
            if sweep_expired(&sweep_state, &sweep_notifier, at(26, 0, 0, 0)).await {
                resets += 1;
            }
            assert_consistent(&*sweep_state.lock().await);
            tokio::task::yield_now().await;
        }
        resets
    });

    chat.await.unwrap();
    let mut resets = sweeper.await.unwrap();
    // The last round leaves a created match unless it was already swept
    if sweep_expired(&state, &notifier, at(26, 0, 0, 0)).await {
        resets += 1;
    }

    // Every reset was announced exactly once
    assert_eq!(notifier.sent().len(), resets);
    assert!(notifier.sent().iter().all(|(chat, text)| *chat == CHAT && text == EXPIRED_NOTICE));

    assert!(resets > 0);
    assert_consistent(&*state.lock().await);
}
