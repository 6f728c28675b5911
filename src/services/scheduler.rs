use chrono::{Duration, NaiveDateTime};
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::models::SharedMatch;
use crate::services::notifier::Notifier;
use crate::utils::datetime::local_now;
use crate::utils::logging::{log_scheduler_error, log_scheduler_event};

/// Alarm check, at second 0 of every minute.
pub const ALARM_CRON: &str = "0 * * * * *";
/// Expiration sweep, every second.
pub const SWEEP_CRON: &str = "* * * * * *";
/// An alarm is due for one alarm tick, so the window matches its period.
pub const ALARM_WINDOW_SECS: i64 = 60;

pub const EXPIRED_NOTICE: &str = "The match is over, use /crearpartido to create the next one";

type ServiceError = Box<dyn std::error::Error + Send + Sync>;

/// Runs the alarm check and the expiration sweep against the shared match.
pub struct MatchScheduler<N: Notifier> {
    notifier: N,
    state: SharedMatch,
    scheduler: JobScheduler,
    job_ids: Vec<Uuid>,
}

impl<N: Notifier> MatchScheduler<N> {
    pub async fn new(notifier: N, state: SharedMatch) -> Result<Self, ServiceError> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            notifier,
            state,
            scheduler,
            job_ids: Vec::new(),
        })
    }

    pub async fn start(&mut self) -> Result<(), ServiceError> {
        let notifier = self.notifier.clone();
        let state = self.state.clone();
        let alarm_job = Job::new_async(ALARM_CRON, move |_uuid, _l| {
            let notifier = notifier.clone();
            let state = state.clone();
            Box::pin(async move {
                check_alarms(&state, &notifier, local_now()).await;
            })
        })?;

        let notifier = self.notifier.clone();
        let state = self.state.clone();
        let sweep_job = Job::new_async(SWEEP_CRON, move |_uuid, _l| {
            let notifier = notifier.clone();
            let state = state.clone();
            Box::pin(async move {
                sweep_expired(&state, &notifier, local_now()).await;
            })
        })?;

        self.job_ids.push(self.scheduler.add(alarm_job).await?);
        self.job_ids.push(self.scheduler.add(sweep_job).await?);
        self.scheduler.start().await?;

        log_scheduler_event(
            "start",
            &format!("alarm check '{ALARM_CRON}', expiration sweep '{SWEEP_CRON}'"),
        );
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), ServiceError> {
        for id in self.job_ids.drain(..) {
            self.scheduler.remove(&id).await?;
        }
        self.scheduler.shutdown().await?;
        log_scheduler_event("stop", "jobs removed");
        Ok(())
    }

    // Manual triggers, same code path as the jobs
    pub async fn check_alarms_now(&self) -> usize {
        check_alarms(&self.state, &self.notifier, local_now()).await
    }

    pub async fn sweep_now(&self) -> bool {
        sweep_expired(&self.state, &self.notifier, local_now()).await
    }
}

/// Sends every alarm due at `now`. Returns how many were delivered.
pub async fn check_alarms<N: Notifier>(state: &SharedMatch, notifier: &N, now: NaiveDateTime) -> usize {
    let (due, chat_id) = {
        let mut record = state.lock().await;
        let due = record.due_alarms(now, Duration::seconds(ALARM_WINDOW_SECS));
        (due, record.chat_id())
    };

    if due.is_empty() {
        return 0;
    }
    let Some(chat_id) = chat_id else {
        tracing::warn!("{} alarm(s) due but no chat to notify", due.len());
        return 0;
    };

    let mut sent = 0;
    for hours in due {
        let text = format!("⏰ Heads up! The match starts in {hours} hours.");
        match notifier.notify(chat_id, text).await {
            Ok(()) => {
                sent += 1;
                log_scheduler_event("alarm", &format!("{hours}h alarm sent to chat {}", chat_id.0));
            }
            Err(e) => log_scheduler_error("alarm", &e.to_string()),
        }
    }
    sent
}

/// Resets the match once its time has passed. Returns true if it did.
pub async fn sweep_expired<N: Notifier>(state: &SharedMatch, notifier: &N, now: NaiveDateTime) -> bool {
    let (expired, chat_id) = {
        let mut record = state.lock().await;
        (record.expire_if_due(now), record.chat_id())
    };

    if !expired {
        return false;
    }
    log_scheduler_event("expiration", "match finished, record reset");

    match chat_id {
        Some(chat_id) => {
            if let Err(e) = notifier.notify(chat_id, EXPIRED_NOTICE.to_string()).await {
                log_scheduler_error("expiration", &e.to_string());
            }
        }
        None => tracing::warn!("Match expired but no chat to notify"),
    }
    true
}
