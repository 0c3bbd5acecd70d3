//! Reminder scheduling seam.

use async_trait::async_trait;

/// Scheduler for milestone reminders.
///
/// The service stores `reminder_time` verbatim and never interprets it; a
/// real scheduler can be substituted here without touching request
/// handling.
#[async_trait]
pub trait ReminderScheduler: Send + Sync {
    async fn schedule(&self, milestone_id: &str, reminder_time: Option<&str>);
}

/// Default scheduler: acknowledges the request and drops it.
#[derive(Debug, Default)]
pub struct NoopReminderScheduler;

#[async_trait]
impl ReminderScheduler for NoopReminderScheduler {
    async fn schedule(&self, milestone_id: &str, reminder_time: Option<&str>) {
        tracing::debug!(
            milestone_id,
            reminder_time,
            "Reminder requested; no scheduler is configured"
        );
    }
}
