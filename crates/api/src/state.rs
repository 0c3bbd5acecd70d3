use std::sync::Arc;

use planner_core::reminder::ReminderScheduler;
use planner_store::files::FileStore;
use planner_store::port::MilestoneStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; every collaborator sits behind an `Arc`, so the
/// store, file storage, and reminder scheduler can each be substituted
/// (the tests inject the in-memory store here).
#[derive(Clone)]
pub struct AppState {
    /// Milestone persistence port.
    pub store: Arc<dyn MilestoneStore>,
    /// Attachment file storage.
    pub files: Arc<dyn FileStore>,
    /// Reminder scheduling seam (no-op by default).
    pub reminders: Arc<dyn ReminderScheduler>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
