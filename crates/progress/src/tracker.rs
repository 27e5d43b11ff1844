//! Activity recording and streak computation.
//!
//! Recording is idempotent per (kind, UTC day): the first write of a day
//! creates an event, later writes of the same day return it, at most
//! enriching a missing metadata field once. The streak is the number of
//! consecutive UTC days with at least one event, counting back from today.

use std::sync::Arc;

use async_trait::async_trait;
use skillmap_core::{ActivityEvent, ActivityKind, DayKey};
use skillmap_storage::{Result, Storage};
use tokio::sync::Mutex;
use tracing::debug;

/// Activity recording and streak service.
#[async_trait]
pub trait ActivityTracker: Send + Sync {
    /// Record an activity of `kind` for the current UTC day.
    ///
    /// Returns the day's event for that kind: a fresh one on the first call
    /// of the day, the existing one afterwards. When the existing event has
    /// no metadata and `metadata` is given, it is filled in exactly once;
    /// metadata already present is never overwritten.
    async fn record(
        &mut self,
        kind: ActivityKind,
        metadata: Option<String>,
    ) -> Result<ActivityEvent>;

    /// Number of consecutive UTC days with activity, ending today.
    async fn current_streak(&self) -> Result<usize>;
}

/// Basic activity tracker implementation.
pub struct BasicActivityTracker<S: Storage> {
    storage: Arc<Mutex<S>>,
}

impl<S: Storage> BasicActivityTracker<S> {
    /// Create a new tracker owning its storage.
    pub fn new(storage: S) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
        }
    }

    /// Create a tracker over an already shared storage handle.
    pub fn with_storage(storage: Arc<Mutex<S>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S: Storage + 'static> ActivityTracker for BasicActivityTracker<S> {
    async fn record(
        &mut self,
        kind: ActivityKind,
        metadata: Option<String>,
    ) -> Result<ActivityEvent> {
        let mut storage = self.storage.lock().await;
        let start_of_today = DayKey::today().start_of_day();

        if let Some(mut existing) = storage.find_event_since(kind, start_of_today).await? {
            if existing.metadata.is_none() && metadata.is_some() {
                existing.metadata = metadata;
                storage.save_event(&existing).await?;
                debug!("enriched today's {} event {}", kind, existing.id);
            }
            return Ok(existing);
        }

        let event = ActivityEvent::new(kind, metadata);
        storage.save_event(&event).await?;
        debug!("recorded first {} event of the day", kind);
        Ok(event)
    }

    async fn current_streak(&self) -> Result<usize> {
        let events = self.storage.lock().await.list_events().await?;
        let days = distinct_days(&events);
        Ok(consecutive_run(&days, DayKey::today()))
    }
}

/// Reduce events (expected newest first) to their distinct calendar days,
/// first seen wins.
pub fn distinct_days(events: &[ActivityEvent]) -> Vec<DayKey> {
    let mut days: Vec<DayKey> = Vec::new();
    for event in events {
        let day = event.day();
        if !days.contains(&day) {
            days.push(day);
        }
    }
    days
}

/// Walk distinct day keys (newest first) and count the consecutive run
/// ending at `today`.
///
/// The cursor starts at `today`; a day matching the cursor counts and moves
/// the cursor back one day, the first day at distance one or more stops the
/// walk. A day *ahead* of the cursor (future-dated clock skew) is skipped
/// without breaking the run. A run therefore requires activity today to be
/// nonzero: a latest entry of exactly yesterday already reads as 0.
pub fn consecutive_run(days: &[DayKey], today: DayKey) -> usize {
    let mut streak = 0;
    let mut cursor = today;

    for day in days {
        let distance = cursor.days_since(*day);
        if distance == 0 {
            streak += 1;
            cursor = cursor.pred();
        } else if distance >= 1 {
            break;
        }
        // distance < 0: future-dated entry, skip it
    }

    streak
}
