use std::fmt;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use plant_logging::plant_debug;
use uuid::Uuid;

use crate::plant::{HistoryItem, Plant};

type Generator = Arc<dyn Fn() -> String + Send + Sync>;

/// Supplies event ids and timestamps for new history items.
#[derive(Clone)]
pub struct EventSource {
    event_id: Generator,
    now_utc: Generator,
}

impl EventSource {
    pub fn new(
        event_id: impl Fn() -> String + Send + Sync + 'static,
        now_utc: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            event_id: Arc::new(event_id),
            now_utc: Arc::new(now_utc),
        }
    }

    /// Random v4 ids and the system clock, millisecond precision with `Z`.
    pub fn system() -> Self {
        Self::new(
            || Uuid::new_v4().to_string(),
            || Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}

impl Default for EventSource {
    fn default() -> Self {
        Self::system()
    }
}

impl fmt::Debug for EventSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSource").finish_non_exhaustive()
    }
}

/// Ordered, deduplicated log of identified plants, newest first.
///
/// Holds at most one item per `plant.id`.
#[derive(Debug, Default)]
pub struct HistoryStore {
    items: Vec<HistoryItem>,
    events: EventSource,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event_source(events: EventSource) -> Self {
        Self {
            items: Vec::new(),
            events,
        }
    }

    /// Records `plant` as the most recent event, replacing any earlier entry
    /// for the same plant id.
    pub fn add(&mut self, plant: Plant) -> &HistoryItem {
        let item = HistoryItem {
            id: (self.events.event_id)(),
            timestamp: (self.events.now_utc)(),
            plant,
        };
        let before = self.items.len();
        self.items.retain(|existing| existing.plant.id != item.plant.id);
        plant_debug!(
            "history add plant_id={} replaced={} len={}",
            item.plant.id,
            before - self.items.len(),
            self.items.len() + 1
        );
        self.items.insert(0, item);
        &self.items[0]
    }

    pub fn clear(&mut self) {
        plant_debug!("history clear len={}", self.items.len());
        self.items.clear();
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn snapshot(&self) -> Vec<HistoryItem> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
