//! Entrance highlighting for cards as they scroll into view.
//!
//! A process-wide registry holds one entry per live observer. The dashboard
//! acquires a [`RevealObserver`] for as long as it runs; dropping the guard
//! disconnects it and removes its entry. While connected, the dashboard
//! re-registers the keys of the rendered cards whenever the records change
//! and reports which of them are on screen. A card counts as "fresh" for a
//! short window after it is first seen, which the grid renders as a
//! highlighted border.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// How long a newly revealed card stays highlighted
pub const FRESH_WINDOW: Duration = Duration::from_millis(600);

#[derive(Debug, Default)]
struct ObserverEntry {
    watched: HashSet<String>,
    revealed: HashMap<String, Instant>,
}

static REGISTRY: LazyLock<Mutex<HashMap<u64, ObserverEntry>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Number of observers currently connected
pub fn live_observers() -> usize {
    REGISTRY.lock().len()
}

/// Scoped observer registration. Disconnects on drop.
#[derive(Debug)]
pub struct RevealObserver {
    handle: RevealHandle,
}

impl RevealObserver {
    pub fn acquire() -> Self {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        REGISTRY.lock().insert(id, ObserverEntry::default());
        tracing::debug!(observer = id, "reveal observer connected");
        Self {
            handle: RevealHandle { id },
        }
    }

    /// A cloneable handle for the component that reports visibility
    pub fn handle(&self) -> RevealHandle {
        self.handle.clone()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        REGISTRY.lock().remove(&self.handle.id);
        tracing::debug!(observer = self.handle.id, "reveal observer disconnected");
    }
}

/// Access to one observer's entry. Every call is a no-op once the owning
/// [`RevealObserver`] has been dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealHandle {
    id: u64,
}

impl RevealHandle {
    pub fn is_connected(&self) -> bool {
        REGISTRY.lock().contains_key(&self.id)
    }

    /// Replace the watched set. Cards that stay watched keep their revealed
    /// mark; marks for cards no longer rendered are dropped.
    pub fn observe<I>(&self, keys: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut registry = REGISTRY.lock();
        let Some(entry) = registry.get_mut(&self.id) else {
            return;
        };
        entry.watched = keys.into_iter().collect();
        let ObserverEntry { watched, revealed } = entry;
        revealed.retain(|key, _| watched.contains(key));
    }

    /// Mark watched cards that are on screen as revealed. Returns how many
    /// were revealed for the first time.
    pub fn reveal_visible(&self, visible: &[String]) -> usize {
        self.reveal_visible_at(visible, Instant::now())
    }

    pub fn reveal_visible_at(&self, visible: &[String], now: Instant) -> usize {
        let mut registry = REGISTRY.lock();
        let Some(entry) = registry.get_mut(&self.id) else {
            return 0;
        };

        let mut newly = 0;
        for key in visible {
            if entry.watched.contains(key) && !entry.revealed.contains_key(key) {
                entry.revealed.insert(key.clone(), now);
                newly += 1;
            }
        }
        newly
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        REGISTRY
            .lock()
            .get(&self.id)
            .is_some_and(|entry| entry.revealed.contains_key(key))
    }

    /// Whether `key` was revealed within the last [`FRESH_WINDOW`]
    pub fn is_fresh(&self, key: &str) -> bool {
        self.is_fresh_at(key, Instant::now())
    }

    pub fn is_fresh_at(&self, key: &str, now: Instant) -> bool {
        REGISTRY
            .lock()
            .get(&self.id)
            .and_then(|entry| entry.revealed.get(key).copied())
            .is_some_and(|at| now.saturating_duration_since(at) < FRESH_WINDOW)
    }

    /// Whether any card is still inside its highlight window
    pub fn has_fresh(&self) -> bool {
        self.has_fresh_at(Instant::now())
    }

    pub fn has_fresh_at(&self, now: Instant) -> bool {
        REGISTRY.lock().get(&self.id).is_some_and(|entry| {
            entry
                .revealed
                .values()
                .any(|at| now.saturating_duration_since(*at) < FRESH_WINDOW)
        })
    }
}
