//! Bounded undo history of surface snapshots.

use crate::surface::{RasterSurface, Snapshot};
use std::collections::VecDeque;

/// Number of undo states kept by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// A capacity-bounded stack of snapshots.
///
/// Access is LIFO at the top. Pushing onto a full history drops the oldest
/// entry instead of refusing the new one.
///
/// The top entry may be provisional (a live shape preview). A provisional
/// push that hits capacity keeps the evicted entry aside, so discarding the
/// preview leaves the history exactly as it was before.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    entries: VecDeque<Snapshot>,
    capacity: usize,
    provisional: bool,
    /// Oldest entry, evicted to make room for the provisional top.
    held: Option<Snapshot>,
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SnapshotHistory {
    /// Create an empty history holding at most `capacity` snapshots (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            provisional: false,
            held: None,
        }
    }

    /// Append a snapshot, evicting the oldest one when full.
    ///
    /// A pending provisional entry is committed first.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.commit_provisional();
        self.evict_if_full();
        self.entries.push_back(snapshot);
    }

    /// Append a snapshot that a later [`discard_provisional`] may take back.
    /// Replaces any provisional entry already on top.
    ///
    /// [`discard_provisional`]: SnapshotHistory::discard_provisional
    pub fn push_provisional(&mut self, snapshot: Snapshot) {
        self.discard_provisional();
        self.provisional = true;
        self.held = self.evict_if_full();
        self.entries.push_back(snapshot);
    }

    /// Remove the provisional top and give back anything its push evicted.
    /// Returns false when there was no provisional entry.
    pub fn discard_provisional(&mut self) -> bool {
        if !self.provisional {
            return false;
        }
        self.provisional = false;
        self.entries.pop_back();
        if let Some(evicted) = self.held.take() {
            self.entries.push_front(evicted);
        }
        true
    }

    /// Make the provisional top a regular entry. Its eviction becomes final.
    /// Returns false when there was no provisional entry.
    pub fn commit_provisional(&mut self) -> bool {
        if !self.provisional {
            return false;
        }
        self.provisional = false;
        if self.held.take().is_some() {
            log::debug!("History full ({}), evicted oldest snapshot", self.capacity);
        }
        true
    }

    /// Whether the top entry is provisional.
    pub fn has_provisional(&self) -> bool {
        self.provisional
    }

    fn evict_if_full(&mut self) -> Option<Snapshot> {
        if self.entries.len() < self.capacity {
            return None;
        }
        let evicted = self.entries.pop_front();
        if !self.provisional {
            log::debug!("History full ({}), evicted oldest snapshot", self.capacity);
        }
        evicted
    }

    /// Discard the most recent snapshot.
    /// Returns true if one was removed.
    ///
    /// Popping a provisional top is the same as discarding it.
    pub fn pop_top(&mut self) -> bool {
        if self.discard_provisional() {
            return true;
        }
        self.entries.pop_back().is_some()
    }

    /// Paint the most recent snapshot onto `surface`.
    /// Returns false (leaving the surface as-is) when empty.
    pub fn restore_top<S: RasterSurface + ?Sized>(&self, surface: &mut S) -> bool {
        match self.entries.back() {
            Some(top) => {
                surface.restore(top);
                true
            }
            None => false,
        }
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.provisional = false;
        self.held = None;
    }

    /// The most recent snapshot.
    pub fn top(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    /// Snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::FakeSurface;

    fn snapshot(tag: u8) -> Snapshot {
        Snapshot::new(1, 1, vec![tag, tag, tag, 255]).unwrap()
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = SnapshotHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_coerced() {
        let mut history = SnapshotHistory::new(0);
        assert_eq!(history.capacity(), 1);
        history.push(snapshot(1));
        history.push(snapshot(2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.top(), Some(&snapshot(2)));
    }

    #[test]
    fn test_push_evicts_oldest_at_capacity() {
        let mut history = SnapshotHistory::new(3);
        for tag in 1..=4 {
            history.push(snapshot(tag));
        }
        assert_eq!(history.len(), 3);
        let tags: Vec<u8> = history.iter().map(|s| s.data()[0]).collect();
        assert_eq!(tags, vec![2, 3, 4]);
    }

    #[test]
    fn test_pop_top_is_lifo() {
        let mut history = SnapshotHistory::new(5);
        history.push(snapshot(1));
        history.push(snapshot(2));

        assert!(history.pop_top());
        assert_eq!(history.top(), Some(&snapshot(1)));
        assert!(history.pop_top());
        assert!(!history.pop_top());
        assert!(history.is_empty());
    }

    #[test]
    fn test_restore_top_round_trip() {
        let mut history = SnapshotHistory::new(5);
        let mut surface = FakeSurface::new(1, 1);
        history.push(snapshot(42));

        assert!(history.restore_top(&mut surface));
        assert_eq!(surface.capture(), snapshot(42));
        // restore never mutates the stack
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_restore_top_empty_leaves_surface() {
        let history = SnapshotHistory::new(5);
        let mut surface = FakeSurface::new(1, 1);
        surface.pixels[0] = 7;

        assert!(!history.restore_top(&mut surface));
        assert_eq!(surface.pixels[0], 7);
        assert_eq!(surface.restores, 0);
    }

    #[test]
    fn test_discarded_provisional_restores_evicted_entry() {
        let mut history = SnapshotHistory::new(3);
        for tag in 1..=3 {
            history.push(snapshot(tag));
        }

        history.push_provisional(snapshot(10));
        assert_eq!(history.len(), 3);
        assert_eq!(history.top(), Some(&snapshot(10)));

        // Replacing the preview never loses another committed entry.
        history.push_provisional(snapshot(11));
        assert!(history.has_provisional());
        let tags: Vec<u8> = history.iter().map(|s| s.data()[0]).collect();
        assert_eq!(tags, vec![2, 3, 11]);

        assert!(history.discard_provisional());
        assert!(!history.has_provisional());
        let tags: Vec<u8> = history.iter().map(|s| s.data()[0]).collect();
        assert_eq!(tags, vec![1, 2, 3]);
        assert!(!history.discard_provisional());
    }

    #[test]
    fn test_committed_provisional_evicts_for_good() {
        let mut history = SnapshotHistory::new(2);
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.push_provisional(snapshot(3));

        assert!(history.commit_provisional());
        assert!(!history.has_provisional());
        // Nothing provisional left to take back.
        assert!(!history.discard_provisional());
        let tags: Vec<u8> = history.iter().map(|s| s.data()[0]).collect();
        assert_eq!(tags, vec![2, 3]);
    }

    #[test]
    fn test_capacity_one_provisional() {
        let mut history = SnapshotHistory::new(1);
        history.push(snapshot(1));
        history.push_provisional(snapshot(2));
        assert_eq!(history.len(), 1);

        assert!(history.discard_provisional());
        assert_eq!(history.top(), Some(&snapshot(1)));
    }

    #[test]
    fn test_pop_top_discards_provisional() {
        let mut history = SnapshotHistory::new(2);
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.push_provisional(snapshot(3));

        assert!(history.pop_top());
        let tags: Vec<u8> = history.iter().map(|s| s.data()[0]).collect();
        assert_eq!(tags, vec![1, 2]);
    }

    #[test]
    fn test_push_commits_pending_provisional() {
        let mut history = SnapshotHistory::new(5);
        history.push_provisional(snapshot(1));
        history.push(snapshot(2));

        assert!(!history.has_provisional());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_clear_drops_provisional() {
        let mut history = SnapshotHistory::new(1);
        history.push(snapshot(1));
        history.push_provisional(snapshot(2));
        history.clear();

        assert!(!history.has_provisional());
        assert!(!history.discard_provisional());
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = SnapshotHistory::new(5);
        history.push(snapshot(1));
        history.push(snapshot(2));
        history.clear();
        assert!(history.is_empty());
        assert!(history.top().is_none());
    }
}
