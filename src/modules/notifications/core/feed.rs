// Admin notification feed.
//
// Invariants
// - No two entries share an (id, timestamp) key.
// - At most `capacity` entries, newest first by arrival, not by source timestamp.
// - One accepted entry bumps the unread counter by exactly one.
// - The unread counter only counts listed entries; an unread entry truncated
//   off the end leaves the count with it.

use serde::Serialize;
use std::collections::VecDeque;

use crate::modules::notifications::core::notification::Notification;

pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Accepted,
    Duplicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedView {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
    pub panel_open: bool,
}

#[derive(Debug, Clone)]
pub struct NotificationFeed {
    entries: VecDeque<Notification>,
    capacity: usize,
    unread_count: usize,
    panel_open: bool,
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl NotificationFeed {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            unread_count: 0,
            panel_open: false,
        }
    }

    pub fn add(&mut self, notification: Notification) -> AddOutcome {
        let key = notification.dedup_key();
        if self.entries.iter().any(|entry| entry.dedup_key() == key) {
            return AddOutcome::Duplicate;
        }
        self.entries.push_front(notification);
        self.unread_count += 1;
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back()
                && !evicted.read
            {
                self.unread_count = self.unread_count.saturating_sub(1);
            }
        }
        self.panel_open = true;
        AddOutcome::Accepted
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn mark_read(&mut self, id: &str, timestamp: &str) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.dedup_key() == (id, timestamp))
        {
            Some(entry) if !entry.read => {
                entry.read = true;
                self.unread_count = self.unread_count.saturating_sub(1);
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
        self.unread_count = 0;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.unread_count = 0;
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.panel_open
    }

    pub fn view(&self) -> FeedView {
        FeedView {
            notifications: self.notifications(),
            unread_count: self.unread_count,
            panel_open: self.panel_open,
        }
    }
}

#[cfg(test)]
mod notification_feed_tests {
    use super::*;
    use crate::modules::notifications::core::notification::NotificationKind;
    use rstest::{fixture, rstest};

    fn make(id: &str, timestamp: &str) -> Notification {
        Notification::new(id, timestamp, NotificationKind::NewOrder, None)
    }

    #[fixture]
    fn feed() -> NotificationFeed {
        NotificationFeed::default()
    }

    #[rstest]
    fn it_should_drop_a_second_delivery_of_the_same_change(mut feed: NotificationFeed) {
        assert_eq!(feed.add(make("o-1", "t-1")), AddOutcome::Accepted);
        assert_eq!(feed.add(make("o-1", "t-1")), AddOutcome::Duplicate);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.unread_count(), 1);
    }

    #[rstest]
    fn it_should_accept_a_later_change_to_the_same_entity(mut feed: NotificationFeed) {
        feed.add(make("o-1", "t-1"));
        assert_eq!(feed.add(make("o-1", "t-2")), AddOutcome::Accepted);
        assert_eq!(feed.len(), 2);
    }

    #[rstest]
    fn it_should_keep_the_newest_fifty_of_sixty(mut feed: NotificationFeed) {
        for i in 0..60 {
            feed.add(make(&format!("o-{i}"), "t"));
        }
        assert_eq!(feed.len(), 50);
        let ids: Vec<String> = feed.notifications().into_iter().map(|n| n.id).collect();
        assert_eq!(ids.first().map(String::as_str), Some("o-59"));
        assert_eq!(ids.last().map(String::as_str), Some("o-10"));
    }

    #[rstest]
    fn it_should_order_by_arrival_not_by_timestamp(mut feed: NotificationFeed) {
        feed.add(make("o-late", "2026-01-01T12:00:00.000Z"));
        feed.add(make("o-early", "2026-01-01T08:00:00.000Z"));
        assert_eq!(feed.notifications()[0].id, "o-early");
    }

    #[rstest]
    fn it_should_open_the_panel_on_accept(mut feed: NotificationFeed) {
        assert!(!feed.is_panel_open());
        feed.add(make("o-1", "t"));
        assert!(feed.is_panel_open());
        feed.close_panel();
        feed.add(make("o-1", "t"));
        assert!(!feed.is_panel_open());
    }

    #[rstest]
    fn it_should_track_read_state(mut feed: NotificationFeed) {
        feed.add(make("o-1", "t"));
        feed.add(make("o-2", "t"));
        assert!(feed.mark_read("o-1", "t"));
        assert!(!feed.mark_read("o-1", "t"));
        assert!(!feed.mark_read("missing", "t"));
        assert_eq!(feed.unread_count(), 1);
        feed.mark_all_read();
        assert_eq!(feed.unread_count(), 0);
        assert!(feed.notifications().iter().all(|n| n.read));
    }

    #[rstest]
    fn it_should_clear_and_toggle(mut feed: NotificationFeed) {
        feed.add(make("o-1", "t"));
        feed.clear();
        assert!(feed.is_empty());
        assert_eq!(feed.unread_count(), 0);
        let open = feed.toggle_panel();
        assert!(!open);
        feed.open_panel();
        assert!(feed.view().panel_open);
    }

    #[rstest]
    fn it_should_honour_a_custom_capacity() {
        let mut feed = NotificationFeed::with_capacity(2);
        feed.add(make("a", "t"));
        feed.add(make("b", "t"));
        feed.add(make("c", "t"));
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.unread_count(), 2);
    }

    #[rstest]
    fn it_should_never_count_more_unread_than_it_lists(mut feed: NotificationFeed) {
        for i in 0..60 {
            feed.add(make(&format!("o-{i}"), "t"));
        }
        assert_eq!(feed.unread_count(), 50);
        for n in feed.notifications() {
            assert!(feed.mark_read(&n.id, &n.timestamp));
        }
        assert_eq!(feed.unread_count(), 0);
    }

    #[rstest]
    fn it_should_keep_the_count_when_a_read_entry_is_truncated() {
        let mut feed = NotificationFeed::with_capacity(2);
        feed.add(make("a", "t"));
        feed.mark_read("a", "t");
        feed.add(make("b", "t"));
        feed.add(make("c", "t"));
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.unread_count(), 2);
    }
}
