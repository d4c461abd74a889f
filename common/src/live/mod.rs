//! Transport-independent state of a live query.
//!
//! The transport (an `EventSource` in the browser client) delivers
//! [`LiveEvent`]s; [`LiveQueryState`] folds them into the current record
//! set, the loading flag, and the last transport error. The cache is
//! replaced wholesale on every snapshot, never patched, so re-entrant
//! delivery can never observe a half-applied update. [`SubscriptionGuard`] wraps
//! the transport's cancel action and guarantees it runs exactly once.

/// One delivery from the live-query transport.
#[derive(Clone, Debug)]
pub enum LiveEvent<T> {
    /// A complete, ordered record set. Replaces the previous one.
    Snapshot(Vec<T>),
    /// A transport or decode failure. Delivered at most once per failure;
    /// the subscription does not retry on its own.
    Error(String),
}

/// Folds live-query events into a renderable state.
#[derive(Clone, Debug)]
pub struct LiveQueryState<T> {
    records: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for LiveQueryState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LiveQueryState<T> {
    /// Starts in the loading state with no records.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
        }
    }

    /// The last delivered snapshot. Retained across errors: a failed
    /// stream keeps showing the data it last saw.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// True until the first snapshot or error arrives, false forever
    /// after. Later snapshots do not re-enter the loading state.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The first error raised by the transport, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn apply(&mut self, event: LiveEvent<T>) {
        self.loading = false;
        match event {
            LiveEvent::Snapshot(records) => {
                self.records = records;
            }
            LiveEvent::Error(message) => {
                if self.error.is_none() {
                    self.error = Some(message);
                }
            }
        }
    }
}

/// Owns the cancel action of an active subscription.
///
/// Cancellation is idempotent: `cancel` consumes the action on first use
/// and `Drop` runs it if the consuming scope exits without an explicit
/// cancel. Either way the transport is released exactly once.
pub struct SubscriptionGuard {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl SubscriptionGuard {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn starts_loading_with_no_records() {
        let state: LiveQueryState<u32> = LiveQueryState::new();
        assert!(state.loading());
        assert!(state.records().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn first_snapshot_clears_loading_and_replaces_records() {
        let mut state = LiveQueryState::new();
        state.apply(LiveEvent::Snapshot(vec![1, 2, 3]));
        assert!(!state.loading());
        assert_eq!(state.records(), [1, 2, 3]);
        state.apply(LiveEvent::Snapshot(vec![4]));
        assert_eq!(state.records(), [4]);
    }

    #[test]
    fn loading_never_re_enables() {
        let mut state: LiveQueryState<u32> = LiveQueryState::new();
        state.apply(LiveEvent::Snapshot(vec![]));
        assert!(!state.loading());
        state.apply(LiveEvent::Snapshot(vec![7]));
        assert!(!state.loading());
    }

    #[test]
    fn empty_snapshot_is_not_loading_and_not_an_error() {
        let mut state: LiveQueryState<u32> = LiveQueryState::new();
        state.apply(LiveEvent::Snapshot(vec![]));
        assert!(!state.loading());
        assert!(state.records().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn error_before_any_snapshot_stops_loading() {
        let mut state: LiveQueryState<u32> = LiveQueryState::new();
        state.apply(LiveEvent::Error("connection refused".to_string()));
        assert!(!state.loading());
        assert!(state.records().is_empty());
        assert_eq!(state.error(), Some("connection refused"));
    }

    #[test]
    fn error_after_snapshot_retains_the_prior_snapshot() {
        let mut state = LiveQueryState::new();
        state.apply(LiveEvent::Snapshot(vec![9, 8]));
        state.apply(LiveEvent::Error("stream dropped".to_string()));
        assert!(!state.loading());
        assert_eq!(state.records(), [9, 8]);
        assert_eq!(state.error(), Some("stream dropped"));
    }

    #[test]
    fn only_the_first_error_is_kept() {
        let mut state: LiveQueryState<u32> = LiveQueryState::new();
        state.apply(LiveEvent::Error("first".to_string()));
        state.apply(LiveEvent::Error("second".to_string()));
        assert_eq!(state.error(), Some("first"));
    }

    #[test]
    fn guard_cancels_exactly_once() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut guard = SubscriptionGuard::new(move || counter.set(counter.get() + 1));
        guard.cancel();
        guard.cancel();
        drop(guard);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn guard_cancels_on_drop_when_never_called() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        {
            let _guard = SubscriptionGuard::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }
}
