//! Staleness tracking for in-flight requests.
//!
//! Each user action issues a fresh token before its generation call starts.
//! When the call resolves, its result is only applied if no newer token has
//! been issued since; otherwise it is dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Shared issue counter. Clones observe the same sequence.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token that supersedes every earlier one.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::Acquire) == token.0
    }

    /// Hand back `value` only if `token` is still the latest one issued.
    pub fn accept<T>(&self, token: RequestToken, value: T) -> Option<T> {
        if self.is_current(token) {
            Some(value)
        } else {
            tracing::debug!(
                token = token.0,
                latest = self.latest.load(Ordering::Acquire),
                "discarding superseded result"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_accepted() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        assert!(tracker.is_current(first));

        let second = tracker.issue();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert_eq!(tracker.accept(first, "stale"), None);
        assert_eq!(tracker.accept(second, "fresh"), Some("fresh"));
    }

    #[test]
    fn clones_share_the_sequence() {
        let tracker = RequestTracker::new();
        let view = tracker.clone();
        let token = tracker.issue();
        view.issue();
        assert!(!tracker.is_current(token));
    }
}
