use std::time::{Duration, Instant};

use crate::model::Route;

pub const SESSION_EXPIRED_REDIRECT: Duration = Duration::from_millis(2000);

pub const SESSION_EXPIRED_MESSAGE: &str =
    "Session expired; you have been logged out automatically.";

/// Shown after a forced logout, then replaced by the landing surface.
#[derive(Clone, Copy, Debug)]
pub struct SessionExpiredNotice {
    shown_at: Instant,
}

impl SessionExpiredNotice {
    pub fn new(shown_at: Instant) -> Self {
        Self { shown_at }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        SESSION_EXPIRED_REDIRECT.saturating_sub(now.saturating_duration_since(self.shown_at))
    }

    pub fn route_at(&self, now: Instant) -> Route {
        if self.remaining(now).is_zero() {
            Route::Landing
        } else {
            Route::SessionExpired
        }
    }
}
