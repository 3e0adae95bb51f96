use crate::api::{ApiClient, ApiError};

pub trait EmailBackend {
    fn email_subscribe(&self) -> Result<Option<bool>, ApiError>;
    fn set_email_subscribe(&self, enabled: bool) -> Result<(), ApiError>;
}

impl EmailBackend for ApiClient {
    fn email_subscribe(&self) -> Result<Option<bool>, ApiError> {
        Ok(self.get_member_profile()?.email_subscribe)
    }

    fn set_email_subscribe(&self, enabled: bool) -> Result<(), ApiError> {
        self.update_email_subscribe(enabled).map(|_| ())
    }
}

/// Email notification preference, applied optimistically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmailNotifications {
    enabled: bool,
}

impl Default for EmailNotifications {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl EmailNotifications {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Adopt the backend value; keep the current one if it is unavailable.
    pub fn hydrate<B: EmailBackend + ?Sized>(&mut self, backend: &B) {
        match backend.email_subscribe() {
            Ok(Some(v)) => self.enabled = v,
            Ok(None) => {}
            Err(err) => tracing::debug!(error = %err, "email preference unavailable"),
        }
    }

    /// Switch to `next`, reverting to the previous value if the backend refuses.
    pub fn set<B: EmailBackend + ?Sized>(&mut self, backend: &B, next: bool) -> Result<(), ApiError> {
        let prev = self.enabled;
        self.enabled = next;
        if let Err(err) = backend.set_email_subscribe(next) {
            self.enabled = prev;
            tracing::error!(requested = next, error = %err, "email preference update failed");
            return Err(err);
        }
        Ok(())
    }
}
