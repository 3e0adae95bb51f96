use crate::api::ApiError;
use crate::feed::{FeedLoader, FeedUpdate, TourSource};

use super::{SubscriptionBackend, SubscriptionSet, ToggleError, coordinator};

/// The subscriber's landing view: region summary plus event feed.
#[derive(Default)]
pub struct Dashboard {
    pub summary: SubscriptionSet,
    pub feed: FeedLoader,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial load once the session is authenticated: summary first, then
    /// page zero. If the summary cannot be loaded the feed is not requested.
    pub fn load<B>(&mut self, backend: &B) -> Option<FeedUpdate>
    where
        B: SubscriptionBackend + TourSource + ?Sized,
    {
        self.load_summary(backend).ok()?;
        Some(self.feed.reload(backend))
    }

    /// Replace the summary with the backend's current subscriptions.
    /// On failure the previous summary is kept.
    pub fn load_summary<B>(&mut self, backend: &B) -> Result<(), ApiError>
    where
        B: SubscriptionBackend + ?Sized,
    {
        match backend.subscriptions() {
            Ok(resp) => {
                self.summary = SubscriptionSet::from_response(&resp);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "loading subscriptions failed");
                Err(err)
            }
        }
    }

    pub fn subscribe<B>(
        &mut self,
        backend: &B,
        region: &str,
        sub_region: &str,
    ) -> Result<FeedUpdate, ToggleError>
    where
        B: SubscriptionBackend + TourSource + ?Sized,
    {
        coordinator::subscribe(backend, &mut self.summary, &mut self.feed, region, sub_region)
    }

    pub fn unsubscribe<B>(
        &mut self,
        backend: &B,
        region: &str,
        sub_region: &str,
    ) -> Result<FeedUpdate, ToggleError>
    where
        B: SubscriptionBackend + TourSource + ?Sized,
    {
        coordinator::unsubscribe(backend, &mut self.summary, &mut self.feed, region, sub_region)
    }

    /// Tear down when the view goes away.
    pub fn close(&mut self) {
        self.feed.close();
        self.summary = SubscriptionSet::new();
    }
}
