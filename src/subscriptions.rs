//! Region subscriptions and the views kept consistent with them.

use crate::api::{ApiClient, ApiError};
use crate::model::SubscriptionsResponse;

mod board;
mod coordinator;
mod dashboard;
mod email;
mod summary;

pub use self::board::SubscriptionBoard;
pub use self::coordinator::{ToggleError, subscribe, toggle_subscription, unsubscribe};
pub use self::dashboard::Dashboard;
pub use self::email::{EmailBackend, EmailNotifications};
pub use self::summary::SubscriptionSet;

pub trait SubscriptionBackend {
    fn subscriptions(&self) -> Result<SubscriptionsResponse, ApiError>;
    fn set_subscription(
        &self,
        area_code: &str,
        sigun_gu_code: &str,
        subscribe: bool,
    ) -> Result<(), ApiError>;
}

impl SubscriptionBackend for ApiClient {
    fn subscriptions(&self) -> Result<SubscriptionsResponse, ApiError> {
        self.get_subscriptions()
    }

    fn set_subscription(
        &self,
        area_code: &str,
        sigun_gu_code: &str,
        subscribe: bool,
    ) -> Result<(), ApiError> {
        self.update_subscription(area_code, sigun_gu_code, subscribe)
    }
}

#[cfg(test)]
#[path = "tests/subscriptions_tests.rs"]
mod tests;
