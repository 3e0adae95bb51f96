use crate::model::{SubscriptionsResponse, UpdateSubscriptionRequest};

use super::{ApiClient, ApiError};

impl ApiClient {
    pub fn get_subscriptions(&self) -> Result<SubscriptionsResponse, ApiError> {
        self.get_json("/api/member/subscriptions", "get subscriptions")
    }

    pub fn update_subscription(
        &self,
        area_code: &str,
        sigun_gu_code: &str,
        subscribe: bool,
    ) -> Result<(), ApiError> {
        let _ = self.send(
            self.client
                .put(self.url("/api/member/subscriptions"))
                .json(&UpdateSubscriptionRequest {
                    area_code: area_code.to_string(),
                    sigun_gu_code: sigun_gu_code.to_string(),
                    subscribe,
                }),
            "update subscription",
        )?;
        Ok(())
    }
}
