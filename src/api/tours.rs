use crate::model::{TourDetail, TourId, ToursPage};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// One page of events for the member's subscribed regions. `page` is zero-based.
    pub fn get_subscribed_tours(&self, page: u32) -> Result<ToursPage, ApiError> {
        self.get_json(
            &format!("/api/member/subscriptions/tours?page={}", page),
            "get subscribed tours",
        )
    }

    pub fn get_tour_detail(&self, tour_id: TourId) -> Result<TourDetail, ApiError> {
        self.get_json(&format!("/api/tours/{}", tour_id), "get tour detail")
    }
}
