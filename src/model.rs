mod member;
mod region;
mod route;
mod tour;

pub use self::member::{EmailSubscribeUpdate, MemberProfile, User};
pub use self::region::{Area, SubArea, SubscriptionsResponse, UpdateSubscriptionRequest};
pub use self::route::Route;
pub use self::tour::{
    PageMeta, Tour, TourDetail, TourDetailInfo, TourDirections, TourId, TourOverview, ToursPage,
    display_date,
};

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
