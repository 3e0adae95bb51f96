use crate::api::ApiError;
use crate::feed::{FeedLoader, FeedUpdate, TourSource};

use super::{SubscriptionBackend, SubscriptionSet};

#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error("unknown region: {region} {sub_region}")]
    UnknownRegion { region: String, sub_region: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Set one sub-region's subscription and bring the summary and feed in line.
///
/// Codes are resolved from a fresh subscription list on every call. Nothing
/// local changes unless the backend mutation succeeds; after it does, the
/// summary is updated and the feed is reset to page zero.
pub fn toggle_subscription<B>(
    backend: &B,
    summary: &mut SubscriptionSet,
    feed: &mut FeedLoader,
    region: &str,
    sub_region: &str,
    subscribe: bool,
) -> Result<FeedUpdate, ToggleError>
where
    B: SubscriptionBackend + TourSource + ?Sized,
{
    let result = apply_toggle(backend, summary, region, sub_region, subscribe);
    if let Err(err) = &result {
        tracing::error!(region, sub_region, subscribe, error = %err, "subscription update failed");
    }
    result?;
    Ok(feed.reload(backend))
}

pub fn subscribe<B>(
    backend: &B,
    summary: &mut SubscriptionSet,
    feed: &mut FeedLoader,
    region: &str,
    sub_region: &str,
) -> Result<FeedUpdate, ToggleError>
where
    B: SubscriptionBackend + TourSource + ?Sized,
{
    toggle_subscription(backend, summary, feed, region, sub_region, true)
}

pub fn unsubscribe<B>(
    backend: &B,
    summary: &mut SubscriptionSet,
    feed: &mut FeedLoader,
    region: &str,
    sub_region: &str,
) -> Result<FeedUpdate, ToggleError>
where
    B: SubscriptionBackend + TourSource + ?Sized,
{
    toggle_subscription(backend, summary, feed, region, sub_region, false)
}

fn apply_toggle<B>(
    backend: &B,
    summary: &mut SubscriptionSet,
    region: &str,
    sub_region: &str,
    subscribe: bool,
) -> Result<(), ToggleError>
where
    B: SubscriptionBackend + ?Sized,
{
    let all = backend.subscriptions()?;
    let (area_code, sigun_gu_code) = all
        .area(region)
        .and_then(|area| {
            area.sub_area(sub_region)
                .map(|sub| (area.area_code.clone(), sub.sigun_gu_code.clone()))
        })
        .ok_or_else(|| ToggleError::UnknownRegion {
            region: region.to_string(),
            sub_region: sub_region.to_string(),
        })?;

    backend.set_subscription(&area_code, &sigun_gu_code, subscribe)?;

    if subscribe {
        summary.insert(region, sub_region);
    } else {
        summary.remove(region, sub_region);
    }
    Ok(())
}
