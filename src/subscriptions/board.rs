use crate::feed::{FeedLoader, FeedUpdate, TourSource};
use crate::model::Area;

use super::{SubscriptionBackend, SubscriptionSet, ToggleError, coordinator};

/// Every region with its per-sub-region flag, as shown by the subscription modal.
#[derive(Clone, Debug, Default)]
pub struct SubscriptionBoard {
    areas: Vec<Area>,
}

impl SubscriptionBoard {
    /// Load all regions. A sub-region counts as subscribed if the backend says
    /// so or the local summary already lists it. Failure yields an empty board.
    pub fn open<B: SubscriptionBackend + ?Sized>(backend: &B, summary: &SubscriptionSet) -> Self {
        let mut areas = match backend.subscriptions() {
            Ok(resp) => resp.areas,
            Err(err) => {
                tracing::error!(error = %err, "loading subscription board failed");
                Vec::new()
            }
        };
        for area in &mut areas {
            for sub in &mut area.sub_areas {
                sub.subscribe = sub.subscribe || summary.contains(&area.name, &sub.name);
            }
        }
        Self { areas }
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn total_subscribed(&self) -> usize {
        self.areas
            .iter()
            .map(|a| a.sub_areas.iter().filter(|s| s.subscribe).count())
            .sum()
    }

    /// Flip one sub-region, addressed by its backend codes.
    pub fn toggle<B>(
        &mut self,
        backend: &B,
        summary: &mut SubscriptionSet,
        feed: &mut FeedLoader,
        area_code: &str,
        sigun_gu_code: &str,
    ) -> Result<FeedUpdate, ToggleError>
    where
        B: SubscriptionBackend + TourSource + ?Sized,
    {
        let Some((region, sub_region, current)) = self.lookup(area_code, sigun_gu_code) else {
            return Err(ToggleError::UnknownRegion {
                region: area_code.to_string(),
                sub_region: sigun_gu_code.to_string(),
            });
        };

        let update = coordinator::toggle_subscription(
            backend,
            summary,
            feed,
            &region,
            &sub_region,
            !current,
        )?;

        if let Some(sub) = self
            .areas
            .iter_mut()
            .filter(|a| a.area_code == area_code)
            .flat_map(|a| a.sub_areas.iter_mut())
            .find(|s| s.sigun_gu_code == sigun_gu_code)
        {
            sub.subscribe = !current;
        }
        Ok(update)
    }

    fn lookup(&self, area_code: &str, sigun_gu_code: &str) -> Option<(String, String, bool)> {
        let area = self.areas.iter().find(|a| a.area_code == area_code)?;
        let sub = area
            .sub_areas
            .iter()
            .find(|s| s.sigun_gu_code == sigun_gu_code)?;
        Some((area.name.clone(), sub.name.clone(), sub.subscribe))
    }
}
