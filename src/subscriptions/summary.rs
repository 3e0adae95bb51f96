use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::SubscriptionsResponse;

/// Subscribed sub-region names grouped by parent region.
///
/// A parent key exists only while it has at least one sub-region.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubscriptionSet {
    regions: BTreeMap<String, Vec<String>>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the authoritative backend list.
    pub fn from_response(resp: &SubscriptionsResponse) -> Self {
        let mut set = Self::new();
        for area in &resp.areas {
            for sub in area.sub_areas.iter().filter(|s| s.subscribe) {
                set.insert(&area.name, &sub.name);
            }
        }
        set
    }

    pub fn insert(&mut self, region: &str, sub_region: &str) -> bool {
        let subs = self.regions.entry(region.to_string()).or_default();
        if subs.iter().any(|s| s == sub_region) {
            return false;
        }
        subs.push(sub_region.to_string());
        true
    }

    pub fn remove(&mut self, region: &str, sub_region: &str) -> bool {
        let Some(subs) = self.regions.get_mut(region) else {
            return false;
        };
        let before = subs.len();
        subs.retain(|s| s != sub_region);
        let removed = subs.len() != before;
        if subs.is_empty() {
            self.regions.remove(region);
        }
        removed
    }

    pub fn contains(&self, region: &str, sub_region: &str) -> bool {
        self.regions
            .get(region)
            .is_some_and(|subs| subs.iter().any(|s| s == sub_region))
    }

    pub fn get(&self, region: &str) -> Option<&[String]> {
        self.regions.get(region).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.regions.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Number of subscribed sub-regions across all parents.
    pub fn total(&self) -> usize {
        self.regions.values().map(Vec::len).sum()
    }
}
