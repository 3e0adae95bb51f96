use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubArea {
    pub sigun_gu_code: String,
    pub name: String,
    pub subscribe: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub area_code: String,
    pub name: String,

    #[serde(default)]
    pub sub_areas: Vec<SubArea>,
}

impl Area {
    pub fn sub_area(&self, name: &str) -> Option<&SubArea> {
        self.sub_areas.iter().find(|s| s.name == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionsResponse {
    #[serde(default)]
    pub areas: Vec<Area>,
}

impl SubscriptionsResponse {
    pub fn area(&self, name: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubscriptionRequest {
    pub area_code: String,
    pub sigun_gu_code: String,
    pub subscribe: bool,
}
