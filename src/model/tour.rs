use serde::{Deserialize, Serialize};

pub type TourId = u64;

/// Event summary as listed in the subscription feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub tour_id: TourId,
    pub title: String,

    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,

    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub sigun_gu: String,

    #[serde(default)]
    pub main_image_url: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub content_size: u32,
    pub has_next: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToursPage {
    #[serde(rename = "metaData")]
    pub meta: PageMeta,

    #[serde(default)]
    pub tours: Vec<Tour>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourOverview {
    #[serde(default)]
    pub event_start_date: String,
    #[serde(default)]
    pub event_end_date: String,
    #[serde(default)]
    pub business_hours: String,
    #[serde(default)]
    pub expected_duration: String,
    #[serde(default)]
    pub cost: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDetailInfo {
    pub info_name: String,
    pub info_text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDirections {
    #[serde(default)]
    pub road_address: String,
    #[serde(default)]
    pub event_place: String,
    #[serde(default)]
    pub telephone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDetail {
    pub tour_id: TourId,
    pub title: String,

    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub overview: TourOverview,
    #[serde(default)]
    pub detail_info: Vec<TourDetailInfo>,
    #[serde(default)]
    pub directions: TourDirections,
}

impl Tour {
    /// `2025.09.01 ~ 2025.09.05`, or the single date when both ends match.
    pub fn date_range(&self) -> String {
        let start = display_date(&self.start_date);
        let end = display_date(&self.end_date);
        if end.is_empty() || start == end {
            start
        } else {
            format!("{} ~ {}", start, end)
        }
    }
}

/// Render `YYYY-MM-DD` or `YYYYMMDD` as `YYYY.MM.DD`; anything else verbatim.
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    let Ok(out) = time::format_description::parse("[year].[month].[day]") else {
        return raw.to_string();
    };
    for pattern in ["[year]-[month]-[day]", "[year][month][day]"] {
        let Ok(input) = time::format_description::parse(pattern) else {
            continue;
        };
        if let Ok(date) = time::Date::parse(raw, &input)
            && let Ok(s) = date.format(&out)
        {
            return s;
        }
    }
    raw.to_string()
}
