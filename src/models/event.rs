use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// An upcoming meetup, ready to be formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub starts_at: DateTime<Utc>,
    pub group_name: String,
    pub url: String,
}

/// Body of `GET /2/events`.
#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    pub results: Vec<RawEvent>,
}

/// One entry of `results`, restricted to the `only=` field selection.
#[derive(Debug, Deserialize)]
pub struct RawEvent {
    #[serde(deserialize_with = "deserialize_epoch_millis")]
    pub time: i64,
    pub group: RawEventGroup,
    pub event_url: String,
}

#[derive(Debug, Deserialize)]
pub struct RawEventGroup {
    pub name: String,
}

impl TryFrom<RawEvent> for Event {
    type Error = String;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        let starts_at = DateTime::from_timestamp_millis(raw.time)
            .ok_or_else(|| format!("event time out of range: {}", raw.time))?;
        Ok(Event {
            starts_at,
            group_name: raw.group.name,
            url: raw.event_url,
        })
    }
}

/// Meetup reports `time` as epoch milliseconds, usually a JSON number but
/// occasionally a numeric string.
fn deserialize_epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Number(i64),
        Text(String),
    }

    match Millis::deserialize(deserializer)? {
        Millis::Number(ms) => Ok(ms),
        Millis::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Look-ahead window for the events query.
///
/// The events API takes a relative range like `,1m` ("from now until one
/// month ahead"); that token only exists at the query boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    months: u32,
}

impl TimeWindow {
    pub const fn next_months(months: u32) -> Self {
        Self { months }
    }

    pub fn months(&self) -> Months {
        Months::new(self.months)
    }

    pub fn to_query_token(&self) -> String {
        format!(",{}m", self.months)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::next_months(1)
    }
}
