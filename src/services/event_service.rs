use reqwest::Client;

use crate::{
    error::{AppError, Result},
    models::{Event, EventsResponse, GroupIds, TimeWindow},
};

/// Fields requested from the events API; everything else is dropped upstream.
pub const EVENT_FIELDS: &str = "time,group.name,event_url";

/// Only events that have not happened yet.
pub const EVENT_STATUS: &str = "upcoming";

/// Client for Meetup's `GET /2/events` listing.
#[derive(Debug, Clone)]
pub struct EventService {
    http: Client,
    api_base: String,
    window: TimeWindow,
}

impl EventService {
    pub fn new(http: Client, api_base: impl Into<String>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            window: TimeWindow::default(),
        }
    }

    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    /// Fetch upcoming events for the given groups, in the order the API
    /// returns them. Single attempt; an empty result is not an error.
    pub async fn fetch_upcoming(&self, group_ids: &GroupIds) -> Result<Vec<Event>> {
        let url = format!("{}/2/events", self.api_base.trim_end_matches('/'));
        let time = self.window.to_query_token();
        let group_id = group_ids.to_query_value();

        let response = self
            .http
            .get(&url)
            .query(&[
                ("group_id", group_id.as_str()),
                ("only", EVENT_FIELDS),
                ("status", EVENT_STATUS),
                ("time", time.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::EventFetch(format!("Meetup request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::EventFetch(format!(
                "Meetup API error {status}: {body}"
            )));
        }

        let listing: EventsResponse = response
            .json()
            .await
            .map_err(|e| AppError::EventFetch(format!("Failed to parse events: {e}")))?;

        let events = listing
            .results
            .into_iter()
            .map(Event::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(AppError::EventFetch)?;

        tracing::debug!(
            count = events.len(),
            groups = group_ids.as_slice().len(),
            "Fetched upcoming meetups"
        );
        Ok(events)
    }
}
