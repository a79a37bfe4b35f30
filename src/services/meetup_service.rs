use std::sync::Arc;

use crate::{
    error::Result,
    models::SlackMessage,
    services::{message_formatter, EventService, GroupSource},
};

/// The listing pipeline: resolve groups, fetch their upcoming events and
/// render them as a Slack message.
#[derive(Clone)]
pub struct MeetupService {
    groups: Arc<dyn GroupSource>,
    events: EventService,
}

impl MeetupService {
    pub fn new(groups: Arc<dyn GroupSource>, events: EventService) -> Self {
        Self { groups, events }
    }

    /// Resolve the group list ahead of the first request.
    pub async fn warm_up(&self) -> Result<()> {
        let ids = self.groups.group_ids().await?;
        tracing::info!(groups = ids.as_slice().len(), "Meetup groups ready");
        Ok(())
    }

    pub async fn list_message(&self) -> Result<SlackMessage> {
        let ids = self.groups.group_ids().await?;
        let events = self.events.fetch_upcoming(&ids).await?;
        tracing::info!(events = events.len(), "Listing upcoming meetups");
        Ok(message_formatter::list_message(&events))
    }
}
