//! Rendering of upcoming meetups as a Block Kit message.
//!
//! Times are shown in Montevideo wall-clock time (UTC−03:00, no DST) with
//! Spanish month names, e.g. ` 5 marzo - 19:00`.
//!
//! Group names and URLs go into `mrkdwn` text as-is. Slack control sequences
//! (`&`, `<`, `>`) in upstream data are not escaped.

use chrono::{DateTime, FixedOffset, Locale, Utc};

use crate::models::{Block, Event, SlackMessage};

/// Header line shown above the list.
pub const INTRO_LINE: &str = "Los próximos meetups son:";

/// `%e` pads single-digit days with a space, like the `date` command.
pub const TIME_FORMAT: &str = "%e %B - %H:%M";

pub const DISPLAY_LOCALE: Locale = Locale::es_ES;

pub const DISPLAY_OFFSET: FixedOffset = match FixedOffset::west_opt(3 * 3600) {
    Some(offset) => offset,
    None => panic!("UTC-03:00 is a valid offset"),
};

pub fn format_start_time(starts_at: &DateTime<Utc>) -> String {
    starts_at
        .with_timezone(&DISPLAY_OFFSET)
        .format_localized(TIME_FORMAT, DISPLAY_LOCALE)
        .to_string()
}

pub fn bullet_line(event: &Event) -> String {
    format!(
        "• {} - {} - {}",
        format_start_time(&event.starts_at),
        event.group_name,
        event.url
    )
}

pub fn bullet_list(events: &[Event]) -> String {
    events.iter().map(bullet_line).collect::<Vec<_>>().join("\n")
}

pub fn list_message(events: &[Event]) -> SlackMessage {
    SlackMessage {
        blocks: vec![
            Block::mrkdwn_section(INTRO_LINE),
            Block::mrkdwn_section(bullet_list(events)),
        ],
    }
}
