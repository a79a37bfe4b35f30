pub mod delivery_service;
pub mod event_service;
pub mod group_resolver;
pub mod meetup_service;
pub mod message_formatter;
pub mod signature_service;
pub mod slack_oauth_service;

pub use delivery_service::{PushOutcome, WebhookDelivery};
pub use event_service::EventService;
pub use group_resolver::{GroupResolver, GroupSource};
pub use meetup_service::MeetupService;
pub use message_formatter::{bullet_line, bullet_list, format_start_time, list_message};
pub use signature_service::{compute_signature, parse_signature_header, verify_signature};
pub use slack_oauth_service::{OAuthOutcome, SlackOAuthConfig, SlackOAuthService};
