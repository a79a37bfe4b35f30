use serde::{Deserialize, Serialize};

/// Block Kit message body, as accepted both by incoming webhooks and by
/// slash-command responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { text: TextObject },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TextObject {
    Mrkdwn { text: String },
}

impl Block {
    pub fn mrkdwn_section(text: impl Into<String>) -> Self {
        Block::Section {
            text: TextObject::Mrkdwn { text: text.into() },
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Block::Section {
                text: TextObject::Mrkdwn { text },
            } => text,
        }
    }
}

/// Slash-command arguments taken from the form-encoded request body.
///
/// Slack may in theory repeat a field, so every `text` value is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandArgs(pub Vec<String>);

impl CommandArgs {
    pub fn from_form(body: &[u8]) -> Self {
        Self(
            url::form_urlencoded::parse(body)
                .filter(|(key, _)| key == "text")
                .map(|(_, value)| value.into_owned())
                .collect(),
        )
    }

    /// Exactly one `text` value equal to `list`. No trimming, no case folding.
    pub fn is_list(&self) -> bool {
        matches!(self.0.as_slice(), [only] if only == "list")
    }
}

/// Query parameters Slack appends when redirecting after installation.
#[derive(Debug, Deserialize)]
pub struct OAuthRedirectParams {
    pub code: Option<String>,
}
