use serde::{Deserialize, Serialize};

/// How a Meetup group is referenced in configuration.
///
/// The events API only understands numeric IDs; slugs (the `urlname` that
/// shows up in `meetup.com/<slug>`) need a lookup first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupRef {
    Id(u64),
    Slug(String),
}

impl GroupRef {
    /// Parse a single configuration entry. Purely numeric entries are IDs,
    /// anything else is a slug. Returns `None` for blank entries.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<u64>() {
            Ok(id) => Some(GroupRef::Id(id)),
            Err(_) => Some(GroupRef::Slug(raw.to_string())),
        }
    }
}

impl std::fmt::Display for GroupRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupRef::Id(id) => write!(f, "{id}"),
            GroupRef::Slug(slug) => write!(f, "{slug}"),
        }
    }
}

/// A configured community group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub reference: GroupRef,
    pub name: Option<String>,
}

impl Group {
    pub fn with_id(id: u64, name: &str) -> Self {
        Self {
            reference: GroupRef::Id(id),
            name: Some(name.to_string()),
        }
    }

    pub fn with_slug(slug: &str) -> Self {
        Self {
            reference: GroupRef::Slug(slug.to_string()),
            name: None,
        }
    }
}

/// Montevideo tech communities relayed by default.
pub fn default_groups() -> Vec<Group> {
    [
        (12641372, "ember-montevideo"),
        (20489638, "ReactJS-Uruguay"),
        (18755240, "Angular-MVD"),
        (5844892, "montevideojs"),
        (18200397, "Front-end-MVD"),
        (19945900, "Elixir |> Montevideo"),
        (28497632, "Montevideo-Web-Developers"),
        (17631212, "Rust-Uruguay"),
        (5946782, "py-mvd"),
        (31611165, "Loop-Talks"),
        (18188651, "Laravel-UY"),
        (29967071, "Montevideo Vue.JS Meetup"),
        (20190084, "NahualUY"),
        (32642296, "AETERNITY-URUGUAY"),
        (31980598, "Odoo-ERP-Uruguay"),
        (264059344, "mujeresituy"),
    ]
    .into_iter()
    .map(|(id, name)| Group::with_id(id, name))
    .collect()
}

/// Parse a comma-separated group list such as `"12641372,Rust-Uruguay"`.
///
/// Blank entries are rejected rather than skipped, so a stray comma in the
/// environment cannot silently shrink the list.
pub fn parse_group_list(raw: &str) -> Result<Vec<Group>, String> {
    raw.split(',')
        .enumerate()
        .map(|(idx, entry)| {
            GroupRef::parse(entry)
                .map(|reference| Group {
                    reference,
                    name: None,
                })
                .ok_or_else(|| format!("empty group entry at position {}", idx + 1))
        })
        .collect()
}

/// Numeric group IDs in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupIds(Vec<u64>);

impl GroupIds {
    pub fn new(ids: Vec<u64>) -> Self {
        Self(ids)
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Comma-joined form used as the `group_id` query parameter.
    pub fn to_query_value(&self) -> String {
        self.0
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
