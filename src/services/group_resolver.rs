//! Resolution of configured groups to the numeric IDs the events API needs.
//!
//! Numeric entries pass through untouched; slugs are looked up once through
//! `GET {meetup_api}/{slug}`. The resolved list is memoized for the lifetime
//! of the resolver. A failed resolution is not memoized, so the next listing
//! retries it.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::OnceCell;

use crate::{
    error::{AppError, Result},
    models::{Group, GroupIds, GroupRef},
};

/// Anything that can hand out the group IDs to query.
#[async_trait]
pub trait GroupSource: Send + Sync {
    async fn group_ids(&self) -> Result<GroupIds>;
}

/// Body of `GET /{urlname}`; everything but the id is ignored.
#[derive(Debug, Deserialize)]
struct GroupLookupResponse {
    id: u64,
}

pub struct GroupResolver {
    http: Client,
    api_base: String,
    groups: Vec<Group>,
    resolved: OnceCell<GroupIds>,
}

impl GroupResolver {
    pub fn new(http: Client, api_base: impl Into<String>, groups: Vec<Group>) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            groups,
            resolved: OnceCell::new(),
        }
    }

    /// Whether the group list has already been resolved.
    pub fn is_resolved(&self) -> bool {
        self.resolved.initialized()
    }

    async fn resolve_all(&self) -> Result<GroupIds> {
        let mut ids: Vec<u64> = Vec::with_capacity(self.groups.len());

        for group in &self.groups {
            let id = match &group.reference {
                GroupRef::Id(id) => *id,
                GroupRef::Slug(slug) => self.lookup(slug).await?,
            };

            if ids.contains(&id) {
                return Err(AppError::GroupResolution(format!(
                    "group '{}' resolves to id {} which is already configured",
                    group.reference, id
                )));
            }
            ids.push(id);
        }

        tracing::info!(count = ids.len(), "Resolved meetup group ids");
        Ok(GroupIds::new(ids))
    }

    async fn lookup(&self, slug: &str) -> Result<u64> {
        let mut url = Url::parse(&self.api_base).map_err(|e| {
            AppError::Configuration(format!("Invalid Meetup API url '{}': {e}", self.api_base))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Configuration(format!(
                    "Meetup API url '{}' cannot be a base",
                    self.api_base
                ))
            })?
            .pop_if_empty()
            .push(slug);

        tracing::debug!(slug, "Looking up meetup group id");

        let response = self.http.get(url).send().await.map_err(|e| {
            AppError::GroupResolution(format!("lookup of '{slug}' failed: {e}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::GroupResolution(format!(
                "lookup of '{slug}' returned {status}: {body}"
            )));
        }

        let group: GroupLookupResponse = response.json().await.map_err(|e| {
            AppError::GroupResolution(format!("unexpected lookup response for '{slug}': {e}"))
        })?;

        Ok(group.id)
    }
}

#[async_trait]
impl GroupSource for GroupResolver {
    async fn group_ids(&self) -> Result<GroupIds> {
        self.resolved
            .get_or_try_init(|| self.resolve_all())
            .await
            .cloned()
    }
}
