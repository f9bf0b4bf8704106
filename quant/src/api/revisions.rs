//! Content revision wire types and operations

use serde::{Deserialize, Serialize};

use super::client::Client;
use super::common::ApiQuery;
use super::error::ApiError;

/// A markup revision submitted for publishing. `content` carries the full
/// markup text; the platform decides whether it differs from the currently
/// published version.
#[derive(Debug, Clone, Serialize)]
pub struct MarkupRevision {
    pub url: String,
    pub find_attachments: bool,
    pub published: bool,
    pub content: String,
}

/// The subset of revision metadata the provider consumes on reads
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Revision {
    pub url: String,
    pub published: bool,
}

/// Lookup key for forms and revisions, both addressed by URL path
#[derive(Debug, Clone)]
pub struct RevisionQuery {
    pub url: String,
}

impl Client {
    pub async fn add_markup_revision(
        &self,
        revision: &MarkupRevision,
    ) -> Result<Revision, ApiError> {
        self.post("/revisions", revision).await
    }

    pub async fn get_revision(&self, query: &RevisionQuery) -> Result<Revision, ApiError> {
        let path = format!(
            "/revisions{}",
            ApiQuery::new().add("url", &query.url).to_query_string()
        );
        self.get(&path).await
    }
}
