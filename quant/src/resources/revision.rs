//! Revision resource: publishes a markup snapshot for a URL path
//!
//! `content` names a local file whose text is read at write time and pushed
//! to the platform. There is no differential update: every update re-reads
//! the file and re-submits, relying on the platform to detect unchanged
//! content. Content is never read back into state.

use async_trait::async_trait;
use tfcore::context::Context;
use tfcore::diagnostics::Diagnostics;
use tfcore::error::Error;
use tfcore::resource::Resource;
use tfcore::schema::{AttributeBuilder, ResourceSchema, SchemaBuilder};
use tfcore::Result;

use super::url_validator;
use crate::api::{Client, MarkupRevision, RevisionQuery};

pub struct RevisionResource {
    client: Client,
}

/// Declared configuration and persisted state for one revision.
/// `content` is a file path, not markup; it is a one-way field.
#[derive(Debug, Clone, PartialEq)]
pub struct RevisionModel {
    pub url: String,
    pub published: bool,
    pub find_attachments: bool,
    pub content: String,
}

impl Default for RevisionModel {
    fn default() -> Self {
        Self {
            url: String::new(),
            published: true,
            find_attachments: true,
            content: String::new(),
        }
    }
}

impl RevisionResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn schema_static() -> ResourceSchema {
        SchemaBuilder::new()
            .attribute(
                AttributeBuilder::string("url")
                    .required()
                    .description("The URL path of the revision; must start with '/'"),
            )
            .attribute(
                AttributeBuilder::bool("published")
                    .optional()
                    .description("The published status of the revision (defaults to true)"),
            )
            .attribute(
                AttributeBuilder::bool("find_attachments")
                    .optional()
                    .description("Whether the platform should crawl external assets (defaults to true)"),
            )
            .attribute(
                AttributeBuilder::string("content")
                    .required()
                    .description("Local file path to the markup to publish"),
            )
            .build_resource(0)
    }

    /// Shared by create and update: read the file, submit the revision,
    /// swallow the idempotent-republish rejection.
    async fn push(&self, ctx: &Context, config: &RevisionModel) -> Result<()> {
        let diags = self.validate(config);
        if diags.has_errors() {
            return Err(Error::ValidationFailed(diags.error_summary()));
        }
        if ctx.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let markup = tokio::fs::read_to_string(&config.content).await.map_err(|e| {
            Error::from(format!(
                "failed to load content from {}: {}",
                config.content, e
            ))
        })?;

        let revision = MarkupRevision {
            url: config.url.clone(),
            find_attachments: config.find_attachments,
            published: config.published,
            content: markup,
        };

        match self.client.add_markup_revision(&revision).await {
            Ok(_) => Ok(()),
            // The submitted content is already the published version.
            Err(e) if e.is_idempotent_republish() => Ok(()),
            Err(e) => Err(Error::from(format!(
                "failed to publish revision {}: {}",
                config.url, e
            ))),
        }
    }

    /// Refresh url and published from the remote side; content and
    /// find_attachments carry over from the prior model.
    async fn fetch(&self, prior: &RevisionModel) -> Result<RevisionModel> {
        let revision = self
            .client
            .get_revision(&RevisionQuery {
                url: prior.url.clone(),
            })
            .await
            .map_err(|e| Error::from(format!("failed to read revision {}: {}", prior.url, e)))?;

        Ok(RevisionModel {
            url: revision.url,
            published: revision.published,
            find_attachments: prior.find_attachments,
            content: prior.content.clone(),
        })
    }
}

#[async_trait]
impl Resource for RevisionResource {
    type Config = RevisionModel;
    type State = RevisionModel;

    fn type_name(&self) -> &str {
        "quant_revision"
    }

    fn schema(&self) -> ResourceSchema {
        Self::schema_static()
    }

    fn validate(&self, config: &RevisionModel) -> Diagnostics {
        let mut diags = Diagnostics::new();
        url_validator().validate(&config.url, "url", &mut diags);
        diags
    }

    async fn create(
        &self,
        ctx: Context,
        config: RevisionModel,
    ) -> Result<(RevisionModel, Diagnostics)> {
        self.push(&ctx, &config).await?;
        let state = self.fetch(&config).await?;
        Ok((state, Diagnostics::new()))
    }

    async fn read(
        &self,
        _ctx: Context,
        state: RevisionModel,
    ) -> Result<(Option<RevisionModel>, Diagnostics)> {
        let new_state = self.fetch(&state).await?;
        Ok((Some(new_state), Diagnostics::new()))
    }

    /// Updates take the same path as create: re-read the file, re-submit.
    async fn update(
        &self,
        ctx: Context,
        _state: RevisionModel,
        config: RevisionModel,
    ) -> Result<(RevisionModel, Diagnostics)> {
        self.push(&ctx, &config).await?;
        let state = self.fetch(&config).await?;
        Ok((state, Diagnostics::new()))
    }

    /// Remote deletion is not implemented by the platform; removing the
    /// resource only forgets it locally.
    async fn delete(&self, _ctx: Context, _state: RevisionModel) -> Result<Diagnostics> {
        Ok(Diagnostics::new())
    }
}
