//! Provider trait: one-time configuration and schema discovery

use crate::context::Context;
use crate::diagnostics::Diagnostics;
use crate::schema::ResourceSchema;
use async_trait::async_trait;
use std::collections::HashMap;

/// A provider resolves its configuration once per run and hands out
/// configured resources. The configuration is immutable afterwards.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Statically typed provider configuration
    type Config: Send;

    /// Resolve configuration and construct shared collaborators (typically
    /// one API client). Failures are reported as error diagnostics.
    async fn configure(&mut self, ctx: Context, config: Self::Config) -> Diagnostics;

    /// Schemas for every resource type this provider manages, keyed by
    /// type name.
    fn resource_schemas(&self) -> HashMap<String, ResourceSchema>;
}
