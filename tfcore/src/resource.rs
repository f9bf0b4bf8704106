//! Resource trait: the CRUD lifecycle a managed resource implements
//!
//! Each resource owns a statically typed configuration and state model
//! instead of a dynamic attribute map; the runtime decodes configuration
//! into `Config` before invoking these methods, one operation at a time per
//! resource instance.

use crate::context::Context;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::schema::ResourceSchema;
use async_trait::async_trait;

/// Lifecycle contract for a managed resource.
///
/// Operations are synchronous request/response: each call performs its
/// remote work and returns before the runtime issues the next one. Remote
/// failures are returned as `Err`; conditions the runtime should display
/// without aborting (warnings, cleared identity on read) travel in the
/// `Diagnostics` half of the response.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Declared configuration, decoded by the runtime
    type Config: Send + Sync;
    /// Persisted state for one resource instance
    type State: Send + Sync;

    /// Constant type name, e.g. "quant_form"
    fn type_name(&self) -> &str;

    /// Declarative attribute schema; cache the built value
    fn schema(&self) -> ResourceSchema;

    /// Local validation, run before any remote call
    fn validate(&self, config: &Self::Config) -> Diagnostics;

    /// Create the remote entity and return the reconciled state
    async fn create(&self, ctx: Context, config: Self::Config)
        -> Result<(Self::State, Diagnostics)>;

    /// Refresh state from the remote side. `None` clears the resource
    /// identity, signalling that the entity no longer exists.
    async fn read(
        &self,
        ctx: Context,
        state: Self::State,
    ) -> Result<(Option<Self::State>, Diagnostics)>;

    /// Apply the declared configuration to the existing remote entity
    async fn update(
        &self,
        ctx: Context,
        state: Self::State,
        config: Self::Config,
    ) -> Result<(Self::State, Diagnostics)>;

    /// Remove (or neutralise) the remote entity
    async fn delete(&self, ctx: Context, state: Self::State) -> Result<Diagnostics>;
}
