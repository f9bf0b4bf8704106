//! tfcore - resource lifecycle framework core
//!
//! The trait seam a Terraform-style provider programs against: schemas,
//! diagnostics, request-scoped contexts, and the `Resource`/`Provider`
//! lifecycle traits. The wire protocol that drives these traits (RPC
//! transport, state encoding, plan computation) lives in the plugin runtime,
//! not here.

pub mod context;
pub mod diagnostics;
pub mod error;
pub mod provider;
pub mod resource;
pub mod schema;
pub mod validator;

// Re-exports for convenience
pub use context::Context;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{Error, Result};
pub use provider::Provider;
pub use resource::Resource;
pub use schema::{Attribute, AttributeBuilder, AttributeType, ResourceSchema, SchemaBuilder};
pub use validator::StringPatternValidator;
