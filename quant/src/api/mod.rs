//! QuantCDN API client and wire types

pub mod client;
pub mod common;
pub mod error;
pub mod forms;
pub mod revisions;

#[cfg(test)]
pub mod test_helpers;

pub use client::{Client, ClientConfig, DEFAULT_BASEPATH, DEFAULT_HOSTNAME};
pub use error::ApiError;
pub use forms::{
    Form, FormConfig, FormNotificationEmail, FormNotificationEmailOptions, FormNotificationSlack,
    FormNotifications,
};
pub use revisions::{MarkupRevision, Revision, RevisionQuery};
