//! Terraform provider for QuantCDN
//!
//! Exposes two managed resources, `quant_form` and `quant_revision`, plus
//! the provider configuration that constructs the one API client shared by
//! both for the lifetime of a run.

pub mod api;
pub mod resources;

use std::collections::HashMap;
use std::sync::OnceLock;

use async_trait::async_trait;
use tfcore::context::Context;
use tfcore::diagnostics::Diagnostics;
use tfcore::provider::Provider;
use tfcore::schema::ResourceSchema;

use api::{Client, ClientConfig, DEFAULT_BASEPATH, DEFAULT_HOSTNAME};
use resources::{FormResource, RevisionResource};

/// Declared provider attributes. Unset values fall back to the QUANT_*
/// environment variables; hostname and basepath have built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct QuantProviderConfig {
    pub client_id: Option<String>,
    pub project: Option<String>,
    pub api_token: Option<String>,
    pub api_hostname: Option<String>,
    pub api_basepath: Option<String>,
}

impl QuantProviderConfig {
    /// Credentials are not validated here; the API rejects bad ones on the
    /// first call.
    fn resolve(self) -> ClientConfig {
        ClientConfig {
            client_id: self
                .client_id
                .or_else(|| std::env::var("QUANT_CLIENT_ID").ok())
                .unwrap_or_default(),
            project: self
                .project
                .or_else(|| std::env::var("QUANT_PROJECT").ok())
                .unwrap_or_default(),
            token: self
                .api_token
                .or_else(|| std::env::var("QUANT_TOKEN").ok())
                .unwrap_or_default(),
            hostname: self
                .api_hostname
                .or_else(|| std::env::var("QUANT_HOSTNAME").ok())
                .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string()),
            basepath: self
                .api_basepath
                .or_else(|| std::env::var("QUANT_BASEPATH").ok())
                .unwrap_or_else(|| DEFAULT_BASEPATH.to_string()),
        }
    }
}

pub struct QuantProvider {
    client: Option<Client>,
}

impl Default for QuantProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantProvider {
    pub fn new() -> Self {
        Self { client: None }
    }

    fn configured_client(&self) -> tfcore::Result<Client> {
        Ok(self
            .client
            .as_ref()
            .ok_or("provider not configured")?
            .clone())
    }

    pub fn form_resource(&self) -> tfcore::Result<FormResource> {
        Ok(FormResource::new(self.configured_client()?))
    }

    pub fn revision_resource(&self) -> tfcore::Result<RevisionResource> {
        Ok(RevisionResource::new(self.configured_client()?))
    }
}

#[async_trait]
impl Provider for QuantProvider {
    type Config = QuantProviderConfig;

    async fn configure(&mut self, _ctx: Context, config: QuantProviderConfig) -> Diagnostics {
        let mut diags = Diagnostics::new();

        match Client::new(config.resolve()) {
            Ok(client) => self.client = Some(client),
            Err(e) => diags.add_error(format!("failed to create API client: {}", e), None),
        }

        diags
    }

    fn resource_schemas(&self) -> HashMap<String, ResourceSchema> {
        static SCHEMAS: OnceLock<HashMap<String, ResourceSchema>> = OnceLock::new();

        SCHEMAS
            .get_or_init(|| {
                let mut schemas = HashMap::new();
                schemas.insert("quant_form".to_string(), FormResource::schema_static());
                schemas.insert(
                    "quant_revision".to_string(),
                    RevisionResource::schema_static(),
                );
                schemas
            })
            .clone()
    }
}
