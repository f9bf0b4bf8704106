//! Form resource: manages a form-handling endpoint on the platform
//!
//! The platform has no true delete for forms; removing the resource fetches
//! the current form, flips `enabled` off, and pushes an update.

use async_trait::async_trait;
use tfcore::context::Context;
use tfcore::diagnostics::Diagnostics;
use tfcore::error::Error;
use tfcore::resource::Resource;
use tfcore::schema::{AttributeBuilder, ResourceSchema, SchemaBuilder};
use tfcore::Result;

use super::url_validator;
use crate::api::{
    Client, Form, FormConfig, FormNotificationEmail, FormNotificationEmailOptions,
    FormNotificationSlack, FormNotifications, RevisionQuery,
};

pub struct FormResource {
    client: Client,
}

/// Declared configuration and persisted state for one form. The url is the
/// resource identity. The remote schema is richer; fields missing here are
/// not round-tripped.
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    pub url: String,
    pub enabled: bool,
    pub success_message: String,
    pub failure_message: String,
    pub mandatory_fields_message: String,
    pub mandatory_fields: Vec<String>,
    pub honeypot_fields: Vec<String>,
    pub remove_fields: Vec<String>,
    pub notification_email: Option<EmailNotificationModel>,
    pub notification_slack: Option<SlackNotificationModel>,
}

impl Default for FormModel {
    fn default() -> Self {
        Self {
            url: String::new(),
            enabled: true,
            success_message: "Thank you for your submission.".to_string(),
            failure_message: "An error occurred. Please reload the page and try again."
                .to_string(),
            mandatory_fields_message: "Some required values were missing, please try again."
                .to_string(),
            mandatory_fields: Vec::new(),
            honeypot_fields: Vec::new(),
            remove_fields: Vec::new(),
            notification_email: None,
            notification_slack: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmailNotificationModel {
    pub to: String,
    pub cc: String,
    pub from: String,
    pub subject: String,
    pub enabled: bool,
    pub text_only: bool,
    pub include_results: bool,
}

impl Default for EmailNotificationModel {
    fn default() -> Self {
        Self {
            to: String::new(),
            cc: String::new(),
            from: String::new(),
            subject: String::new(),
            enabled: true,
            text_only: false,
            include_results: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlackNotificationModel {
    pub webhook: String,
    pub enabled: bool,
}

impl Default for SlackNotificationModel {
    fn default() -> Self {
        Self {
            webhook: String::new(),
            enabled: true,
        }
    }
}

impl FormModel {
    fn to_form(&self) -> Form {
        Form {
            url: self.url.clone(),
            enabled: self.enabled,
            config: FormConfig {
                target: self.url.clone(),
                honeypot_fields: self.honeypot_fields.clone(),
                mandatory_fields: self.mandatory_fields.clone(),
                remove_fields: self.remove_fields.clone(),
                success_message: self.success_message.clone(),
                error_message_generic: self.failure_message.clone(),
                error_message_mandatory: self.mandatory_fields_message.clone(),
                notifications: FormNotifications {
                    email: self
                        .notification_email
                        .as_ref()
                        .map(|email| FormNotificationEmail {
                            to: email.to.clone(),
                            cc: email.cc.clone(),
                            from: email.from.clone(),
                            subject: email.subject.clone(),
                            enabled: email.enabled,
                            options: FormNotificationEmailOptions {
                                text_only: email.text_only,
                                include_results: email.include_results,
                            },
                        })
                        .unwrap_or_default(),
                    slack: self
                        .notification_slack
                        .as_ref()
                        .map(|slack| FormNotificationSlack {
                            webhook: slack.webhook.clone(),
                            enabled: slack.enabled,
                        })
                        .unwrap_or_default(),
                },
            },
        }
    }

    /// The wire shape always carries the notification objects; an empty
    /// recipient/webhook means the block is unset.
    fn from_form(form: &Form) -> Self {
        let email = &form.config.notifications.email;
        let notification_email = (!email.to.is_empty()).then(|| EmailNotificationModel {
            to: email.to.clone(),
            cc: email.cc.clone(),
            from: email.from.clone(),
            subject: email.subject.clone(),
            enabled: email.enabled,
            text_only: email.options.text_only,
            include_results: email.options.include_results,
        });

        let slack = &form.config.notifications.slack;
        let notification_slack = (!slack.webhook.is_empty()).then(|| SlackNotificationModel {
            webhook: slack.webhook.clone(),
            enabled: slack.enabled,
        });

        Self {
            url: form.url.clone(),
            enabled: form.enabled,
            success_message: form.config.success_message.clone(),
            failure_message: form.config.error_message_generic.clone(),
            mandatory_fields_message: form.config.error_message_mandatory.clone(),
            mandatory_fields: form.config.mandatory_fields.clone(),
            honeypot_fields: form.config.honeypot_fields.clone(),
            remove_fields: form.config.remove_fields.clone(),
            notification_email,
            notification_slack,
        }
    }
}

impl FormResource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn schema_static() -> ResourceSchema {
        SchemaBuilder::new()
            .attribute(
                AttributeBuilder::string("url")
                    .required()
                    .description("The URL path that accepts post values for this form; must start with '/'"),
            )
            .attribute(
                AttributeBuilder::bool("enabled")
                    .optional()
                    .description("Whether the form endpoint accepts submissions (defaults to true)"),
            )
            .attribute(
                AttributeBuilder::string("success_message")
                    .optional()
                    .description("Text to display when form submission is successful"),
            )
            .attribute(
                AttributeBuilder::string("failure_message")
                    .optional()
                    .description("Text to display when the form fails to submit correctly"),
            )
            .attribute(
                AttributeBuilder::string("mandatory_fields_message")
                    .optional()
                    .description("Text to display when mandatory fields are missing"),
            )
            .attribute(
                AttributeBuilder::list_of_strings("mandatory_fields")
                    .optional()
                    .description("Field names that are required"),
            )
            .attribute(
                AttributeBuilder::list_of_strings("honeypot_fields")
                    .optional()
                    .description("Field names treated as honeypot fields"),
            )
            .attribute(
                AttributeBuilder::list_of_strings("remove_fields")
                    .optional()
                    .description("Field names removed from submissions"),
            )
            .attribute(
                AttributeBuilder::single_nested(
                    "notification_email",
                    vec![
                        AttributeBuilder::string("to").required().build(),
                        AttributeBuilder::string("cc").optional().build(),
                        AttributeBuilder::string("from").required().build(),
                        AttributeBuilder::string("subject").required().build(),
                        AttributeBuilder::bool("enabled").optional().build(),
                        AttributeBuilder::bool("text_only").optional().build(),
                        AttributeBuilder::bool("include_results").optional().build(),
                    ],
                )
                .optional()
                .description("Email notification configuration"),
            )
            .attribute(
                AttributeBuilder::single_nested(
                    "notification_slack",
                    vec![
                        AttributeBuilder::string("webhook").required().sensitive().build(),
                        AttributeBuilder::bool("enabled").optional().build(),
                    ],
                )
                .optional()
                .description("Slack notification configuration"),
            )
            .build_resource(0)
    }

    async fn fetch(&self, url: &str) -> Result<Option<FormModel>> {
        let form = self
            .client
            .get_form(&RevisionQuery {
                url: url.to_string(),
            })
            .await
            .map_err(|e| Error::from(format!("failed to read form {}: {}", url, e)))?;

        if form.url.is_empty() {
            return Ok(None);
        }

        Ok(Some(FormModel::from_form(&form)))
    }
}

#[async_trait]
impl Resource for FormResource {
    type Config = FormModel;
    type State = FormModel;

    fn type_name(&self) -> &str {
        "quant_form"
    }

    fn schema(&self) -> ResourceSchema {
        Self::schema_static()
    }

    fn validate(&self, config: &FormModel) -> Diagnostics {
        let mut diags = Diagnostics::new();
        url_validator().validate(&config.url, "url", &mut diags);
        diags
    }

    async fn create(&self, ctx: Context, config: FormModel) -> Result<(FormModel, Diagnostics)> {
        let diags = self.validate(&config);
        if diags.has_errors() {
            return Err(Error::ValidationFailed(diags.error_summary()));
        }
        if ctx.is_cancelled() {
            return Err(Error::Cancelled);
        }

        self.client
            .add_form(&config.to_form())
            .await
            .map_err(|e| Error::from(format!("failed to create form {}: {}", config.url, e)))?;

        // Reconcile full state from the remote copy.
        match self.fetch(&config.url).await? {
            Some(state) => Ok((state, Diagnostics::new())),
            None => Err(Error::from(format!(
                "form {} missing after create",
                config.url
            ))),
        }
    }

    async fn read(
        &self,
        _ctx: Context,
        state: FormModel,
    ) -> Result<(Option<FormModel>, Diagnostics)> {
        let mut diags = Diagnostics::new();
        match self.fetch(&state.url).await? {
            Some(model) => Ok((Some(model), diags)),
            None => {
                // Identity is cleared, and the condition is still reported.
                diags.add_error(format!("form {} no longer exists", state.url), None);
                Ok((None, diags))
            }
        }
    }

    async fn update(
        &self,
        ctx: Context,
        _state: FormModel,
        config: FormModel,
    ) -> Result<(FormModel, Diagnostics)> {
        let diags = self.validate(&config);
        if diags.has_errors() {
            return Err(Error::ValidationFailed(diags.error_summary()));
        }
        if ctx.is_cancelled() {
            return Err(Error::Cancelled);
        }

        match self.client.update_form(&config.to_form()).await {
            Ok(_) => Ok((config, Diagnostics::new())),
            // Content already current on the remote side; treat as a no-op.
            Err(e) if e.is_idempotent_republish() => Ok((config, Diagnostics::new())),
            Err(e) => Err(Error::from(format!(
                "failed to update form {}: {}",
                config.url, e
            ))),
        }
    }

    async fn delete(&self, ctx: Context, state: FormModel) -> Result<Diagnostics> {
        if ctx.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let fetched = self
            .client
            .get_form(&RevisionQuery {
                url: state.url.clone(),
            })
            .await;

        // The disable is attempted even when the fetch failed, and its
        // outcome is ignored; the fetch error wins.
        let mut form = match &fetched {
            Ok(form) => form.clone(),
            Err(_) => Form {
                url: state.url.clone(),
                ..Form::default()
            },
        };
        form.enabled = false;

        if let Err(e) = self.client.update_form(&form).await {
            tracing::warn!("failed to disable form {}: {}", state.url, e);
        }

        fetched
            .map_err(|e| Error::from(format!("failed to delete form {}: {}", state.url, e)))?;

        Ok(Diagnostics::new())
    }
}
