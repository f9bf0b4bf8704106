//! Form endpoint wire types and operations
//!
//! A form is addressed by its URL path; the API keeps the richer
//! configuration under a nested `config` object whose `target` mirrors the
//! url. Missing fields deserialize to defaults so a "not found" lookup
//! comes back as a form with an empty url rather than an error.

use serde::{Deserialize, Serialize};

use super::client::Client;
use super::common::ApiQuery;
use super::error::ApiError;
use super::revisions::RevisionQuery;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Form {
    pub url: String,
    pub enabled: bool,
    pub config: FormConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub target: String,
    pub honeypot_fields: Vec<String>,
    pub mandatory_fields: Vec<String>,
    pub remove_fields: Vec<String>,
    pub success_message: String,
    pub error_message_generic: String,
    pub error_message_mandatory: String,
    pub notifications: FormNotifications,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormNotifications {
    pub email: FormNotificationEmail,
    pub slack: FormNotificationSlack,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormNotificationEmail {
    pub to: String,
    pub cc: String,
    pub from: String,
    pub subject: String,
    pub enabled: bool,
    pub options: FormNotificationEmailOptions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormNotificationEmailOptions {
    pub text_only: bool,
    pub include_results: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormNotificationSlack {
    pub webhook: String,
    pub enabled: bool,
}

impl Client {
    pub async fn add_form(&self, form: &Form) -> Result<Form, ApiError> {
        self.post("/forms", form).await
    }

    pub async fn update_form(&self, form: &Form) -> Result<Form, ApiError> {
        self.put("/forms", form).await
    }

    pub async fn get_form(&self, query: &RevisionQuery) -> Result<Form, ApiError> {
        let path = format!(
            "/forms{}",
            ApiQuery::new().add("url", &query.url).to_query_string()
        );
        self.get(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::test_client;
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn add_form_posts_wire_shape() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/forms")
            .match_body(Matcher::PartialJson(json!({
                "url": "/contact",
                "enabled": true,
                "config": {
                    "target": "/contact",
                    "mandatory_fields": ["name"],
                    "notifications": {
                        "email": {"to": "ops@example.com"}
                    }
                }
            })))
            .with_body(r#"{"url": "/contact", "enabled": true}"#)
            .create_async()
            .await;

        let form = Form {
            url: "/contact".to_string(),
            enabled: true,
            config: FormConfig {
                target: "/contact".to_string(),
                mandatory_fields: vec!["name".to_string()],
                notifications: FormNotifications {
                    email: FormNotificationEmail {
                        to: "ops@example.com".to_string(),
                        ..FormNotificationEmail::default()
                    },
                    ..FormNotifications::default()
                },
                ..FormConfig::default()
            },
        };

        let client = test_client(&server.url());
        let created = client.add_form(&form).await.unwrap();
        assert_eq!(created.url, "/contact");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_form_queries_by_encoded_url() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/forms?url=%2Fcontact")
            .with_body(
                r#"{
                    "url": "/contact",
                    "enabled": true,
                    "config": {
                        "target": "/contact",
                        "success_message": "Thanks",
                        "notifications": {
                            "slack": {"webhook": "https://hooks.slack.com/T00", "enabled": true}
                        }
                    }
                }"#,
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let form = client
            .get_form(&RevisionQuery {
                url: "/contact".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(form.url, "/contact");
        assert_eq!(form.config.success_message, "Thanks");
        assert_eq!(
            form.config.notifications.slack.webhook,
            "https://hooks.slack.com/T00"
        );
        // Fields absent from the response fall back to defaults.
        assert!(form.config.mandatory_fields.is_empty());
        assert_eq!(form.config.notifications.email.to, "");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_form_deserializes_with_empty_url() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/forms?url=%2Fmissing")
            .with_body("{}")
            .create_async()
            .await;

        let client = test_client(&server.url());
        let form = client
            .get_form(&RevisionQuery {
                url: "/missing".to_string(),
            })
            .await
            .unwrap();

        assert!(form.url.is_empty());
    }
}
