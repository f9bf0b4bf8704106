//! Common wire types and helpers for the Quant API

use serde::Deserialize;

/// Error body shape: `{"error": true, "errorMsg": "..."}`. The message text
/// is the only error signal consumed; there are no structured codes.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(rename = "errorMsg")]
    pub error_msg: Option<String>,
}

/// Builder for URL query strings
#[derive(Debug, Clone, Default)]
pub struct ApiQuery {
    params: Vec<(String, String)>,
}

impl ApiQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn to_query_string(&self) -> String {
        if self.params.is_empty() {
            String::new()
        } else {
            format!(
                "?{}",
                self.params
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                    .collect::<Vec<_>>()
                    .join("&")
            )
        }
    }
}
