//! One request per message to the device-addressed SMS gateway.

use serde_json::json;

use super::client::build_sms_http_client;
use super::error::{SmsApiError, sms_api_error_description};

/// Address and credentials for the external SMS gateway.
#[derive(Clone, Debug)]
pub struct SmsGatewayConfig {
    /// Gateway API base URL.
    pub base_url: String,
    /// Registered device identifier messages are routed through.
    pub device_id: String,
    /// API key sent as `x-api-key` on every request.
    pub api_key: String,
}

/// Client for the external SMS gateway.
pub struct SmsGateway {
    client: reqwest::Client,
    config: SmsGatewayConfig,
}

impl SmsGateway {
    /// Build a gateway client with timeouts.
    #[must_use]
    pub fn new(config: SmsGatewayConfig) -> Self {
        Self {
            client: build_sms_http_client(),
            config,
        }
    }

    fn send_url(&self) -> String {
        format!(
            "{}/gateway/devices/{}/send-sms",
            self.config.base_url.trim_end_matches('/'),
            self.config.device_id
        )
    }

    /// Send one message to one recipient. No automatic retry; the caller
    /// records the outcome and moves on to the next giver.
    pub(super) async fn send_sms(&self, recipient: &str, message: &str) -> Result<(), SmsApiError> {
        let body = json!({
            "recipients": [recipient],
            "message": message,
        });
        let response = self
            .client
            .post(self.send_url())
            .header("x-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(SmsApiError::from_reqwest)?;
        Self::validate_gateway_response(response).await
    }

    async fn validate_gateway_response(response: reqwest::Response) -> Result<(), SmsApiError> {
        let status = response.status();
        let body_text = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<serde_json::Value>(&body_text).ok();

        if !status.is_success() {
            return Err(SmsApiError {
                status: Some(status),
                body: parsed
                    .as_ref()
                    .map(|data| sms_api_error_description(data, body_text.as_str()).to_string())
                    .unwrap_or(body_text),
            });
        }

        // A 2xx carrying {"success": false} is still a gateway-reported failure.
        if let Some(data) = parsed {
            let ok = data
                .get("success")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(true);
            if !ok {
                return Err(SmsApiError {
                    status: Some(status),
                    body: sms_api_error_description(&data, body_text.as_str()).to_string(),
                });
            }
        }

        Ok(())
    }
}
