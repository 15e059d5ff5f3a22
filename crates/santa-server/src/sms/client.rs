use std::time::Duration;

const SMS_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const SMS_HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

pub(super) fn build_sms_http_client() -> reqwest::Client {
    match reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(SMS_HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(SMS_HTTP_REQUEST_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => client,
        Err(error) => {
            tracing::warn!(
                error = %error,
                "Failed to build SMS HTTP client with timeouts; falling back to default client"
            );
            reqwest::Client::new()
        }
    }
}
