use reqwest::StatusCode;

/// Failure of one gateway call: transport error or gateway-reported rejection.
///
/// No retry classification here; failed deliveries are recorded in the
/// dispatch report and never retried automatically.
#[derive(Debug)]
pub(super) struct SmsApiError {
    pub(super) status: Option<StatusCode>,
    pub(super) body: String,
}

impl SmsApiError {
    pub(super) fn from_reqwest(err: reqwest::Error) -> Self {
        let body = if err.is_timeout() {
            format!("timed out: {err}")
        } else {
            err.to_string()
        };
        Self { status: None, body }
    }
}

impl std::fmt::Display for SmsApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "status={status}, body={}", self.body),
            None => write!(f, "{}", self.body),
        }
    }
}

impl std::error::Error for SmsApiError {}

pub(super) fn sms_api_error_description<'a>(
    data: &'a serde_json::Value,
    fallback: &'a str,
) -> &'a str {
    data.get("error")
        .or_else(|| data.get("message"))
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback)
}
