//! Runtime settings loader for santa-server.
//!
//! Loads and merges:
//! - System defaults: `<PRJ_ROOT>/conf/settings.yaml`
//! - User overrides:  `<PRJ_CONFIG_HOME>/santa/settings.yaml`
//!
//! Merge precedence is user over system; environment variables override the
//! SMS gateway credentials and audit path last (`SANTA_SMS_BASE_URL`,
//! `SANTA_SMS_DEVICE_ID`, `SANTA_SMS_API_KEY`, `SANTA_AUDIT_LOG`).

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::sms::SmsGatewayConfig;

const DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH: &str = "conf/settings.yaml";
const DEFAULT_USER_SETTINGS_RELATIVE_PATH: &str = "santa/settings.yaml";
const DEFAULT_CONFIG_HOME_RELATIVE_PATH: &str = ".config";
static CONFIG_HOME_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

/// Merged runtime settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeSettings {
    /// HTTP server section.
    #[serde(default)]
    pub server: ServerSettings,
    /// SMS gateway section.
    #[serde(default)]
    pub sms: SmsSettings,
    /// Audit log section.
    #[serde(default)]
    pub audit: AuditSettings,
}

/// HTTP server settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSettings {
    /// Listen address, e.g. `0.0.0.0:8080`.
    pub bind: Option<String>,
}

/// SMS gateway settings; dispatch stays disabled until all three are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SmsSettings {
    /// Gateway API base URL.
    pub base_url: Option<String>,
    /// Registered device identifier.
    pub device_id: Option<String>,
    /// API key.
    pub api_key: Option<String>,
}

/// Audit log settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditSettings {
    /// Append-only audit file path; unset disables the file sink.
    pub path: Option<String>,
}

impl RuntimeSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            server: self.server.merge(overlay.server),
            sms: self.sms.merge(overlay.sms),
            audit: self.audit.merge(overlay.audit),
        }
    }

    /// Gateway config when base URL, device id, and API key are all set.
    #[must_use]
    pub fn sms_gateway_config(&self) -> Option<SmsGatewayConfig> {
        match (&self.sms.base_url, &self.sms.device_id, &self.sms.api_key) {
            (Some(base_url), Some(device_id), Some(api_key)) => Some(SmsGatewayConfig {
                base_url: base_url.clone(),
                device_id: device_id.clone(),
                api_key: api_key.clone(),
            }),
            _ => None,
        }
    }
}

impl ServerSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            bind: overlay.bind.or(self.bind),
        }
    }
}

impl SmsSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            base_url: overlay.base_url.or(self.base_url),
            device_id: overlay.device_id.or(self.device_id),
            api_key: overlay.api_key.or(self.api_key),
        }
    }
}

impl AuditSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            path: overlay.path.or(self.path),
        }
    }
}

/// Load merged runtime settings (user overrides system, env overrides both).
pub fn load_runtime_settings() -> RuntimeSettings {
    let (system_path, user_path) = runtime_settings_paths();
    apply_env_overrides(load_runtime_settings_from_paths(&system_path, &user_path))
}

fn runtime_settings_paths() -> (PathBuf, PathBuf) {
    let root = project_root();
    let system_path = root.join(DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH);
    let user_path = resolve_config_home(&root).join(DEFAULT_USER_SETTINGS_RELATIVE_PATH);
    (system_path, user_path)
}

#[doc(hidden)]
pub fn load_runtime_settings_from_paths(system: &Path, user: &Path) -> RuntimeSettings {
    load_one(system).merge(load_one(user))
}

fn apply_env_overrides(mut settings: RuntimeSettings) -> RuntimeSettings {
    if let Some(value) = non_empty_env("SANTA_SMS_BASE_URL") {
        settings.sms.base_url = Some(value);
    }
    if let Some(value) = non_empty_env("SANTA_SMS_DEVICE_ID") {
        settings.sms.device_id = Some(value);
    }
    if let Some(value) = non_empty_env("SANTA_SMS_API_KEY") {
        settings.sms.api_key = Some(value);
    }
    if let Some(value) = non_empty_env("SANTA_AUDIT_LOG") {
        settings.audit.path = Some(value);
    }
    settings
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn load_one(path: &Path) -> RuntimeSettings {
    if !path.exists() {
        return RuntimeSettings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; ignoring"
            );
            return RuntimeSettings::default();
        }
    };
    match serde_yaml::from_str::<RuntimeSettings>(&raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; ignoring file"
            );
            RuntimeSettings::default()
        }
    }
}

fn project_root() -> PathBuf {
    std::env::var("PRJ_ROOT")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Set config-home override (used by CLI `--conf`).
///
/// The path can be absolute, or relative to `PRJ_ROOT`/cwd.
pub fn set_config_home_override(path: impl Into<PathBuf>) {
    let path = path.into();
    if path.as_os_str().is_empty() {
        return;
    }
    if CONFIG_HOME_OVERRIDE.set(path.clone()).is_err()
        && let Some(current) = CONFIG_HOME_OVERRIDE.get()
        && current != &path
    {
        tracing::warn!(
            current = %current.display(),
            ignored = %path.display(),
            "config home override already set; ignoring subsequent value"
        );
    }
}

fn resolve_config_home(project_root: &Path) -> PathBuf {
    if let Some(path) = CONFIG_HOME_OVERRIDE.get() {
        return absolutize(project_root, path.clone());
    }

    let configured = std::env::var("PRJ_CONFIG_HOME")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_HOME_RELATIVE_PATH.to_string());
    absolutize(project_root, PathBuf::from(configured))
}

fn absolutize(project_root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        project_root.join(path)
    }
}
