//! Settings loader: system/user merge precedence and gateway gating.

#![allow(missing_docs)]

use std::path::Path;

use anyhow::Result;
use santa_server::load_runtime_settings_from_paths;

fn write(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)?;
    Ok(())
}

#[test]
fn missing_files_yield_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let settings = load_runtime_settings_from_paths(
        &dir.path().join("no-system.yaml"),
        &dir.path().join("no-user.yaml"),
    );
    assert!(settings.server.bind.is_none());
    assert!(settings.sms_gateway_config().is_none());
    assert!(settings.audit.path.is_none());
    Ok(())
}

#[test]
fn user_settings_override_system_settings() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let system = dir.path().join("system.yaml");
    let user = dir.path().join("user.yaml");
    write(
        &system,
        r"
server:
  bind: 0.0.0.0:8080
sms:
  base_url: https://system.example
  device_id: sys-dev
  api_key: sys-key
",
    )?;
    write(
        &user,
        r"
sms:
  api_key: user-key
",
    )?;

    let settings = load_runtime_settings_from_paths(&system, &user);
    assert_eq!(settings.server.bind.as_deref(), Some("0.0.0.0:8080"));

    let config = settings
        .sms_gateway_config()
        .ok_or_else(|| anyhow::anyhow!("gateway should be configured"))?;
    assert_eq!(config.base_url, "https://system.example");
    assert_eq!(config.device_id, "sys-dev");
    assert_eq!(config.api_key, "user-key");
    Ok(())
}

#[test]
fn gateway_stays_disabled_until_all_credentials_are_present() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let system = dir.path().join("system.yaml");
    write(
        &system,
        r"
sms:
  base_url: https://sms.example
  device_id: dev-1
",
    )?;

    let settings = load_runtime_settings_from_paths(&system, &dir.path().join("no-user.yaml"));
    assert!(settings.sms_gateway_config().is_none(), "api_key missing");
    Ok(())
}

#[test]
fn malformed_yaml_is_ignored() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let system = dir.path().join("system.yaml");
    let user = dir.path().join("user.yaml");
    write(
        &system,
        r"
server:
  bind: 127.0.0.1:9999
",
    )?;
    write(&user, ": not yaml [[[")?;

    let settings = load_runtime_settings_from_paths(&system, &user);
    assert_eq!(settings.server.bind.as_deref(), Some("127.0.0.1:9999"));
    Ok(())
}
