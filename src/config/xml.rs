//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - `$PATHOPS_CONFIG` selects an explicit file; otherwise the OS default path
//!   is used when present, and built-in defaults when not.
//!
//! Unknown XML fields are rejected so typos surface instead of being ignored.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{CONFIG_ENV_VAR, default_config_path};
use super::types::{Config, LogLevel};
use crate::backend::DurabilityMode;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(default, deserialize_with = "de_bool_trimmed_opt")]
    json_logs: Option<bool>,
    #[serde(default, deserialize_with = "de_bool_trimmed_opt")]
    preserve_metadata: Option<bool>,
    durability: Option<String>,
}

// Accepts "true"/"false" (any case, surrounding whitespace allowed); anything else is an error.
fn de_bool_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(|s| s.trim().to_ascii_lowercase()) {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) if s == "true" => Ok(Some(true)),
        Some(s) if s == "false" => Ok(Some(false)),
        Some(s) => Err(serde::de::Error::custom(format!("expected true or false, got '{s}'"))),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = s.parse::<LogLevel>().map_err(anyhow::Error::msg)?;
    }
    cfg.log_file = non_empty(parsed.log_file.as_deref()).map(PathBuf::from);
    if let Some(s) = non_empty(parsed.durability.as_deref()) {
        cfg.durability = s.parse::<DurabilityMode>().map_err(anyhow::Error::msg)?;
    }
    cfg.json_logs = parsed.json_logs.unwrap_or(false);
    cfg.preserve_metadata = parsed.preserve_metadata.unwrap_or(false);

    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in config xml '{}'", path.display()))
}

/// Resolve and load the active configuration.
///
/// - `$PATHOPS_CONFIG` set: that file must exist and parse.
/// - otherwise the default config path is read if it exists;
/// - otherwise `Config::default()`.
pub fn load_config() -> Result<Config> {
    let explicit = env::var_os(CONFIG_ENV_VAR).is_some_and(|v| !v.is_empty());

    let path = match default_config_path() {
        Ok(p) => p,
        Err(e) if !explicit => {
            debug!(error = %e, "no config location available; using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(e),
    };

    if !path.exists() {
        if explicit {
            bail!("{} points to a missing file: {}", CONFIG_ENV_VAR, path.display());
        }
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
    }

    debug!(path = %path.display(), "loading config");
    load_config_from_xml_path(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn write_cfg(body: &str) -> (tempfile::TempDir, PathBuf) {
        let td = tempdir().unwrap();
        let p = td.path().join("config.xml");
        fs::write(&p, body).unwrap();
        (td, p)
    }

    #[test]
    fn whitespace_is_trimmed() {
        let (_td, p) = write_cfg(
            "<config>\n  <log_level>  debug </log_level>\n  <preserve_metadata> TRUE </preserve_metadata>\n  <durability> full </durability>\n</config>",
        );
        let cfg = load_config_from_xml_path(&p).unwrap();
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert!(cfg.preserve_metadata);
        assert_eq!(cfg.durability, DurabilityMode::Full);
    }

    #[test]
    fn empty_log_file_means_none() {
        let (_td, p) = write_cfg("<config><log_file>   </log_file></config>");
        let cfg = load_config_from_xml_path(&p).unwrap();
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let (_td, p) = write_cfg("<config><download_base>/x</download_base></config>");
        assert!(load_config_from_xml_path(&p).is_err());
    }

    #[test]
    fn bad_values_are_rejected() {
        let (_td, p) = write_cfg("<config><log_level>loud</log_level></config>");
        assert!(load_config_from_xml_path(&p).is_err());
        let (_td2, p2) = write_cfg("<config><json_logs>maybe</json_logs></config>");
        assert!(load_config_from_xml_path(&p2).is_err());
    }

    #[test]
    #[serial]
    fn explicit_missing_file_is_an_error() {
        let td = tempdir().unwrap();
        unsafe {
            env::set_var(CONFIG_ENV_VAR, td.path().join("absent.xml"));
        }
        let res = load_config();
        unsafe {
            env::remove_var(CONFIG_ENV_VAR);
        }
        let msg = format!("{:#}", res.unwrap_err());
        assert!(msg.contains(CONFIG_ENV_VAR), "msg was: {msg}");
    }

    #[test]
    #[serial]
    fn explicit_file_is_loaded() {
        let (_td, p) = write_cfg("<config><json_logs>true</json_logs></config>");
        unsafe {
            env::set_var(CONFIG_ENV_VAR, &p);
        }
        let res = load_config();
        unsafe {
            env::remove_var(CONFIG_ENV_VAR);
        }
        let cfg = res.unwrap();
        assert!(cfg.json_logs);
        assert_eq!(cfg.log_level, LogLevel::Normal);
    }
}
