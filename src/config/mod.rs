//! Config module.
//! Provides configuration types, default paths and XML loading.
//! Nothing here is required to use [`crate::FileOps`]; it only feeds logging
//! setup and the host backend's copy settings.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{CONFIG_ENV_VAR, default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{load_config, load_config_from_xml_path};
