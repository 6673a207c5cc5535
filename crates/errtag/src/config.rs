// File: src/config.rs
// Purpose: Rendering defaults and wrapper registry from errtag.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::options::ErrorMethod;

/// Library configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application-wide joining strategy. Unset joins all messages in
    /// order.
    #[serde(default)]
    pub error_method: Option<ErrorMethod>,

    /// Named wrappers; "default" always resolves.
    #[serde(default = "default_wrappers")]
    pub wrappers: HashMap<String, WrapperConfig>,
}

/// Shape of the element wrapping an error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrapperConfig {
    #[serde(default = "default_tag")]
    pub tag: String,

    #[serde(default = "default_class")]
    pub class: String,

    /// Render full errors (label included) for this wrapper.
    #[serde(default = "default_false")]
    pub full_error: bool,
}

// Default values
fn default_tag() -> String {
    "span".to_string()
}

fn default_class() -> String {
    "error".to_string()
}

fn default_false() -> bool {
    false
}

fn default_wrappers() -> HashMap<String, WrapperConfig> {
    let mut wrappers = HashMap::new();
    wrappers.insert("default".to_string(), WrapperConfig::default());
    wrappers
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            class: default_class(),
            full_error: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_method: None,
            wrappers: default_wrappers(),
        }
    }
}

impl Config {
    /// Resolve a named wrapper, falling back to the default wrapper.
    pub fn wrapper(&self, name: &str) -> WrapperConfig {
        self.wrappers
            .get(name)
            .or_else(|| self.wrappers.get("default"))
            .cloned()
            .unwrap_or_default()
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./errtag.toml).
    pub fn load_default() -> Result<Self> {
        Self::load("errtag.toml")
    }
}
