use crate::operations::OperationKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the stripper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Extensions handled by HTML class removal
    #[serde(default = "default_html_extensions")]
    pub html_extensions: Vec<String>,

    /// Extensions emptied by stylesheet clearing
    #[serde(default = "default_stylesheet_extensions")]
    pub stylesheet_extensions: Vec<String>,

    /// Extensions handled by template attribute cleaning
    #[serde(default = "default_template_extensions")]
    pub template_extensions: Vec<String>,

    /// Operations listed in the menu but not selectable
    #[serde(default)]
    pub disabled_operations: Vec<OperationKind>,

    /// Always use the numbered text menu
    #[serde(default)]
    pub plain_menu: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            html_extensions: default_html_extensions(),
            stylesheet_extensions: default_stylesheet_extensions(),
            template_extensions: default_template_extensions(),
            disabled_operations: Vec::new(),
            plain_menu: false,
        }
    }
}

fn default_html_extensions() -> Vec<String> {
    vec![String::from("html"), String::from("htm")]
}

fn default_stylesheet_extensions() -> Vec<String> {
    vec![String::from("css"), String::from("scss")]
}

fn default_template_extensions() -> Vec<String> {
    ["js", "jsx", "ts", "tsx"].iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load config from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Extensions scanned for the given operation
    pub fn extensions_for(&self, kind: OperationKind) -> &[String] {
        match kind {
            OperationKind::HtmlClasses => &self.html_extensions,
            OperationKind::Stylesheets => &self.stylesheet_extensions,
            OperationKind::TemplateAttributes => &self.template_extensions,
        }
    }

    pub fn is_enabled(&self, kind: OperationKind) -> bool {
        !self.disabled_operations.contains(&kind)
    }
}
