use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::toc::{self, TocOptions};

/// Tool configuration, normally loaded from `sectoc.yml`. Every field
/// falls back to the stock marker convention, so an empty (or missing)
/// file behaves exactly like the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Identifier prefix that marks an element as a section
    #[serde(default = "default_section_prefix")]
    pub section_prefix: String,

    /// Separator between path segments (must be a single character)
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Identifier of the element the generated lists are placed in
    #[serde(default = "default_toc_root_id")]
    pub toc_root_id: String,

    /// Class prefix for list items; the 1-based depth is appended
    #[serde(default = "default_level_class_prefix")]
    pub level_class_prefix: String,

    /// Class applied to every generated list
    #[serde(default = "default_list_class")]
    pub list_class: String,

    /// Default output location for the generate command
    #[serde(default)]
    pub destination: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            section_prefix: default_section_prefix(),
            separator: default_separator(),
            toc_root_id: default_toc_root_id(),
            level_class_prefix: default_level_class_prefix(),
            list_class: default_list_class(),
            destination: None,
        }
    }
}

impl Config {
    /// The generation options this configuration describes
    pub fn toc_options(&self) -> TocOptions {
        TocOptions {
            section_prefix: self.section_prefix.clone(),
            separator: self.separator.chars().next().unwrap_or(toc::SEPARATOR),
            toc_root_id: self.toc_root_id.clone(),
            level_class_prefix: self.level_class_prefix.clone(),
            list_class: self.list_class.clone(),
        }
    }
}

fn default_section_prefix() -> String {
    toc::SECTION_ID_PREFIX.to_string()
}

fn default_separator() -> String {
    toc::SEPARATOR.to_string()
}

fn default_toc_root_id() -> String {
    toc::TOC_ROOT_ID.to_string()
}

fn default_level_class_prefix() -> String {
    toc::TOC_LEVEL_CLASS_PREFIX.to_string()
}

fn default_list_class() -> String {
    toc::TOC_LIST_CLASS.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_marker_convention() {
        let config = Config::default();
        assert_eq!(config.section_prefix, "section");
        assert_eq!(config.separator, "-");
        assert_eq!(config.toc_root_id, "tocRoot");
        assert_eq!(config.level_class_prefix, "tocLevel");
        assert_eq!(config.list_class, "toc");
        assert!(config.destination.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("separator: \".\"\n").unwrap();
        assert_eq!(config.separator, ".");
        assert_eq!(config.section_prefix, "section");
        assert_eq!(config.toc_options().separator, '.');
    }
}
