use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::Config;
use crate::utils::error::{BoxResult, SectocError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 2] = ["sectoc.yml", "sectoc.yaml"];

/// Load configuration from an explicit file, or from the first default
/// file found under the source directory, or fall back to defaults.
pub fn load_config<P: AsRef<Path>>(source_dir: P, config_file: Option<&Path>) -> BoxResult<Config> {
    let path = match config_file {
        Some(path) => Some(path.to_path_buf()),
        None => find_default_config_file(&source_dir),
    };

    let config = match path {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let raw = fs::read_to_string(&path)?;
            serde_yaml::from_str(&raw)
                .map_err(|e| SectocError::Config(format!("{}: {}", path.display(), e)))?
        }
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    validate_config(&config)?;
    Ok(config)
}

/// Directory whose configuration governs a source path: the path itself
/// when it is a directory, otherwise the file's parent
pub fn config_source_dir(source: &Path) -> &Path {
    if source.is_dir() {
        return source;
    }
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn find_default_config_file<P: AsRef<Path>>(source_dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.exists())
}

fn validate_config(config: &Config) -> Result<(), SectocError> {
    if config.section_prefix.is_empty() {
        return Err(SectocError::Config("section_prefix must not be empty".to_string()));
    }
    if config.separator.chars().count() != 1 {
        return Err(SectocError::Config(format!(
            "separator must be a single character, got {:?}",
            config.separator
        )));
    }
    if config.toc_root_id.is_empty() {
        return Err(SectocError::Config("toc_root_id must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config("/nonexistent-source-dir", None).unwrap();
        assert_eq!(config.section_prefix, "section");
    }

    #[test]
    fn test_config_source_dir() {
        assert_eq!(config_source_dir(Path::new("docs/manual.html")), Path::new("docs"));
        assert_eq!(config_source_dir(Path::new("manual.html")), Path::new("."));
        let dir = std::env::temp_dir();
        assert_eq!(config_source_dir(&dir), dir.as_path());
    }

    #[test]
    fn test_discovers_config_beside_source() {
        use crate::dom::parse_html;
        use crate::toc::TocBuilder;

        let dir = std::env::temp_dir().join("sectoc-loader-discovery-test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("sectoc.yml"), "section_prefix: \"part\"\n").unwrap();
        let document_path = dir.join("manual.html");
        fs::write(&document_path, "<h2 id=\"part1\">One</h2>").unwrap();

        let config = load_config(config_source_dir(&document_path), None).unwrap();
        assert_eq!(config.section_prefix, "part");

        let document = parse_html(&fs::read_to_string(&document_path).unwrap()).unwrap();
        let sections = TocBuilder::new(config.toc_options()).scan_sections(&document);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, "part1");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_multi_char_separator_rejected() {
        let config = Config { separator: "--".to_string(), ..Config::default() };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let config = Config { section_prefix: String::new(), ..Config::default() };
        assert!(validate_config(&config).is_err());
    }
}
