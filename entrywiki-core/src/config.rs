//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the entrywiki.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Also turn entry aliases into links (titles always take priority)
    #[serde(default)]
    pub link_aliases: bool,

    /// Category used for entries that declare none
    #[serde(default = "default_uncategorized_label")]
    pub uncategorized_label: String,

    /// Remove the output directory before writing a new build
    #[serde(default = "default_true")]
    pub clean_output: bool,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_base_url() -> String {
    String::from("/")
}

fn default_uncategorized_label() -> String {
    String::from("Uncategorized")
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub author: Option<String>,

    /// Value of the `lang` attribute on every page
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    String::from("en")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_data_path")]
    pub data: PathBuf,

    #[serde(default = "default_output_path")]
    pub output: PathBuf,

    #[serde(default = "default_static_path", rename = "static")]
    pub static_dir: PathBuf,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/entries.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("dist")
}

fn default_static_path() -> PathBuf {
    PathBuf::from("static")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data: default_data_path(),
            output: default_output_path(),
            static_dir: default_static_path(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Parse configuration from YAML text; paths stay relative to the working directory
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Get the entry collection file, resolved relative to config file
    pub fn data_path(&self) -> PathBuf {
        self.resolve_path(&self.paths.data)
    }

    /// Get the output directory, resolved relative to config file
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.output)
    }

    /// Get the static asset directory, resolved relative to config file
    pub fn static_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.static_dir)
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(config_path) = &self.config_path {
            if let Some(parent) = config_path.parent() {
                parent.join(path)
            } else {
                path.to_path_buf()
            }
        } else {
            path.to_path_buf()
        }
    }

    /// Normalized base URL with leading and trailing slash ("/foo/" or "/")
    pub fn normalized_base_url(&self) -> String {
        normalize_base_url(&self.base_url)
    }
}

/// Ensure base URLs have a leading and trailing slash
pub fn normalize_base_url(raw: &str) -> String {
    let mut s = raw.trim().to_string();
    if s.is_empty() {
        return "/".to_string();
    }

    if !s.starts_with('/') {
        s.insert(0, '/');
    }
    if !s.ends_with('/') {
        s.push('/');
    }

    while s.contains("//") {
        s = s.replace("//", "/");
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::from_yaml("site:\n  title: Test\n").unwrap();

        assert_eq!(config.base_url, "/");
        assert_eq!(config.paths.data, PathBuf::from("data/entries.json"));
        assert_eq!(config.paths.output, PathBuf::from("dist"));
        assert_eq!(config.paths.static_dir, PathBuf::from("static"));
        assert_eq!(config.uncategorized_label, "Uncategorized");
        assert!(!config.link_aliases);
        assert!(config.clean_output);
        assert_eq!(config.site.language, "en");
        assert_eq!(config.site.author, None);
    }

    #[test]
    fn test_paths_resolve_against_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("entrywiki.yml");
        std::fs::write(
            &config_path,
            "site:\n  title: Test\npaths:\n  data: content/wiki.json\n  output: public\n",
        )
        .unwrap();

        let config = Config::from_file(&config_path).unwrap();
        assert_eq!(config.data_path(), dir.path().join("content/wiki.json"));
        assert_eq!(config.output_dir(), dir.path().join("public"));
        assert_eq!(config.static_dir(), dir.path().join("static"));
    }

    #[test]
    fn test_missing_site_is_rejected() {
        assert!(matches!(
            Config::from_yaml("base_url: /wiki/\n"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("wiki"), "/wiki/");
        assert_eq!(normalize_base_url("/wiki//docs/"), "/wiki/docs/");
        assert_eq!(normalize_base_url("  /  "), "/");
    }
}
