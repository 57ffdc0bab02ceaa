use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub variables: HashMap<String, String>,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn variables_table_parses() {
        let config: Config = toml::from_str(
            "[output]\npretty = true\n\n[variables]\nname = \"Bob\"\nrank = \"Admin\"\n",
        )
        .unwrap();
        assert!(config.output.pretty);
        assert_eq!(config.variables["name"], "Bob");
        assert_eq!(config.variables["rank"], "Admin");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load(std::path::Path::new("does-not-exist.toml"));
        assert!(config.variables.is_empty());
        assert!(!config.output.pretty);
    }
}
