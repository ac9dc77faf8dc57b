use anyhow::Result;
use clap::ArgMatches;
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Complete tool configuration that merges CLI args, env vars, config
/// files, and defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AtlasConfig {
    /// Tool settings
    pub tool: ToolConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolConfig {
    /// Path to the site descriptor file
    pub descriptor: String,
    /// Content directory for cross-checking page references (empty = skip)
    pub content_dir: String,
    /// Output file for exports (empty = stdout)
    pub output: String,
    /// Tool configuration file path
    pub config: String,
    /// Pretty-print exported JSON
    pub pretty: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            descriptor: "./site.toml".to_string(),
            content_dir: String::new(),
            output: String::new(),
            config: "./atlas.toml".to_string(),
            pretty: false,
        }
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            tool: ToolConfig::default(),
        }
    }
}

impl AtlasConfig {
    /// Load configuration with cascading precedence:
    /// 1. CLI arguments (highest priority)
    /// 2. Environment variables (ATLAS_*)
    /// 3. Configuration file
    /// 4. Defaults (lowest priority)
    pub fn load(args: &ArgMatches) -> Result<Self> {
        let config_file = args
            .get_one::<String>("config")
            .cloned()
            .unwrap_or_else(|| "./atlas.toml".to_string());

        let mut builder = ConfigBuilder::builder();

        // 1. Start with defaults
        let defaults = Self::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. Add configuration file if it exists
        if Path::new(&config_file).exists() {
            builder = builder.add_source(File::with_name(config_file_stem(&config_file)));
        }

        // 3. Add environment variables with ATLAS_ prefix
        builder = builder.add_source(
            Environment::with_prefix("ATLAS")
                .prefix_separator("_")
                .separator("__"), // Use double underscore for nested keys
        );

        // 4. Override with CLI arguments (highest priority)
        let mut cli_overrides = HashMap::new();

        if let Some(descriptor) = args.get_one::<String>("descriptor") {
            cli_overrides.insert("tool.descriptor".to_string(), descriptor.clone());
        }
        if let Some(config) = args.get_one::<String>("config") {
            cli_overrides.insert("tool.config".to_string(), config.clone());
        }
        // Only override with CLI args that are actually defined for this command
        if let Some(dir) = args.try_get_one::<String>("content-dir").unwrap_or(None) {
            cli_overrides.insert("tool.content_dir".to_string(), dir.clone());
        }
        if let Some(output) = args.try_get_one::<String>("output").unwrap_or(None) {
            cli_overrides.insert("tool.output".to_string(), output.clone());
        }
        if args.try_get_one::<bool>("pretty").unwrap_or(None) == Some(&true) {
            cli_overrides.insert("tool.pretty".to_string(), "true".to_string());
        }

        if !cli_overrides.is_empty() {
            builder = builder.add_source(config::Config::try_from(&cli_overrides)?);
        }

        // Build and deserialize
        let config = builder.build()?;
        let atlas_config: AtlasConfig = config.try_deserialize()?;

        Ok(atlas_config)
    }

    /// Get the tool settings
    pub fn tool(&self) -> &ToolConfig {
        &self.tool
    }
}

/// Drops a trailing `.toml` only; the extension may legitimately appear
/// elsewhere in the path.
fn config_file_stem(config_file: &str) -> &str {
    config_file.strip_suffix(".toml").unwrap_or(config_file)
}

impl ToolConfig {
    pub fn content_dir(&self) -> Option<&str> {
        if self.content_dir.is_empty() {
            None
        } else {
            Some(&self.content_dir)
        }
    }

    pub fn output(&self) -> Option<&str> {
        if self.output.is_empty() {
            None
        } else {
            Some(&self.output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, Command};

    #[test]
    fn test_default_config() {
        let config = AtlasConfig::default();
        assert_eq!(config.tool.descriptor, "./site.toml");
        assert_eq!(config.tool.config, "./atlas.toml");
        assert!(!config.tool.pretty);
        assert!(config.tool.content_dir().is_none());
        assert!(config.tool.output().is_none());
    }

    #[test]
    fn test_config_file_stem() {
        assert_eq!(config_file_stem("./atlas.toml"), "./atlas");
        assert_eq!(
            config_file_stem("./my.toml.d/atlas.toml"),
            "./my.toml.d/atlas"
        );
        assert_eq!(config_file_stem("./atlas.yaml"), "./atlas.yaml");
    }

    #[test]
    fn test_cli_args_override() {
        let app = Command::new("test")
            .arg(Arg::new("descriptor").long("descriptor").value_name("FILE"))
            .arg(Arg::new("content-dir").long("content-dir").value_name("DIR"))
            .arg(Arg::new("config").long("config").value_name("FILE"));

        let matches = app
            .try_get_matches_from(vec![
                "test",
                "--descriptor",
                "/custom/site.toml",
                "--content-dir",
                "/custom/docs",
            ])
            .unwrap();

        let config = AtlasConfig::load(&matches).unwrap();
        assert_eq!(config.tool.descriptor, "/custom/site.toml");
        assert_eq!(config.tool.content_dir(), Some("/custom/docs"));
        // Should still have defaults for non-overridden values
        assert!(!config.tool.pretty);
        assert!(config.tool.output().is_none());
    }
}
