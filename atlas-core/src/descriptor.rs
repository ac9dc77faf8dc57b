use std::{collections::BTreeMap, fmt, path::Path};

use serde::{Deserialize, Serialize};
use toml::Table;

use crate::plugins::PluginEntry;
use crate::theme::ThemeOptions;

#[derive(Debug)]
pub enum DescriptorError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::Io(e) => write!(f, "IO error: {}", e),
            DescriptorError::Parse(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for DescriptorError {}

impl From<std::io::Error> for DescriptorError {
    fn from(value: std::io::Error) -> Self {
        DescriptorError::Io(value)
    }
}

impl From<toml::de::Error> for DescriptorError {
    fn from(value: toml::de::Error) -> Self {
        DescriptorError::Parse(value)
    }
}

/// The whole site descriptor: pure data, read once by the generator at
/// build start and never mutated afterwards.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SiteDescriptor {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Tags injected into the HTML head, in order.
    pub head: Vec<HeadTag>,
    /// Rendering plugins, applied to the build pipeline in listed order.
    pub plugins: Vec<PluginEntry>,
    pub markdown: MarkdownOptions,
    /// Locale options keyed by path prefix.
    pub locales: BTreeMap<String, LocaleOptions>,
    pub theme: ThemeOptions,
}

impl SiteDescriptor {
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, DescriptorError> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self, DescriptorError> {
        let descriptor: SiteDescriptor = toml::from_str(data)?;
        Ok(descriptor)
    }

    /// Serialize for the host generator, which consumes JSON.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// A single head tag: tag name plus its attributes.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct HeadTag {
    pub tag: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

/// Markdown rendering settings. Options we don't model explicitly are
/// passed through to the generator untouched.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MarkdownOptions {
    pub line_numbers: bool,
    #[serde(flatten)]
    pub extra: Table,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LocaleOptions {
    pub lang: String,
    pub title: Option<String>,
    pub description: Option<String>,
}
