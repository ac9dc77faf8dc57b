use serde::{Deserialize, Serialize};
use toml::Table;

/// A rendering plugin and its option bag. Options are opaque to us; the
/// generator interprets them. The surrounding plugin list is
/// order-sensitive because it becomes the build pipeline order.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PluginEntry {
    pub name: String,
    #[serde(default)]
    pub options: Table,
}
