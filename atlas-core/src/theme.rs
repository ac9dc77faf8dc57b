use serde::{Deserialize, Serialize};

use crate::nav::NavItem;
use crate::sidebar::SidebarItem;

/// The theme-options bag: navbar and sidebar trees plus the flat display
/// toggles the generator's default theme understands.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeOptions {
    pub logo: Option<String>,
    pub navbar: bool,
    pub nav: Vec<NavItem>,
    pub sidebar: Vec<SidebarItem>,
    pub sidebar_depth: u8,
    pub display_all_headers: bool,
    pub active_header_links: bool,

    // Repository / edit-link options
    pub repo: Option<String>,
    pub repo_label: Option<String>,
    pub docs_repo: Option<String>,
    pub docs_dir: Option<String>,
    pub docs_branch: Option<String>,
    pub edit_links: bool,
    pub edit_link_text: Option<String>,

    // Footer options
    pub next_links: bool,
    pub prev_links: bool,
    pub last_updated: LastUpdated,
    pub smooth_scroll: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            logo: None,
            navbar: true,
            nav: Vec::new(),
            sidebar: Vec::new(),
            sidebar_depth: 1,
            display_all_headers: false,
            active_header_links: true,
            repo: None,
            repo_label: None,
            docs_repo: None,
            docs_dir: None,
            docs_branch: None,
            edit_links: false,
            edit_link_text: None,
            next_links: true,
            prev_links: true,
            last_updated: LastUpdated::default(),
            smooth_scroll: false,
        }
    }
}

/// The last-updated footer entry is either a plain on/off toggle or a
/// custom label that implies "on".
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LastUpdated {
    Enabled(bool),
    Label(String),
}

impl Default for LastUpdated {
    fn default() -> Self {
        LastUpdated::Enabled(false)
    }
}

impl LastUpdated {
    pub fn is_enabled(&self) -> bool {
        match self {
            LastUpdated::Enabled(enabled) => *enabled,
            LastUpdated::Label(_) => true,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            LastUpdated::Enabled(_) => None,
            LastUpdated::Label(label) => Some(label),
        }
    }
}
