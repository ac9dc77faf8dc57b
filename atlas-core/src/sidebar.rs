use serde::{Deserialize, Serialize};

/// One entry in the left sidebar: a bare page reference or a titled group
/// of page references. Both the entry sequence and each group's children
/// are order-sensitive.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SidebarItem {
    Group(SidebarGroup),
    Page { page: String },
    Path(String),
}

impl SidebarItem {
    /// The page reference of a non-group entry.
    pub fn page(&self) -> Option<&str> {
        match self {
            SidebarItem::Page { page } => Some(page),
            SidebarItem::Path(path) => Some(path),
            SidebarItem::Group(_) => None,
        }
    }
}

/// A titled, ordered list of content-page references shown under one
/// section header.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SidebarGroup {
    pub title: String,
    /// The generator's default is a collapsible group.
    #[serde(default = "default_collapsable")]
    pub collapsable: bool,
    /// Header depth rendered inside the group; falls back to the
    /// theme-level setting when absent.
    #[serde(default)]
    pub sidebar_depth: Option<u8>,
    pub children: Vec<String>,
}

fn default_collapsable() -> bool {
    true
}
