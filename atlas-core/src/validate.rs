use std::collections::HashSet;
use std::fmt;

use crate::descriptor::SiteDescriptor;
use crate::nav::{NavItem, is_external};
use crate::sidebar::SidebarItem;

/// A structural problem found in a descriptor. Lints are warnings: the
/// external generator owns hard referential integrity, so nothing here
/// fails the load itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Lint {
    pub location: String,
    pub message: String,
}

impl Lint {
    fn new<L: Into<String>, M: Into<String>>(location: L, message: M) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// Structural checks over a descriptor: non-empty leaf targets, non-empty
/// groups, unique sidebar children per group, internal-path shape.
pub fn validate(descriptor: &SiteDescriptor) -> Vec<Lint> {
    let mut lints = Vec::new();

    for (i, item) in descriptor.theme.nav.iter().enumerate() {
        check_nav_item(item, &format!("theme.nav[{}]", i), &mut lints);
    }

    for (i, item) in descriptor.theme.sidebar.iter().enumerate() {
        check_sidebar_item(item, &format!("theme.sidebar[{}]", i), &mut lints);
    }

    for (i, plugin) in descriptor.plugins.iter().enumerate() {
        if plugin.name.is_empty() {
            lints.push(Lint::new(format!("plugins[{}]", i), "plugin name is empty"));
        }
    }

    lints
}

/// [`validate`] plus a cross-check of every internal page reference
/// against a known route set (see [`crate::content::ContentScanner`]).
pub fn validate_with_routes(
    descriptor: &SiteDescriptor,
    routes: &HashSet<String>,
) -> Vec<Lint> {
    let mut lints = validate(descriptor);

    for (location, target) in internal_targets(descriptor) {
        // Anchors resolve within a page, so only the path part matters.
        let path = match target.split_once('#') {
            Some((path, _)) => path,
            None => target.as_str(),
        };
        if !routes.contains(path) {
            lints.push(Lint::new(
                location,
                format!("no content page found for '{}'", path),
            ));
        }
    }

    lints
}

fn check_nav_item(item: &NavItem, location: &str, lints: &mut Vec<Lint>) {
    match item {
        NavItem::Link { text, link } => {
            if text.is_empty() {
                lints.push(Lint::new(location, "navigation label is empty"));
            }
            if link.is_empty() {
                lints.push(Lint::new(location, "navigation link target is empty"));
            } else if !is_external(link) && !link.starts_with('/') {
                lints.push(Lint::new(
                    location,
                    format!(
                        "'{}' is neither an absolute internal path nor an external URL",
                        link
                    ),
                ));
            }
        }
        NavItem::Group { text, items } => {
            if text.is_empty() {
                lints.push(Lint::new(location, "navigation label is empty"));
            }
            if items.is_empty() {
                lints.push(Lint::new(location, "navigation group has no entries"));
            }
            for (i, child) in items.iter().enumerate() {
                check_nav_item(child, &format!("{}.items[{}]", location, i), lints);
            }
        }
    }
}

fn check_sidebar_item(item: &SidebarItem, location: &str, lints: &mut Vec<Lint>) {
    match item {
        SidebarItem::Path(path) | SidebarItem::Page { page: path } => {
            check_page_reference(path, location, lints);
        }
        SidebarItem::Group(group) => {
            if group.title.is_empty() {
                lints.push(Lint::new(location, "sidebar group title is empty"));
            }
            if group.children.is_empty() {
                lints.push(Lint::new(location, "sidebar group has no children"));
            }

            let mut seen = HashSet::new();
            for (i, child) in group.children.iter().enumerate() {
                let child_location = format!("{}.children[{}]", location, i);
                check_page_reference(child, &child_location, lints);
                if !child.is_empty() && !seen.insert(child.as_str()) {
                    lints.push(Lint::new(
                        child_location,
                        format!("duplicate page reference '{}'", child),
                    ));
                }
            }
        }
    }
}

fn check_page_reference(path: &str, location: &str, lints: &mut Vec<Lint>) {
    if path.is_empty() {
        lints.push(Lint::new(location, "page reference is empty"));
    } else if !path.starts_with('/') {
        lints.push(Lint::new(
            location,
            format!("page reference '{}' is not an absolute internal path", path),
        ));
    }
}

/// Every internal page reference in nav and sidebar, with its location.
fn internal_targets(descriptor: &SiteDescriptor) -> Vec<(String, String)> {
    let mut targets = Vec::new();

    for (i, item) in descriptor.theme.nav.iter().enumerate() {
        collect_nav_targets(item, format!("theme.nav[{}]", i), &mut targets);
    }

    for (i, item) in descriptor.theme.sidebar.iter().enumerate() {
        let location = format!("theme.sidebar[{}]", i);
        match item {
            SidebarItem::Path(path) | SidebarItem::Page { page: path } => {
                if path.starts_with('/') {
                    targets.push((location, path.clone()));
                }
            }
            SidebarItem::Group(group) => {
                for (j, child) in group.children.iter().enumerate() {
                    if child.starts_with('/') {
                        targets.push((format!("{}.children[{}]", location, j), child.clone()));
                    }
                }
            }
        }
    }

    targets
}

fn collect_nav_targets(item: &NavItem, location: String, targets: &mut Vec<(String, String)>) {
    match item {
        NavItem::Link { link, .. } => {
            if !is_external(link) && link.starts_with('/') {
                targets.push((location, link.clone()));
            }
        }
        NavItem::Group { items, .. } => {
            for (i, child) in items.iter().enumerate() {
                collect_nav_targets(child, format!("{}.items[{}]", location, i), targets);
            }
        }
    }
}
