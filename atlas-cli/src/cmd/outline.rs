use anyhow::Result;
use atlas_core::{NavItem, SidebarItem, SiteDescriptor};
use clap::{ArgMatches, Command};

use crate::cmd::add_descriptor_args;
use crate::config::AtlasConfig;

pub fn make_subcommand() -> Command {
    add_descriptor_args(Command::new("outline"))
        .about("Print the navigation and sidebar trees in source order")
}

pub fn execute(args: &ArgMatches) -> Result<()> {
    let config = AtlasConfig::load(args)?;
    let descriptor = SiteDescriptor::read(&config.tool().descriptor)?;

    print!("{}", render_outline(&descriptor));

    Ok(())
}

/// Renders both trees as an indented outline, preserving the
/// descriptor's sequence order and nesting depth.
fn render_outline(descriptor: &SiteDescriptor) -> String {
    let mut out = String::new();

    out.push_str("Navigation\n");
    for item in &descriptor.theme.nav {
        render_nav_item(item, 1, &mut out);
    }

    out.push_str("Sidebar\n");
    for item in &descriptor.theme.sidebar {
        match item {
            SidebarItem::Path(path) | SidebarItem::Page { page: path } => {
                out.push_str(&format!("  {}\n", path));
            }
            SidebarItem::Group(group) => {
                let marker = if group.collapsable { "+" } else { "-" };
                out.push_str(&format!("  {} {}\n", marker, group.title));
                for child in &group.children {
                    out.push_str(&format!("    {}\n", child));
                }
            }
        }
    }

    out
}

fn render_nav_item(item: &NavItem, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match item {
        NavItem::Link { text, link } => {
            out.push_str(&format!("{}{} -> {}\n", indent, text, link));
        }
        NavItem::Group { text, items } => {
            out.push_str(&format!("{}{}\n", indent, text));
            for child in items {
                render_nav_item(child, depth + 1, out);
            }
        }
    }
}
