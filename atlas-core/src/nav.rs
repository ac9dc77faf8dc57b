use serde::{Deserialize, Serialize};

/// A navigation bar entry: either a direct link or a labeled group of
/// sub-entries. Groups nest; the rendered menu preserves both sequence
/// order and nesting depth.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum NavItem {
    Group { text: String, items: Vec<NavItem> },
    Link { text: String, link: String },
}

impl NavItem {
    pub fn text(&self) -> &str {
        match self {
            NavItem::Group { text, .. } | NavItem::Link { text, .. } => text,
        }
    }

    /// Nesting depth of this entry: 1 for a leaf, 1 + deepest child for a
    /// group.
    pub fn depth(&self) -> usize {
        match self {
            NavItem::Link { .. } => 1,
            NavItem::Group { items, .. } => {
                1 + items.iter().map(NavItem::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Leaf targets are either internal absolute paths or external URLs.
pub fn is_external(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        nav: Vec<NavItem>,
    }

    #[test]
    fn parse_leaf_and_group() {
        let toml = r#"
[[nav]]
text = "导论"

[[nav.items]]
text = "Verilog是什么？"
link = "/1-1-what-is-verilog/"

[[nav.items]]
text = "Verilog引入"
link = "/1-2-introduction-to-verilog/"

[[nav]]
text = "笔者博客"
link = "https://blog.cuijiacai.com"
"#;
        let wrapper: Wrapper = toml::from_str(toml).unwrap();
        assert_eq!(wrapper.nav.len(), 2);

        match &wrapper.nav[0] {
            NavItem::Group { text, items } => {
                assert_eq!(text, "导论");
                assert_eq!(items.len(), 2);
                assert_eq!(
                    items[0],
                    NavItem::Link {
                        text: "Verilog是什么？".to_string(),
                        link: "/1-1-what-is-verilog/".to_string(),
                    }
                );
            }
            other => panic!("expected group, got {:?}", other),
        }

        match &wrapper.nav[1] {
            NavItem::Link { link, .. } => assert!(is_external(link)),
            other => panic!("expected leaf, got {:?}", other),
        }
    }

    #[test]
    fn depth_counts_nesting() {
        let leaf = NavItem::Link {
            text: "a".to_string(),
            link: "/a/".to_string(),
        };
        assert_eq!(leaf.depth(), 1);

        let inner = NavItem::Group {
            text: "inner".to_string(),
            items: vec![leaf.clone()],
        };
        let outer = NavItem::Group {
            text: "outer".to_string(),
            items: vec![leaf, inner],
        };
        assert_eq!(outer.depth(), 3);
    }

    #[test]
    fn external_targets() {
        assert!(is_external("https://blog.cuijiacai.com"));
        assert!(is_external("http://example.com/page"));
        assert!(!is_external("/1-1-what-is-verilog/"));
        assert!(!is_external(""));
    }
}
