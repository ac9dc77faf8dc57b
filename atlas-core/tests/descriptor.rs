use atlas_core::{LastUpdated, NavItem, SidebarItem, SiteDescriptor, validate};

const FULL: &str = include_str!("fixtures/verilog-course.toml");
const DRAFT: &str = include_str!("fixtures/verilog-course-draft.toml");

#[test]
fn full_descriptor_loads() {
    let descriptor = SiteDescriptor::parse(FULL).unwrap();

    assert_eq!(descriptor.title.as_deref(), Some("Verilog学习笔记"));
    assert_eq!(
        descriptor.description.as_deref(),
        Some("基于Verilog的芯片设计学习笔记")
    );
    assert_eq!(descriptor.locales["/"].lang, "zh-CN");
    assert!(descriptor.markdown.line_numbers);

    let theme = &descriptor.theme;
    assert_eq!(theme.logo.as_deref(), Some("/favicon.png"));
    assert!(theme.navbar);
    assert_eq!(theme.sidebar_depth, 3);
    assert!(theme.edit_links);
    assert_eq!(theme.last_updated, LastUpdated::Label("最后更新".to_string()));
}

#[test]
fn nav_keeps_order_and_nesting() {
    let descriptor = SiteDescriptor::parse(FULL).unwrap();
    let nav = &descriptor.theme.nav;

    assert_eq!(nav.len(), 7);
    let labels: Vec<&str> = nav.iter().map(NavItem::text).collect();
    assert_eq!(
        labels,
        vec!["导论", "数据类型", "块构建", "行为建模", "门级/开关级建模", "模拟仿真", "笔者博客"]
    );

    match &nav[0] {
        NavItem::Group { items, .. } => {
            assert_eq!(items.len(), 4);
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

    // The blog entry is the only top-level leaf, and it is external.
    assert_eq!(
        nav[6],
        NavItem::Link {
            text: "笔者博客".to_string(),
            link: "https://blog.cuijiacai.com".to_string(),
        }
    );

    // Observed nesting never exceeds two levels in this instance.
    assert!(nav.iter().map(NavItem::depth).max().unwrap() <= 3);
}

#[test]
fn intro_sidebar_group_renders_in_source_order() {
    let descriptor = SiteDescriptor::parse(FULL).unwrap();
    let sidebar = &descriptor.theme.sidebar;

    assert_eq!(sidebar.len(), 7);
    assert_eq!(sidebar[0].page(), Some("/preface/"));

    match &sidebar[1] {
        SidebarItem::Group(group) => {
            assert_eq!(group.title, "导论");
            assert!(!group.collapsable);
            assert_eq!(group.sidebar_depth, Some(1));
            assert_eq!(
                group.children,
                vec![
                    "/1-1-what-is-verilog/",
                    "/1-2-introduction-to-verilog/",
                    "/1-3-chip-design-flow/",
                    "/1-4-chip-abstraction-layers/",
                ]
            );
        }
        other => panic!("expected group, got {:?}", other),
    }
}

#[test]
fn plugin_pipeline_order_survives_round_trip() {
    let descriptor = SiteDescriptor::parse(FULL).unwrap();

    let names: Vec<&str> = descriptor.plugins.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "@maginapp/vuepress-plugin-katex",
            "vuepress-plugin-container",
            "vuepress-plugin-container",
            "vuepress-plugin-container",
            "@vuepress/back-to-top",
            "vuepress-plugin-mygitalk",
        ]
    );

    let serialized = toml::to_string(&descriptor).unwrap();
    let reparsed = SiteDescriptor::parse(&serialized).unwrap();
    assert_eq!(reparsed.plugins, descriptor.plugins);
    assert_eq!(reparsed, descriptor);
}

#[test]
fn full_descriptor_is_structurally_clean() {
    let descriptor = SiteDescriptor::parse(FULL).unwrap();
    let lints = validate(&descriptor);
    assert!(lints.is_empty(), "unexpected lints: {:?}", lints);
}

#[test]
fn json_export_declares_locale() {
    let descriptor = SiteDescriptor::parse(FULL).unwrap();
    let json = descriptor.to_json().unwrap();

    assert_eq!(json["locales"]["/"]["lang"], "zh-CN");
    assert_eq!(json["theme"]["nav"][0]["text"], "导论");
    assert_eq!(json["plugins"][0]["name"], "@maginapp/vuepress-plugin-katex");
}

#[test]
fn draft_variant_is_an_independent_instance() {
    let draft = SiteDescriptor::parse(DRAFT).unwrap();
    let full = SiteDescriptor::parse(FULL).unwrap();

    // Same site metadata, narrower content: the variants stay separate
    // and are never reconciled.
    assert_eq!(draft.title, full.title);
    assert!(draft.theme.nav.len() < full.theme.nav.len());
    assert!(draft.theme.sidebar.len() < full.theme.sidebar.len());
    assert!(draft.plugins.len() < full.plugins.len());
    assert!(validate(&draft).is_empty());
}
