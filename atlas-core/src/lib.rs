pub mod content;
pub mod descriptor;
pub mod nav;
pub mod plugins;
pub mod sidebar;
pub mod theme;
pub mod validate;

// Re-export main types
pub use content::{ContentScanner, ScanError};
pub use descriptor::{DescriptorError, SiteDescriptor};
pub use nav::NavItem;
pub use plugins::PluginEntry;
pub use sidebar::{SidebarGroup, SidebarItem};
pub use theme::{LastUpdated, ThemeOptions};
pub use validate::{Lint, validate, validate_with_routes};
