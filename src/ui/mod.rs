pub mod circuit_mapping_panel;
pub mod floor_plan_panel;
pub mod fuse_box_panel;
pub mod selection;
pub mod settings_panel;
pub mod tabs;

// Re-export the show functions for each panel
pub use circuit_mapping_panel::show_circuit_mapping_panel;
pub use floor_plan_panel::show_floor_plan_panel;
pub use fuse_box_panel::show_fuse_box_panel;
pub use settings_panel::show_settings_panel;

// Re-export tab-related types
pub use tabs::{Tab, TabKind, TabViewer};

pub use selection::initialize_and_show_banner;
