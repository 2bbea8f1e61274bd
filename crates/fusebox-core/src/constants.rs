// Storage names shared by the file store and the app's config directory

/// Directory created under the platform config dir
pub const CONFIG_DIR_NAME: &str = "fusebox";

/// File holding the single board snapshot
pub const STATE_FILE_NAME: &str = "floorplan_qr_state_v1.json";

/// File holding user preferences
pub const CONFIG_FILE_NAME: &str = "fusebox_config.json";

/// File holding the dock layout
pub const DOCK_STATE_FILE_NAME: &str = "dock_state.json";

/// Rating pre-filled in the "Add Fuse" input
pub const DEFAULT_FUSE_RATING: &str = "B6";
