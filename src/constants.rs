use egui::Color32;

// Custom log types for different event categories
pub const LOG_TYPE_BOARD: &str = "board";
pub const LOG_TYPE_SETTINGS: &str = "settings";

// Breaker and status colors
pub const COLOR_LIVE: Color32 = Color32::from_rgb(5, 150, 105);
pub const COLOR_FAULT: Color32 = Color32::from_rgb(220, 38, 38);
pub const COLOR_BREAKER_ON: Color32 = Color32::from_rgb(239, 68, 68);
pub const COLOR_BREAKER_OFF: Color32 = Color32::from_rgb(161, 161, 170);

// Room cards on the floor plan
pub const ROOM_HEALTHY_FILL: Color32 = Color32::from_rgb(254, 243, 199);
pub const ROOM_HEALTHY_BORDER: Color32 = Color32::from_rgb(252, 211, 77);
pub const ROOM_DEGRADED_FILL: Color32 = Color32::from_rgb(254, 242, 242);
pub const ROOM_DEGRADED_BORDER: Color32 = Color32::from_rgb(254, 202, 202);
pub const ROOM_TEXT: Color32 = Color32::from_rgb(63, 63, 70);
