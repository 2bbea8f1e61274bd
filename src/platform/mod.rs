// Platform module
pub mod banner;

pub mod parameters {
    pub mod gui {
        pub const APPLICATION_NAME: &str = "Fusebox - Distribution Board Visualizer";
        pub const VERSION: &str = env!("CARGO_PKG_VERSION"); // Single source of truth from Cargo.toml
        pub const VIEWPORT_X: f32 = 1100.0;
        pub const VIEWPORT_Y: f32 = 760.0;
    }
}
