pub mod board;
pub mod intent;
pub mod labels;
pub mod power;
pub mod types;

// Re-export the main types for easy access
pub use board::CircuitBoard;
pub use intent::BoardIntent;
pub use power::RoomPower;
pub use types::{BreakerStates, CircuitKind, Fuse, Room};
