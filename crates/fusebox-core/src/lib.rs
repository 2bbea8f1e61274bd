// Fusebox Core Library
// Re-export all modules for external use

pub mod circuit;
pub mod config;
pub mod constants;
pub mod defaults;
pub mod persistence;
pub mod session;

pub use circuit::{BoardIntent, CircuitBoard, CircuitKind, Fuse, Room, RoomPower};
pub use config::AppConfig;
pub use persistence::{JsonFileStore, MemoryStore, PersistenceError, SavedState, StateStore};
pub use session::BoardSession;
