pub mod error;
pub mod file_store;
pub mod memory_store;
pub mod snapshot;

pub use error::PersistenceError;
pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use snapshot::SavedState;

/// Where the board snapshot lives between sessions.
///
/// Neither method fails: a record that cannot be read or does not have the
/// expected shape loads as `None`, and write failures are logged and dropped.
pub trait StateStore {
    fn load(&self) -> Option<SavedState>;

    fn save(&mut self, state: &SavedState);
}
