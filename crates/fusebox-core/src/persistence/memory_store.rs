use super::{SavedState, StateStore};

/// Holds the record as JSON text in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing record, which may be malformed
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Some(record.into()),
            writes: 0,
        }
    }

    pub fn record(&self) -> Option<&str> {
        self.record.as_deref()
    }

    /// Number of successful saves
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Option<SavedState> {
        let record = self.record.as_deref()?;
        match SavedState::from_json(record) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("Ignoring saved board state: {}", e);
                None
            }
        }
    }

    fn save(&mut self, state: &SavedState) {
        match state.to_json() {
            Ok(json) => {
                self.record = Some(json);
                self.writes += 1;
            }
            Err(e) => log::warn!("Board state not saved: {}", e),
        }
    }
}
