use crate::circuit::{BoardIntent, CircuitBoard, CircuitKind};
use crate::persistence::StateStore;

/// A board together with the store it is saved to.
///
/// Each mutating call runs the board operation (which reconciles when the fuse
/// list changes) and then writes a snapshot if anything changed.
pub struct BoardSession<S: StateStore> {
    board: CircuitBoard,
    store: S,
}

impl<S: StateStore> BoardSession<S> {
    /// Load the saved board, falling back to the seed layout.
    pub fn open(store: S) -> Self {
        let board = match store.load() {
            Some(saved) => {
                log::info!(
                    "Restored board with {} fuses and {} rooms",
                    saved.fuses.len(),
                    saved.rooms.len()
                );
                CircuitBoard::from_saved(saved)
            }
            None => {
                log::info!("No saved board found, using default layout");
                CircuitBoard::seeded()
            }
        };

        Self { board, store }
    }

    pub fn board(&self) -> &CircuitBoard {
        &self.board
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn apply(&mut self, intent: &BoardIntent) -> bool {
        let changed = intent.apply(&mut self.board);
        self.commit(changed)
    }

    pub fn toggle_breaker(&mut self, fuse_id: &str) -> bool {
        let changed = self.board.toggle_breaker(fuse_id);
        self.commit(changed)
    }

    pub fn add_fuse(&mut self, rating_text: &str) -> bool {
        let changed = self.board.add_fuse(rating_text);
        self.commit(changed)
    }

    pub fn remove_fuse(&mut self, fuse_id: &str) -> bool {
        let changed = self.board.remove_fuse(fuse_id);
        self.commit(changed)
    }

    pub fn reassign_room_circuit(
        &mut self,
        room_id: &str,
        kind: CircuitKind,
        fuse_id: Option<&str>,
    ) -> bool {
        let changed = self.board.reassign_room_circuit(room_id, kind, fuse_id);
        self.commit(changed)
    }

    /// Write the current board regardless of changes
    pub fn save(&mut self) {
        self.store.save(&self.board.snapshot());
    }

    fn commit(&mut self, changed: bool) -> bool {
        if changed {
            self.save();
        }
        changed
    }
}
