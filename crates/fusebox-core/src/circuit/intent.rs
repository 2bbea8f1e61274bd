use serde::{Deserialize, Serialize};

use super::board::{normalize_rating, CircuitBoard};
use super::types::CircuitKind;

/// A user action coming from one of the board views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardIntent {
    ToggleBreaker(String),
    AddFuse(String),
    RemoveFuse(String),
    ReassignRoomCircuit {
        room_id: String,
        kind: CircuitKind,
        fuse_id: Option<String>,
    },
}

impl BoardIntent {
    /// Apply to a board, returning whether anything changed
    pub fn apply(&self, board: &mut CircuitBoard) -> bool {
        match self {
            BoardIntent::ToggleBreaker(fuse_id) => board.toggle_breaker(fuse_id),
            BoardIntent::AddFuse(rating) => board.add_fuse(rating),
            BoardIntent::RemoveFuse(fuse_id) => board.remove_fuse(fuse_id),
            BoardIntent::ReassignRoomCircuit { room_id, kind, fuse_id } => {
                board.reassign_room_circuit(room_id, *kind, fuse_id.as_deref())
            }
        }
    }

    /// Short description for the event log
    pub fn describe(&self) -> String {
        match self {
            BoardIntent::ToggleBreaker(fuse_id) => format!("Toggled breaker {}", fuse_id),
            BoardIntent::AddFuse(rating) => format!("Added fuse rated {}", normalize_rating(rating)),
            BoardIntent::RemoveFuse(fuse_id) => format!("Removed fuse {}", fuse_id),
            BoardIntent::ReassignRoomCircuit { room_id, kind, fuse_id } => match fuse_id {
                Some(fuse_id) if !fuse_id.is_empty() => {
                    format!("Assigned {} {} to {}", room_id, kind, fuse_id)
                }
                _ => format!("Unassigned {} {}", room_id, kind),
            },
        }
    }
}
