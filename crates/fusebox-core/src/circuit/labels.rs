// Display strings shared by the floor plan and distribution board views

use super::board::CircuitBoard;
use super::types::{CircuitKind, Fuse, Room};

pub const HEALTH_DEGRADED: &str = "Some Circuits Off";
pub const HEALTH_LIVE: &str = "All Room Circuits Live";
pub const SPARE: &str = "Spare";
pub const NONE: &str = "None";
pub const UNASSIGNED: &str = "Unassigned";

/// Position label printed under a breaker, e.g. "C3"
pub fn fuse_position(fuse: &Fuse) -> String {
    format!("C{}", fuse.number)
}

/// Entry shown in the circuit mapping drop-downs, e.g. "C3 (B6)"
pub fn fuse_option(fuse: &Fuse) -> String {
    format!("C{} ({})", fuse.number, fuse.rating)
}

/// Caption listing what a breaker feeds, or "Spare"
pub fn linked_circuits(circuits: Option<&Vec<String>>) -> String {
    match circuits {
        Some(circuits) if !circuits.is_empty() => circuits.join("/"),
        _ => SPARE.to_string(),
    }
}

/// Comma-separated list, or "None"
pub fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE.to_string()
    } else {
        items.join(", ")
    }
}

pub fn board_health(any_room_degraded: bool) -> &'static str {
    if any_room_degraded {
        HEALTH_DEGRADED
    } else {
        HEALTH_LIVE
    }
}

/// Status of one room circuit, e.g. "Powered (B6 / C1)" or "Not assigned"
pub fn circuit_status(board: &CircuitBoard, room: &Room, kind: CircuitKind) -> String {
    let Some(fuse) = room.fuse_for(kind).and_then(|id| board.fuse(id)) else {
        return "Not assigned".to_string();
    };

    let state = if board.breaker(&fuse.id) == Some(true) {
        "Powered"
    } else {
        "No power"
    };
    format!("{} ({} / {})", state, fuse.rating, fuse_position(fuse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuse_labels() {
        let fuse = Fuse::new(3, "B6");
        assert_eq!(fuse_position(&fuse), "C3");
        assert_eq!(fuse_option(&fuse), "C3 (B6)");
    }

    #[test]
    fn test_linked_circuits_caption() {
        assert_eq!(linked_circuits(None), "Spare");
        assert_eq!(linked_circuits(Some(&Vec::new())), "Spare");
        let circuits = vec!["Hall Lights".to_string(), "Office Sockets".to_string()];
        assert_eq!(linked_circuits(Some(&circuits)), "Hall Lights/Office Sockets");
    }

    #[test]
    fn test_list_or_none() {
        assert_eq!(list_or_none(&[]), "None");
        assert_eq!(list_or_none(&["A".to_string(), "B".to_string()]), "A, B");
    }

    #[test]
    fn test_circuit_status_texts() {
        let mut board = CircuitBoard::seeded();
        let entrance = board.room("entrance").unwrap().clone();
        assert_eq!(
            circuit_status(&board, &entrance, CircuitKind::Lights),
            "Powered (B6 / C1)"
        );

        board.toggle_breaker("fuse2");
        assert_eq!(
            circuit_status(&board, &entrance, CircuitKind::Sockets),
            "No power (B32 / C2)"
        );

        let outside = board.room("outsideLights").unwrap();
        assert_eq!(circuit_status(&board, outside, CircuitKind::Sockets), "Not assigned");
    }

    #[test]
    fn test_board_health() {
        assert_eq!(board_health(true), "Some Circuits Off");
        assert_eq!(board_health(false), "All Room Circuits Live");
    }
}
