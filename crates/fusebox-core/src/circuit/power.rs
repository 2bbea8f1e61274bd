use std::collections::BTreeMap;

use super::board::CircuitBoard;
use super::types::{CircuitKind, Room};

/// Power state of a single room.
///
/// Lights without a fuse count as unpowered, while sockets without a fuse are
/// `None` and do not degrade the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomPower {
    pub lights: bool,
    pub sockets: Option<bool>,
}

impl RoomPower {
    pub fn healthy(&self) -> bool {
        self.lights && self.sockets.unwrap_or(true)
    }
}

impl CircuitBoard {
    pub fn room_power_status(&self, room: &Room) -> RoomPower {
        let lights = room
            .lights_fuse_id
            .as_deref()
            .is_some_and(|id| self.breaker(id) == Some(true));
        let sockets = room
            .sockets_fuse_id
            .as_deref()
            .map(|id| self.breaker(id) == Some(true));

        RoomPower { lights, sockets }
    }

    /// Circuit labels fed by each fuse, in room order with lights first
    pub fn circuits_by_fuse(&self) -> BTreeMap<String, Vec<String>> {
        let mut circuits: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for room in self.rooms() {
            for kind in CircuitKind::all() {
                if let Some(fuse_id) = room.fuse_for(kind) {
                    circuits
                        .entry(fuse_id.to_string())
                        .or_default()
                        .push(room.circuit_label(kind));
                }
            }
        }
        circuits
    }

    /// Labels of assigned circuits whose breaker is off
    pub fn affected_circuits(&self) -> Vec<String> {
        self.rooms()
            .iter()
            .flat_map(|room| {
                CircuitKind::all()
                    .into_iter()
                    .filter(move |kind| self.circuit_tripped(room, *kind))
                    .map(move |kind| room.circuit_label(kind))
            })
            .collect()
    }

    /// Distinct names of rooms with at least one tripped circuit
    pub fn affected_rooms(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for room in self.rooms() {
            let tripped = CircuitKind::all()
                .into_iter()
                .any(|kind| self.circuit_tripped(room, kind));
            if tripped && !names.contains(&room.name) {
                names.push(room.name.clone());
            }
        }
        names
    }

    pub fn any_room_degraded(&self) -> bool {
        self.rooms()
            .iter()
            .any(|room| !self.room_power_status(room).healthy())
    }

    // Assigned and explicitly switched off; unassigned circuits never trip.
    fn circuit_tripped(&self, room: &Room, kind: CircuitKind) -> bool {
        room.fuse_for(kind)
            .is_some_and(|id| self.breaker(id) == Some(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::types::{BreakerStates, Fuse};

    fn board_with(rooms: Vec<Room>, breakers: &[(&str, bool)]) -> CircuitBoard {
        let fuses = breakers
            .iter()
            .enumerate()
            .map(|(i, _)| Fuse::new(i as u32 + 1, "B6"))
            .collect();
        let breakers: BreakerStates = breakers
            .iter()
            .map(|(id, on)| (id.to_string(), *on))
            .collect();
        CircuitBoard::from_parts(fuses, rooms, breakers, 10)
    }

    #[test]
    fn test_unassigned_lights_never_healthy() {
        let board = board_with(
            vec![Room::new("a", "A", None, Some("fuse1"))],
            &[("fuse1", true)],
        );
        let power = board.room_power_status(&board.rooms()[0]);
        assert!(!power.lights);
        assert_eq!(power.sockets, Some(true));
        assert!(!power.healthy());
        assert!(board.any_room_degraded());
    }

    #[test]
    fn test_unassigned_sockets_with_lights_on_is_healthy() {
        let board = board_with(
            vec![Room::new("a", "A", Some("fuse1"), None)],
            &[("fuse1", true)],
        );
        let power = board.room_power_status(&board.rooms()[0]);
        assert_eq!(power, RoomPower { lights: true, sockets: None });
        assert!(power.healthy());
        assert!(!board.any_room_degraded());
    }

    #[test]
    fn test_sockets_off_degrades_room() {
        let board = board_with(
            vec![Room::new("a", "A", Some("fuse1"), Some("fuse2"))],
            &[("fuse1", true), ("fuse2", false)],
        );
        assert!(!board.room_power_status(&board.rooms()[0]).healthy());
        assert!(board.any_room_degraded());
    }

    #[test]
    fn test_unassigned_circuits_are_not_affected() {
        let board = board_with(
            vec![Room::new("a", "A", None, None)],
            &[("fuse1", false)],
        );
        assert!(board.affected_circuits().is_empty());
        assert!(board.affected_rooms().is_empty());
        assert!(board.any_room_degraded());
    }

    #[test]
    fn test_circuits_by_fuse_orders_lights_first() {
        let board = board_with(
            vec![
                Room::new("a", "Hall", Some("fuse1"), Some("fuse1")),
                Room::new("b", "Study", Some("fuse2"), Some("fuse1")),
            ],
            &[("fuse1", true), ("fuse2", true)],
        );
        let circuits = board.circuits_by_fuse();
        assert_eq!(
            circuits["fuse1"],
            vec!["Hall Lights", "Hall Sockets", "Study Sockets"]
        );
        assert_eq!(circuits["fuse2"], vec!["Study Lights"]);
    }

    #[test]
    fn test_affected_rooms_are_distinct() {
        let board = board_with(
            vec![Room::new("a", "Hall", Some("fuse1"), Some("fuse1"))],
            &[("fuse1", false)],
        );
        assert_eq!(board.affected_circuits(), vec!["Hall Lights", "Hall Sockets"]);
        assert_eq!(board.affected_rooms(), vec!["Hall"]);
    }
}
