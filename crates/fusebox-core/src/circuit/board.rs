use std::collections::HashSet;

use super::types::{BreakerStates, CircuitKind, Fuse, Room};
use crate::defaults;

/// Distribution board state: fuses, rooms, breaker positions and the fuse counter.
///
/// Every mutation returns `true` when it changed something. Unknown ids and
/// empty input are ignored rather than reported, so callers only need the
/// flag to decide whether to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitBoard {
    fuses: Vec<Fuse>,
    rooms: Vec<Room>,
    breakers: BreakerStates,
    next_fuse_number: u32,
}

impl CircuitBoard {
    /// Board populated with the default house layout
    pub fn seeded() -> Self {
        let fuses = defaults::seed_fuses();
        let breakers = fuses.iter().map(|fuse| (fuse.id.clone(), true)).collect();
        let next_fuse_number = fuses.len() as u32 + 1;

        Self {
            fuses,
            rooms: defaults::seed_rooms(),
            breakers,
            next_fuse_number,
        }
    }

    /// Assemble a board from raw parts without any repair.
    pub fn from_parts(
        fuses: Vec<Fuse>,
        rooms: Vec<Room>,
        breakers: BreakerStates,
        next_fuse_number: u32,
    ) -> Self {
        Self {
            fuses,
            rooms,
            breakers,
            next_fuse_number,
        }
    }

    pub fn fuses(&self) -> &[Fuse] {
        &self.fuses
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn breakers(&self) -> &BreakerStates {
        &self.breakers
    }

    pub fn next_fuse_number(&self) -> u32 {
        self.next_fuse_number
    }

    pub fn fuse(&self, fuse_id: &str) -> Option<&Fuse> {
        self.fuses.iter().find(|fuse| fuse.id == fuse_id)
    }

    pub fn room(&self, room_id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == room_id)
    }

    pub fn has_fuse(&self, fuse_id: &str) -> bool {
        self.fuse(fuse_id).is_some()
    }

    /// Breaker position for a fuse, `None` when the board has no entry for it
    pub fn breaker(&self, fuse_id: &str) -> Option<bool> {
        self.breakers.get(fuse_id).copied()
    }

    /// Flip a breaker. Unknown fuses are ignored.
    pub fn toggle_breaker(&mut self, fuse_id: &str) -> bool {
        if !self.has_fuse(fuse_id) {
            log::debug!("Ignoring toggle for unknown fuse {}", fuse_id);
            return false;
        }

        let was_on = self.breaker(fuse_id).unwrap_or(true);
        self.breakers.insert(fuse_id.to_string(), !was_on);
        true
    }

    /// Add a fuse with the given rating, normalized to trimmed uppercase.
    ///
    /// Blank ratings are a no-op and leave the counter untouched.
    pub fn add_fuse(&mut self, rating_text: &str) -> bool {
        let rating = normalize_rating(rating_text);
        if rating.is_empty() {
            return false;
        }

        let number = self.next_fuse_number;
        let Some(next_number) = number.checked_add(1) else {
            log::warn!("Fuse counter exhausted at {}, not adding a fuse", number);
            return false;
        };
        if self.has_fuse(&Fuse::id_for(number)) {
            log::warn!("{} already exists, not adding a fuse", Fuse::id_for(number));
            return false;
        }

        let fuse = Fuse::new(number, rating);
        log::debug!("Adding {} ({}) as C{}", fuse.id, fuse.rating, fuse.number);

        self.breakers.insert(fuse.id.clone(), true);
        self.fuses.push(fuse);
        self.next_fuse_number = next_number;
        self.reconcile();
        true
    }

    /// Remove a fuse, its breaker entry, and every room reference to it.
    pub fn remove_fuse(&mut self, fuse_id: &str) -> bool {
        let before = self.fuses.len();
        self.fuses.retain(|fuse| fuse.id != fuse_id);
        if self.fuses.len() == before {
            return false;
        }

        self.breakers.remove(fuse_id);
        for room in &mut self.rooms {
            for kind in CircuitKind::all() {
                let slot = room.fuse_slot_mut(kind);
                if slot.as_deref() == Some(fuse_id) {
                    *slot = None;
                }
            }
        }

        log::debug!("Removed {}", fuse_id);
        self.reconcile();
        true
    }

    /// Point one of a room's circuits at a fuse, or clear it with `None`.
    ///
    /// The fuse id is not checked here; a dangling reference is cleared by the
    /// next [`reconcile`](Self::reconcile). An empty id counts as `None`.
    pub fn reassign_room_circuit(
        &mut self,
        room_id: &str,
        kind: CircuitKind,
        fuse_id: Option<&str>,
    ) -> bool {
        let fuse_id = fuse_id.filter(|id| !id.is_empty()).map(str::to_string);

        let Some(room) = self.rooms.iter_mut().find(|room| room.id == room_id) else {
            log::debug!("Ignoring reassignment for unknown room {}", room_id);
            return false;
        };

        let slot = room.fuse_slot_mut(kind);
        if *slot == fuse_id {
            return false;
        }
        *slot = fuse_id;
        true
    }

    /// Bring breakers and room references back in line with the fuse list.
    ///
    /// Breakers end up with exactly one entry per fuse (existing positions kept,
    /// missing ones on) and room references to missing fuses are cleared.
    /// Returns whether anything had to change.
    pub fn reconcile(&mut self) -> bool {
        let valid: HashSet<&str> = self.fuses.iter().map(|fuse| fuse.id.as_str()).collect();

        let breakers: BreakerStates = self
            .fuses
            .iter()
            .map(|fuse| (fuse.id.clone(), self.breakers.get(&fuse.id).copied().unwrap_or(true)))
            .collect();
        let mut changed = breakers != self.breakers;
        self.breakers = breakers;

        for room in &mut self.rooms {
            for kind in CircuitKind::all() {
                let slot = room.fuse_slot_mut(kind);
                if slot.as_deref().is_some_and(|id| !valid.contains(id)) {
                    *slot = None;
                    changed = true;
                }
            }
        }

        changed
    }

    /// Keep the counter ahead of every existing fuse number and `fuse{n}` id so
    /// new ids stay unique. A board already using `u32::MAX` is left with an
    /// exhausted counter, which makes `add_fuse` a no-op.
    pub(crate) fn repair_counter(&mut self) -> bool {
        let highest = self
            .fuses
            .iter()
            .flat_map(|fuse| [Some(fuse.number), id_number(&fuse.id)])
            .flatten()
            .max();
        let floor = match highest {
            Some(highest) => highest.checked_add(1).unwrap_or(u32::MAX),
            None => 1,
        };

        if self.next_fuse_number < floor {
            log::warn!(
                "Fuse counter {} would reuse an existing number, advancing to {}",
                self.next_fuse_number,
                floor
            );
            self.next_fuse_number = floor;
            return true;
        }
        false
    }
}

impl Default for CircuitBoard {
    fn default() -> Self {
        Self::seeded()
    }
}

// Number encoded in a `fuse{n}` id
fn id_number(fuse_id: &str) -> Option<u32> {
    fuse_id.strip_prefix("fuse")?.parse().ok()
}

/// Trimmed, uppercased rating text
pub fn normalize_rating(rating_text: &str) -> String {
    rating_text.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_board() -> CircuitBoard {
        let fuses = vec![Fuse::new(1, "B6"), Fuse::new(2, "B16")];
        let rooms = vec![
            Room::new("hall", "Hall", Some("fuse1"), Some("fuse2")),
            Room::new("porch", "Porch", Some("fuse2"), None),
        ];
        let breakers: BreakerStates = [("fuse1".to_string(), true), ("fuse2".to_string(), true)].into();
        CircuitBoard::from_parts(fuses, rooms, breakers, 3)
    }

    #[test]
    fn test_toggle_breaker_flips_and_restores() {
        let mut board = small_board();
        assert!(board.toggle_breaker("fuse1"));
        assert_eq!(board.breaker("fuse1"), Some(false));
        assert!(board.toggle_breaker("fuse1"));
        assert_eq!(board.breaker("fuse1"), Some(true));
    }

    #[test]
    fn test_toggle_unknown_fuse_is_ignored() {
        let mut board = small_board();
        let before = board.clone();
        assert!(!board.toggle_breaker("fuse99"));
        assert_eq!(board, before);
    }

    #[test]
    fn test_add_fuse_normalizes_rating() {
        let mut board = small_board();
        assert!(board.add_fuse("  b20 "));

        let fuse = board.fuses().last().unwrap();
        assert_eq!(fuse.id, "fuse3");
        assert_eq!(fuse.number, 3);
        assert_eq!(fuse.rating, "B20");
        assert_eq!(board.breaker("fuse3"), Some(true));
        assert_eq!(board.next_fuse_number(), 4);
    }

    #[test]
    fn test_add_blank_fuse_is_noop() {
        let mut board = small_board();
        let before = board.clone();
        assert!(!board.add_fuse(""));
        assert!(!board.add_fuse("   "));
        assert_eq!(board, before);
    }

    #[test]
    fn test_fuse_numbers_are_never_reused() {
        let mut board = small_board();
        board.add_fuse("B6");
        board.remove_fuse("fuse3");
        board.add_fuse("B6");
        assert_eq!(board.fuses().last().unwrap().id, "fuse4");
        assert!(!board.has_fuse("fuse3"));
    }

    #[test]
    fn test_remove_fuse_detaches_rooms() {
        let mut board = small_board();
        assert!(board.remove_fuse("fuse2"));

        assert!(!board.has_fuse("fuse2"));
        assert_eq!(board.breaker("fuse2"), None);
        assert_eq!(board.room("hall").unwrap().sockets_fuse_id, None);
        assert_eq!(board.room("porch").unwrap().lights_fuse_id, None);
        assert_eq!(board.room("hall").unwrap().lights_fuse_id.as_deref(), Some("fuse1"));
    }

    #[test]
    fn test_remove_missing_fuse_is_noop() {
        let mut board = small_board();
        let before = board.clone();
        assert!(!board.remove_fuse("fuse42"));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reassign_is_lenient_until_reconcile() {
        let mut board = small_board();
        assert!(board.reassign_room_circuit("porch", CircuitKind::Sockets, Some("fuse9")));
        assert_eq!(board.room("porch").unwrap().sockets_fuse_id.as_deref(), Some("fuse9"));

        assert!(board.reconcile());
        assert_eq!(board.room("porch").unwrap().sockets_fuse_id, None);
    }

    #[test]
    fn test_reassign_empty_id_clears() {
        let mut board = small_board();
        assert!(board.reassign_room_circuit("hall", CircuitKind::Lights, Some("")));
        assert_eq!(board.room("hall").unwrap().lights_fuse_id, None);
        assert!(!board.reassign_room_circuit("hall", CircuitKind::Lights, None));
    }

    #[test]
    fn test_reassign_unknown_room_is_noop() {
        let mut board = small_board();
        assert!(!board.reassign_room_circuit("attic", CircuitKind::Lights, Some("fuse1")));
    }

    #[test]
    fn test_reconcile_rebuilds_breakers() {
        let fuses = vec![Fuse::new(1, "B6"), Fuse::new(2, "B6")];
        let breakers: BreakerStates = [("fuse1".to_string(), false), ("ghost".to_string(), false)].into();
        let mut board = CircuitBoard::from_parts(fuses, Vec::new(), breakers, 3);

        assert!(board.reconcile());
        assert_eq!(board.breakers().len(), 2);
        assert_eq!(board.breaker("fuse1"), Some(false));
        assert_eq!(board.breaker("fuse2"), Some(true));
        assert_eq!(board.breaker("ghost"), None);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut board = small_board();
        board.reassign_room_circuit("hall", CircuitKind::Lights, Some("nowhere"));
        board.reconcile();
        let once = board.clone();
        assert!(!board.reconcile());
        assert_eq!(board, once);
    }

    #[test]
    fn test_add_fuse_with_exhausted_counter_is_noop() {
        let mut board = CircuitBoard::from_parts(Vec::new(), Vec::new(), BreakerStates::new(), u32::MAX);
        assert!(!board.add_fuse("B6"));
        assert!(board.fuses().is_empty());
        assert_eq!(board.next_fuse_number(), u32::MAX);
    }

    #[test]
    fn test_add_fuse_never_duplicates_an_id() {
        let fuses = vec![Fuse::new(3, "B6")];
        let mut board = CircuitBoard::from_parts(fuses, Vec::new(), BreakerStates::new(), 3);
        assert!(!board.add_fuse("B6"));
        assert_eq!(board.fuses().len(), 1);
        assert_eq!(board.next_fuse_number(), 3);
    }

    #[test]
    fn test_repair_counter_reads_ids() {
        let fuses = vec![Fuse {
            id: "fuse20".to_string(),
            number: 3,
            rating: "B6".to_string(),
        }];
        let mut board = CircuitBoard::from_parts(fuses, Vec::new(), BreakerStates::new(), 4);
        assert!(board.repair_counter());
        assert_eq!(board.next_fuse_number(), 21);
    }

    #[test]
    fn test_repair_counter() {
        let fuses = vec![Fuse::new(1, "B6"), Fuse::new(5, "B6")];
        let mut board = CircuitBoard::from_parts(fuses, Vec::new(), BreakerStates::new(), 2);
        assert!(board.repair_counter());
        assert_eq!(board.next_fuse_number(), 6);
        assert!(!board.repair_counter());
    }
}
