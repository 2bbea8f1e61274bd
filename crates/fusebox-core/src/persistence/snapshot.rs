use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Number, Value};

use super::error::PersistenceError;
use crate::circuit::{BreakerStates, CircuitBoard, Fuse, Room};

/// The single persisted record of a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedState {
    pub fuses: Vec<Fuse>,
    pub rooms: Vec<Room>,
    pub breakers: BreakerStates,
    #[serde(deserialize_with = "whole_number")]
    pub next_fuse_number: u32,
}

impl SavedState {
    /// Parse a record, checking its top-level shape before decoding it.
    pub fn from_json(text: &str) -> Result<Self, PersistenceError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| PersistenceError::Deserialization(e.to_string()))?;
        check_shape(&value)?;
        serde_json::from_value(value).map_err(|e| PersistenceError::Deserialization(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        serde_json::to_string_pretty(self).map_err(|e| PersistenceError::Serialization(e.to_string()))
    }
}

fn check_shape(value: &Value) -> Result<(), PersistenceError> {
    let Some(record) = value.as_object() else {
        return Err(PersistenceError::Shape("record is not an object"));
    };

    if !record.get("fuses").is_some_and(Value::is_array) {
        return Err(PersistenceError::Shape("fuses is not a list"));
    }
    if !record.get("rooms").is_some_and(Value::is_array) {
        return Err(PersistenceError::Shape("rooms is not a list"));
    }
    if !record.get("breakers").is_some_and(Value::is_object) {
        return Err(PersistenceError::Shape("breakers is not a mapping"));
    }
    match record.get("nextFuseNumber") {
        Some(Value::Number(number)) if counter_value(number).is_some() => Ok(()),
        Some(Value::Number(_)) => Err(PersistenceError::Shape("nextFuseNumber is not a whole number")),
        _ => Err(PersistenceError::Shape("nextFuseNumber is not a number")),
    }
}

// Integral floats such as `15.0` are accepted as counters.
fn counter_value(number: &Number) -> Option<u32> {
    if let Some(n) = number.as_u64() {
        return u32::try_from(n).ok();
    }
    let n = number.as_f64()?;
    (n.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&n)).then_some(n as u32)
}

fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let number = Number::deserialize(deserializer)?;
    counter_value(&number)
        .ok_or_else(|| D::Error::custom(format!("{} is not a whole fuse number", number)))
}

impl From<&CircuitBoard> for SavedState {
    fn from(board: &CircuitBoard) -> Self {
        Self {
            fuses: board.fuses().to_vec(),
            rooms: board.rooms().to_vec(),
            breakers: board.breakers().clone(),
            next_fuse_number: board.next_fuse_number(),
        }
    }
}

impl CircuitBoard {
    pub fn snapshot(&self) -> SavedState {
        SavedState::from(self)
    }

    /// Rebuild a board from a record, reconciling it against its own fuse list.
    pub fn from_saved(saved: SavedState) -> Self {
        let mut board = CircuitBoard::from_parts(
            saved.fuses,
            saved.rooms,
            saved.breakers,
            saved.next_fuse_number,
        );
        if board.reconcile() {
            log::info!("Repaired inconsistent breaker or room references in saved state");
        }
        board.repair_counter();
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_layout() {
        let json = CircuitBoard::seeded().snapshot().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["nextFuseNumber"], 15);
        assert_eq!(value["fuses"][0]["id"], "fuse1");
        assert_eq!(value["fuses"][0]["rating"], "B6");
        assert_eq!(value["rooms"][4]["socketsFuseId"], Value::Null);
        assert_eq!(value["breakers"]["fuse14"], true);
    }

    #[test]
    fn test_shape_mismatches_are_rejected() {
        let cases = [
            "[]",
            r#"{"fuses": {}, "rooms": [], "breakers": {}, "nextFuseNumber": 1}"#,
            r#"{"fuses": [], "rooms": null, "breakers": {}, "nextFuseNumber": 1}"#,
            r#"{"fuses": [], "rooms": [], "breakers": [], "nextFuseNumber": 1}"#,
            r#"{"fuses": [], "rooms": [], "breakers": {}, "nextFuseNumber": "1"}"#,
            r#"{"fuses": [], "rooms": [], "breakers": {}, "nextFuseNumber": 15.5}"#,
            r#"{"fuses": [], "rooms": [], "breakers": {}, "nextFuseNumber": -1}"#,
            r#"{"fuses": [], "rooms": [], "breakers": {}, "nextFuseNumber": 4294967296}"#,
            r#"{"fuses": [], "rooms": [], "breakers": {}}"#,
        ];
        for case in cases {
            assert!(
                matches!(SavedState::from_json(case), Err(PersistenceError::Shape(_))),
                "accepted {}",
                case
            );
        }
    }

    #[test]
    fn test_garbage_is_a_deserialization_error() {
        assert!(matches!(
            SavedState::from_json("{not json"),
            Err(PersistenceError::Deserialization(_))
        ));
        assert!(matches!(
            SavedState::from_json(r#"{"fuses": [{"id": 3}], "rooms": [], "breakers": {}, "nextFuseNumber": 1}"#),
            Err(PersistenceError::Deserialization(_))
        ));
    }

    #[test]
    fn test_from_saved_reconciles() {
        let text = r#"{
            "fuses": [{"id": "fuse1", "number": 1, "rating": "B6"}],
            "rooms": [{"id": "hall", "name": "Hall", "lightsFuseId": "fuse1", "socketsFuseId": "fuse7"}],
            "breakers": {"fuse9": false},
            "nextFuseNumber": 1
        }"#;
        let board = CircuitBoard::from_saved(SavedState::from_json(text).unwrap());

        assert_eq!(board.breaker("fuse1"), Some(true));
        assert_eq!(board.breaker("fuse9"), None);
        assert_eq!(board.room("hall").unwrap().sockets_fuse_id, None);
        assert_eq!(board.next_fuse_number(), 2);
    }

    #[test]
    fn test_integral_float_counter_is_accepted() {
        let text = r#"{"fuses": [], "rooms": [], "breakers": {}, "nextFuseNumber": 15.0}"#;
        let saved = SavedState::from_json(text).unwrap();
        assert_eq!(saved.next_fuse_number, 15);
        assert!(saved.to_json().unwrap().contains("\"nextFuseNumber\": 15\n"));
    }

    #[test]
    fn test_exhausted_counter_loads_without_adding() {
        let text = r#"{"fuses": [], "rooms": [], "breakers": {}, "nextFuseNumber": 4294967295}"#;
        let mut board = CircuitBoard::from_saved(SavedState::from_json(text).unwrap());

        assert!(!board.add_fuse("B6"));
        assert!(board.fuses().is_empty());
        assert_eq!(board.next_fuse_number(), u32::MAX);
    }

    #[test]
    fn test_fuse_at_max_number_is_never_duplicated() {
        let text = r#"{
            "fuses": [{"id": "fuse4294967295", "number": 4294967295, "rating": "B6"}],
            "rooms": [],
            "breakers": {},
            "nextFuseNumber": 1
        }"#;
        let mut board = CircuitBoard::from_saved(SavedState::from_json(text).unwrap());
        assert_eq!(board.next_fuse_number(), u32::MAX);

        assert!(!board.add_fuse("B6"));
        assert_eq!(board.fuses().len(), 1);
    }

    #[test]
    fn test_counter_skips_numbers_used_in_ids() {
        let text = r#"{
            "fuses": [{"id": "fuse20", "number": 3, "rating": "B6"}],
            "rooms": [],
            "breakers": {},
            "nextFuseNumber": 4
        }"#;
        let mut board = CircuitBoard::from_saved(SavedState::from_json(text).unwrap());
        assert_eq!(board.next_fuse_number(), 21);

        assert!(board.add_fuse("B10"));
        assert_eq!(board.fuses()[1].id, "fuse21");
        assert!(board.fuse("fuse20").is_some());
    }
}
