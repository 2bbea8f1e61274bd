use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// On/off state per fuse id, `true` meaning energized
pub type BreakerStates = BTreeMap<String, bool>;

/// A circuit breaker in the distribution board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fuse {
    /// Stable identifier, `fuse{number}`
    pub id: String,

    /// Display ordinal, never reused after removal
    pub number: u32,

    /// Normalized rating label such as "B16"
    pub rating: String,
}

impl Fuse {
    pub fn new(number: u32, rating: impl Into<String>) -> Self {
        Self {
            id: Self::id_for(number),
            number,
            rating: rating.into(),
        }
    }

    /// Identifier a fuse created with `number` receives
    pub fn id_for(number: u32) -> String {
        format!("fuse{}", number)
    }
}

/// A room on the floor plan with its two wiring branches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    pub lights_fuse_id: Option<String>,
    pub sockets_fuse_id: Option<String>,
}

impl Room {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lights_fuse_id: Option<&str>,
        sockets_fuse_id: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lights_fuse_id: lights_fuse_id.map(str::to_string),
            sockets_fuse_id: sockets_fuse_id.map(str::to_string),
        }
    }

    /// Fuse assigned to the given branch
    pub fn fuse_for(&self, kind: CircuitKind) -> Option<&str> {
        match kind {
            CircuitKind::Lights => self.lights_fuse_id.as_deref(),
            CircuitKind::Sockets => self.sockets_fuse_id.as_deref(),
        }
    }

    pub fn fuse_slot_mut(&mut self, kind: CircuitKind) -> &mut Option<String> {
        match kind {
            CircuitKind::Lights => &mut self.lights_fuse_id,
            CircuitKind::Sockets => &mut self.sockets_fuse_id,
        }
    }

    /// Human-readable label for one of this room's circuits, e.g. "Kitchen Lights"
    pub fn circuit_label(&self, kind: CircuitKind) -> String {
        format!("{} {}", self.name, kind)
    }
}

/// The two wiring branches a room can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircuitKind {
    Lights,
    Sockets,
}

impl CircuitKind {
    /// Lights before sockets, the order circuits are listed in
    pub fn all() -> [CircuitKind; 2] {
        [CircuitKind::Lights, CircuitKind::Sockets]
    }
}

impl fmt::Display for CircuitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitKind::Lights => f.write_str("Lights"),
            CircuitKind::Sockets => f.write_str("Sockets"),
        }
    }
}
