use crate::circuit::{Fuse, Room};

/// Ratings of the breakers fitted in the board, left to right
pub const SEED_FUSE_RATINGS: [&str; 14] = [
    "B6", "B32", "B6", "B16", "B32", "B6", "B32", "B32", "B40", "B16", "B6", "B6", "B6", "B32",
];

/// `fuse1`..`fuse14` with the seed ratings
pub fn seed_fuses() -> Vec<Fuse> {
    SEED_FUSE_RATINGS
        .iter()
        .enumerate()
        .map(|(index, rating)| Fuse::new(index as u32 + 1, *rating))
        .collect()
}

/// The house layout: id, name, lights fuse, sockets fuse
pub fn seed_rooms() -> Vec<Room> {
    vec![
        Room::new("entrance", "Entrance", Some("fuse1"), Some("fuse2")),
        Room::new("downstairsBathroom", "Downstairs Bathroom", Some("fuse3"), Some("fuse4")),
        Room::new("livingRoom", "Living Room", Some("fuse5"), Some("fuse6")),
        Room::new("kitchen", "Kitchen", Some("fuse7"), Some("fuse8")),
        Room::new("outsideLights", "Outside Lights", Some("fuse9"), None),
        Room::new("secondFloorLanding", "Second Floor Landing", Some("fuse10"), Some("fuse2")),
        Room::new("upstairsToilet", "Upstairs Toilet", Some("fuse11"), Some("fuse4")),
        Room::new("upstairsBathroom", "Upstairs Bathroom", Some("fuse12"), Some("fuse8")),
        Room::new("alishaBedroom", "Alisha Bedroom", Some("fuse13"), Some("fuse14")),
        Room::new("mumsBedroom", "Mum's Bedroom", Some("fuse13"), Some("fuse14")),
        Room::new("office", "Office", Some("fuse11"), Some("fuse6")),
        Room::new("myBedroom", "My Bedroom", Some("fuse12"), Some("fuse14")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_references_resolve() {
        let fuses = seed_fuses();
        let ids: HashSet<&str> = fuses.iter().map(|fuse| fuse.id.as_str()).collect();
        assert_eq!(fuses.len(), 14);

        let rooms = seed_rooms();
        assert_eq!(rooms.len(), 12);
        for room in &rooms {
            for id in [&room.lights_fuse_id, &room.sockets_fuse_id].into_iter().flatten() {
                assert!(ids.contains(id.as_str()), "{} references {}", room.name, id);
            }
        }
    }
}
