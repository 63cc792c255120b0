use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// One placed website. Created once by the placer and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub domain: String,
    pub x: i32,
    pub y: i32,
}

impl Room {
    pub fn new(domain: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            domain: domain.into(),
            x,
            y,
        }
    }
}

/// Sparse grid of placed rooms, keyed by cell.
///
/// Serializes as a JSON object with `"x,y"` keys, the format the viewers
/// consume. Cells live in a BTreeMap so the serialized output is ordered
/// the same way on every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    cells: BTreeMap<(i32, i32), Room>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, room: Room) {
        self.cells.insert((room.x, room.y), room);
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Room> {
        self.cells.get(&(x, y))
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.cells.contains_key(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.cells.values()
    }

    /// Bounding box of the occupied cells, or None for an empty grid.
    pub fn bounds(&self) -> Option<GridBounds> {
        let mut rooms = self.rooms();
        let first = rooms.next()?;
        let mut bounds = GridBounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for room in rooms {
            bounds.min_x = bounds.min_x.min(room.x);
            bounds.max_x = bounds.max_x.max(room.x);
            bounds.min_y = bounds.min_y.min(room.y);
            bounds.max_y = bounds.max_y.max(room.y);
        }
        Some(bounds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl GridBounds {
    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x) + 1
    }

    pub fn height(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y) + 1
    }
}

fn parse_cell_key(key: &str) -> Option<(i32, i32)> {
    let (x, y) = key.split_once(',')?;
    Some((x.parse().ok()?, y.parse().ok()?))
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for ((x, y), room) in &self.cells {
            map.serialize_entry(&format!("{},{}", x, y), room)?;
        }
        map.end()
    }
}

struct GridVisitor;

impl<'de> Visitor<'de> for GridVisitor {
    type Value = Grid;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of \"x,y\" cell keys to rooms")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Grid, A::Error> {
        let mut cells = BTreeMap::new();
        while let Some((key, room)) = access.next_entry::<String, Room>()? {
            let (x, y) = parse_cell_key(&key)
                .ok_or_else(|| de::Error::custom(format!("invalid cell key {:?}", key)))?;
            cells.insert((x, y), room);
        }
        Ok(Grid { cells })
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Grid, D::Error> {
        deserializer.deserialize_map(GridVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_keys_have_no_whitespace_and_allow_negatives() {
        let mut grid = Grid::new();
        grid.insert(Room::new("origin.example", 0, 0));
        grid.insert(Room::new("west.example", -1, 0));

        let json = serde_json::to_string(&grid).unwrap();
        assert!(json.contains("\"0,0\""));
        assert!(json.contains("\"-1,0\""));
        assert!(!json.contains("\"0, 0\""));
    }

    #[test]
    fn round_trips_through_json() {
        let mut grid = Grid::new();
        grid.insert(Room::new("a.com", 0, 0));
        grid.insert(Room::new("b.com", 0, 1));
        grid.insert(Room::new("c.com", -2, 3));

        let json = serde_json::to_string(&grid).unwrap();
        let parsed: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn rejects_malformed_cell_keys() {
        let result: Result<Grid, _> =
            serde_json::from_str(r#"{"0;0": {"domain": "a.com", "x": 0, "y": 0}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn bounds_track_extremes() {
        let mut grid = Grid::new();
        assert!(grid.bounds().is_none());

        grid.insert(Room::new("a.com", 0, 0));
        grid.insert(Room::new("b.com", 4, -2));
        let bounds = grid.bounds().unwrap();
        assert_eq!(bounds.min_x, 0);
        assert_eq!(bounds.max_x, 4);
        assert_eq!(bounds.min_y, -2);
        assert_eq!(bounds.max_y, 0);
        assert_eq!(bounds.width(), 5);
        assert_eq!(bounds.height(), 3);
    }

    #[test]
    fn parses_signed_cell_keys() {
        assert_eq!(parse_cell_key("3,-7"), Some((3, -7)));
        assert_eq!(parse_cell_key("-12,40"), Some((-12, 40)));
        assert_eq!(parse_cell_key("3"), None);
        assert_eq!(parse_cell_key("a,b"), None);
    }
}
