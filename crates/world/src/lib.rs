//! Host-world model consumed by the bag renamer: positions, biomes, live
//! world objects and the [`World`] trait the hosting server implements.

pub mod grid;

use serde::de::Visitor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A point in the game world.
#[derive(PartialEq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Position {
        Position { x, y, z }
    }

    pub const fn zero() -> Position {
        Position::new(0.0, 0.0, 0.0)
    }

    pub fn distance_squared(self, other: Position) -> f32 {
        let d = self - other;
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    pub fn distance(self, other: Position) -> f32 {
        self.distance_squared(other).sqrt()
    }
}

impl std::ops::Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl std::ops::Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Coarse terrain classification of a world position.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Biome {
    Arctic,
    Tundra,
    Temperate,
    Arid,
    /// Anything the terrain map cannot classify as one of the four above.
    Other,
}

/// Stable handle to a live world object.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A connected player's stable id, as the host reports it in string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PlayerId(s.parse()?))
    }
}

impl Serialize for PlayerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct PlayerIdVisitor;

impl<'de> Visitor<'de> for PlayerIdVisitor {
    type Value = PlayerId;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a numeric player id string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(PlayerIdVisitor)
    }
}

/// Identifier substring marking a deployed sleeping bag.
pub const SLEEPING_BAG_MARKER: &str = "sleepingbag";

/// Identifier substring marking an auto-spawned monument.
pub const MONUMENT_MARKER: &str = "autospawn/monument";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    SleepingBag,
    Monument,
    Other,
}

/// A loaded world object as the host's object registry reports it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorldObject {
    pub id: ObjectId,
    /// The object's prefab path, e.g.
    /// `assets/bundled/prefabs/autospawn/monument/banditcamp.prefab`.
    pub identifier: String,
    pub position: Position,
    pub display_name: Option<String>,
}

impl WorldObject {
    /// Classifies the object by its prefab-path naming convention.
    pub fn kind(&self) -> ObjectKind {
        if self.identifier.contains(SLEEPING_BAG_MARKER) {
            ObjectKind::SleepingBag
        } else if self.identifier.contains(MONUMENT_MARKER) {
            ObjectKind::Monument
        } else {
            ObjectKind::Other
        }
    }
}

pub trait World {
    /// Returns the edge length of the world map in world units.
    fn map_size(&self) -> f32;

    /// Returns the dominant biome at `pos`.
    fn biome_at(&self, pos: Position) -> Biome;

    /// Returns the label of the map grid cell containing `pos`.
    fn grid_label_at(&self, pos: Position) -> String {
        grid::pos_to_grid(pos, self.map_size())
    }

    /// Returns every currently loaded world object. The sequence may be empty
    /// and its order is unspecified.
    fn live_objects(&self) -> &[WorldObject];

    /// Returns the object with `id`, or None if it has despawned.
    fn object(&self, id: ObjectId) -> Option<&WorldObject>;

    /// Sets the display name of the object with `id`.
    /// Returns true if the object was live and the name was applied.
    fn set_display_name(&mut self, id: ObjectId, name: &str) -> bool;
}
