//! Resolves the template attributes for one sleeping bag.

use crate::config::Config;
use crate::landmark;
use bagrenamer_world::{Biome, Position, World};

/// Label used when the terrain map cannot classify the biome. Inserted as a
/// regular value, not treated as missing.
const UNKNOWN_BIOME_LABEL: &str = "Unnamed Bag";

/// Resolved values for the four recognized placeholders. A disabled or
/// unresolvable attribute is the empty string.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResolvedAttributes {
    pub grid: String,
    pub biome: String,
    pub landmark: String,
    pub player: String,
}

impl ResolvedAttributes {
    /// Returns the value for a recognized placeholder token.
    pub fn get(&self, token: &str) -> Option<&str> {
        match token {
            "grid" => Some(&self.grid),
            "biome" => Some(&self.biome),
            "landmark" => Some(&self.landmark),
            "player" => Some(&self.player),
            _ => None,
        }
    }
}

/// Resolves every enabled attribute for a bag at `pos` owned by
/// `owner_name`. Attributes are independent: one coming up empty never
/// affects the others.
pub fn resolve(
    world: &impl World,
    config: &Config,
    pos: Position,
    owner_name: &str,
) -> ResolvedAttributes {
    let mut attrs = ResolvedAttributes::default();
    if config.rename_by_grid {
        attrs.grid = world.grid_label_at(pos);
    }
    if config.rename_by_biome {
        attrs.biome = biome_label(world.biome_at(pos)).to_owned();
    }
    if config.rename_by_landmark {
        attrs.landmark = landmark::nearest(world, pos);
    }
    if config.rename_by_player {
        attrs.player = owner_name.to_owned();
    }
    attrs
}

fn biome_label(biome: Biome) -> &'static str {
    match biome {
        Biome::Arctic => "Arctic",
        Biome::Tundra => "Tundra",
        Biome::Temperate => "Temperate",
        Biome::Arid => "Arid",
        Biome::Other => UNKNOWN_BIOME_LABEL,
    }
}
