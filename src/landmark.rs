//! Nearest-monument lookup.
//!
//! A linear scan over the host's live object set. This runs at most once per
//! placed bag, so no spatial index is kept; the object set is queried fresh
//! every time to honor objects streaming in and out.

use bagrenamer_world::{ObjectKind, Position, World, WorldObject};

/// Returns the simplified label of the monument nearest to `pos`, or an
/// empty string when no monument is loaded.
///
/// Exact distance ties resolve to the lexicographically smaller identifier,
/// so the result does not depend on the host's enumeration order.
pub fn nearest(world: &impl World, pos: Position) -> String {
    let mut best: Option<(&WorldObject, f32)> = None;
    for object in world.live_objects() {
        if object.kind() != ObjectKind::Monument {
            continue;
        }
        let dist = object.position.distance_squared(pos);
        let closer = match best {
            None => true,
            Some((winner, best_dist)) => {
                dist < best_dist || (dist == best_dist && object.identifier < winner.identifier)
            }
        };
        if closer {
            best = Some((object, dist));
        }
    }
    match best {
        Some((winner, _)) => simplify(&winner.identifier).to_owned(),
        None => String::new(),
    }
}

/// Reduces a prefab path to its bare name: the part after the last `/`,
/// minus a trailing `.prefab`.
pub fn simplify(identifier: &str) -> &str {
    let name = identifier.rsplit('/').next().unwrap_or(identifier);
    name.strip_suffix(".prefab").unwrap_or(name)
}
