//! Permission gating for the rename pipeline.
//!
//! The host owns the real permission backend; the plugin only asks whether a
//! player holds a node. [`PermissionCache`] is a host-fed store with the
//! usual wildcard node matching, usable directly by hosts without one.

use bagrenamer_world::PlayerId;
use std::collections::HashMap;

/// Node a player must hold to have their bags renamed.
pub const USE: &str = "bagrenamer.use";

/// Every node this plugin registers with the host on load.
pub const PERMISSIONS: &[&str] = &[USE];

pub trait Permissions {
    fn has_permission(&self, player: PlayerId, node: &str) -> bool;
}

#[derive(Debug)]
enum PathSegment {
    WildCard,
    Named(String),
}

#[derive(Debug)]
struct PermissionNode {
    path: Vec<PathSegment>,
    value: bool,
}

impl PermissionNode {
    fn matches(&self, name: &str) -> bool {
        for (i, segment) in name.split('.').enumerate() {
            match self.path.get(i) {
                Some(PathSegment::WildCard) => return true,
                Some(PathSegment::Named(named)) => {
                    if named != segment {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

/// Permission nodes granted to players, first match wins.
#[derive(Debug, Default)]
pub struct PermissionCache {
    players: HashMap<PlayerId, Vec<PermissionNode>>,
}

impl PermissionCache {
    pub fn grant(&mut self, player: PlayerId, node: &str) {
        self.insert(player, node, true);
    }

    pub fn revoke(&mut self, player: PlayerId, node: &str) {
        self.insert(player, node, false);
    }

    pub fn get_node_val(&self, player: PlayerId, name: &str) -> Option<bool> {
        for node in self.players.get(&player)? {
            if node.matches(name) {
                return Some(node.value);
            }
        }
        None
    }

    fn insert(&mut self, player: PlayerId, name: &str, value: bool) {
        let path = name
            .split('.')
            .map(|s| match s {
                "*" => PathSegment::WildCard,
                s => PathSegment::Named(s.to_owned()),
            })
            .collect();
        self.players
            .entry(player)
            .or_default()
            .push(PermissionNode { path, value });
    }
}

impl Permissions for PermissionCache {
    fn has_permission(&self, player: PlayerId, node: &str) -> bool {
        self.get_node_val(player, node).unwrap_or(false)
    }
}
