//! Automatically renames player-placed sleeping bags after their map grid
//! cell, surrounding biome, nearest monument and owner.
//!
//! The hosting server raises a [`BuiltEvent`] when a player finishes placing
//! an object. Eligible sleeping bags are queued and renamed on the next
//! [`BagRenamer::tick`], once the host has fully initialized the new object.

pub mod attributes;
pub mod config;
pub mod format;
pub mod landmark;
pub mod permissions;

use crate::config::Config;
use crate::permissions::Permissions;
use bagrenamer_world::{ObjectId, ObjectKind, PlayerId, World};
use std::sync::Arc;
use tracing::debug;

/// The player that placed an object, as reported by the host's build event.
#[derive(Debug, Clone, PartialEq)]
pub struct Builder {
    pub id: PlayerId,
    pub display_name: String,
}

/// Host notification that an object finished being built.
///
/// Either reference may be absent when the host could not resolve it; such
/// events are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltEvent {
    pub builder: Option<Builder>,
    pub target: Option<ObjectId>,
}

/// A rename waiting for the tick after its build event.
#[derive(Debug, Clone, PartialEq)]
struct PendingRename {
    bag: ObjectId,
    owner_name: String,
}

pub struct BagRenamer {
    config: Arc<Config>,
    pending: Vec<PendingRename>,
}

impl BagRenamer {
    pub fn new(config: Config) -> BagRenamer {
        BagRenamer {
            config: Arc::new(config),
            pending: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the configuration snapshot. Renames already queued resolve
    /// against the new snapshot when their tick runs.
    pub fn reload(&mut self, config: Config) {
        self.config = Arc::new(config);
    }

    /// Handles the host's "object built" notification.
    ///
    /// Queues a rename when the event carries both a builder and a target,
    /// the builder holds the use permission, and the target resolves to a
    /// live sleeping bag. Anything else is ignored.
    pub fn handle_built(
        &mut self,
        event: &BuiltEvent,
        world: &impl World,
        permissions: &impl Permissions,
    ) {
        let Some(builder) = &event.builder else {
            return;
        };
        let Some(target) = event.target else {
            return;
        };

        if !permissions.has_permission(builder.id, permissions::USE) {
            return;
        }

        let Some(object) = world.object(target) else {
            return;
        };
        if object.kind() != ObjectKind::SleepingBag {
            return;
        }

        self.pending.push(PendingRename {
            bag: target,
            owner_name: builder.display_name.clone(),
        });
    }

    /// Runs every queued rename. The host calls this once the work that
    /// raised the build events has completed, before the next event is
    /// dispatched.
    pub fn tick(&mut self, world: &mut impl World) {
        for entry in std::mem::take(&mut self.pending) {
            self.rename(world, entry);
        }
    }

    fn rename(&self, world: &mut impl World, entry: PendingRename) {
        // The bag may have despawned since the build event.
        let Some(bag) = world.object(entry.bag) else {
            debug!("sleeping bag {} despawned before rename", entry.bag);
            return;
        };
        let pos = bag.position;

        let attrs = attributes::resolve(world, &self.config, pos, &entry.owner_name);
        let name = format::render(&self.config.bag_name_format, &attrs);
        if name.is_empty() {
            debug!("sleeping bag {} resolved to an empty name, keeping old one", entry.bag);
            return;
        }

        world.set_display_name(entry.bag, &name);
        debug!("renamed sleeping bag {} to {:?}", entry.bag, name);
    }
}
