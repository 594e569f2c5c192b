use bagrenamer::config::Config;
use bagrenamer::permissions::{PermissionCache, USE};
use bagrenamer::{Builder, BuiltEvent};
use bagrenamer_world::{Biome, ObjectId, PlayerId, Position, World, WorldObject};

pub const SLEEPING_BAG_PREFAB: &str =
    "assets/prefabs/deployable/sleeping bag/sleepingbag_leather_deployed.prefab";

pub struct TestWorld {
    map_size: f32,
    biome: Biome,
    objects: Vec<WorldObject>,
    next_id: u64,
}

impl TestWorld {
    pub fn new(map_size: f32) -> TestWorld {
        TestWorld {
            map_size,
            biome: Biome::Temperate,
            objects: Vec::new(),
            next_id: 1,
        }
    }

    pub fn with_biome(mut self, biome: Biome) -> TestWorld {
        self.biome = biome;
        self
    }

    pub fn spawn(&mut self, identifier: &str, position: Position) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push(WorldObject {
            id,
            identifier: identifier.to_owned(),
            position,
            display_name: None,
        });
        id
    }

    pub fn spawn_monument(&mut self, name: &str, position: Position) -> ObjectId {
        let identifier = format!("assets/bundled/prefabs/autospawn/monument/{name}.prefab");
        self.spawn(&identifier, position)
    }

    pub fn despawn(&mut self, id: ObjectId) {
        self.objects.retain(|o| o.id != id);
    }

    pub fn display_name(&self, id: ObjectId) -> Option<&str> {
        self.object(id)?.display_name.as_deref()
    }
}

impl World for TestWorld {
    fn map_size(&self) -> f32 {
        self.map_size
    }

    fn biome_at(&self, _pos: Position) -> Biome {
        self.biome
    }

    fn live_objects(&self) -> &[WorldObject] {
        &self.objects
    }

    fn object(&self, id: ObjectId) -> Option<&WorldObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    fn set_display_name(&mut self, id: ObjectId, name: &str) -> bool {
        match self.objects.iter_mut().find(|o| o.id == id) {
            Some(object) => {
                object.display_name = Some(name.to_owned());
                true
            }
            None => false,
        }
    }
}

pub fn all_toggles_config(format: &str) -> Config {
    Config {
        rename_by_grid: true,
        rename_by_biome: true,
        rename_by_landmark: true,
        rename_by_player: true,
        bag_name_format: format.to_owned(),
        ..Default::default()
    }
}

pub fn permitted(player: PlayerId) -> PermissionCache {
    let mut cache = PermissionCache::default();
    cache.grant(player, USE);
    cache
}

pub fn built_by(player: PlayerId, name: &str, target: ObjectId) -> BuiltEvent {
    BuiltEvent {
        builder: Some(Builder {
            id: player,
            display_name: name.to_owned(),
        }),
        target: Some(target),
    }
}
