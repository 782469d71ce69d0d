// src/terrain/scene.rs

use nalgebra::Vector3;

use crate::terrain::{coords::ChunkCoords, mesh::RenderableMesh};

/// The host that owns rendered chunk objects.
///
/// The terrain core only hands over finished meshes and toggles visibility;
/// everything else about drawing belongs to the host.
pub trait SceneHost {
    type Handle;

    /// Adds a chunk object at `position`. Objects start out inactive.
    fn spawn(&mut self, coord: ChunkCoords, position: Vector3<f32>, mesh: RenderableMesh) -> Self::Handle;

    fn set_active(&mut self, handle: &Self::Handle, active: bool);

    fn despawn(&mut self, handle: Self::Handle);
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub coord: ChunkCoords,
    pub position: Vector3<f32>,
    pub mesh: RenderableMesh,
    pub active: bool,
}

/// Keeps spawned objects in memory. Useful without a renderer attached.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    objects: Vec<Option<SceneObject>>,
    toggles: usize,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, handle: usize) -> Option<&SceneObject> {
        self.objects.get(handle).and_then(Option::as_ref)
    }

    /// Objects that have been spawned and not despawned.
    pub fn live_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().flatten()
    }

    pub fn active_count(&self) -> usize {
        self.live_objects().filter(|o| o.active).count()
    }

    /// How many times an object's active flag was set.
    pub fn toggle_count(&self) -> usize {
        self.toggles
    }
}

impl SceneHost for HeadlessScene {
    type Handle = usize;

    fn spawn(&mut self, coord: ChunkCoords, position: Vector3<f32>, mesh: RenderableMesh) -> usize {
        self.objects.push(Some(SceneObject {
            coord,
            position,
            mesh,
            active: false,
        }));
        self.objects.len() - 1
    }

    fn set_active(&mut self, handle: &usize, active: bool) {
        if let Some(Some(object)) = self.objects.get_mut(*handle) {
            object.active = active;
            self.toggles += 1;
        }
    }

    fn despawn(&mut self, handle: usize) {
        if let Some(slot) = self.objects.get_mut(handle) {
            *slot = None;
        }
    }
}
