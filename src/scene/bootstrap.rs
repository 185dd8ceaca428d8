//! Initial scene population: a handful of randomly placed primitives.
//!
//! Mirrors the classic XR pick-and-place setup — a shared group seeded
//! with small primitive meshes at random positions, rotations, and scales,
//! each with a random base color and a live highlight channel.

use glam::{EulerRot, Quat, Vec3};
use rand::Rng;

use super::{Material, MeshData, NodeId, Scene, Transform};
use crate::options::SceneOptions;

/// Primitive shapes available to the bootstrap spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// 0.2 m cube.
    Box,
    /// Cone, 0.2 m base radius and height.
    Cone,
    /// Cylinder, 0.2 m radius and height.
    Cylinder,
    /// Icosahedron sphere, 0.2 m radius.
    Icosahedron,
    /// Torus, 0.2 m ring radius with a 0.04 m tube.
    Torus,
}

impl Primitive {
    /// Every spawnable primitive, in spawn-table order.
    pub const ALL: [Self; 5] = [
        Self::Box,
        Self::Cone,
        Self::Cylinder,
        Self::Icosahedron,
        Self::Torus,
    ];

    /// Local-space bounding-sphere radius used as the ray-test proxy.
    #[must_use]
    pub fn bound_radius(self) -> f32 {
        match self {
            Self::Box | Self::Cone | Self::Cylinder => 0.17,
            Self::Icosahedron => 0.2,
            Self::Torus => 0.24,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Cone => "cone",
            Self::Cylinder => "cylinder",
            Self::Icosahedron => "icosahedron",
            Self::Torus => "torus",
        }
    }
}

/// Spawn `opts.primitive_count` random primitives under `group` and return
/// their node ids.
pub fn spawn_primitives(
    scene: &mut Scene,
    group: NodeId,
    opts: &SceneOptions,
) -> Vec<NodeId> {
    let mut rng = rand::rng();
    // Presets may carry degenerate extents; an empty range would panic
    // inside the sampler, so collapse it to the fixed point instead.
    let sample = |rng: &mut rand::rngs::ThreadRng, lo: f32, hi: f32| {
        if lo < hi {
            rng.random_range(lo..hi)
        } else {
            lo
        }
    };
    let ext = opts.spawn_half_extent;
    let mut spawned = Vec::with_capacity(opts.primitive_count);

    for i in 0..opts.primitive_count {
        let primitive =
            Primitive::ALL[rng.random_range(0..Primitive::ALL.len())];
        let local = Transform {
            translation: Vec3::new(
                sample(&mut rng, -ext, ext),
                sample(&mut rng, 0.0, opts.spawn_height),
                sample(&mut rng, -ext, ext),
            ),
            rotation: Quat::from_euler(
                EulerRot::XYZ,
                rng.random_range(0.0..std::f32::consts::TAU),
                rng.random_range(0.0..std::f32::consts::TAU),
                rng.random_range(0.0..std::f32::consts::TAU),
            ),
            scale: Vec3::splat(rng.random::<f32>() + 0.5),
        };
        let mesh = MeshData {
            material: Material::with_emissive(Vec3::new(
                rng.random(),
                rng.random(),
                rng.random(),
            )),
            bound_radius: primitive.bound_radius(),
        };
        let name = format!("{}-{i}", primitive.name());
        spawned.push(scene.add_mesh(group, &name, local, mesh));
    }

    log::debug!(
        "bootstrap: spawned {} primitives under {:?}",
        spawned.len(),
        group
    );
    spawned
}
