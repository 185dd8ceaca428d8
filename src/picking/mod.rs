//! Ray construction and nearest-hit resolution over the candidate set.
//!
//! Candidates are tested as world-space bounding spheres — cheap proxies
//! sized per primitive — and the smallest positive distance along the ray
//! wins. Absence of a hit is a normal outcome, never an error.

use glam::{Mat4, Vec3};

use crate::scene::{NodeId, Scene};

/// A world-space ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Normalized ray direction.
    pub dir: Vec3,
}

impl Ray {
    /// Build a ray from a controller's world transform: origin at the
    /// controller position, direction along its local −Z axis (the XR
    /// target-ray convention).
    #[must_use]
    pub fn from_world_transform(world: &Mat4) -> Self {
        let (_, rotation, translation) =
            world.to_scale_rotation_translation();
        Self {
            origin: translation,
            dir: rotation * Vec3::NEG_Z,
        }
    }
}

/// A resolved ray-candidate intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The candidate node that was hit.
    pub node: NodeId,
    /// Distance from the ray origin to the hit, along the ray.
    pub distance: f32,
}

/// Intersect `ray` against every candidate and return the nearest positive
/// hit, or `None`.
///
/// Pure query with no side effects. Ties on exactly equal distance go to
/// the earlier candidate in iteration order (strictly-smaller comparison).
/// Candidates without a pick sphere (plain groups) are skipped.
#[must_use]
pub fn resolve_target(
    scene: &Scene,
    ray: &Ray,
    candidates: &[NodeId],
) -> Option<RayHit> {
    let mut closest: Option<RayHit> = None;

    for &node in candidates {
        let Some((center, radius)) = scene.pick_sphere(node) else {
            continue;
        };
        if let Some(distance) =
            ray_sphere_intersect(ray.origin, ray.dir, center, radius)
        {
            if closest.is_none_or(|hit| distance < hit.distance) {
                closest = Some(RayHit { node, distance });
            }
        }
    }

    closest
}

/// Ray-sphere intersection test.
///
/// Returns the distance along the ray to the first intersection, or `None`
/// if no hit. Falls back to the far root when the origin is inside the
/// sphere.
fn ray_sphere_intersect(
    origin: Vec3,
    dir: Vec3,
    center: Vec3,
    radius: f32,
) -> Option<f32> {
    let oc = origin - center;
    let a = dir.dot(dir);
    let b = 2.0 * oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t > 0.0 {
        return Some(t);
    }
    let t2 = (-b + discriminant.sqrt()) / (2.0 * a);
    if t2 > 0.0 {
        Some(t2)
    } else {
        None
    }
}
