//! Arena-backed scene graph with world-transform-preserving reparenting.
//!
//! Nodes form a tree rooted at [`Scene::root`]. Every node is one of a
//! closed set of variants ([`NodeKind`]): an interior `Group`, a pickable
//! `Mesh`, or an interactive `Control`. Nodes are created during scene
//! setup or model install and are never destroyed for the lifetime of the
//! session, so the arena only ever grows and a [`NodeId`] stays valid
//! forever.

mod bootstrap;
mod material;
mod transform;

use glam::{Mat4, Vec3};
use rustc_hash::FxHashMap;

pub use bootstrap::{spawn_primitives, Primitive};
pub use material::{Emissive, Material};
pub use transform::Transform;

/// Stable handle to a node in the [`Scene`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Action bound to an interactive control node.
///
/// A closed enum rather than a callback so control activation stays a
/// plain value the session can execute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    /// Nudge the composite model by a local-space offset.
    NudgeComposite {
        /// Offset added to the model's local translation.
        delta: Vec3,
    },
}

/// Payload of a pickable visual mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    /// Surface appearance, including the optional highlight channel.
    pub material: Material,
    /// Local-space bounding-sphere radius used as the ray-test proxy.
    pub bound_radius: f32,
}

/// Payload of an interactive control (e.g. the in-scene button).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlData {
    /// Action performed when a select ray activates this control.
    pub action: ControlAction,
    /// Local-space bounding-sphere radius used as the ray-test proxy.
    pub bound_radius: f32,
}

/// Closed node variant set. Traversals match on this instead of probing
/// node capabilities at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Interior node: owns children, has no visual of its own.
    Group,
    /// Pickable visual mesh.
    Mesh(MeshData),
    /// Interactive control; activatable but never grabbable.
    Control(ControlData),
}

/// A single scene node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Human-readable name; empty names are allowed and stay unindexed.
    pub name: String,
    /// Variant payload.
    pub kind: NodeKind,
    /// Transform relative to the parent.
    pub local: Transform,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    /// The node's parent, `None` only for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The node's children, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// World-space pick proxy radius before scaling, if this node is a
    /// ray-test candidate.
    #[must_use]
    pub fn bound_radius(&self) -> Option<f32> {
        match &self.kind {
            NodeKind::Group => None,
            NodeKind::Mesh(m) => Some(m.bound_radius),
            NodeKind::Control(c) => Some(c.bound_radius),
        }
    }
}

/// The scene graph arena.
pub struct Scene {
    nodes: Vec<Node>,
    by_name: FxHashMap<String, NodeId>,
}

impl Scene {
    /// Create a scene containing only the root group.
    #[must_use]
    pub fn new() -> Self {
        let root = Node {
            name: "root".into(),
            kind: NodeKind::Group,
            local: Transform::IDENTITY,
            parent: None,
            children: Vec::new(),
        };
        let mut by_name = FxHashMap::default();
        let _ = by_name.insert("root".into(), NodeId(0));
        Self {
            nodes: vec![root],
            by_name,
        }
    }

    /// The root group node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Immutable access to a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Look up a node by name. Only non-empty names are indexed; later
    /// insertions with the same name shadow earlier ones.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Replace a node's local transform.
    pub fn set_local_transform(&mut self, id: NodeId, local: Transform) {
        self.nodes[id.index()].local = local;
    }

    /// Add an interior group node.
    pub fn add_group(
        &mut self,
        parent: NodeId,
        name: &str,
        local: Transform,
    ) -> NodeId {
        self.add_node(parent, name, NodeKind::Group, local)
    }

    /// Add a pickable mesh node.
    pub fn add_mesh(
        &mut self,
        parent: NodeId,
        name: &str,
        local: Transform,
        mesh: MeshData,
    ) -> NodeId {
        self.add_node(parent, name, NodeKind::Mesh(mesh), local)
    }

    /// Add an interactive control node.
    pub fn add_control(
        &mut self,
        parent: NodeId,
        name: &str,
        local: Transform,
        control: ControlData,
    ) -> NodeId {
        self.add_node(parent, name, NodeKind::Control(control), local)
    }

    fn add_node(
        &mut self,
        parent: NodeId,
        name: &str,
        kind: NodeKind,
        local: Transform,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name: name.into(),
            kind,
            local,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        if !name.is_empty() {
            let _ = self.by_name.insert(name.into(), id);
        }
        id
    }

    /// World-space transform matrix of a node (ancestor chain composed
    /// root-down).
    #[must_use]
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = self.node(id);
        let local = node.local.matrix();
        match node.parent {
            Some(parent) => self.world_matrix(parent) * local,
            None => local,
        }
    }

    /// Whether `ancestor` appears in `id`'s ancestor chain (the node
    /// itself does not count).
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = self.node(id).parent;
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.node(p).parent;
        }
        false
    }

    /// Reparent `id` under `new_parent`, preserving its world transform.
    ///
    /// The node's new local transform is `new_parent_world⁻¹ · world`, so
    /// the move causes no visual jump. This is the ownership-transfer
    /// primitive behind grab (scene group → controller) and release
    /// (controller → scene group).
    pub fn attach(&mut self, id: NodeId, new_parent: NodeId) {
        let world = self.world_matrix(id);
        let parent_world = self.world_matrix(new_parent);
        let local = Transform::from_matrix(&(parent_world.inverse() * world));

        if let Some(old_parent) = self.nodes[id.index()].parent {
            let siblings = &mut self.nodes[old_parent.index()].children;
            siblings.retain(|&c| c != id);
        }
        self.nodes[new_parent.index()].children.push(id);
        self.nodes[id.index()].parent = Some(new_parent);
        self.nodes[id.index()].local = local;
    }

    /// Collect every ray-test candidate (mesh or control) in the subtree
    /// under `root`, depth-first.
    pub fn collect_pickables(&self, root: NodeId, out: &mut Vec<NodeId>) {
        for &child in self.node(root).children() {
            if self.node(child).bound_radius().is_some() {
                out.push(child);
            }
            self.collect_pickables(child, out);
        }
    }

    /// World-space pick sphere of a candidate node: world translation as
    /// center, bound radius scaled by the largest world scale component.
    #[must_use]
    pub fn pick_sphere(&self, id: NodeId) -> Option<(Vec3, f32)> {
        let radius = self.node(id).bound_radius()?;
        let (scale, _, translation) =
            self.world_matrix(id).to_scale_rotation_translation();
        Some((translation, radius * scale.max_element()))
    }

    /// Current emissive channel of a mesh node, if it has one.
    #[must_use]
    pub fn emissive(&self, id: NodeId) -> Option<Emissive> {
        match &self.node(id).kind {
            NodeKind::Mesh(m) => m.material.emissive,
            _ => None,
        }
    }

    /// Set the hover component of a mesh's highlight channel.
    ///
    /// Returns `false` (and mutates nothing) when the node is not a mesh
    /// or its material has no emissive channel.
    pub fn set_hover_highlight(&mut self, id: NodeId, value: f32) -> bool {
        self.with_emissive(id, |e| e.hover = value)
    }

    /// Set the grab component of a mesh's highlight channel.
    ///
    /// Same defensive behavior as [`Self::set_hover_highlight`].
    pub fn set_grab_highlight(&mut self, id: NodeId, value: f32) -> bool {
        self.with_emissive(id, |e| e.grab = value)
    }

    fn with_emissive(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut Emissive),
    ) -> bool {
        if let NodeKind::Mesh(m) = &mut self.nodes[id.index()].kind {
            if let Some(e) = m.material.emissive.as_mut() {
                f(e);
                return true;
            }
        }
        false
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;

    fn test_mesh() -> MeshData {
        MeshData {
            material: Material::with_emissive(Vec3::splat(0.5)),
            bound_radius: 0.2,
        }
    }

    #[test]
    fn attach_preserves_world_transform() {
        let mut scene = Scene::new();
        let group = scene.add_group(
            scene.root(),
            "group",
            Transform::from_translation(Vec3::new(1.0, 0.0, 0.0)),
        );
        let holder = scene.add_group(
            scene.root(),
            "holder",
            Transform {
                translation: Vec3::new(0.0, 1.6, -0.3),
                rotation: Quat::from_rotation_y(0.7),
                scale: Vec3::ONE,
            },
        );
        let mesh = scene.add_mesh(
            group,
            "mesh",
            Transform::from_translation(Vec3::new(0.5, 1.0, -2.0)),
            test_mesh(),
        );

        let before = scene.world_matrix(mesh);
        scene.attach(mesh, holder);
        let after = scene.world_matrix(mesh);
        assert!(
            before.abs_diff_eq(after, 1e-5),
            "reparent moved the node: {before:?} vs {after:?}"
        );
        assert_eq!(scene.node(mesh).parent(), Some(holder));
        assert!(!scene.node(group).children().contains(&mesh));

        // And back again
        scene.attach(mesh, group);
        let restored = scene.world_matrix(mesh);
        assert!(before.abs_diff_eq(restored, 1e-5));
    }

    #[test]
    fn is_ancestor_walks_full_chain() {
        let mut scene = Scene::new();
        let a = scene.add_group(scene.root(), "a", Transform::IDENTITY);
        let b = scene.add_group(a, "b", Transform::IDENTITY);
        let mesh =
            scene.add_mesh(b, "leaf", Transform::IDENTITY, test_mesh());

        assert!(scene.is_ancestor(a, mesh));
        assert!(scene.is_ancestor(b, mesh));
        assert!(scene.is_ancestor(scene.root(), mesh));
        assert!(!scene.is_ancestor(mesh, a));
        // A node is not its own ancestor
        assert!(!scene.is_ancestor(mesh, mesh));
    }

    #[test]
    fn collect_pickables_skips_groups() {
        let mut scene = Scene::new();
        let group = scene.add_group(scene.root(), "g", Transform::IDENTITY);
        let m1 =
            scene.add_mesh(group, "m1", Transform::IDENTITY, test_mesh());
        let inner = scene.add_group(group, "inner", Transform::IDENTITY);
        let m2 =
            scene.add_mesh(inner, "m2", Transform::IDENTITY, test_mesh());

        let mut out = Vec::new();
        scene.collect_pickables(group, &mut out);
        assert_eq!(out, vec![m1, m2]);
        assert!(!out.contains(&inner));
    }

    #[test]
    fn pick_sphere_scales_with_world_transform() {
        let mut scene = Scene::new();
        let group = scene.add_group(
            scene.root(),
            "g",
            Transform::from_translation_scale(Vec3::ZERO, 2.0),
        );
        let mesh = scene.add_mesh(
            group,
            "m",
            Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)),
            test_mesh(),
        );
        let (center, radius) = scene.pick_sphere(mesh).unwrap();
        assert!((center - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-6);
        assert!((radius - 0.4).abs() < 1e-6);
    }

    #[test]
    fn highlight_mutation_skips_channelless_materials() {
        let mut scene = Scene::new();
        let plain = scene.add_mesh(
            scene.root(),
            "plain",
            Transform::IDENTITY,
            MeshData {
                material: Material::plain(Vec3::ONE),
                bound_radius: 0.1,
            },
        );
        assert!(!scene.set_hover_highlight(plain, 1.0));
        assert!(!scene.set_grab_highlight(plain, 1.0));
        assert_eq!(scene.emissive(plain), None);
    }

    #[test]
    fn find_returns_named_nodes() {
        let mut scene = Scene::new();
        let g = scene.add_group(scene.root(), "shared", Transform::IDENTITY);
        assert_eq!(scene.find("shared"), Some(g));
        assert_eq!(scene.find("missing"), None);
    }
}
