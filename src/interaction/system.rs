//! The pick-and-place state machine.
//!
//! One `InteractionSystem` lives inside the session context and is called
//! synchronously from event dispatch (select start/end) and once per frame
//! (hover update), never concurrently. The candidate set is passed into
//! every query so a composite model that has not loaded yet is simply
//! absent — no error path exists for "model not ready".
//!
//! Ownership transfer is structural: grabbing reparents the target under
//! the controller's scene node, which also removes it from the shared
//! group's subtree and therefore from the candidate set other controllers
//! pick against. Two controllers can never hold the same object.

use crate::picking::{resolve_target, Ray};
use crate::scene::{ControlAction, NodeId, NodeKind, Scene};

use super::controller::{ControllerId, ControllerState, TargetRayMode};

/// Result of a select-start event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectOutcome {
    /// A grab began on the given node (the composite root when a
    /// descendant of it was hit).
    GrabStarted(NodeId),
    /// The ray hit an interactive control; the session should execute the
    /// bound action. No grab state was entered.
    ControlActivated(ControlAction),
    /// Nothing under the ray, or the controller was already holding an
    /// object.
    NoTarget,
}

/// Owns both controllers' selection state, the per-frame hover set, and
/// the composite-root registration.
pub struct InteractionSystem {
    states: [ControllerState; 2],
    controller_nodes: [NodeId; 2],
    shared_group: NodeId,
    composite_root: Option<NodeId>,
    /// Nodes hover-highlighted this frame; fully rebuilt by
    /// [`Self::hover_update`].
    hovered: Vec<NodeId>,
    default_ray_length: f32,
    hover_intensity: f32,
    grab_intensity: f32,
}

impl InteractionSystem {
    /// Create the system for a scene with the given shared group and two
    /// controller nodes.
    #[must_use]
    pub fn new(
        shared_group: NodeId,
        controller_nodes: [NodeId; 2],
        default_ray_length: f32,
        hover_intensity: f32,
        grab_intensity: f32,
    ) -> Self {
        Self {
            states: [
                ControllerState::new(default_ray_length),
                ControllerState::new(default_ray_length),
            ],
            controller_nodes,
            shared_group,
            composite_root: None,
            hovered: Vec::new(),
            default_ray_length,
            hover_intensity,
            grab_intensity,
        }
    }

    /// Register (or clear) the composite model root. At most one is
    /// active; picking any of its descendant meshes grabs the root.
    pub fn set_composite_root(&mut self, root: Option<NodeId>) {
        self.composite_root = root;
    }

    /// Currently registered composite root, if a model has been installed.
    #[must_use]
    pub fn composite_root(&self) -> Option<NodeId> {
        self.composite_root
    }

    /// State of one controller.
    #[must_use]
    pub fn state(&self, controller: ControllerId) -> &ControllerState {
        &self.states[controller.index()]
    }

    /// Scene node a controller's pose is written to.
    #[must_use]
    pub fn controller_node(&self, controller: ControllerId) -> NodeId {
        self.controller_nodes[controller.index()]
    }

    /// Nodes carrying a hover highlight this frame.
    #[must_use]
    pub fn hovered(&self) -> &[NodeId] {
        &self.hovered
    }

    /// Handle a select-start event on `controller`.
    ///
    /// Always records the event's modality. If the controller is already
    /// holding an object the call changes nothing else. Otherwise the
    /// nearest candidate under the controller's ray decides: a control
    /// yields [`SelectOutcome::ControlActivated`]; a mesh starts a grab —
    /// grab highlight on the hit mesh, composite resolution to the
    /// registered root, and reparenting under the controller node with the
    /// world transform preserved.
    pub fn on_select_start(
        &mut self,
        scene: &mut Scene,
        controller: ControllerId,
        ray_mode: TargetRayMode,
        candidates: &[NodeId],
    ) -> SelectOutcome {
        let idx = controller.index();
        self.states[idx].target_ray_mode = Some(ray_mode);

        if self.states[idx].is_grabbing() {
            return SelectOutcome::NoTarget;
        }

        let node = self.controller_nodes[idx];
        let ray = Ray::from_world_transform(&scene.world_matrix(node));
        let Some(hit) = resolve_target(scene, &ray, candidates) else {
            return SelectOutcome::NoTarget;
        };

        if let NodeKind::Control(data) = &scene.node(hit.node).kind {
            let action = data.action;
            log::debug!(
                "{controller:?} activated control {:?}",
                scene.node(hit.node).name
            );
            return SelectOutcome::ControlActivated(action);
        }

        // Composite resolution: grabbing any descendant of the registered
        // root grabs the whole model; the hit mesh keeps the highlight.
        let grab_target = match self.composite_root {
            Some(root) if scene.is_ancestor(root, hit.node) => {
                self.states[idx].selected_mesh = Some(hit.node);
                root
            }
            _ => hit.node,
        };

        let _ = scene.set_grab_highlight(hit.node, self.grab_intensity);
        scene.attach(grab_target, node);
        self.states[idx].selected = Some(grab_target);
        log::debug!(
            "{controller:?} grabbed {:?} at distance {:.3}",
            scene.node(grab_target).name,
            hit.distance
        );
        SelectOutcome::GrabStarted(grab_target)
    }

    /// Handle a select-end event on `controller`. Safe no-op when idle.
    ///
    /// Clears the grab highlight on whichever mesh actually carries it
    /// (the remembered sub-mesh for composite grabs, else the object
    /// itself), then hands the object back to the shared group, again
    /// preserving its world transform.
    pub fn on_select_end(
        &mut self,
        scene: &mut Scene,
        controller: ControllerId,
    ) {
        let idx = controller.index();
        let Some(object) = self.states[idx].selected.take() else {
            return;
        };
        let lit = self.states[idx].selected_mesh.take().unwrap_or(object);
        let _ = scene.set_grab_highlight(lit, 0.0);
        scene.attach(object, self.shared_group);
        log::debug!(
            "{controller:?} released {:?}",
            scene.node(object).name
        );
    }

    /// Per-frame hover pass, run once before rendering.
    ///
    /// Clears every highlight left over from the previous frame's hover
    /// set, then re-evaluates both controllers in [`ControllerId::ORDER`].
    /// A controller in a non-ray modality, or one currently grabbing,
    /// skips evaluation entirely. On a hit the nearest candidate gets the
    /// hover highlight and the ray indicator shortens to the hit
    /// distance; on a miss the indicator returns to its default length.
    pub fn hover_update(
        &mut self,
        scene: &mut Scene,
        candidates: &[NodeId],
    ) {
        for node in self.hovered.drain(..) {
            let _ = scene.set_hover_highlight(node, 0.0);
        }

        for controller in ControllerId::ORDER {
            let idx = controller.index();
            let state = &self.states[idx];
            if state
                .target_ray_mode
                .is_some_and(TargetRayMode::suppresses_hover)
            {
                continue;
            }
            if state.is_grabbing() {
                continue;
            }

            let node = self.controller_nodes[idx];
            let ray = Ray::from_world_transform(&scene.world_matrix(node));
            if let Some(hit) = resolve_target(scene, &ray, candidates) {
                if scene.set_hover_highlight(hit.node, self.hover_intensity)
                {
                    self.hovered.push(hit.node);
                }
                self.states[idx].ray_length = hit.distance;
            } else {
                self.states[idx].ray_length = self.default_ray_length;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use crate::scene::{
        ControlData, Material, MeshData, Transform,
    };

    use super::*;

    const RAY_DEFAULT: f32 = 5.0;

    struct World {
        scene: Scene,
        group: NodeId,
        system: InteractionSystem,
    }

    /// Scene with a shared group and two controllers at head height, both
    /// aiming straight down −Z.
    fn world() -> World {
        let mut scene = Scene::new();
        let root = scene.root();
        let group = scene.add_group(root, "group", Transform::IDENTITY);
        let c1 = scene.add_group(
            root,
            "controller-1",
            Transform::from_translation(Vec3::new(0.0, 1.6, 0.0)),
        );
        let c2 = scene.add_group(
            root,
            "controller-2",
            Transform::from_translation(Vec3::new(0.0, 1.6, 0.0)),
        );
        let system =
            InteractionSystem::new(group, [c1, c2], RAY_DEFAULT, 1.0, 1.0);
        World {
            scene,
            group,
            system,
        }
    }

    fn add_mesh(w: &mut World, name: &str, pos: Vec3) -> NodeId {
        w.scene.add_mesh(
            w.group,
            name,
            Transform::from_translation(pos),
            MeshData {
                material: Material::with_emissive(Vec3::splat(0.5)),
                bound_radius: 0.2,
            },
        )
    }

    fn candidates(w: &World) -> Vec<NodeId> {
        let mut out = Vec::new();
        w.scene.collect_pickables(w.group, &mut out);
        out
    }

    /// Model root group with one descendant mesh, placed on the first
    /// controller's ray.
    fn add_composite(w: &mut World) -> (NodeId, NodeId) {
        let root = w.scene.add_group(
            w.group,
            "model",
            Transform::from_translation_scale(
                Vec3::new(0.0, 1.6, -2.0),
                0.5,
            ),
        );
        let part = w.scene.add_mesh(
            root,
            "model-part",
            Transform::IDENTITY,
            MeshData {
                material: Material::with_emissive(Vec3::ONE),
                bound_radius: 0.4,
            },
        );
        w.system.set_composite_root(Some(root));
        (root, part)
    }

    fn start(
        w: &mut World,
        controller: ControllerId,
    ) -> SelectOutcome {
        let cands = candidates(w);
        w.system.on_select_start(
            &mut w.scene,
            controller,
            TargetRayMode::TrackedPointer,
            &cands,
        )
    }

    #[test]
    fn grab_then_release_restores_world_transform() {
        let mut w = world();
        let mesh = add_mesh(&mut w, "m", Vec3::new(0.0, 1.6, -1.0));
        let before = w.scene.world_matrix(mesh);

        assert_eq!(
            start(&mut w, ControllerId::First),
            SelectOutcome::GrabStarted(mesh)
        );
        w.system.on_select_end(&mut w.scene, ControllerId::First);

        let after = w.scene.world_matrix(mesh);
        assert!(before.abs_diff_eq(after, 1e-5));
        assert_eq!(w.scene.node(mesh).parent(), Some(w.group));
        assert!(!w.system.state(ControllerId::First).is_grabbing());
    }

    #[test]
    fn two_controllers_cannot_hold_the_same_object() {
        let mut w = world();
        let mesh = add_mesh(&mut w, "m", Vec3::new(0.0, 1.6, -1.0));

        assert_eq!(
            start(&mut w, ControllerId::First),
            SelectOutcome::GrabStarted(mesh)
        );
        // The held object left the shared group, so the second
        // controller's pick finds nothing.
        assert_eq!(
            start(&mut w, ControllerId::Second),
            SelectOutcome::NoTarget
        );
        assert!(!w.system.state(ControllerId::Second).is_grabbing());
    }

    #[test]
    fn select_start_while_holding_only_records_modality() {
        let mut w = world();
        let near = add_mesh(&mut w, "near", Vec3::new(0.0, 1.6, -1.0));
        let _far = add_mesh(&mut w, "far", Vec3::new(0.0, 1.6, -2.0));

        assert_eq!(
            start(&mut w, ControllerId::First),
            SelectOutcome::GrabStarted(near)
        );
        let cands = candidates(&w);
        let outcome = w.system.on_select_start(
            &mut w.scene,
            ControllerId::First,
            TargetRayMode::Screen,
            &cands,
        );
        assert_eq!(outcome, SelectOutcome::NoTarget);
        let state = w.system.state(ControllerId::First);
        assert_eq!(state.selected, Some(near));
        assert_eq!(state.target_ray_mode, Some(TargetRayMode::Screen));
    }

    #[test]
    fn composite_descendant_resolves_grab_to_root() {
        let mut w = world();
        let (root, part) = add_composite(&mut w);

        assert_eq!(
            start(&mut w, ControllerId::First),
            SelectOutcome::GrabStarted(root)
        );
        let state = w.system.state(ControllerId::First);
        assert_eq!(state.selected, Some(root));
        assert_eq!(state.selected_mesh, Some(part));
        // The highlight sits on the descendant, not the root
        assert_eq!(w.scene.emissive(part).map(|e| e.grab), Some(1.0));
    }

    #[test]
    fn composite_release_clears_the_descendant_highlight() {
        let mut w = world();
        let (root, part) = add_composite(&mut w);
        let before = w.scene.world_matrix(root);

        let _ = start(&mut w, ControllerId::First);
        w.system.on_select_end(&mut w.scene, ControllerId::First);

        assert!(w.scene.emissive(part).is_some_and(|e| e.is_rest()));
        assert!(before.abs_diff_eq(w.scene.world_matrix(root), 1e-5));
        let state = w.system.state(ControllerId::First);
        assert_eq!(state.selected, None);
        assert_eq!(state.selected_mesh, None);
    }

    #[test]
    fn release_without_grab_is_a_no_op() {
        let mut w = world();
        let _mesh = add_mesh(&mut w, "m", Vec3::new(0.0, 1.6, -1.0));
        w.system.on_select_end(&mut w.scene, ControllerId::First);
        assert!(!w.system.state(ControllerId::First).is_grabbing());
    }

    #[test]
    fn absent_model_means_no_grab_and_no_error() {
        let mut w = world();
        // No meshes at all: a select that "would have" hit the model
        // resolves to nothing.
        assert_eq!(
            start(&mut w, ControllerId::First),
            SelectOutcome::NoTarget
        );
        assert_eq!(w.system.state(ControllerId::First).selected, None);
    }

    #[test]
    fn control_hit_activates_instead_of_grabbing() {
        let mut w = world();
        let button = w.scene.add_control(
            w.scene.root(),
            "button",
            Transform::from_translation(Vec3::new(0.0, 1.6, -0.5)),
            ControlData {
                action: ControlAction::NudgeComposite {
                    delta: Vec3::new(0.0, 0.0, 0.1),
                },
                bound_radius: 0.08,
            },
        );
        let mut cands = candidates(&w);
        cands.push(button);

        let outcome = w.system.on_select_start(
            &mut w.scene,
            ControllerId::First,
            TargetRayMode::TrackedPointer,
            &cands,
        );
        assert_eq!(
            outcome,
            SelectOutcome::ControlActivated(
                ControlAction::NudgeComposite {
                    delta: Vec3::new(0.0, 0.0, 0.1),
                }
            )
        );
        assert!(!w.system.state(ControllerId::First).is_grabbing());
    }

    #[test]
    fn hover_highlights_nearest_and_shortens_ray() {
        let mut w = world();
        let near = add_mesh(&mut w, "near", Vec3::new(0.0, 1.6, -1.0));
        let _far = add_mesh(&mut w, "far", Vec3::new(0.0, 1.6, -3.0));

        let cands = candidates(&w);
        w.system.hover_update(&mut w.scene, &cands);

        assert_eq!(w.system.hovered(), &[near, near]);
        assert_eq!(w.scene.emissive(near).map(|e| e.hover), Some(1.0));
        let len = w.system.state(ControllerId::First).ray_length;
        assert!((len - 0.8).abs() < 1e-5);
    }

    #[test]
    fn hover_clears_when_ray_moves_away() {
        let mut w = world();
        let mesh = add_mesh(&mut w, "m", Vec3::new(0.0, 1.6, -1.0));

        let cands = candidates(&w);
        w.system.hover_update(&mut w.scene, &cands);
        assert_eq!(w.scene.emissive(mesh).map(|e| e.hover), Some(1.0));

        // Turn both controllers away and run the next frame
        for controller in ControllerId::ORDER {
            let node = w.system.controller_node(controller);
            w.scene.set_local_transform(
                node,
                Transform {
                    translation: Vec3::new(0.0, 1.6, 0.0),
                    rotation: Quat::from_rotation_y(
                        std::f32::consts::FRAC_PI_2,
                    ),
                    scale: Vec3::ONE,
                },
            );
        }
        w.system.hover_update(&mut w.scene, &cands);

        assert!(w.system.hovered().is_empty());
        assert!(w.scene.emissive(mesh).is_some_and(|e| e.is_rest()));
        let len = w.system.state(ControllerId::First).ray_length;
        assert_eq!(len, RAY_DEFAULT);
    }

    #[test]
    fn screen_modality_suppresses_hover() {
        let mut w = world();
        let mesh = add_mesh(&mut w, "m", Vec3::new(0.0, 1.6, -1.0));

        // A screen-tap select records the modality (and hits nothing
        // grabbable here since the ray still points at the mesh — end the
        // grab to isolate the hover behavior).
        let cands = candidates(&w);
        let _ = w.system.on_select_start(
            &mut w.scene,
            ControllerId::First,
            TargetRayMode::Screen,
            &cands,
        );
        w.system.on_select_end(&mut w.scene, ControllerId::First);

        let cands = candidates(&w);
        w.system.hover_update(&mut w.scene, &cands);

        // First controller suppressed; second never saw an event and
        // still hovers.
        assert_eq!(w.system.hovered(), &[mesh]);
        assert_eq!(
            w.system.state(ControllerId::First).ray_length,
            RAY_DEFAULT
        );
    }

    #[test]
    fn grabbing_controller_skips_hover_evaluation() {
        let mut w = world();
        let near = add_mesh(&mut w, "near", Vec3::new(0.0, 1.6, -1.0));
        let far = add_mesh(&mut w, "far", Vec3::new(0.0, 1.6, -3.0));

        assert_eq!(
            start(&mut w, ControllerId::First),
            SelectOutcome::GrabStarted(near)
        );
        let cands = candidates(&w);
        w.system.hover_update(&mut w.scene, &cands);

        // Only the second controller hovers, and the grabbed mesh keeps
        // its grab highlight untouched by the hover pass.
        assert_eq!(w.system.hovered(), &[far]);
        assert_eq!(w.scene.emissive(near).map(|e| e.grab), Some(1.0));
        assert_eq!(w.scene.emissive(near).map(|e| e.hover), Some(0.0));
    }

    #[test]
    fn no_highlight_leaks_across_grab_release_hover_cycles() {
        let mut w = world();
        let a = add_mesh(&mut w, "a", Vec3::new(0.0, 1.6, -1.0));
        let b = add_mesh(&mut w, "b", Vec3::new(0.0, 1.6, -2.0));

        let cands = candidates(&w);
        w.system.hover_update(&mut w.scene, &cands);
        let _ = start(&mut w, ControllerId::First);
        let cands = candidates(&w);
        w.system.hover_update(&mut w.scene, &cands);
        w.system.on_select_end(&mut w.scene, ControllerId::First);

        // Aim away and settle one more frame
        for controller in ControllerId::ORDER {
            let node = w.system.controller_node(controller);
            w.scene.set_local_transform(
                node,
                Transform {
                    translation: Vec3::new(0.0, 1.6, 0.0),
                    rotation: Quat::from_rotation_x(
                        std::f32::consts::FRAC_PI_2,
                    ),
                    scale: Vec3::ONE,
                },
            );
        }
        let cands = candidates(&w);
        w.system.hover_update(&mut w.scene, &cands);

        for id in [a, b] {
            assert!(
                w.scene.emissive(id).is_some_and(|e| e.is_rest()),
                "highlight leaked on {:?}",
                w.scene.node(id).name
            );
        }
    }
}
