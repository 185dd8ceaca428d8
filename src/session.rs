//! The session context object.
//!
//! One `Session` lives for the duration of the rendering/XR session and
//! owns everything the frame loop touches: the scene graph, the camera,
//! both controllers' interaction state, and the options. The host runtime
//! drives it with [`Session::frame`] once per rendered frame and
//! [`Session::handle_event`] for discrete input, both from the same
//! logical thread.

use glam::{Quat, Vec3};

use crate::asset::ModelPrototype;
use crate::camera::Camera;
use crate::error::XrGripError;
use crate::input::XrInputEvent;
use crate::interaction::{
    ControllerId, ControllerState, InteractionSystem, SelectOutcome,
};
use crate::options::Options;
use crate::scene::{
    spawn_primitives, ControlAction, ControlData, MeshData, NodeId, Scene,
    Transform,
};

/// Session-wide context: scene, camera, interaction state, options.
pub struct Session {
    scene: Scene,
    camera: Camera,
    interaction: InteractionSystem,
    options: Options,
    shared_group: NodeId,
    button: NodeId,
    composite_root: Option<NodeId>,
    /// Rest height of the installed model, the baseline for the idle
    /// bounce.
    composite_base_y: f32,
    presenting: bool,
}

impl Session {
    /// Build a session: shared group seeded with bootstrap primitives,
    /// two controller nodes, the anchored button, and a camera at the
    /// given initial aspect ratio.
    #[must_use]
    pub fn new(options: Options, aspect: f32) -> Self {
        let mut scene = Scene::new();
        let root = scene.root();
        let shared_group =
            scene.add_group(root, "group", Transform::IDENTITY);
        let _ = spawn_primitives(&mut scene, shared_group, &options.scene);

        let c1 =
            scene.add_group(root, "controller-1", Transform::IDENTITY);
        let c2 =
            scene.add_group(root, "controller-2", Transform::IDENTITY);

        let button = scene.add_control(
            root,
            "button",
            Transform::IDENTITY,
            ControlData {
                action: ControlAction::NudgeComposite {
                    delta: Vec3::new(0.0, 0.0, 0.1),
                },
                bound_radius: options.scene.button_radius,
            },
        );

        let camera = Camera::new(&options.camera, aspect);
        let interaction = InteractionSystem::new(
            shared_group,
            [c1, c2],
            options.interaction.default_ray_length,
            options.highlight.hover_intensity,
            options.highlight.grab_intensity,
        );

        Self {
            scene,
            camera,
            interaction,
            options,
            shared_group,
            button,
            composite_root: None,
            composite_base_y: 0.0,
            presenting: false,
        }
    }

    /// Render-loop entry point, called once per display frame before the
    /// host rasterizes. Runs the hover pass for both controllers in fixed
    /// order, advances the model's idle bounce, and re-anchors the button
    /// in front of the camera.
    pub fn frame(&mut self, elapsed_secs: f32) {
        let candidates = self.candidates();
        self.interaction.hover_update(&mut self.scene, &candidates);

        // Idle bounce, suspended while the model is being held (its local
        // transform then belongs to the controller).
        if let Some(root) = self.composite_root {
            if self.scene.node(root).parent() == Some(self.shared_group) {
                let mut local = self.scene.node(root).local;
                local.translation.y = self.composite_base_y
                    + self.options.scene.bounce_amplitude
                        * elapsed_secs.sin();
                self.scene.set_local_transform(root, local);
            }
        }

        let [ndc_x, ndc_y] = self.options.scene.button_anchor_ndc;
        let mut pos = self.camera.anchor_point(
            ndc_x,
            ndc_y,
            self.options.scene.button_distance,
        );
        pos.y += self.options.scene.button_lift;
        self.scene.set_local_transform(
            self.button,
            Transform {
                translation: pos,
                rotation: self.camera.yaw_orientation(),
                scale: Vec3::ONE,
            },
        );
    }

    /// Synchronous input reducer. Select events go to the interaction
    /// system; viewport and immersive events stay session-local.
    pub fn handle_event(&mut self, event: XrInputEvent) {
        match event {
            XrInputEvent::SelectStart {
                controller,
                ray_mode,
            } => {
                let candidates = self.candidates();
                let outcome = self.interaction.on_select_start(
                    &mut self.scene,
                    controller,
                    ray_mode,
                    &candidates,
                );
                if let SelectOutcome::ControlActivated(action) = outcome {
                    self.run_control(action);
                }
            }
            XrInputEvent::SelectEnd { controller } => {
                self.interaction
                    .on_select_end(&mut self.scene, controller);
            }
            XrInputEvent::ViewportResized { width, height } => {
                self.camera.set_viewport(width, height);
            }
            XrInputEvent::ToggleImmersive => {
                self.presenting = !self.presenting;
                log::info!(
                    "immersive session {}",
                    if self.presenting { "started" } else { "ended" }
                );
            }
        }
    }

    /// Write a tracked controller pose into its scene node.
    pub fn set_controller_pose(
        &mut self,
        controller: ControllerId,
        position: Vec3,
        orientation: Quat,
    ) {
        let node = self.interaction.controller_node(controller);
        self.scene.set_local_transform(
            node,
            Transform {
                translation: position,
                rotation: orientation,
                scale: Vec3::ONE,
            },
        );
    }

    /// Consume the asset loader's completion callback.
    ///
    /// On success the model sub-tree is instantiated under the shared
    /// group at the configured offset and scale, every part gets a live
    /// highlight channel, and the root becomes the composite grab target.
    /// On failure the error is logged and the session continues with a
    /// reduced candidate set.
    pub fn install_model(
        &mut self,
        loaded: Result<ModelPrototype, XrGripError>,
    ) {
        let proto = match loaded {
            Ok(p) => p,
            Err(e) => {
                log::error!("model load failed: {e}");
                return;
            }
        };

        // At most one composite root per session: a second install would
        // orphan the first model's parts into plain grabbable meshes.
        if let Some(root) = self.composite_root {
            log::warn!(
                "ignoring model {:?}: {:?} is already installed",
                proto.name,
                self.scene.node(root).name
            );
            return;
        }

        let offset = Vec3::from_array(self.options.scene.model_offset);
        let root = self.scene.add_group(
            self.shared_group,
            &proto.name,
            Transform::from_translation_scale(
                offset,
                self.options.scene.model_scale,
            ),
        );
        for part in &proto.parts {
            let mut material = part.material;
            material.ensure_emissive();
            let _ = self.scene.add_mesh(
                root,
                &part.name,
                part.transform,
                MeshData {
                    material,
                    bound_radius: part.bound_radius,
                },
            );
        }
        self.composite_root = Some(root);
        self.composite_base_y = offset.y;
        self.interaction.set_composite_root(Some(root));
        log::info!(
            "installed model {:?} with {} parts",
            proto.name,
            proto.parts.len()
        );
    }

    fn run_control(&mut self, action: ControlAction) {
        match action {
            ControlAction::NudgeComposite { delta } => {
                let Some(root) = self.composite_root else {
                    log::debug!(
                        "control activated with no model installed"
                    );
                    return;
                };
                let mut local = self.scene.node(root).local;
                local.translation += delta;
                self.scene.set_local_transform(root, local);
            }
        }
    }

    /// Current pick candidates: every mesh under the shared group (held
    /// objects are parented elsewhere and drop out structurally) plus the
    /// button control.
    fn candidates(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.scene.collect_pickables(self.shared_group, &mut out);
        out.push(self.button);
        out
    }

    /// Immutable access to the scene graph, for the host renderer.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// State of one controller.
    #[must_use]
    pub fn controller_state(
        &self,
        controller: ControllerId,
    ) -> &ControllerState {
        self.interaction.state(controller)
    }

    /// Root of the installed composite model, if any.
    #[must_use]
    pub fn composite_root(&self) -> Option<NodeId> {
        self.composite_root
    }

    /// The anchored button control.
    #[must_use]
    pub fn button(&self) -> NodeId {
        self.button
    }

    /// Whether an immersive session is active.
    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.presenting
    }
}
