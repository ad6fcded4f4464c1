//! The single scene: camera, lights, heart, particle cloud, and the state that
//! drives them. Front-ends own one `Scene`, feed it input, and call
//! [`Scene::tick`] once per display refresh before rendering.

use crate::animation::{cycling_color, pulse_scale, AnimationConfig, HeartState};
use crate::bounce::{BounceTicket, ScaleBounce};
use crate::camera::{Camera, Viewport};
use crate::constants::{AUTO_ROTATE_STEP, HEART_BASE_SCALE};
use crate::geometry::{build_heart_geometry, Aabb, GeometryError, MeshData};
use crate::input::InputController;
use crate::lighting::Lights;
use crate::overlay::OverlayState;
use crate::particles::ParticleCloud;
use crate::picking::{intersect_mesh, Intersection};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something the host has to act on.
#[derive(Clone, Debug)]
pub enum SceneEvent {
    /// The heart was clicked: the overlay is now visible and a scale bounce
    /// is running. The host schedules `finish_bounce(ticket)` after
    /// `BOUNCE_RESTORE_MS`.
    HeartActivated { ticket: BounceTicket },
}

pub struct Scene {
    pub camera: Camera,
    pub lights: Lights,
    pub config: AnimationConfig,
    viewport: Viewport,
    mesh: MeshData,
    bounds: Aabb,
    heart: HeartState,
    particles: ParticleCloud,
    input: InputController,
    overlay: OverlayState,
    bounce: ScaleBounce,
    time: f64,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Result<Self, GeometryError> {
        let mesh = build_heart_geometry()?;
        let bounds = mesh.bounding_box();
        let particles = ParticleCloud::generate(rng);
        let mut camera = Camera::default();
        camera.set_viewport(viewport);
        log::info!(
            "[scene] ready: {} particles, viewport {}x{}",
            particles.len(),
            viewport.width,
            viewport.height
        );
        Ok(Self {
            camera,
            lights: Lights::default(),
            config: AnimationConfig::default(),
            viewport,
            mesh,
            bounds,
            heart: HeartState::default(),
            particles,
            input: InputController::default(),
            overlay: OverlayState::default(),
            bounce: ScaleBounce::default(),
            time: 0.0,
        })
    }

    pub fn with_seed(seed: u64, viewport: Viewport) -> Result<Self, GeometryError> {
        Self::new(&mut StdRng::seed_from_u64(seed), viewport)
    }

    // ---------------- Input ----------------

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.input.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.input.pointer_move(x, y);
    }

    /// Ends a gesture; a click that lands on the heart activates it.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Option<SceneEvent> {
        let request = self.input.pointer_up(x, y)?;
        self.hit_test(request.x, request.y)?;
        Some(self.activate_heart())
    }

    /// Gesture aborted by the platform; never activates the heart.
    pub fn pointer_cancel(&mut self) {
        self.input.pointer_cancel();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.camera.zoom_by_wheel(delta_y);
        log::debug!("[input] zoom -> {:.2}", self.camera.distance());
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.set_viewport(viewport);
    }

    // ---------------- Animation ----------------

    /// Advance one display refresh.
    pub fn tick(&mut self) {
        self.time += self.config.time_step() as f64;
        self.input.ease_rotation();

        let animating = self.config.is_animating;
        if animating && !self.input.is_pressed() {
            self.input.auto_rotate(AUTO_ROTATE_STEP);
        }

        if animating {
            self.heart.scale = HEART_BASE_SCALE * pulse_scale(self.time);
            self.heart.color = cycling_color(self.time);
        } else {
            self.heart.scale = HEART_BASE_SCALE;
        }
        if let Some(scale) = self.bounce.active_scale() {
            self.heart.scale = scale;
        }

        self.heart.rotation = self.input.current_rotation();

        if animating {
            self.particles.set_rigid_rotation(self.time);
            self.particles.shimmer(self.time);
        }
    }

    pub fn toggle_animation(&mut self) -> bool {
        let on = self.config.toggle();
        log::info!("[scene] animation {}", if on { "resumed" } else { "paused" });
        on
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.config.set_speed(speed);
    }

    // ---------------- Hit testing ----------------

    /// Nearest intersection of the heart with the ray under a viewport point.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<Intersection> {
        let ray = self.camera.ray_through(x, y, self.viewport);
        let model = self.heart.model_matrix();
        intersect_mesh(&ray, &self.mesh, &self.bounds, &model)
            .first()
            .copied()
    }

    /// Show the overlay and start a scale bounce.
    pub fn activate_heart(&mut self) -> SceneEvent {
        self.overlay.show();
        let (scale, ticket) = self.bounce.trigger(self.heart.scale);
        self.heart.scale = scale;
        log::info!("[scene] heart activated");
        SceneEvent::HeartActivated { ticket }
    }

    /// Deferred end of a bounce. Returns whether the scale was restored.
    pub fn finish_bounce(&mut self, ticket: &BounceTicket) -> bool {
        match self.bounce.finish(ticket) {
            Some(scale) => {
                self.heart.scale = scale;
                true
            }
            None => false,
        }
    }

    // ---------------- Overlay ----------------

    #[inline]
    pub fn overlay(&self) -> OverlayState {
        self.overlay
    }

    /// Hide the overlay; returns the link to open if it was showing.
    pub fn acknowledge_overlay(&mut self) -> Option<String> {
        self.overlay.acknowledge()
    }

    pub fn close_overlay(&mut self) {
        self.overlay.close();
    }

    /// Cancel every pending bounce restore. Called on teardown.
    pub fn shutdown(&mut self) {
        self.bounce.cancel_all();
        log::info!("[scene] shut down");
    }

    // ---------------- Accessors ----------------

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    #[inline]
    pub fn heart(&self) -> &HeartState {
        &self.heart
    }

    #[inline]
    pub fn particles(&self) -> &ParticleCloud {
        &self.particles
    }

    #[inline]
    pub fn input(&self) -> &InputController {
        &self.input
    }
}
