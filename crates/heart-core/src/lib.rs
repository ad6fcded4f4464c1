pub mod animation;
pub mod bounce;
pub mod camera;
pub mod color;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod lighting;
pub mod overlay;
pub mod particles;
pub mod picking;
pub mod scene;

pub use animation::{AnimationConfig, HeartState};
pub use bounce::{BounceTicket, CancellationToken};
pub use camera::{Camera, Viewport};
pub use geometry::{GeometryError, MeshData};
pub use lighting::Lights;
pub use overlay::OverlayState;
pub use particles::{Particle, ParticleCloud};
pub use scene::{Scene, SceneEvent};
