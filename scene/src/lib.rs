pub mod animation;
pub mod camera;
pub mod creature;
pub mod hud;
pub mod pose;
pub mod render;
pub mod shapes;
pub mod stage;
pub mod world;

mod colour;
mod settings;
mod transform;

#[cfg(test)]
mod tests;

pub use animation::Animator;
pub use camera::{Camera, GlobalRotation};
pub use colour::Colour;
pub use creature::Creature;
pub use pose::{Joint, PoseAngles, Skeleton};
pub use render::{BufferId, DrawCall, Primitive, Renderer, TextureSelect};
pub use settings::Settings;
pub use stage::{Command, Stage};
pub use transform::Transform;
pub use world::{BlockPos, GridDims, Map, World, WorldError};
