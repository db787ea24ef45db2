//! Everything drawn each frame, and the state input mutates between frames.

use crate::animation::Animator;
use crate::camera::GlobalRotation;
use crate::creature::Creature;
use crate::hud::Hud;
use crate::pose::{Joint, PoseAngles};
use crate::render::Renderer;
use crate::world::World;
use crate::{Settings, Transform};

/// Discrete inputs, typically bound to keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    PanLeft,
    PanRight,
    PlaceBlock,
    RemoveBlock,
}

impl Command {
    pub fn from_key(key: &str) -> Option<Command> {
        match key.to_ascii_lowercase().as_str() {
            "w" => Some(Command::MoveForward),
            "s" => Some(Command::MoveBackward),
            "a" => Some(Command::MoveLeft),
            "d" => Some(Command::MoveRight),
            "q" => Some(Command::PanLeft),
            "e" => Some(Command::PanRight),
            "f" => Some(Command::PlaceBlock),
            "g" => Some(Command::RemoveBlock),
            _ => None,
        }
    }
}

pub struct Stage {
    pub settings: Settings,
    pub angles: PoseAngles,
    pub animator: Animator,
    pub rotation: GlobalRotation,
    pub world: World,
    creature: Creature,
    hud: Hud,
    aspect: f32,
}

impl Stage {
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitised();
        Stage {
            angles: settings.angles,
            animator: Animator::default(),
            rotation: GlobalRotation::with_slider(settings.slider_angle),
            world: World::new(&settings),
            creature: Creature::turtle(settings.cylinder_segments),
            hud: Hud::new(),
            aspect: 1.0,
            settings,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Advance running animations to `seconds` since start.
    pub fn tick(&mut self, seconds: f32) {
        self.animator.update(&mut self.angles, seconds);
    }

    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        renderer.clear(self.settings.clear_colour);

        let camera = self.world.camera;
        renderer.set_view(&camera.view(), &camera.projection(self.aspect));
        renderer.set_global_rotation(&self.rotation.transform());

        self.world.render(renderer);

        let [x, y, z] = self.settings.creature_position;
        self.creature
            .render(renderer, Transform::identity().translated(x, y, z), &self.angles);

        self.hud.render(renderer, camera.yaw(), self.aspect);
    }

    pub fn frame(&mut self, renderer: &mut dyn Renderer, seconds: f32) {
        self.tick(seconds);
        self.render(renderer);
    }

    /// Manual input for a joint. Ignored by joints whose animation is
    /// running, since the next tick would overwrite it.
    pub fn set_joint_angle(&mut self, joint: Joint, degrees: f32) {
        if self.animator.is_running(joint) {
            log::debug!("Ignoring manual angle for animated {joint:?}.");
            return;
        }
        self.angles.set(joint, degrees);
    }

    pub fn toggle_animation(&mut self, joint: Joint) -> bool {
        let running = self.animator.toggle(joint);
        log::info!(
            "{joint:?} animation {}.",
            if running { "started" } else { "stopped" }
        );
        running
    }

    pub fn set_slider_angle(&mut self, degrees: f32) {
        self.rotation.set_slider(degrees);
    }

    /// A pointer press or drag at `(x, y)` in normalised device coordinates.
    /// With `shift` held this toggles the neck animation instead.
    pub fn pointer(&mut self, x: f32, y: f32, shift: bool) {
        if shift {
            self.toggle_animation(Joint::Neck);
        } else {
            self.rotation.set_pointer(x, y);
        }
    }

    pub fn apply(&mut self, command: Command) {
        let speed = self.settings.move_speed;
        let pan = self.settings.pan_degrees;
        match command {
            Command::MoveForward => self.world.camera.move_forward(speed),
            Command::MoveBackward => self.world.camera.move_backward(speed),
            Command::MoveLeft => self.world.camera.move_left(speed),
            Command::MoveRight => self.world.camera.move_right(speed),
            Command::PanLeft => self.world.camera.pan_left(pan),
            Command::PanRight => self.world.camera.pan_right(pan),
            Command::PlaceBlock => {
                if !self.world.place_at_target() {
                    log::warn!("Couldn't place block.");
                }
            }
            Command::RemoveBlock => {
                if !self.world.remove_at_target() {
                    log::warn!("Couldn't remove block.");
                }
            }
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::new(Settings::default())
    }
}
