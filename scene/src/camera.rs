use cgmath::{perspective, Deg, InnerSpace, Matrix4, Point3, Quaternion, Rotation, Rotation3, Vector3};
use serde_derive::{Deserialize, Serialize};

use crate::Transform;

/// A look-at camera: `eye` looks towards `at`, with `up` as the up vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub at: Point3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view, in degrees.
    pub fov: f32,
}

impl Camera {
    pub const DEFAULT_FOV: f32 = 60.0;
    const NEAR: f32 = 0.1;
    const FAR: f32 = 1000.0;

    pub fn new(eye: Point3<f32>, at: Point3<f32>) -> Self {
        Camera {
            eye,
            at,
            up: Vector3::unit_y(),
            fov: Self::DEFAULT_FOV,
        }
    }

    /// Unit vector from `eye` towards `at`. Falls back to -z when the two
    /// coincide.
    pub fn direction(&self) -> Vector3<f32> {
        let d = self.at - self.eye;
        if d.magnitude2() > 0.0 {
            d.normalize()
        } else {
            -Vector3::unit_z()
        }
    }

    fn shift(&mut self, by: Vector3<f32>) {
        self.eye += by;
        self.at += by;
    }

    pub fn move_forward(&mut self, speed: f32) {
        self.shift(self.direction() * speed);
    }

    pub fn move_backward(&mut self, speed: f32) {
        self.shift(self.direction() * -speed);
    }

    pub fn move_left(&mut self, speed: f32) {
        let side = self.up.cross(self.direction());
        if side.magnitude2() > 0.0 {
            self.shift(side.normalize() * speed);
        }
    }

    pub fn move_right(&mut self, speed: f32) {
        self.move_left(-speed);
    }

    /// Turn the view about `up` by `degrees`, counter-clockwise seen from above.
    pub fn pan_left(&mut self, degrees: f32) {
        let offset = self.at - self.eye;
        let rotation = Quaternion::from_axis_angle(self.up.normalize(), Deg(degrees));
        self.at = self.eye + rotation.rotate_vector(offset);
    }

    pub fn pan_right(&mut self, degrees: f32) {
        self.pan_left(-degrees);
    }

    /// Heading about the y axis in degrees, 0 when looking down -z.
    pub fn yaw(&self) -> f32 {
        let d = self.direction();
        Deg::from(cgmath::Rad((-d.x).atan2(-d.z))).0
    }

    pub fn view(&self) -> Transform {
        Transform::from_matrix(Matrix4::look_at_rh(self.eye, self.at, self.up))
    }

    pub fn projection(&self, aspect: f32) -> Transform {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        Transform::from_matrix(perspective(Deg(self.fov), aspect, Self::NEAR, Self::FAR))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(Point3::new(0.0, 0.0, 3.0), Point3::new(0.0, 0.0, -100.0))
    }
}

/// Whole-scene rotation applied on top of the model transforms. The slider
/// owns one angle about y; pointer drags own the other two. Neither input
/// touches the other's values.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct GlobalRotation {
    pub slider: f32,
    pub pointer_x: f32,
    pub pointer_y: f32,
}

impl GlobalRotation {
    const POINTER_Y_RANGE: f32 = 180.0;
    const POINTER_X_RANGE: f32 = 90.0;

    pub fn with_slider(slider: f32) -> Self {
        GlobalRotation {
            slider,
            ..Default::default()
        }
    }

    pub fn set_slider(&mut self, degrees: f32) {
        self.slider = degrees;
    }

    /// Set the pointer angles from a position in normalised device
    /// coordinates, each component in `[-1, 1]`.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer_y = x * Self::POINTER_Y_RANGE;
        self.pointer_x = y * Self::POINTER_X_RANGE;
    }

    pub fn transform(&self) -> Transform {
        Transform::identity()
            .rotated(self.slider, 0.0, 1.0, 0.0)
            .rotated(self.pointer_x, 1.0, 0.0, 0.0)
            .rotated(self.pointer_y, 0.0, 1.0, 0.0)
    }
}
