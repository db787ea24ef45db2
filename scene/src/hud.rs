use crate::render::Renderer;
use crate::shapes::{Circle, Point, Triangle};
use crate::{Colour, Transform};

/// Flat overlay drawn in clip space over the 3D scene: a crosshair in the
/// centre and a compass in the corner whose marker points along the camera
/// heading.
#[derive(Clone, Debug)]
pub struct Hud {
    crosshair: Point,
    compass: Circle,
    heading: Triangle,
}

impl Hud {
    const CROSSHAIR_SIZE: f32 = 6.0;
    const COMPASS_SIZE: f32 = 30.0;
    const HEADING_SIZE: f32 = 40.0;
    const COMPASS_POSITION: [f32; 2] = [0.8, 0.8];

    const CROSSHAIR: Colour = Colour::WHITE;
    const COMPASS: Colour = Colour([0.0, 0.0, 0.0, 0.5]);
    const HEADING: Colour = Colour::rgb(1.0, 0.8, 0.2);

    pub fn new() -> Self {
        Hud {
            crosshair: Point::new([0.0, 0.0], Self::CROSSHAIR_SIZE, Self::CROSSHAIR),
            compass: Circle::new(
                [0.0, 0.0],
                Self::COMPASS_SIZE,
                Circle::DEFAULT_SEGMENTS,
                Self::COMPASS,
            ),
            heading: Triangle::new([0.0, 0.0], Self::HEADING_SIZE, Self::HEADING),
        }
    }

    /// Draw on top of whatever is in the colour buffer. `yaw` is the camera
    /// heading in degrees; `aspect` is width over height, used to keep the
    /// overlay from stretching.
    pub fn render(&mut self, renderer: &mut dyn Renderer, yaw: f32, aspect: f32) {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };

        let identity = Transform::identity();
        renderer.clear_depth();
        renderer.set_view(&identity, &identity);
        renderer.set_global_rotation(&identity);

        let [cx, cy] = Self::COMPASS_POSITION;
        let corner = Transform::identity()
            .scaled(1.0 / aspect, 1.0, 1.0)
            .translated(cx * aspect, cy, 0.0);

        self.compass.transform = corner;
        self.compass.render(renderer);

        self.heading.transform = corner.rotated(yaw, 0.0, 0.0, 1.0);
        self.heading.render(renderer);

        self.crosshair.transform = Transform::identity().scaled(1.0 / aspect, 1.0, 1.0);
        self.crosshair.render(renderer);
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
