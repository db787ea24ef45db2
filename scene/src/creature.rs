use crate::pose::{Angle, Joint, Part, PartShape, PoseAngles, Skeleton};
use crate::render::Renderer;
use crate::shapes::{Cube, Cylinder};
use crate::{Colour, Transform};

const SHELL: Colour = Colour::rgb(0.1, 0.6, 0.1);
const PLASTRON: Colour = Colour::rgb(0.7, 0.7, 0.7);
const SKIN: Colour = Colour::rgb(0.6, 0.7, 0.6);
const EYE: Colour = Colour::rgb(0.9, 0.9, 0.9);
const PUPIL: Colour = Colour::rgb(0.1, 0.1, 0.1);

const X: [f32; 3] = [1.0, 0.0, 0.0];
const Y: [f32; 3] = [0.0, 1.0, 0.0];
const Z: [f32; 3] = [0.0, 0.0, 1.0];

/// An axis-aligned box in a frame's coordinates, used to lay out parts that
/// stack on one another without passing scale down the hierarchy.
#[derive(Clone, Copy, Debug)]
struct Block {
    origin: [f32; 3],
    size: [f32; 3],
}

impl Block {
    /// A box placed at `offset` and sized by `scale`, both relative to this
    /// box's own extent.
    fn nested(&self, offset: [f32; 3], scale: [f32; 3]) -> Block {
        let mut origin = self.origin;
        let mut size = self.size;
        for i in 0..3 {
            origin[i] += offset[i] * self.size[i];
            size[i] *= scale[i];
        }
        Block { origin, size }
    }

    fn part(&self, name: &'static str, colour: Colour) -> Part {
        let [x, y, z] = self.origin;
        let [w, h, d] = self.size;
        Part::cube(name, colour).translate(x, y, z).scale(w, h, d)
    }
}

/// The turtle: a tilted body frame carrying a stacked shell, a neck and
/// head, four limbs (two with three segments) and a tail.
pub fn turtle() -> Skeleton {
    const SHELL_LAYERS: [&str; 6] = [
        "shell_0", "shell_1", "shell_2", "shell_3", "shell_4", "shell_5",
    ];

    let mut sk = Skeleton::new();

    let frame = sk.add(None, Part::frame("frame").rotate(Angle::fixed(-5.0), X));

    let body = Block {
        origin: [-0.3, -0.2, 0.0],
        size: [1.0, 0.15, 0.8],
    };
    sk.add(Some(frame), body.part("body", SHELL));

    let top = body.nested([0.1, 0.5, 0.1], [0.8, 0.8, 0.8]);
    sk.add(Some(frame), top.part("shell_top", SHELL));

    let mut layer = top;
    for (i, name) in SHELL_LAYERS.into_iter().enumerate() {
        let shrink = i as f32 * 0.05;
        layer = layer.nested(
            [0.1 + shrink / 2.0, 0.5, 0.1 + shrink / 2.0],
            [0.8 - shrink, 0.8 - shrink, 0.8 - shrink],
        );
        sk.add(Some(frame), layer.part(name, SHELL));
    }

    let plastron = body.nested([0.05, -0.3, 0.05], [0.9, 0.3, 0.9]);
    sk.add(Some(frame), plastron.part("plastron", PLASTRON));
    let belly = body.nested([0.075, -0.5, 0.1], [0.85, 0.3, 0.8]);
    sk.add(Some(frame), belly.part("belly", PLASTRON));

    let neck = sk.add(
        Some(frame),
        Part::cube("neck", SKIN)
            .translate(-0.23, -0.27, 0.3)
            .rotate(Angle::driven(0.0, 1.0, Joint::Neck), Z)
            .scale(0.08, 0.3, 0.19),
    );
    let head = sk.add(
        Some(neck),
        Part::cube("head", SKIN)
            .translate(-0.1, 0.35, -0.005)
            .rotate(Angle::driven(0.0, -1.0, Joint::Neck), Z)
            .scale(0.2, 0.2, 0.2),
    );
    for (eye_name, pupil_name, eye_z, pupil_z) in [
        ("left_eye", "left_pupil", -0.01, -0.015),
        ("right_eye", "right_pupil", 0.18, 0.025),
    ] {
        let eye = sk.add(
            Some(head),
            Part::cube(eye_name, EYE)
                .translate(0.06, 0.1, eye_z)
                .scale(0.05, 0.05, 0.03),
        );
        sk.add(
            Some(eye),
            Part::cube(pupil_name, PUPIL)
                .translate(0.005, 0.01, pupil_z)
                .scale(0.025, 0.025, 0.02),
        );
    }

    let left_arm = sk.add(
        Some(frame),
        Part::cube("left_arm", SKIN)
            .rotate(Angle::driven(70.0, -1.0, Joint::Joint1), Y)
            .translate(-0.1, -0.25, -0.1)
            .scale(0.25, 0.1, 0.15),
    );
    let left_forearm = sk.add(
        Some(left_arm),
        Part::cube("left_forearm", SKIN)
            .translate(0.25, 0.0, 0.0)
            .rotate(Angle::driven(-20.0, -1.0, Joint::Joint2), Y)
            .scale(0.2, 0.1, 0.15),
    );
    sk.add(
        Some(left_forearm),
        Part::cube("left_flipper", SKIN)
            .translate(0.2, 0.0, 0.0)
            .rotate(Angle::driven(-20.0, -1.0, Joint::Joint3), Y)
            .scale(0.1, 0.1, 0.15),
    );

    sk.add(
        Some(frame),
        Part::cube("right_leg", SKIN)
            .translate(0.4, -0.25, 0.65)
            .rotate(Angle::driven(-50.0, 1.0, Joint::Joint2), Y)
            .scale(0.25, 0.1, 0.15),
    );

    let right_arm = sk.add(
        Some(frame),
        Part::cube("right_arm", SKIN)
            .translate(0.0, -0.25, 0.65)
            .rotate(Angle::driven(-70.0, 1.0, Joint::Joint1), Y)
            .scale(0.25, 0.1, 0.15),
    );
    let right_forearm = sk.add(
        Some(right_arm),
        Part::cube("right_forearm", SKIN)
            .translate(0.175, 0.0, 0.014)
            .rotate(Angle::driven(20.0, 1.0, Joint::Joint2), Y)
            .scale(0.2, 0.1, 0.15),
    );
    sk.add(
        Some(right_forearm),
        Part::cube("right_flipper", SKIN)
            .translate(0.135, 0.0, 0.013)
            .rotate(Angle::driven(20.0, 1.0, Joint::Joint3), Y)
            .scale(0.1, 0.1, 0.15),
    );

    sk.add(
        Some(frame),
        Part::cube("left_leg", SKIN)
            .translate(0.3, -0.25, 0.05)
            .rotate(Angle::driven(50.0, -1.0, Joint::Joint2), Y)
            .scale(0.25, 0.1, 0.15),
    );

    // The tail swings half as far as the neck, in the opposite sense,
    // about the neck's rest angle.
    sk.add(
        Some(frame),
        Part::cylinder("tail", SKIN)
            .translate(0.71, -0.2, 0.4)
            .rotate(
                Angle::driven(-80.0 + PoseAngles::REST_NECK / 2.0, -0.5, Joint::Neck),
                Z,
            )
            .scale(0.08, 0.2, 0.1),
    );

    sk
}

#[derive(Clone, Debug)]
enum Instance {
    Frame,
    Cube(Cube),
    Cylinder(Cylinder),
}

/// A skeleton plus one long-lived shape instance per part, so geometry and
/// buffers survive across frames while transforms are rebuilt every frame.
#[derive(Clone, Debug)]
pub struct Creature {
    skeleton: Skeleton,
    instances: Vec<Instance>,
}

impl Creature {
    pub fn new(skeleton: Skeleton, cylinder_segments: u32) -> Self {
        let instances = skeleton
            .parts()
            .iter()
            .map(|part| match part.shape {
                PartShape::Frame => Instance::Frame,
                PartShape::Cube => Instance::Cube(Cube::new(part.colour)),
                PartShape::Cylinder => {
                    Instance::Cylinder(Cylinder::new(part.colour, cylinder_segments))
                }
            })
            .collect();

        Creature {
            skeleton,
            instances,
        }
    }

    pub fn turtle(cylinder_segments: u32) -> Self {
        Self::new(turtle(), cylinder_segments)
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// Pose every part and draw it.
    pub fn render(&mut self, renderer: &mut dyn Renderer, root: Transform, angles: &PoseAngles) {
        for posed in self.skeleton.pose(root, angles) {
            match self.instances.get_mut(posed.part) {
                Some(Instance::Cube(cube)) => {
                    cube.transform = posed.transform;
                    cube.render(renderer);
                }
                Some(Instance::Cylinder(cylinder)) => {
                    cylinder.transform = posed.transform;
                    cylinder.render(renderer);
                }
                Some(Instance::Frame) | None => (),
            }
        }
    }
}
