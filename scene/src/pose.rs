//! Hierarchical posing of an articulated figure.
//!
//! A `Skeleton` is a flat list of parts, each naming its parent by index.
//! Posing walks the list in order (parents always precede children):
//!
//! 1. copy the parent's snapshot (or the root transform),
//! 2. apply the part's translate / rotate operations in declared order,
//! 3. take the snapshot children will inherit,
//! 4. apply the part's own scale.
//!
//! Scale is applied after the snapshot, so it never reaches children.

use serde_derive::{Deserialize, Serialize};

use crate::{Colour, Transform};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Joint {
    Joint1,
    Joint2,
    Joint3,
    Neck,
}

impl Joint {
    pub const ALL: [Joint; 4] = [Joint::Joint1, Joint::Joint2, Joint::Joint3, Joint::Neck];
}

/// Named joint angles in degrees.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct PoseAngles {
    pub joint1: f32,
    pub joint2: f32,
    pub joint3: f32,
    pub neck: f32,
}

impl PoseAngles {
    pub const REST_NECK: f32 = 55.0;

    pub fn get(&self, joint: Joint) -> f32 {
        match joint {
            Joint::Joint1 => self.joint1,
            Joint::Joint2 => self.joint2,
            Joint::Joint3 => self.joint3,
            Joint::Neck => self.neck,
        }
    }

    pub fn set(&mut self, joint: Joint, degrees: f32) {
        match joint {
            Joint::Joint1 => self.joint1 = degrees,
            Joint::Joint2 => self.joint2 = degrees,
            Joint::Joint3 => self.joint3 = degrees,
            Joint::Neck => self.neck = degrees,
        }
    }
}

impl Default for PoseAngles {
    fn default() -> Self {
        PoseAngles {
            joint1: 0.0,
            joint2: 0.0,
            joint3: 0.0,
            neck: Self::REST_NECK,
        }
    }
}

/// A rotation angle of `base + gain * joint`, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    pub base: f32,
    pub gain: f32,
    pub joint: Option<Joint>,
}

impl Angle {
    pub fn fixed(degrees: f32) -> Self {
        Angle {
            base: degrees,
            gain: 0.0,
            joint: None,
        }
    }

    pub fn driven(base: f32, gain: f32, joint: Joint) -> Self {
        Angle {
            base,
            gain,
            joint: Some(joint),
        }
    }

    pub fn resolve(&self, angles: &PoseAngles) -> f32 {
        match self.joint {
            Some(joint) => self.base + self.gain * angles.get(joint),
            None => self.base,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op {
    Translate([f32; 3]),
    Rotate(Angle, [f32; 3]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartShape {
    /// Positions children, draws nothing.
    Frame,
    Cube,
    Cylinder,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub name: &'static str,
    pub parent: Option<usize>,
    pub shape: PartShape,
    pub colour: Colour,
    pub ops: Vec<Op>,
    pub scale: [f32; 3],
}

impl Part {
    fn new(name: &'static str, shape: PartShape, colour: Colour) -> Self {
        Part {
            name,
            parent: None,
            shape,
            colour,
            ops: Vec::new(),
            scale: [1.0, 1.0, 1.0],
        }
    }

    pub fn frame(name: &'static str) -> Self {
        Self::new(name, PartShape::Frame, Colour::WHITE)
    }

    pub fn cube(name: &'static str, colour: Colour) -> Self {
        Self::new(name, PartShape::Cube, colour)
    }

    pub fn cylinder(name: &'static str, colour: Colour) -> Self {
        Self::new(name, PartShape::Cylinder, colour)
    }

    pub fn translate(mut self, x: f32, y: f32, z: f32) -> Self {
        self.ops.push(Op::Translate([x, y, z]));
        self
    }

    pub fn rotate(mut self, angle: Angle, axis: [f32; 3]) -> Self {
        self.ops.push(Op::Rotate(angle, axis));
        self
    }

    pub fn scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.scale = [x, y, z];
        self
    }

    /// Resolve this part against its parent's snapshot, returning the
    /// snapshot for children and the transform to draw with.
    fn resolve(&self, parent: Transform, angles: &PoseAngles) -> (Transform, Transform) {
        let mut transform = parent;
        for op in &self.ops {
            match *op {
                Op::Translate([x, y, z]) => {
                    transform.translate(x, y, z);
                }
                Op::Rotate(angle, [x, y, z]) => {
                    transform.rotate(angle.resolve(angles), x, y, z);
                }
            }
        }

        let snapshot = transform;
        let [x, y, z] = self.scale;
        transform.scale(x, y, z);

        (snapshot, transform)
    }
}

/// The resolved pose of one part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Posed {
    pub part: usize,
    /// What children of this part start from.
    pub snapshot: Transform,
    /// What this part is drawn with.
    pub transform: Transform,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Skeleton {
    parts: Vec<Part>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part under `parent`, returning its index. A parent index that
    /// doesn't exist yet attaches the part to the root instead.
    pub fn add(&mut self, parent: Option<usize>, mut part: Part) -> usize {
        part.parent = match parent {
            Some(p) if p >= self.parts.len() => {
                log::warn!(
                    "Part {} names parent {p}, but only {} parts exist. Attaching to root.",
                    part.name,
                    self.parts.len()
                );
                None
            }
            p => p,
        };
        self.parts.push(part);
        self.parts.len() - 1
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn part(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    pub fn part_mut(&mut self, index: usize) -> Option<&mut Part> {
        self.parts.get_mut(index)
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.parts.iter().position(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Resolve every part for the given angles, in skeleton order.
    pub fn pose(&self, root: Transform, angles: &PoseAngles) -> Vec<Posed> {
        let mut posed: Vec<Posed> = Vec::with_capacity(self.parts.len());
        for (i, part) in self.parts.iter().enumerate() {
            let parent = part
                .parent
                .and_then(|p| posed.get(p))
                .map_or(root, |p| p.snapshot);
            let (snapshot, transform) = part.resolve(parent, angles);
            posed.push(Posed {
                part: i,
                snapshot,
                transform,
            });
        }
        posed
    }
}
