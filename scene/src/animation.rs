use crate::pose::{Joint, PoseAngles};

/// Per-joint switches between manual and time-driven control. A running
/// joint has its angle overwritten every tick; a stopped joint keeps
/// whatever was last written to it, by the animation or by input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Animator {
    joint1: bool,
    joint2: bool,
    joint3: bool,
    neck: bool,
}

impl Animator {
    pub fn is_running(&self, joint: Joint) -> bool {
        match joint {
            Joint::Joint1 => self.joint1,
            Joint::Joint2 => self.joint2,
            Joint::Joint3 => self.joint3,
            Joint::Neck => self.neck,
        }
    }

    pub fn set_running(&mut self, joint: Joint, running: bool) {
        let flag = match joint {
            Joint::Joint1 => &mut self.joint1,
            Joint::Joint2 => &mut self.joint2,
            Joint::Joint3 => &mut self.joint3,
            Joint::Neck => &mut self.neck,
        };
        *flag = running;
    }

    /// Flip the joint's flag, returning the new state.
    pub fn toggle(&mut self, joint: Joint) -> bool {
        let running = !self.is_running(joint);
        self.set_running(joint, running);
        running
    }

    /// The animated angle of `joint` at `seconds` since start.
    pub fn wave(joint: Joint, seconds: f32) -> f32 {
        match joint {
            Joint::Joint1 => (15.0 * seconds.sin()).abs(),
            Joint::Joint2 => (10.0 * (3.0 * seconds).sin()).abs(),
            Joint::Joint3 => (5.0 * (3.0 * seconds).sin()).abs(),
            Joint::Neck => PoseAngles::REST_NECK + 10.0 * (2.0 * seconds).sin(),
        }
    }

    pub fn update(&self, angles: &mut PoseAngles, seconds: f32) {
        for joint in Joint::ALL {
            if self.is_running(joint) {
                angles.set(joint, Self::wave(joint, seconds));
            }
        }
    }
}
