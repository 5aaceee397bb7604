//! Segment: a named rigid body at the tip of a joint.

use crate::joint::Joint;
use crate::joint_oracle::JointOracle;
use crate::kinematics_error::KinematicsError;
use crate::transform::{identity, Pose};

/// Rigid body carrying one joint. The segment name is also the name of its tip frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    name: String,
    joint: Joint,
    /// Constant transform from the moved joint frame to the segment tip.
    frame_to_tip: Pose,
}

impl Segment {
    pub fn new(name: impl Into<String>, joint: Joint, frame_to_tip: Pose) -> Self {
        Segment {
            name: name.into(),
            joint,
            frame_to_tip,
        }
    }

    /// Segment whose tip coincides with the moved joint frame.
    pub fn at_joint(name: impl Into<String>, joint: Joint) -> Self {
        Segment::new(name, joint, identity())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn joint(&self) -> &Joint {
        &self.joint
    }

    pub fn frame_to_tip(&self) -> &Pose {
        &self.frame_to_tip
    }

    /// Pose of the segment tip in the parent frame at joint value `q`.
    pub fn pose(&self, q: f64) -> Pose {
        self.joint.pose(q) * self.frame_to_tip
    }

    /// Same as [`Segment::pose`], with the joint value taken from the oracle. Fixed
    /// joints never consult the oracle.
    pub fn pose_from(&self, joints: &JointOracle) -> Result<Pose, KinematicsError> {
        if self.joint.is_fixed() {
            return Ok(self.pose(0.0));
        }
        let q = joints.lookup(self.joint.name()).ok_or_else(|| {
            KinematicsError::MissingJointValue {
                joint_name: self.joint.name().to_string(),
            }
        })?;
        Ok(self.pose(q))
    }
}
