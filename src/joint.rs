//! Joints connecting a segment to its parent.

use crate::transform::{from_axis_angle, from_translation, identity, Axis, Pose};

/// What kind of motion a joint allows. The axis is a unit vector expressed in the
/// joint frame (after the joint origin offset has been applied).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JointKind {
    /// Rigid connection, the joint value is ignored.
    Fixed,
    /// Rotation about the axis, joint value in radians.
    Revolute { axis: Axis },
    /// Translation along the axis, joint value in meters.
    Prismatic { axis: Axis },
}

impl JointKind {
    /// Name of this joint type as it is spelled in URDF.
    pub fn type_name(&self) -> &'static str {
        match self {
            JointKind::Fixed => "fixed",
            JointKind::Revolute { .. } => "revolute",
            JointKind::Prismatic { .. } => "prismatic",
        }
    }
}

/// Joint with a name, a kind of motion and a constant offset (origin) from the parent
/// frame to the joint frame. The offset is applied before the motion.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    name: String,
    kind: JointKind,
    origin: Pose,
}

impl Joint {
    pub fn new(name: impl Into<String>, kind: JointKind) -> Self {
        Joint {
            name: name.into(),
            kind,
            origin: identity(),
        }
    }

    pub fn fixed(name: impl Into<String>) -> Self {
        Joint::new(name, JointKind::Fixed)
    }

    pub fn revolute(name: impl Into<String>, axis: Axis) -> Self {
        Joint::new(name, JointKind::Revolute { axis })
    }

    pub fn prismatic(name: impl Into<String>, axis: Axis) -> Self {
        Joint::new(name, JointKind::Prismatic { axis })
    }

    /// Replace the joint frame offset (identity by default).
    pub fn with_origin(mut self, origin: Pose) -> Self {
        self.origin = origin;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &JointKind {
        &self.kind
    }

    pub fn origin(&self) -> &Pose {
        &self.origin
    }

    /// Axis of motion, `None` for a fixed joint.
    pub fn axis(&self) -> Option<&Axis> {
        match &self.kind {
            JointKind::Fixed => None,
            JointKind::Revolute { axis } | JointKind::Prismatic { axis } => Some(axis),
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self.kind, JointKind::Fixed)
    }

    /// Motion of the joint alone at the joint value `q`, without the origin offset.
    /// `q` is ignored for a fixed joint.
    pub fn motion_at(&self, q: f64) -> Pose {
        match &self.kind {
            JointKind::Fixed => identity(),
            JointKind::Revolute { axis } => from_axis_angle(axis, q),
            JointKind::Prismatic { axis } => from_translation(axis, q),
        }
    }

    /// Pose of the moved joint frame in the parent frame: `origin * motion_at(q)`.
    pub fn pose(&self, q: f64) -> Pose {
        self.origin * self.motion_at(q)
    }
}
