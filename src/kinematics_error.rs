//! Errors of the kinematic core: tree construction, chain extraction and evaluation.

/// Failure of a kinematic query. No partial results are ever returned together with
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KinematicsError {
    /// No segment (frame) of this name exists in the tree.
    UnknownSegment { name: String },
    /// The chain crosses a moving joint whose value was not supplied.
    MissingJointValue { joint_name: String },
    /// Joint names and joint values given as parallel sequences differ in length.
    MalformedJointInput { names: usize, values: usize },
    /// A segment of this name is already in the tree.
    DuplicateSegment { name: String },
    /// A moving joint of this name is already in the tree.
    DuplicateJoint { name: String },
}

impl std::fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            KinematicsError::UnknownSegment { ref name } =>
                write!(f, "Unknown segment: {}", name),
            KinematicsError::MissingJointValue { ref joint_name } =>
                write!(f, "No position given for joint: {}", joint_name),
            KinematicsError::MalformedJointInput { names, values } =>
                write!(f, "Malformed joint input: {} names but {} positions", names, values),
            KinematicsError::DuplicateSegment { ref name } =>
                write!(f, "Duplicate segment name: {}", name),
            KinematicsError::DuplicateJoint { ref name } =>
                write!(f, "Duplicate joint name: {}", name),
        }
    }
}

impl std::error::Error for KinematicsError {}
