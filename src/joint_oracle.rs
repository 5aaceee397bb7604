//! Sources of joint positions for forward evaluation.
//!
//! A [`JointOracle`] answers "what is the position of joint `name`?" with a value or
//! nothing. It only borrows the caller's data for the duration of a query.
//!
//! ```
//! use std::collections::HashMap;
//! use rs_tree_kinematics::joint_oracle::JointOracle;
//!
//! let positions = HashMap::from([(String::from("elbow"), 0.5)]);
//! let from_map = JointOracle::from_mapping(&positions);
//! assert_eq!(from_map.lookup("elbow"), Some(0.5));
//!
//! let names = vec![String::from("elbow")];
//! let values = vec![0.5];
//! let from_lists = JointOracle::from_parallel(&names, &values).unwrap();
//! assert_eq!(from_lists.lookup("elbow"), Some(0.5));
//!
//! assert_eq!(JointOracle::empty().lookup("elbow"), None);
//! ```

use std::collections::HashMap;

use crate::kinematics_error::KinematicsError;

/// Joint positions keyed by joint name, in radians or meters. Built only through
/// [`JointOracle::empty`], [`JointOracle::from_mapping`] and
/// [`JointOracle::from_parallel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JointOracle<'a> {
    source: Source<'a>,
}

#[derive(Debug, Clone, Copy, Default)]
enum Source<'a> {
    /// Knows no joint. Evaluation succeeds only across fixed joints.
    #[default]
    Empty,
    Mapping(&'a HashMap<String, f64>),
    /// Names and values of equal length.
    Parallel {
        names: &'a [String],
        values: &'a [f64],
    },
}

impl<'a> JointOracle<'a> {
    pub fn empty() -> Self {
        JointOracle { source: Source::Empty }
    }

    pub fn from_mapping(positions: &'a HashMap<String, f64>) -> Self {
        JointOracle { source: Source::Mapping(positions) }
    }

    /// Fails with [`KinematicsError::MalformedJointInput`] if `names` and `values`
    /// differ in length.
    pub fn from_parallel(names: &'a [String], values: &'a [f64]) -> Result<Self, KinematicsError> {
        if names.len() != values.len() {
            return Err(KinematicsError::MalformedJointInput {
                names: names.len(),
                values: values.len(),
            });
        }
        Ok(JointOracle { source: Source::Parallel { names, values } })
    }

    /// Position of the named joint, if known. With parallel sequences, the first
    /// occurrence of the name wins.
    pub fn lookup(&self, name: &str) -> Option<f64> {
        match self.source {
            Source::Empty => None,
            Source::Mapping(positions) => positions.get(name).copied(),
            Source::Parallel { names, values } => names
                .iter()
                .position(|n| n == name)
                .and_then(|index| values.get(index).copied()),
        }
    }
}
