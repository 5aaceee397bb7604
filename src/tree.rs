//! Kinematic tree of a robot and transforms between its frames.
//!
//! The tree is built once (normally by the URDF reader) and read many times. Segments
//! live in one vector; parents and children refer to each other by index, and a name
//! index resolves frame names.
//!
//! ```
//! use std::collections::HashMap;
//! use nalgebra::{Isometry3, Vector3};
//! use rs_tree_kinematics::joint::Joint;
//! use rs_tree_kinematics::segment::Segment;
//! use rs_tree_kinematics::tree::Tree;
//!
//! let mut tree = Tree::new("base");
//! tree.add_segment(
//!     Segment::new("arm", Joint::revolute("shoulder", Vector3::z_axis()),
//!                  Isometry3::translation(1.0, 0.0, 0.0)),
//!     "base",
//! ).unwrap();
//!
//! let joints = HashMap::from([(String::from("shoulder"), std::f64::consts::FRAC_PI_2)]);
//! let pose = tree.transform_with_map("base", "arm", &joints).unwrap();
//! assert!((pose.translation.vector - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
//! ```

use std::collections::HashMap;

use crate::chain::Chain;
use crate::forward::evaluate;
use crate::joint_oracle::JointOracle;
use crate::joint_state::JointState;
use crate::kinematics_error::KinematicsError;
use crate::segment::Segment;
use crate::transform::Pose;

/// Node of the tree. The root has no segment (it is a frame without a joint).
#[derive(Debug, Clone)]
struct TreeElement {
    name: String,
    segment: Option<Segment>,
    parent: Option<usize>,
    children: Vec<usize>,
}

const ROOT: usize = 0;

/// Rooted tree of segments indexed by name. Immutable once built, so it can be shared
/// between threads and queried concurrently.
#[derive(Debug, Clone)]
pub struct Tree {
    elements: Vec<TreeElement>,
    by_name: HashMap<String, usize>,
    joint_names: Vec<String>,
}

impl Tree {
    /// Tree consisting of the root frame only.
    pub fn new(root_name: impl Into<String>) -> Self {
        let root_name = root_name.into();
        Tree {
            by_name: HashMap::from([(root_name.clone(), ROOT)]),
            elements: vec![TreeElement {
                name: root_name,
                segment: None,
                parent: None,
                children: Vec::new(),
            }],
            joint_names: Vec::new(),
        }
    }

    /// Attach `segment` below the frame named `parent`. Segment names must be unique,
    /// and so must be the names of moving joints.
    pub fn add_segment(&mut self, segment: Segment, parent: &str) -> Result<(), KinematicsError> {
        let parent_index = self.index_of(parent)?;
        if self.by_name.contains_key(segment.name()) {
            return Err(KinematicsError::DuplicateSegment {
                name: segment.name().to_string(),
            });
        }
        let joint = segment.joint();
        if !joint.is_fixed() {
            if self.joint_names.iter().any(|n| n == joint.name()) {
                return Err(KinematicsError::DuplicateJoint {
                    name: joint.name().to_string(),
                });
            }
            self.joint_names.push(joint.name().to_string());
        }

        let index = self.elements.len();
        self.by_name.insert(segment.name().to_string(), index);
        self.elements[parent_index].children.push(index);
        self.elements.push(TreeElement {
            name: segment.name().to_string(),
            segment: Some(segment),
            parent: Some(parent_index),
            children: Vec::new(),
        });
        Ok(())
    }

    /// Name of the root frame.
    pub fn root(&self) -> &str {
        &self.elements[ROOT].name
    }

    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Segment of the given name, `None` for the root or an unknown name.
    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.by_name
            .get(name)
            .and_then(|&index| self.elements[index].segment.as_ref())
    }

    /// Name of the parent frame, `None` for the root.
    pub fn parent(&self, name: &str) -> Result<Option<&str>, KinematicsError> {
        let index = self.index_of(name)?;
        Ok(self.elements[index]
            .parent
            .map(|parent| self.elements[parent].name.as_str()))
    }

    /// Names of the child frames in the order they were added.
    pub fn children(&self, name: &str) -> Result<Vec<&str>, KinematicsError> {
        let index = self.index_of(name)?;
        Ok(self.elements[index]
            .children
            .iter()
            .map(|&child| self.elements[child].name.as_str())
            .collect())
    }

    /// Number of segments, not counting the root frame.
    pub fn segment_count(&self) -> usize {
        self.elements.len() - 1
    }

    /// Number of moving (non fixed) joints.
    pub fn joint_count(&self) -> usize {
        self.joint_names.len()
    }

    /// Names of the moving joints in the order their segments were added.
    pub fn joint_names(&self) -> &[String] {
        &self.joint_names
    }

    /// Walk from `source` to `target`: up from `source` to the closest common ancestor
    /// (reversed steps), then down to `target` (forward steps). The common ancestor
    /// itself is not part of the chain.
    pub fn get_chain(&self, source: &str, target: &str) -> Result<Chain, KinematicsError> {
        let up_from_source = self.path_to_root(self.index_of(source)?);
        let up_from_target = self.path_to_root(self.index_of(target)?);

        // Both paths end at the root; strip the shared tail.
        let shared = up_from_source
            .iter()
            .rev()
            .zip(up_from_target.iter().rev())
            .take_while(|(a, b)| a == b)
            .count();
        let reversed = &up_from_source[..up_from_source.len() - shared];
        let forward = &up_from_target[..up_from_target.len() - shared];

        let mut chain = Chain::new(source, target);
        for &index in reversed {
            if let Some(segment) = &self.elements[index].segment {
                chain.push(segment.clone(), false);
            }
        }
        for &index in forward.iter().rev() {
            if let Some(segment) = &self.elements[index].segment {
                chain.push(segment.clone(), true);
            }
        }
        Ok(chain)
    }

    /// Pose of `target` in the `source` frame, all joints on the way being fixed.
    pub fn transform(&self, source: &str, target: &str) -> Result<Pose, KinematicsError> {
        self.transform_with_oracle(source, target, &JointOracle::empty())
    }

    /// Pose of `target` in the `source` frame, moving joints looked up in the map.
    pub fn transform_with_map(
        &self,
        source: &str,
        target: &str,
        joints: &HashMap<String, f64>,
    ) -> Result<Pose, KinematicsError> {
        self.transform_with_oracle(source, target, &JointOracle::from_mapping(joints))
    }

    /// Pose of `target` in the `source` frame, moving joints given as parallel
    /// sequences of names and positions.
    pub fn transform_with_names(
        &self,
        source: &str,
        target: &str,
        joint_names: &[String],
        joint_positions: &[f64],
    ) -> Result<Pose, KinematicsError> {
        let oracle = JointOracle::from_parallel(joint_names, joint_positions)?;
        self.transform_with_oracle(source, target, &oracle)
    }

    /// Pose of `target` in the `source` frame, moving joints taken from a joint state.
    pub fn transform_with_state(
        &self,
        source: &str,
        target: &str,
        state: &JointState,
    ) -> Result<Pose, KinematicsError> {
        self.transform_with_oracle(source, target, &state.oracle()?)
    }

    pub fn transform_with_oracle(
        &self,
        source: &str,
        target: &str,
        joints: &JointOracle,
    ) -> Result<Pose, KinematicsError> {
        evaluate(&self.get_chain(source, target)?, joints)
    }

    fn index_of(&self, name: &str) -> Result<usize, KinematicsError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| KinematicsError::UnknownSegment {
                name: name.to_string(),
            })
    }

    /// Indices from `index` up to and including the root.
    fn path_to_root(&self, index: usize) -> Vec<usize> {
        let mut path = vec![index];
        let mut current = index;
        while let Some(parent) = self.elements[current].parent {
            path.push(parent);
            current = parent;
        }
        path
    }
}
