//! Rust implementation of forward kinematics between named frames of a tree-structured
//! robot (any robot that URDF can describe: arms, mobile manipulators, humanoids).
//!
//! The robot is a [`tree::Tree`] of segments, each segment carrying one joint (fixed,
//! revolute or prismatic). Asking the tree for the transform between two frames first
//! extracts a [`chain::Chain`]: the walk from the source frame up to the closest common
//! ancestor and down to the target frame, with every step marked as forward or
//! reversed. The chain is then composed left to right by the [`forward`] evaluator,
//! taking the positions of moving joints from a [`joint_oracle::JointOracle`].
//!
//! # Features
//!
//! - Transforms between any two frames, including frames on different branches
//!   (for instance, from the camera to the gripper of the other arm).
//! - Joint positions from a map, from parallel name and position lists, or from a
//!   [`joint_state::JointState`]. Chains with fixed joints only need no positions at all.
//! - Errors as values: unknown frames, missing joint positions and malformed joint
//!   input are reported through [`kinematics_error::KinematicsError`].
//! - The tree is immutable once built and can be queried from many threads.
//! - With the `allow_filesystem` feature (default), trees are read from URDF and joint
//!   states from YAML; a command line tool prints transforms.
//!
//! # Conventions
//!
//! Transforms are `nalgebra::Isometry3<f64>`. `tree.transform(source, target)` is the
//! pose of `target` expressed in `source`: it maps target frame coordinates to source
//! frame coordinates. Angles are in radians, lengths in meters.
//!
//! ## Example
//!
//! ```
//! use nalgebra::{Isometry3, Vector3};
//! use rs_tree_kinematics::joint::Joint;
//! use rs_tree_kinematics::segment::Segment;
//! use rs_tree_kinematics::tree::Tree;
//!
//! let mut robot = Tree::new("root");
//! robot.add_segment(Segment::new("L", Joint::fixed("left_mount"),
//!                                Isometry3::translation(1.0, 0.0, 0.0)), "root").unwrap();
//! robot.add_segment(Segment::new("R", Joint::fixed("right_mount"),
//!                                Isometry3::translation(-1.0, 0.0, 0.0)), "root").unwrap();
//!
//! let pose = robot.transform("L", "R").unwrap();
//! assert_eq!(pose.translation.vector, Vector3::new(-2.0, 0.0, 0.0));
//! ```

pub mod transform;
pub mod kinematics_error;

pub mod joint;
pub mod segment;
pub mod chain;
pub mod tree;

pub mod joint_oracle;
pub mod joint_state;
pub mod forward;

#[path = "utils/utils.rs"]
pub mod utils;

#[cfg(feature = "allow_filesystem")]
pub mod urdf;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[cfg(feature = "allow_filesystem")]
#[path = "utils/parse_angle.rs"]
mod parse_angle;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
