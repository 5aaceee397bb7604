//! Forward evaluation of a chain into a single transform.

use std::collections::HashMap;

use crate::chain::Chain;
use crate::joint_oracle::JointOracle;
use crate::kinematics_error::KinematicsError;
use crate::transform::{identity, Pose};

/// Compose the chain left to right: the first element is outermost. Reversed elements
/// contribute the inverse of their segment pose. Stops at the first moving joint the
/// oracle does not know.
pub fn evaluate(chain: &Chain, joints: &JointOracle) -> Result<Pose, KinematicsError> {
    chain.iter().try_fold(identity(), |pose, element| {
        let step = element.segment.pose_from(joints)?;
        Ok(if element.forward {
            pose * step
        } else {
            pose * step.inverse()
        })
    })
}

/// Transform from the start of the chain to its end. Fails on any moving joint.
pub fn transform_of_chain(chain: &Chain) -> Result<Pose, KinematicsError> {
    evaluate(chain, &JointOracle::empty())
}

/// Transform from the start of the chain to its end, moving joints looked up in the map.
pub fn transform_of_chain_with_map(
    chain: &Chain,
    joints: &HashMap<String, f64>,
) -> Result<Pose, KinematicsError> {
    evaluate(chain, &JointOracle::from_mapping(joints))
}

/// Transform from the start of the chain to its end, moving joints given as names and
/// positions in the same order.
pub fn transform_of_chain_with_names(
    chain: &Chain,
    joint_names: &[String],
    joint_positions: &[f64],
) -> Result<Pose, KinematicsError> {
    evaluate(chain, &JointOracle::from_parallel(joint_names, joint_positions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joint::Joint;
    use crate::segment::Segment;
    use nalgebra::{Isometry3, Vector3};
    use std::f64::consts::FRAC_PI_2;

    fn arm() -> Chain {
        let mut chain = Chain::new("base", "tip");
        chain.push(
            Segment::new("upper", Joint::revolute("shoulder", Vector3::z_axis()), Isometry3::translation(1.0, 0.0, 0.0)),
            true,
        );
        chain.push(
            Segment::new("lower", Joint::revolute("elbow", Vector3::z_axis()), Isometry3::translation(1.0, 0.0, 0.0)),
            true,
        );
        chain.push(
            Segment::new("tip", Joint::fixed("tip_mount"), Isometry3::translation(0.0, 0.0, 0.5)),
            true,
        );
        chain
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = Chain::new("a", "a");
        assert_eq!(transform_of_chain(&chain), Ok(identity()));
    }

    #[test]
    fn test_planar_arm() {
        let joints = HashMap::from([
            (String::from("shoulder"), FRAC_PI_2),
            (String::from("elbow"), -FRAC_PI_2),
        ]);
        let pose = transform_of_chain_with_map(&arm(), &joints).unwrap();
        // Up the y axis by one, then along x by one, lifted by the tip offset
        assert!((pose.translation.vector - Vector3::new(1.0, 1.0, 0.5)).norm() < 1e-12);
        assert!(pose.rotation.angle() < 1e-12);
    }

    #[test]
    fn test_order_matters() {
        let names = vec![String::from("shoulder"), String::from("elbow")];
        let values = vec![FRAC_PI_2, 0.0];
        let pose = transform_of_chain_with_names(&arm(), &names, &values).unwrap();
        // Both links point along y once the shoulder turns
        assert!((pose.translation.vector - Vector3::new(0.0, 2.0, 0.5)).norm() < 1e-12);
    }

    #[test]
    fn test_reversed_element_inverts() {
        let segment = Segment::new("link", Joint::prismatic("slide", Vector3::x_axis()), Isometry3::translation(0.0, 1.0, 0.0));
        let mut chain = Chain::new("link", "base");
        chain.push(segment, false);

        let joints = HashMap::from([(String::from("slide"), 0.5)]);
        let pose = transform_of_chain_with_map(&chain, &joints).unwrap();
        assert!((pose.translation.vector - Vector3::new(-0.5, -1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_stops_at_first_missing_joint() {
        let joints = HashMap::from([(String::from("elbow"), 0.0)]);
        assert_eq!(
            transform_of_chain_with_map(&arm(), &joints),
            Err(KinematicsError::MissingJointValue { joint_name: "shoulder".into() })
        );
        assert_eq!(
            transform_of_chain(&arm()),
            Err(KinematicsError::MissingJointValue { joint_name: "shoulder".into() })
        );
    }

    #[test]
    fn test_malformed_names() {
        let names = vec![String::from("shoulder")];
        assert_eq!(
            transform_of_chain_with_names(&arm(), &names, &[]),
            Err(KinematicsError::MalformedJointInput { names: 1, values: 0 })
        );
    }
}
