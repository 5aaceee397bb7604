//! Laws every tree must obey, checked on seeded random trees.

use std::collections::HashMap;

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::joint::Joint;
use crate::joint_oracle::JointOracle;
use crate::joint_state::JointState;
use crate::kinematics_error::KinematicsError;
use crate::segment::Segment;
use crate::tests::test_utils::{are_isometries_approx_equal, frame_names, random_positions, random_tree, translation};
use crate::transform::{compose, identity, inverse, orthonormality_error};
use crate::tree::Tree;

const SMALL: f64 = 1e-9;
const SEGMENTS: usize = 12;
const SEEDS: [u64; 4] = [1, 7, 42, 2024];

#[test]
fn test_same_frame_is_identity() {
    for seed in SEEDS {
        let tree = random_tree(seed, SEGMENTS, true);
        let joints = random_positions(seed, &tree);
        for name in frame_names(SEGMENTS) {
            let pose = tree.transform_with_map(&name, &name, &joints).unwrap();
            assert_eq!(pose, identity(), "Frame {} to itself", name);
            // No joint on an empty chain, so no values are needed either
            assert_eq!(tree.transform(&name, &name).unwrap(), identity());
        }
    }
}

#[test]
fn test_inverse_symmetry() {
    for seed in SEEDS {
        for moving in [false, true] {
            let tree = random_tree(seed, SEGMENTS, moving);
            let joints = random_positions(seed + 1, &tree);
            let names = frame_names(SEGMENTS);
            for a in &names {
                for b in &names {
                    let there = tree.transform_with_map(a, b, &joints).unwrap();
                    let back = tree.transform_with_map(b, a, &joints).unwrap();
                    assert!(are_isometries_approx_equal(&there, &inverse(&back), SMALL),
                            "{} -> {} is not the inverse of {} -> {} (seed {})", a, b, b, a, seed);
                }
            }
        }
    }
}

#[test]
fn test_composition_law() {
    let mut rng = StdRng::seed_from_u64(99);
    for seed in SEEDS {
        let tree = random_tree(seed, SEGMENTS, true);
        let joints = random_positions(seed + 2, &tree);
        let names = frame_names(SEGMENTS);
        for _ in 0..200 {
            let a = &names[rng.gen_range(0..names.len())];
            let b = &names[rng.gen_range(0..names.len())];
            let c = &names[rng.gen_range(0..names.len())];

            let direct = tree.transform_with_map(a, c, &joints).unwrap();
            let via = compose(
                &tree.transform_with_map(a, b, &joints).unwrap(),
                &tree.transform_with_map(b, c, &joints).unwrap(),
            );
            assert!(are_isometries_approx_equal(&direct, &via, SMALL),
                    "{} -> {} differs from {} -> {} -> {} (seed {})", a, c, a, b, c, seed);
        }
    }
}

#[test]
fn test_oracles_agree() {
    for seed in SEEDS {
        let tree = random_tree(seed, SEGMENTS, true);
        let joints = random_positions(seed + 3, &tree);

        // Parallel sequences in an order unrelated to the map iteration order
        let mut names: Vec<String> = joints.keys().cloned().collect();
        names.sort();
        names.reverse();
        let values: Vec<f64> = names.iter().map(|n| joints[n]).collect();
        let state = JointState::new(names.clone(), values.clone());

        for a in frame_names(SEGMENTS) {
            for b in frame_names(SEGMENTS) {
                let by_map = tree.transform_with_map(&a, &b, &joints).unwrap();
                let by_names = tree.transform_with_names(&a, &b, &names, &values).unwrap();
                let by_state = tree.transform_with_state(&a, &b, &state).unwrap();
                assert_eq!(by_map, by_names);
                assert_eq!(by_map, by_state);
            }
        }
    }
}

#[test]
fn test_fixed_only_variants_agree() {
    let empty_map = HashMap::new();
    for seed in SEEDS {
        let tree = random_tree(seed, SEGMENTS, false);
        for a in frame_names(SEGMENTS) {
            for b in frame_names(SEGMENTS) {
                let plain = tree.transform(&a, &b).unwrap();
                assert_eq!(plain, tree.transform_with_map(&a, &b, &empty_map).unwrap());
                assert_eq!(plain, tree.transform_with_names(&a, &b, &[], &[]).unwrap());
            }
        }
    }
}

#[test]
fn test_moving_joint_needs_value() {
    let mut tree = Tree::new("base");
    tree.add_segment(Segment::new("post", Joint::fixed("post_mount"), translation(0.0, 0.0, 1.0)), "base").unwrap();
    tree.add_segment(Segment::new("arm", Joint::revolute("swing", Vector3::z_axis()), translation(1.0, 0.0, 0.0)), "post").unwrap();

    let missing = Err(KinematicsError::MissingJointValue { joint_name: "swing".into() });
    assert_eq!(tree.transform("base", "arm"), missing);
    assert_eq!(tree.transform("arm", "base"), missing);
    assert_eq!(tree.transform_with_map("base", "arm", &HashMap::new()), missing);
    assert_eq!(tree.transform_with_names("base", "arm", &[], &[]), missing);

    // Fixed part of the same tree still works without values
    assert!(tree.transform("base", "post").is_ok());
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let tree = random_tree(5, SEGMENTS, true);
    let joints = random_positions(6, &tree);
    let first = tree.transform_with_map("s3", "s11", &joints).unwrap();
    for _ in 0..10 {
        assert_eq!(tree.transform_with_map("s3", "s11", &joints).unwrap(), first);
    }
}

#[test]
fn test_long_chain_stays_orthonormal() {
    let mut rng = StdRng::seed_from_u64(314);
    let mut tree = Tree::new("base");
    let mut parent = String::from("base");
    for i in 0..20 {
        let axis = nalgebra::Unit::new_normalize(Vector3::new(
            rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), 1.0));
        let name = format!("link_{}", i);
        tree.add_segment(
            Segment::new(name.as_str(), Joint::revolute(format!("joint_{}", i), axis), translation(0.1, 0.0, 0.2)),
            &parent,
        ).unwrap();
        parent = name;
    }
    let joints: HashMap<String, f64> = tree.joint_names().iter()
        .map(|n| (n.clone(), rng.gen_range(-3.0..3.0)))
        .collect();

    let chain = tree.get_chain("base", "link_19").unwrap();
    assert_eq!(chain.len(), 20);
    let pose = crate::forward::evaluate(&chain, &JointOracle::from_mapping(&joints)).unwrap();
    assert!(orthonormality_error(&pose) < 1e-9);

    let back = tree.transform_with_map("link_19", "base", &joints).unwrap();
    assert!(orthonormality_error(&back) < 1e-9);
}

#[test]
fn test_tree_is_shared_between_threads() {
    let tree = random_tree(11, SEGMENTS, true);
    let joints = random_positions(12, &tree);
    let expected = tree.transform_with_map("s0", "s9", &joints).unwrap();

    let (tree, joints) = (&tree, &joints);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || tree.transform_with_map("s0", "s9", joints).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
