//! Helper functions

use crate::chain::Chain;
use crate::transform::Pose;

/// Roll, pitch and yaw of the pose rotation in degrees.
pub fn rpy_degrees(pose: &Pose) -> [f64; 3] {
    let (roll, pitch, yaw) = pose.rotation.euler_angles();
    [roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees()]
}

/// Pose as a single line: translation in meters, quaternion as [x, y, z, w] and
/// roll, pitch, yaw in degrees.
pub fn pose_to_string(pose: &Pose) -> String {
    let t = pose.translation.vector;
    let q = pose.rotation.quaternion();
    let [roll, pitch, yaw] = rpy_degrees(pose);
    format!(
        "xyz: [{:.6}, {:.6}, {:.6}] quat: [{:.6}, {:.6}, {:.6}, {:.6}] rpy: [{:.3}, {:.3}, {:.3}]",
        t.x, t.y, t.z, q.i, q.j, q.k, q.w, roll, pitch, yaw
    )
}

/// Print the pose on standard output, converting radians to degrees.
pub fn dump_pose(pose: &Pose) {
    println!("{}", pose_to_string(pose));
}

/// Print the steps of the chain, one per line.
pub fn dump_chain(chain: &Chain) {
    println!("{} -> {} ({} steps)", chain.start(), chain.end(), chain.len());
    for element in chain {
        let joint = element.segment.joint();
        println!(
            "  {} {:<20} joint {} ({})",
            if element.forward { "down" } else { "up  " },
            element.segment.name(),
            joint.name(),
            joint.kind().type_name()
        );
    }
}
