use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rs_tree_kinematics::joint_state::JointState;
use rs_tree_kinematics::transform::orthonormality_error;
use rs_tree_kinematics::urdf::tree_from_file;
use rs_tree_kinematics::utils::{dump_chain, dump_pose};

/// Prints the pose of the target frame in the source frame of a URDF robot.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// URDF file describing the robot
    urdf: PathBuf,

    /// Frame (link) the pose is expressed in
    source: String,

    /// Frame (link) whose pose is wanted
    target: String,

    /// YAML file with `name` and `position` lists
    #[arg(short, long)]
    joints: Option<PathBuf>,

    /// Joint position as NAME=VALUE, overrides the YAML file. May be repeated.
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, f64)>,

    /// Also print the chain of segments between the frames
    #[arg(long)]
    chain: bool,
}

fn parse_assignment(text: &str) -> Result<(String, f64), String> {
    let (name, value) = text.split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", text))?;
    let value: f64 = value.trim().parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    Ok((name.trim().to_string(), value))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let tree = tree_from_file(&args.urdf)
        .with_context(|| format!("Failed to read robot description {}", args.urdf.display()))?;
    info!("Loaded {} segments, {} moving joints, root {}",
          tree.segment_count(), tree.joint_count(), tree.root());

    let mut state = match &args.joints {
        Some(path) => JointState::from_yaml_file(path)
            .with_context(|| format!("Failed to read joint state {}", path.display()))?,
        None => JointState::default(),
    };
    for (name, value) in &args.set {
        state.set(name, *value)?;
    }

    if args.chain {
        let chain = tree.get_chain(&args.source, &args.target)?;
        dump_chain(&chain);
    }

    let pose = tree.transform_with_state(&args.source, &args.target, &state)
        .map_err(|e| anyhow!("{} -> {}: {}", args.source, args.target, e))?;
    info!("Orthonormality error {:e}", orthonormality_error(&pose));
    dump_pose(&pose);
    Ok(())
}
