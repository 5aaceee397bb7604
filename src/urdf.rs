//! Builds the kinematic tree from URDF (optional)

extern crate sxd_document;

use std::collections::{HashMap, HashSet, VecDeque};
use std::error::Error;
use std::fs::read_to_string;
use std::path::Path;

use nalgebra::{Unit, Vector3};
use sxd_document::{dom, parser, QName};
use tracing::{debug, warn};

use crate::joint::{Joint, JointKind};
use crate::parameter_error::ParameterError;
use crate::parse_angle::parse_triple;
use crate::segment::Segment;
use crate::transform::{from_xyz_rpy, identity};
use crate::tree::Tree;

/// Reads the URDF file and builds the kinematic tree from it.
///
/// # Example
/// ```
/// let tree = rs_tree_kinematics::urdf::tree_from_file("src/tests/data/two_arms.urdf")
///     .expect("Failed to read the robot description");
/// assert_eq!(tree.root(), "base_link");
/// ```
pub fn tree_from_file<P: AsRef<Path>>(path: P) -> Result<Tree, ParameterError> {
    let xml_content = read_to_string(path)?;
    tree_from_description(&xml_content)
}

/// Parses URDF XML content into the kinematic tree. Each joint becomes a segment named
/// after its child link, with the joint `<origin>` as the joint frame offset and the
/// `<axis>` expressed in the joint frame. The root is the only link that is not a
/// child of any joint.
///
/// # Example
/// ```
/// use rs_tree_kinematics::urdf::tree_from_description;
///
/// let xml = r#"
///     <robot name="pan">
///       <link name="base"/>
///       <link name="head"/>
///       <joint name="pan" type="continuous">
///         <parent link="base"/>
///         <child link="head"/>
///         <origin xyz="0 0 0.5"/>
///         <axis xyz="0 0 1"/>
///       </joint>
///     </robot>"#;
///
/// let tree = tree_from_description(xml).unwrap();
/// assert_eq!(tree.joint_names(), ["pan"]);
/// ```
pub fn tree_from_description(xml_content: &str) -> Result<Tree, ParameterError> {
    let description = process_description(xml_content)
        .map_err(|e| ParameterError::XmlProcessingError(format!("Failed to process XML: {}", e)))?;
    build_tree(description)
}

#[derive(Debug, PartialEq)]
struct JointData {
    name: String,
    joint_type: String,
    parent: String,
    child: String,
    xyz: [f64; 3],
    rpy: [f64; 3],
    axis: [f64; 3],
}

#[derive(Debug, Default)]
struct Description {
    links: Vec<String>,
    joints: Vec<JointData>,
}

fn process_description(xml: &str) -> Result<Description, Box<dyn Error>> {
    let package = parser::parse(xml)?;
    let document = package.as_document();

    // Access the root element
    let root_element = document.root().children().into_iter()
        .find_map(|e| e.element())
        .ok_or("No root element found")?;

    let mut description = Description::default();
    collect_elements(root_element, &mut description)?;
    Ok(description)
}

// Only direct children of <robot>: <transmission> also has <joint> elements that
// merely refer to joints by name.
fn collect_elements(robot: dom::Element, description: &mut Description) -> Result<(), Box<dyn Error>> {
    let link_tag = QName::new("link");
    let joint_tag = QName::new("joint");

    for child in robot.children().into_iter().filter_map(|e| e.element()) {
        if child.name() == link_tag {
            description.links.push(required_attribute(child, "name")?);
        } else if child.name() == joint_tag {
            description.joints.push(read_joint(child)?);
        }
    }
    Ok(())
}

fn read_joint(element: dom::Element) -> Result<JointData, Box<dyn Error>> {
    let name = required_attribute(element, "name")?;
    let joint_type = required_attribute(element, "type")?;

    let parent = sub_element(element, "parent")
        .ok_or_else(|| format!("Joint {} has no parent", name))?;
    let child = sub_element(element, "child")
        .ok_or_else(|| format!("Joint {} has no child", name))?;

    let origin = sub_element(element, "origin");
    let xyz = triple_or(origin, "xyz", [0.0; 3])?;
    let rpy = triple_or(origin, "rpy", [0.0; 3])?;
    let axis = triple_or(sub_element(element, "axis"), "xyz", [1.0, 0.0, 0.0])?;

    Ok(JointData {
        parent: required_attribute(parent, "link")?,
        child: required_attribute(child, "link")?,
        name,
        joint_type,
        xyz,
        rpy,
        axis,
    })
}

fn sub_element<'d>(element: dom::Element<'d>, tag: &str) -> Option<dom::Element<'d>> {
    let tag = QName::new(tag);
    element.children().into_iter()
        .find_map(|e| e.element().filter(|el| el.name() == tag))
}

fn required_attribute(element: dom::Element, attribute: &str) -> Result<String, ParameterError> {
    element.attribute(attribute)
        .map(|attr| attr.value().to_string())
        .ok_or_else(|| ParameterError::MissingField(
            format!("'{}' attribute of <{}>", attribute, element.name().local_part())))
}

fn triple_or(element: Option<dom::Element>, attribute: &str, default: [f64; 3]) -> Result<[f64; 3], ParameterError> {
    match element.and_then(|e| e.attribute(attribute)) {
        Some(attr) => parse_triple(attr.value()),
        None => Ok(default),
    }
}

fn joint_kind(joint: &JointData) -> Result<JointKind, ParameterError> {
    let axis = || {
        Unit::try_new(Vector3::from(joint.axis), 1e-12).ok_or_else(|| {
            ParameterError::ParseError(format!("Joint {} has zero axis", joint.name))
        })
    };
    match joint.joint_type.as_str() {
        "fixed" => Ok(JointKind::Fixed),
        "revolute" | "continuous" => Ok(JointKind::Revolute { axis: axis()? }),
        "prismatic" => Ok(JointKind::Prismatic { axis: axis()? }),
        "floating" | "planar" => {
            warn!("Joint {} of type {} is not supported, treated as fixed", joint.name, joint.joint_type);
            Ok(JointKind::Fixed)
        }
        other => Err(ParameterError::ParseError(
            format!("Joint {} has unknown type {}", joint.name, other))),
    }
}

fn build_tree(description: Description) -> Result<Tree, ParameterError> {
    let mut by_parent: HashMap<&str, Vec<&JointData>> = HashMap::new();
    let mut children: HashSet<&str> = HashSet::new();
    for joint in &description.joints {
        if !children.insert(joint.child.as_str()) {
            return Err(ParameterError::ParseError(
                format!("Link {} has more than one parent joint", joint.child)));
        }
        by_parent.entry(joint.parent.as_str()).or_default().push(joint);
    }

    let roots: Vec<&str> = description.links.iter()
        .map(String::as_str)
        .filter(|link| !children.contains(link))
        .collect();
    let root = match roots.as_slice() {
        [root] => *root,
        [] => return Err(ParameterError::ParseError("No root link found".to_string())),
        _ => return Err(ParameterError::ParseError(
            format!("More than one root link: {}", roots.join(", ")))),
    };

    // Breadth first from the root, so every parent is in the tree before its children
    let mut tree = Tree::new(root);
    let mut queue = VecDeque::from([root]);
    let mut attached = 0;
    while let Some(link) = queue.pop_front() {
        for joint in by_parent.get(link).into_iter().flatten() {
            let kind = joint_kind(joint)?;
            let origin = from_xyz_rpy(&Vector3::from(joint.xyz), &Vector3::from(joint.rpy));
            debug!("Joint {} ({}): {} -> {}", joint.name, kind.type_name(), joint.parent, joint.child);

            let segment = Segment::new(
                joint.child.as_str(),
                Joint::new(joint.name.as_str(), kind).with_origin(origin),
                identity(),
            );
            tree.add_segment(segment, link)?;
            queue.push_back(joint.child.as_str());
            attached += 1;
        }
    }

    if attached != description.joints.len() {
        return Err(ParameterError::ParseError(format!(
            "{} joints are not connected to the root link {}",
            description.joints.len() - attached, root)));
    }
    Ok(tree)
}
