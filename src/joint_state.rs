//! Joint state in the shape of a robotics joint state message: joint names and joint
//! positions as two sequences of equal length.
//!
//! With the `allow_filesystem` feature the state can be read from YAML:
//! ```yaml
//! name: [shoulder, elbow, slide]
//! position: [0.5, deg(-90), 0.02]
//! ```

use crate::joint_oracle::JointOracle;
use crate::kinematics_error::KinematicsError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JointState {
    pub name: Vec<String>,
    pub position: Vec<f64>,
}

impl JointState {
    pub fn new(name: Vec<String>, position: Vec<f64>) -> Self {
        JointState { name, position }
    }

    /// Set the position of a joint, replacing the first entry of that name or
    /// appending a new one. A state whose names and positions already differ in
    /// length is left untouched and reported as
    /// [`KinematicsError::MalformedJointInput`].
    pub fn set(&mut self, joint: &str, position: f64) -> Result<(), KinematicsError> {
        if self.name.len() != self.position.len() {
            return Err(KinematicsError::MalformedJointInput {
                names: self.name.len(),
                values: self.position.len(),
            });
        }
        match self.name.iter().position(|n| n == joint) {
            Some(index) => self.position[index] = position,
            None => {
                self.name.push(joint.to_string());
                self.position.push(position);
            }
        }
        Ok(())
    }

    /// Oracle over this state. Fails if names and positions differ in length.
    pub fn oracle(&self) -> Result<JointOracle<'_>, KinematicsError> {
        JointOracle::from_parallel(&self.name, &self.position)
    }
}

#[cfg(feature = "allow_filesystem")]
mod yaml {
    use std::path::Path;

    use yaml_rust2::{Yaml, YamlLoader};

    use super::JointState;
    use crate::parameter_error::ParameterError;
    use crate::parse_angle::parse_angle;

    impl JointState {
        /// Read the joint state from a YAML document with `name` and `position` lists.
        pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
            let docs = YamlLoader::load_from_str(contents)
                .map_err(|e| ParameterError::ParseError(e.to_string()))?;
            let doc = docs.first()
                .ok_or_else(|| ParameterError::ParseError("Empty YAML document".to_string()))?;

            let name = list(doc, "name")?
                .iter()
                .map(|item| match item {
                    Yaml::String(s) => Ok(s.clone()),
                    other => Err(ParameterError::ParseError(
                        format!("Joint name must be a string, found {:?}", other))),
                })
                .collect::<Result<Vec<_>, _>>()?;

            let position = list(doc, "position")?
                .iter()
                .map(position_value)
                .collect::<Result<Vec<_>, _>>()?;

            if name.len() != position.len() {
                return Err(ParameterError::InvalidLength {
                    expected: name.len(),
                    found: position.len(),
                });
            }
            Ok(JointState { name, position })
        }

        pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
            let contents = std::fs::read_to_string(path)?;
            Self::from_yaml_str(&contents)
        }
    }

    fn list<'y>(doc: &'y Yaml, key: &str) -> Result<&'y Vec<Yaml>, ParameterError> {
        match &doc[key] {
            Yaml::Array(items) => Ok(items),
            Yaml::BadValue => Err(ParameterError::MissingField(key.to_string())),
            other => Err(ParameterError::ParseError(
                format!("'{}' must be a list, found {:?}", key, other))),
        }
    }

    fn position_value(item: &Yaml) -> Result<f64, ParameterError> {
        match item {
            Yaml::Real(text) | Yaml::String(text) => parse_angle(text),
            Yaml::Integer(value) => Ok(*value as f64),
            other => Err(ParameterError::WrongAngle(format!("{:?}", other))),
        }
    }
}
