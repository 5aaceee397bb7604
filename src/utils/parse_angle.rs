//! Angles as they are written in robot description and joint state files.

use regex::Regex;

use crate::parameter_error::ParameterError;

/// Parses an angle or length value. Plain numbers are taken as they are (radians or
/// meters). The xacro `${radians(<degrees>)}` form and the YAML `deg(<degrees>)` form
/// are converted from degrees to radians. Inside the parentheses any number Rust
/// reads as `f64` is accepted (`.5`, `+5`, `1e1`), with optional surrounding spaces.
pub(crate) fn parse_angle(attr_value: &str) -> Result<f64, ParameterError> {
    let re = Regex::new(r"^(?:\$\{radians\(([^()]*)\)\}|deg\(([^()]*)\))$")
        .map_err(|_| ParameterError::ParseError("Invalid regex pattern".to_string()))?;

    let value = attr_value.trim();
    if let Some(caps) = re.captures(value) {
        let degrees_str = caps.get(1).or_else(|| caps.get(2))
            .ok_or(ParameterError::WrongAngle(format!("Bad representation: {}", attr_value)))?
            .as_str();
        let degrees: f64 = degrees_str.trim().parse()
            .map_err(|_| ParameterError::WrongAngle(attr_value.to_string()))?;
        Ok(degrees.to_radians())
    } else {
        value.parse()
            .map_err(|_| ParameterError::WrongAngle(attr_value.to_string()))
    }
}

/// Parses three whitespace separated values like `xyz="0 0.1 ${radians(90)}"`.
pub(crate) fn parse_triple(attr_value: &str) -> Result<[f64; 3], ParameterError> {
    let values: Vec<f64> = attr_value.split_whitespace()
        .map(parse_angle)
        .collect::<Result<_, _>>()?;
    <[f64; 3]>::try_from(values.as_slice())
        .map_err(|_| ParameterError::InvalidLength { expected: 3, found: values.len() })
}
