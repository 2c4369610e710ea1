mod spec;

pub use spec::*;

use crate::error::ParseError;

/// Decode a Swagger 2.0 document from YAML text.
pub fn from_yaml(content: &str) -> Result<SwaggerSpec, ParseError> {
    let spec: SwaggerSpec = serde_yaml_ng::from_str(content)?;
    check_version(&spec)?;
    Ok(spec)
}

/// Decode a Swagger 2.0 document from JSON text.
pub fn from_json(content: &str) -> Result<SwaggerSpec, ParseError> {
    let spec: SwaggerSpec = serde_json::from_str(content)?;
    check_version(&spec)?;
    Ok(spec)
}

fn check_version(spec: &SwaggerSpec) -> Result<(), ParseError> {
    if spec.swagger != "2.0" {
        return Err(ParseError::UnsupportedVersion(spec.swagger.clone()));
    }
    Ok(())
}
