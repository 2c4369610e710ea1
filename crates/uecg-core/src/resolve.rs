use crate::error::ResolveError;
use crate::parse::{Definition, SwaggerSpec};

/// All references in a Swagger 2.0 document point into `definitions`.
pub const REF_PREFIX: &str = "#/definitions/";

/// Extract the definition name from a `#/definitions/<Name>` reference.
pub fn ref_definition_name(reference: &str) -> Result<&str, ResolveError> {
    reference
        .strip_prefix(REF_PREFIX)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ResolveError::InvalidRefFormat(reference.to_string()))
}

/// Resolve a reference to its named definition.
pub fn resolve<'a>(
    spec: &'a SwaggerSpec,
    reference: &str,
) -> Result<(&'a str, &'a Definition), ResolveError> {
    let name = ref_definition_name(reference)?;
    spec.definitions
        .get_key_value(name)
        .map(|(key, definition)| (key.as_str(), definition))
        .ok_or_else(|| ResolveError::UnknownDefinition(name.to_string()))
}
