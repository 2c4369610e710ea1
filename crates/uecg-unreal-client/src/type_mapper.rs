use uecg_core::error::GenerateError;
use uecg_core::parse::Property;

/// The C++ primitive types the generator knows how to extract from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CppType {
    Int32,
    Int,
    FString,
}

impl CppType {
    /// The C++ spelling of the type.
    pub fn cpp_name(self) -> &'static str {
        match self {
            CppType::Int32 => "int32",
            CppType::Int => "int",
            CppType::FString => "FString",
        }
    }

    /// The `FJsonObject::Get<X>Field` accessor that reads this type.
    pub fn json_accessor(self) -> &'static str {
        match self {
            CppType::Int32 | CppType::Int => "Integer",
            CppType::FString => "String",
        }
    }
}

/// Map a Swagger primitive (type, format) pair to a C++ type.
///
/// Anything outside `integer`/`string` is an `UnsupportedType` error rather
/// than a silently empty declaration; `context` names the offending spot.
pub fn map_type(
    type_name: Option<&str>,
    format: Option<&str>,
    context: &str,
) -> Result<CppType, GenerateError> {
    match type_name {
        Some("integer") => Ok(match format {
            Some("int32") => CppType::Int32,
            _ => CppType::Int,
        }),
        Some("string") => Ok(CppType::FString),
        _ => Err(GenerateError::UnsupportedType {
            type_name: type_name.map(String::from),
            format: format.map(String::from),
            context: context.to_string(),
        }),
    }
}

/// Map an object definition property to a C++ type.
pub fn map_property(property: &Property, context: &str) -> Result<CppType, GenerateError> {
    map_type(
        property.type_name.as_deref(),
        property.format.as_deref(),
        context,
    )
}
