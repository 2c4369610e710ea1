use uecg_core::error::GenerateError;
use uecg_core::naming::title_case;
use uecg_core::parse::SwaggerSpec;
use uecg_core::resolve;

use crate::naming::NamingConvention;
use crate::type_mapper::map_property;

#[derive(Debug, Clone)]
pub struct StructField {
    pub name: String,
    pub cpp_type: &'static str,
}

/// One `USTRUCT` declaration derived from an object definition.
#[derive(Debug, Clone)]
pub struct StructDecl {
    pub name: String,
    pub fields: Vec<StructField>,
}

/// Build record declarations for every object definition, ordered by
/// definition name with fields ordered by property name.
///
/// Array definitions produce no standalone declaration; they are validated
/// here (item must reference an existing object definition) and rendered at
/// use sites as `TArray<Item>`.
pub fn build_structs(
    spec: &SwaggerSpec,
    naming: &dyn NamingConvention,
) -> Result<Vec<StructDecl>, GenerateError> {
    let mut names: Vec<&String> = spec.definitions.keys().collect();
    names.sort();

    let mut structs = Vec::new();
    for name in names {
        let definition = &spec.definitions[name.as_str()];
        if definition.is_array() {
            check_array_definition(spec, name)?;
            continue;
        }
        if !definition.is_object() {
            return Err(GenerateError::UnsupportedType {
                type_name: definition.type_name.clone(),
                format: None,
                context: format!("definition {name}"),
            });
        }

        let mut properties: Vec<&String> = definition.properties.keys().collect();
        properties.sort();
        let mut fields = Vec::with_capacity(properties.len());
        for property in properties {
            let cpp_type = map_property(
                &definition.properties[property.as_str()],
                &format!("definition {name} property {property}"),
            )?;
            fields.push(StructField {
                name: title_case(property),
                cpp_type: cpp_type.cpp_name(),
            });
        }
        structs.push(StructDecl {
            name: naming.record_name(name),
            fields,
        });
    }
    Ok(structs)
}

/// An array definition's item must reference an existing object definition;
/// arrays of arrays are not supported.
fn check_array_definition(spec: &SwaggerSpec, name: &str) -> Result<(), GenerateError> {
    let definition = &spec.definitions[name];
    let Some(reference) = definition.items_ref() else {
        return Err(GenerateError::UnsupportedArrayItem {
            definition: name.to_string(),
            item: "(missing items $ref)".to_string(),
        });
    };
    let (item_name, item) =
        resolve::resolve(spec, reference).map_err(|source| GenerateError::UnresolvedRef {
            reference: reference.to_string(),
            context: format!("items of array definition {name}"),
            source,
        })?;
    if !item.is_object() {
        return Err(GenerateError::UnsupportedArrayItem {
            definition: name.to_string(),
            item: item_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::UnrealNaming;
    use uecg_core::parse::from_yaml;

    fn spec(yaml: &str) -> SwaggerSpec {
        from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_object_definition_fields() {
        let spec = spec(
            r#"
swagger: "2.0"
definitions:
  Widget:
    type: object
    properties:
      label:
        type: string
      id:
        type: integer
        format: int32
"#,
        );
        let structs = build_structs(&spec, &UnrealNaming).unwrap();
        assert_eq!(structs.len(), 1);
        assert_eq!(structs[0].name, "FWidget");
        // Exactly one field per property, sorted by name.
        assert_eq!(structs[0].fields.len(), 2);
        assert_eq!(structs[0].fields[0].name, "Id");
        assert_eq!(structs[0].fields[0].cpp_type, "int32");
        assert_eq!(structs[0].fields[1].name, "Label");
        assert_eq!(structs[0].fields[1].cpp_type, "FString");
    }

    #[test]
    fn test_array_definition_emits_nothing() {
        let spec = spec(
            r#"
swagger: "2.0"
definitions:
  Pet:
    type: object
    properties:
      name:
        type: string
  Pets:
    type: array
    items:
      $ref: '#/definitions/Pet'
"#,
        );
        let structs = build_structs(&spec, &UnrealNaming).unwrap();
        let names: Vec<&str> = structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["FPet"]);
    }

    #[test]
    fn test_array_of_array_rejected() {
        let spec = spec(
            r#"
swagger: "2.0"
definitions:
  Matrix:
    type: array
    items:
      $ref: '#/definitions/Row'
  Row:
    type: array
    items:
      $ref: '#/definitions/Matrix'
"#,
        );
        let err = build_structs(&spec, &UnrealNaming).unwrap_err();
        assert!(matches!(err, GenerateError::UnsupportedArrayItem { .. }));
    }

    #[test]
    fn test_dangling_array_item_rejected() {
        let spec = spec(
            r#"
swagger: "2.0"
definitions:
  Pets:
    type: array
    items:
      $ref: '#/definitions/Ghost'
"#,
        );
        let err = build_structs(&spec, &UnrealNaming).unwrap_err();
        assert!(matches!(err, GenerateError::UnresolvedRef { .. }));
    }

    #[test]
    fn test_unsupported_property_type_rejected() {
        let spec = spec(
            r#"
swagger: "2.0"
definitions:
  Flag:
    type: object
    properties:
      enabled:
        type: boolean
"#,
        );
        let err = build_structs(&spec, &UnrealNaming).unwrap_err();
        match err {
            GenerateError::UnsupportedType { context, .. } => {
                assert_eq!(context, "definition Flag property enabled");
            }
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }
}
