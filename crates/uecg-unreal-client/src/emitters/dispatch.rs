use std::fmt::Write as _;

use uecg_core::error::GenerateError;
use uecg_core::naming::{RouteName, title_case};
use uecg_core::parse::{Operation, Response, SwaggerSpec};
use uecg_core::resolve;

use crate::naming::NamingConvention;
use crate::type_mapper::map_property;

/// A per-status `BlueprintImplementableEvent` callback declaration.
#[derive(Debug, Clone)]
pub struct CallbackDecl {
    pub name: String,
    pub signature: String,
}

/// The response side of one endpoint: callback declarations for the header
/// and the rendered handler body for the class file.
#[derive(Debug, Clone)]
pub struct DispatchPlan {
    pub callbacks: Vec<CallbackDecl>,
    pub body: String,
}

/// One field extracted from a JSON payload into a record.
#[derive(Debug, Clone)]
struct FieldExtract {
    field: String,
    accessor: &'static str,
    property: String,
}

/// What a matched branch deserializes before invoking its callback.
#[derive(Debug, Clone)]
enum Payload {
    None,
    Object {
        record: String,
        fields: Vec<FieldExtract>,
    },
    Array {
        record: String,
        fields: Vec<FieldExtract>,
    },
}

impl Payload {
    fn callback_signature(&self) -> String {
        match self {
            Payload::None => String::new(),
            Payload::Object { record, .. } => format!("{record} Result"),
            Payload::Array { record, .. } => format!("const TArray<{record}> &Result"),
        }
    }
}

#[derive(Debug, Clone)]
struct Branch {
    is_default: bool,
    code: String,
    callback: String,
    payload: Payload,
}

/// Build the response dispatch for one endpoint.
///
/// Explicit status branches are visited in ascending numeric order; a
/// `"default"` response always comes last and doubles as the error path.
/// When no branch matches and no default exists the handler falls through
/// with no observable effect.
pub fn build_dispatch(
    spec: &SwaggerSpec,
    path: &str,
    method: &str,
    operation: &Operation,
    route: &RouteName,
    naming: &dyn NamingConvention,
) -> Result<DispatchPlan, GenerateError> {
    let mut codes: Vec<&String> = operation.responses.keys().collect();
    codes.sort_by_key(|code| status_sort_key(code));

    let mut callbacks = Vec::new();
    let mut branches = Vec::new();
    for code in codes {
        let response = &operation.responses[code.as_str()];
        let is_default = code == "default";
        let label = if is_default { "Error" } else { code.as_str() };
        let payload = build_payload(
            spec,
            response,
            naming,
            &format!("response {code} of {method} {path}"),
        )?;
        let callback = format!("{}{}", route.handler_name, label);
        callbacks.push(CallbackDecl {
            name: callback.clone(),
            signature: payload.callback_signature(),
        });
        branches.push(Branch {
            is_default,
            code: code.clone(),
            callback,
            payload,
        });
    }

    let body = render_body(&branches, &route.function_name);
    Ok(DispatchPlan { callbacks, body })
}

/// Explicit codes ascending, `"default"` forced last.
fn status_sort_key(code: &str) -> (u8, u16) {
    if code == "default" {
        (1, 0)
    } else {
        (0, code.parse().unwrap_or(u16::MAX))
    }
}

fn build_payload(
    spec: &SwaggerSpec,
    response: &Response,
    naming: &dyn NamingConvention,
    context: &str,
) -> Result<Payload, GenerateError> {
    let Some(reference) = response.schema_ref() else {
        return Ok(Payload::None);
    };
    let (name, definition) =
        resolve::resolve(spec, reference).map_err(|source| GenerateError::UnresolvedRef {
            reference: reference.to_string(),
            context: context.to_string(),
            source,
        })?;

    if definition.is_object() {
        return Ok(Payload::Object {
            record: naming.record_name(name),
            fields: extract_fields(spec, name)?,
        });
    }
    if definition.is_array() {
        let Some(items_ref) = definition.items_ref() else {
            return Err(GenerateError::UnsupportedArrayItem {
                definition: name.to_string(),
                item: "(missing items $ref)".to_string(),
            });
        };
        let (item_name, item) = resolve::resolve(spec, items_ref).map_err(|source| {
            GenerateError::UnresolvedRef {
                reference: items_ref.to_string(),
                context: format!("items of array definition {name}"),
                source,
            }
        })?;
        if !item.is_object() {
            return Err(GenerateError::UnsupportedArrayItem {
                definition: name.to_string(),
                item: item_name.to_string(),
            });
        }
        return Ok(Payload::Array {
            record: naming.record_name(item_name),
            fields: extract_fields(spec, item_name)?,
        });
    }
    Err(GenerateError::UnsupportedType {
        type_name: definition.type_name.clone(),
        format: None,
        context: format!("definition {name}"),
    })
}

/// Field extractions for an object definition, in property-name order.
/// Fields absent from the response body are tolerated at runtime; the
/// generated `Get<X>Field` calls simply read default values.
fn extract_fields(spec: &SwaggerSpec, name: &str) -> Result<Vec<FieldExtract>, GenerateError> {
    let definition = &spec.definitions[name];
    let mut properties: Vec<&String> = definition.properties.keys().collect();
    properties.sort();

    let mut fields = Vec::with_capacity(properties.len());
    for property in properties {
        let cpp_type = map_property(
            &definition.properties[property.as_str()],
            &format!("definition {name} property {property}"),
        )?;
        fields.push(FieldExtract {
            field: title_case(property),
            accessor: cpp_type.json_accessor(),
            property: property.clone(),
        });
    }
    Ok(fields)
}

fn render_body(branches: &[Branch], function_name: &str) -> String {
    let has_explicit = branches.iter().any(|branch| !branch.is_default);
    let mut out = String::new();
    for branch in branches {
        if branch.is_default {
            if has_explicit {
                out.push_str("\telse {\n");
                render_payload(&mut out, branch, "\t\t", false);
                let _ = writeln!(out, "\t\tOnOapiError(\"{function_name} error\");");
                out.push_str("\t\treturn;\n");
                out.push_str("\t}\n");
            } else {
                render_payload(&mut out, branch, "\t", false);
                let _ = writeln!(out, "\tOnOapiError(\"{function_name} error\");");
                out.push_str("\treturn;\n");
            }
        } else {
            let _ = writeln!(out, "\tif (Response->GetResponseCode() == {}) {{", branch.code);
            render_payload(&mut out, branch, "\t\t", true);
            out.push_str("\t}\n");
        }
    }
    out
}

/// Render one branch payload. `with_return` adds the short-circuit return
/// next to the callback invocation (explicit branches); the default branch
/// returns after the error callback instead.
fn render_payload(out: &mut String, branch: &Branch, indent: &str, with_return: bool) {
    match &branch.payload {
        Payload::None => {
            let _ = writeln!(out, "{indent}{}();", branch.callback);
            if with_return {
                let _ = writeln!(out, "{indent}return;");
            }
        }
        Payload::Object { record, fields } => {
            let _ = writeln!(out, "{indent}{record} result;");
            let _ = writeln!(out, "{indent}TSharedPtr<FJsonObject> JsonObject;");
            let _ = writeln!(
                out,
                "{indent}TSharedRef<TJsonReader<>> Reader = TJsonReaderFactory<>::Create(Response->GetContentAsString());"
            );
            let _ = writeln!(out, "{indent}if (FJsonSerializer::Deserialize(Reader, JsonObject))");
            let _ = writeln!(out, "{indent}{{");
            for field in fields {
                let _ = writeln!(
                    out,
                    "{indent}\tresult.{} = JsonObject->Get{}Field(\"{}\");",
                    field.field, field.accessor, field.property
                );
            }
            let _ = writeln!(out, "{indent}\t{}(result);", branch.callback);
            if with_return {
                let _ = writeln!(out, "{indent}\treturn;");
            }
            let _ = writeln!(out, "{indent}}}");
        }
        Payload::Array { record, fields } => {
            let _ = writeln!(out, "{indent}TArray<{record}> result;");
            let _ = writeln!(out, "{indent}TArray<TSharedPtr<FJsonValue>> JsonArray;");
            let _ = writeln!(
                out,
                "{indent}TSharedRef<TJsonReader<>> Reader = TJsonReaderFactory<>::Create(Response->GetContentAsString());"
            );
            let _ = writeln!(out, "{indent}if (FJsonSerializer::Deserialize(Reader, JsonArray)) {{");
            let _ = writeln!(out, "{indent}\tfor (int i = 0; i < JsonArray.Num(); i++) {{");
            let _ = writeln!(out, "{indent}\t\t{record} Item;");
            for field in fields {
                let _ = writeln!(
                    out,
                    "{indent}\t\tItem.{} = JsonArray[i]->AsObject()->Get{}Field(\"{}\");",
                    field.field, field.accessor, field.property
                );
            }
            let _ = writeln!(out, "{indent}\t\tresult.Add(Item);");
            let _ = writeln!(out, "{indent}\t}}");
            let _ = writeln!(out, "{indent}\t{}(result);", branch.callback);
            if with_return {
                let _ = writeln!(out, "{indent}\treturn;");
            }
            let _ = writeln!(out, "{indent}}}");
        }
    }
}
