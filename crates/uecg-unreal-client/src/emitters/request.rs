use uecg_core::error::GenerateError;
use uecg_core::naming::{RouteName, placeholder_name};
use uecg_core::parse::{Operation, SwaggerSpec};
use uecg_core::resolve;

use crate::naming::NamingConvention;

/// A referenced parameter serialized into the request body.
#[derive(Debug, Clone)]
pub struct BodyParam {
    pub name: String,
    pub cpp_type: String,
}

/// The request side of one endpoint: signature, URL, verb, body blocks.
#[derive(Debug, Clone)]
pub struct RequestPlan {
    pub signature: String,
    pub url: String,
    pub verb: String,
    pub bodies: Vec<BodyParam>,
}

/// Build the callable signature and request construction data for one
/// endpoint. Arguments are the path placeholders (as `FString`) followed by
/// one argument per referenced parameter; inline primitive parameters carry
/// no generated argument.
///
/// Each referenced parameter gets its own serialization block and each ends
/// in `SetContentAsString`, so with several body parameters the last one
/// emitted is the body actually sent. Kept as-is, with a warning.
pub fn build_request(
    spec: &SwaggerSpec,
    path: &str,
    method: &str,
    operation: &Operation,
    route: &RouteName,
    naming: &dyn NamingConvention,
) -> Result<RequestPlan, GenerateError> {
    let mut args: Vec<String> = route
        .path_args
        .iter()
        .map(|arg| format!("FString {arg}"))
        .collect();

    let mut bodies = Vec::new();
    for parameter in &operation.parameters {
        let Some(reference) = parameter.reference.as_deref() else {
            continue;
        };
        let (definition_name, _) =
            resolve::resolve(spec, reference).map_err(|source| GenerateError::UnresolvedRef {
                reference: reference.to_string(),
                context: format!("parameter of {method} {path}"),
                source,
            })?;
        let arg_name = match parameter.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => definition_name.to_lowercase(),
        };
        let cpp_type = naming.record_name(definition_name);
        args.push(format!("{cpp_type} {arg_name}"));
        bodies.push(BodyParam {
            name: arg_name,
            cpp_type,
        });
    }

    if bodies.len() > 1 {
        log::warn!(
            "{method} {path}: {} referenced body parameters; the last serialization ({}) wins",
            bodies.len(),
            bodies[bodies.len() - 1].name,
        );
    }

    Ok(RequestPlan {
        signature: args.join(","),
        url: url_with_parameters(&spec.host, &spec.base_path, path),
        verb: method.to_string(),
        bodies,
    })
}

/// Splice path placeholders into the URL literal: every `{x}` segment of
/// `host + basePath + path` becomes `"+x+"`, closing and reopening the
/// surrounding quoted string.
fn url_with_parameters(host: &str, base_path: &str, path: &str) -> String {
    let url = format!("{host}{base_path}{path}");
    url.split('/')
        .map(|segment| match placeholder_name(segment) {
            Some(param) => format!("\"+{param}+\""),
            None => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
