use heck::ToUpperCamelCase;

/// Names derived from one (path, method) pair.
///
/// `GET /pets/{petId}` yields function `GetPetsByPetId`, handler
/// `OnGetPetsByPetIdResponse`, and one path argument `petId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteName {
    pub function_name: String,
    pub handler_name: String,
    /// Placeholder names in path order; each becomes a string argument.
    pub path_args: Vec<String>,
}

/// Title-case an identifier, e.g. a property name becoming a record field.
pub fn title_case(name: &str) -> String {
    name.to_upper_camel_case()
}

/// The placeholder name of a `{param}` path segment, if it is one.
pub fn placeholder_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .filter(|name| !name.is_empty())
}

/// Derive function, handler, and path-argument names from a path template
/// and an HTTP method. Literal segments title-case in order; placeholder
/// segments contribute `By<Param>`; empty segments are skipped.
///
/// Deterministic by construction: only the (path, method) pair feeds in.
/// Distinct pairs can still collide after title-casing; the generator
/// checks for that before emitting anything.
pub fn derive_route_name(method: &str, path: &str) -> RouteName {
    let mut function_name = method.to_upper_camel_case();
    let mut path_args = Vec::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        match placeholder_name(segment) {
            Some(param) => {
                function_name.push_str("By");
                function_name.push_str(&param.to_upper_camel_case());
                path_args.push(param.to_string());
            }
            None => function_name.push_str(&segment.to_upper_camel_case()),
        }
    }
    let handler_name = format!("On{function_name}Response");
    RouteName {
        function_name,
        handler_name,
        path_args,
    }
}
