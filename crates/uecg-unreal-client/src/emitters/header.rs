use minijinja::{Environment, context};

use super::{EndpointPlan, GenerationPlan};
use super::structs::StructDecl;

/// Emit `<ClassName>.h` — struct declarations plus the actor class with one
/// callable/handler/callback group per endpoint.
pub fn emit_header(plan: &GenerationPlan) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("header.h.j2", include_str!("../../templates/header.h.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("header.h.j2").unwrap();

    let structs: Vec<minijinja::Value> = plan.structs.iter().map(struct_to_ctx).collect();
    let endpoints: Vec<minijinja::Value> = plan.endpoints.iter().map(endpoint_to_ctx).collect();

    tmpl.render(context! {
        class_name => plan.class_name.clone(),
        actor_name => plan.actor_name.clone(),
        api_macro => plan.api_macro.clone(),
        structs => structs,
        endpoints => endpoints,
    })
    .expect("render should succeed")
}

fn struct_to_ctx(decl: &StructDecl) -> minijinja::Value {
    let fields: Vec<minijinja::Value> = decl
        .fields
        .iter()
        .map(|field| {
            context! {
                name => field.name.clone(),
                cpp_type => field.cpp_type,
            }
        })
        .collect();
    context! {
        name => decl.name.clone(),
        fields => fields,
    }
}

fn endpoint_to_ctx(endpoint: &EndpointPlan) -> minijinja::Value {
    let callbacks: Vec<minijinja::Value> = endpoint
        .callbacks
        .iter()
        .map(|callback| {
            context! {
                name => callback.name.clone(),
                signature => callback.signature.clone(),
            }
        })
        .collect();
    context! {
        function_name => endpoint.function_name.clone(),
        handler_name => endpoint.handler_name.clone(),
        signature => endpoint.signature.clone(),
        callbacks => callbacks,
    }
}
