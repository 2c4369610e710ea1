use minijinja::{Environment, context};

use super::{EndpointPlan, GenerationPlan};

/// Emit `<ClassName>.cpp` — constructor plus one request/response-handler
/// implementation pair per endpoint.
pub fn emit_class(plan: &GenerationPlan) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("class.cpp.j2", include_str!("../../templates/class.cpp.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("class.cpp.j2").unwrap();

    let endpoints: Vec<minijinja::Value> = plan.endpoints.iter().map(endpoint_to_ctx).collect();

    tmpl.render(context! {
        class_name => plan.class_name.clone(),
        actor_name => plan.actor_name.clone(),
        endpoints => endpoints,
    })
    .expect("render should succeed")
}

fn endpoint_to_ctx(endpoint: &EndpointPlan) -> minijinja::Value {
    let bodies: Vec<minijinja::Value> = endpoint
        .bodies
        .iter()
        .map(|body| {
            context! {
                name => body.name.clone(),
                cpp_type => body.cpp_type.clone(),
            }
        })
        .collect();
    context! {
        function_name => endpoint.function_name.clone(),
        handler_name => endpoint.handler_name.clone(),
        signature => endpoint.signature.clone(),
        url => endpoint.url.clone(),
        verb => endpoint.verb.clone(),
        bodies => bodies,
        dispatch_body => endpoint.dispatch_body.clone(),
    }
}
