pub mod class;
pub mod dispatch;
pub mod header;
pub mod request;
pub mod structs;

/// Everything the templates need for one endpoint, fully derived.
#[derive(Debug, Clone)]
pub struct EndpointPlan {
    pub function_name: String,
    pub handler_name: String,
    /// Full argument list: path arguments then referenced-parameter arguments.
    pub signature: String,
    pub url: String,
    pub verb: String,
    pub bodies: Vec<request::BodyParam>,
    pub callbacks: Vec<dispatch::CallbackDecl>,
    /// Pre-rendered handler body (status dispatch), one line per statement.
    pub dispatch_body: String,
}

/// The complete input to the header and class templates.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    /// File stem and include name, as given on the command line.
    pub class_name: String,
    /// Class name after the naming convention is applied.
    pub actor_name: String,
    pub api_macro: String,
    pub structs: Vec<structs::StructDecl>,
    pub endpoints: Vec<EndpointPlan>,
}
