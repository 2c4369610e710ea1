/// Target-framework naming policy.
///
/// Unreal prefixes declarations by kind (`A` for actors, `F` for structs);
/// other frameworks can plug in their own convention without touching the
/// emitters.
pub trait NamingConvention {
    /// The class name of the generated client.
    fn class_name(&self, name: &str) -> String;

    /// The record name generated for a definition.
    fn record_name(&self, name: &str) -> String;

    /// The module export macro for a project.
    fn api_macro(&self, project: &str) -> String;
}

/// Unreal Engine conventions: `A` actor prefix, `F` struct prefix,
/// `<PROJECT>_API` export macro.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnrealNaming;

impl NamingConvention for UnrealNaming {
    fn class_name(&self, name: &str) -> String {
        format!("A{name}")
    }

    fn record_name(&self, name: &str) -> String {
        format!("F{name}")
    }

    fn api_macro(&self, project: &str) -> String {
        format!("{}_API", project.to_uppercase())
    }
}
