pub mod error;
pub mod naming;
pub mod output;
pub mod parse;
pub mod resolve;

/// A generated artifact with a path relative to the output directory.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce artifacts from a parsed spec.
pub trait CodeGenerator {
    type Config;

    fn generate(
        &self,
        spec: &parse::SwaggerSpec,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, error::GenerateError>;
}
