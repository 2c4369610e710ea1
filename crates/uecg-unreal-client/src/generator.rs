use std::collections::HashMap;

use uecg_core::error::GenerateError;
use uecg_core::naming::derive_route_name;
use uecg_core::parse::SwaggerSpec;
use uecg_core::{CodeGenerator, GeneratedFile};

use crate::emitters::{self, EndpointPlan, GenerationPlan};
use crate::naming::{NamingConvention, UnrealNaming};

/// Generator options supplied by the caller.
#[derive(Debug, Clone)]
pub struct UnrealClientConfig {
    /// Unreal project name, used for the `<PROJECT>_API` export macro.
    pub project_name: String,
    /// Name of the generated class and both artifact file stems.
    pub class_name: String,
}

/// Unreal Engine C++ client generator.
pub struct UnrealClientGenerator {
    naming: Box<dyn NamingConvention>,
}

impl Default for UnrealClientGenerator {
    fn default() -> Self {
        Self {
            naming: Box::new(UnrealNaming),
        }
    }
}

impl UnrealClientGenerator {
    /// Use a different target-framework naming convention.
    pub fn with_naming(naming: Box<dyn NamingConvention>) -> Self {
        Self { naming }
    }

    /// Derive everything the templates consume. Definitions are walked in
    /// name order and endpoints in (path, method) order, so the same spec
    /// always yields byte-identical artifacts regardless of document order.
    fn build_plan(
        &self,
        spec: &SwaggerSpec,
        config: &UnrealClientConfig,
    ) -> Result<GenerationPlan, GenerateError> {
        let naming = self.naming.as_ref();
        let structs = emitters::structs::build_structs(spec, naming)?;

        let mut paths: Vec<&String> = spec.paths.keys().collect();
        paths.sort();

        let mut seen: HashMap<String, String> = HashMap::new();
        let mut endpoints = Vec::new();
        for path in paths {
            let methods_for_path = &spec.paths[path.as_str()];
            let mut methods: Vec<&String> = methods_for_path.keys().collect();
            methods.sort();
            for method in methods {
                let operation = &methods_for_path[method.as_str()];
                let route = derive_route_name(method, path);
                let pair = format!("{method} {path}");
                if let Some(first) = seen.insert(route.function_name.clone(), pair.clone()) {
                    return Err(GenerateError::DuplicateFunctionName {
                        name: route.function_name,
                        first,
                        second: pair,
                    });
                }
                log::debug!("{pair} -> {}", route.function_name);

                let request =
                    emitters::request::build_request(spec, path, method, operation, &route, naming)?;
                let dispatch =
                    emitters::dispatch::build_dispatch(spec, path, method, operation, &route, naming)?;
                endpoints.push(EndpointPlan {
                    function_name: route.function_name,
                    handler_name: route.handler_name,
                    signature: request.signature,
                    url: request.url,
                    verb: request.verb,
                    bodies: request.bodies,
                    callbacks: dispatch.callbacks,
                    dispatch_body: dispatch.body,
                });
            }
        }

        Ok(GenerationPlan {
            class_name: config.class_name.clone(),
            actor_name: naming.class_name(&config.class_name),
            api_macro: naming.api_macro(&config.project_name),
            structs,
            endpoints,
        })
    }
}

impl CodeGenerator for UnrealClientGenerator {
    type Config = UnrealClientConfig;

    fn generate(
        &self,
        spec: &SwaggerSpec,
        config: &UnrealClientConfig,
    ) -> Result<Vec<GeneratedFile>, GenerateError> {
        let plan = self.build_plan(spec, config)?;
        log::info!(
            "generating {} with {} structs and {} endpoints",
            config.class_name,
            plan.structs.len(),
            plan.endpoints.len()
        );
        Ok(vec![
            GeneratedFile {
                path: format!("{}.h", config.class_name),
                content: emitters::header::emit_header(&plan),
            },
            GeneratedFile {
                path: format!("{}.cpp", config.class_name),
                content: emitters::class::emit_class(&plan),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uecg_core::parse::from_yaml;

    #[test]
    fn test_duplicate_function_names_rejected() {
        // Title-casing collapses /pets/all and /pets/ALL onto GetPetsAll.
        let spec = from_yaml(
            r#"
swagger: "2.0"
paths:
  /pets/all:
    get:
      responses:
        "200":
          description: ok
  /pets/ALL:
    get:
      responses:
        "200":
          description: ok
"#,
        )
        .unwrap();
        let config = UnrealClientConfig {
            project_name: "Demo".to_string(),
            class_name: "PetClient".to_string(),
        };
        let err = UnrealClientGenerator::default()
            .generate(&spec, &config)
            .unwrap_err();
        match err {
            GenerateError::DuplicateFunctionName { name, first, second } => {
                assert_eq!(name, "GetPetsAll");
                assert_ne!(first, second);
            }
            other => panic!("expected DuplicateFunctionName, got {other:?}"),
        }
    }

    #[test]
    fn test_naming_convention_is_injectable() {
        struct PlainNaming;
        impl NamingConvention for PlainNaming {
            fn class_name(&self, name: &str) -> String {
                name.to_string()
            }
            fn record_name(&self, name: &str) -> String {
                name.to_string()
            }
            fn api_macro(&self, project: &str) -> String {
                format!("{project}_EXPORT")
            }
        }

        let spec = from_yaml(
            r#"
swagger: "2.0"
paths:
  /pets:
    get:
      responses:
        "200":
          description: ok
          schema:
            $ref: '#/definitions/Pet'
definitions:
  Pet:
    type: object
    properties:
      name:
        type: string
"#,
        )
        .unwrap();
        let config = UnrealClientConfig {
            project_name: "Demo".to_string(),
            class_name: "PetClient".to_string(),
        };
        let files = UnrealClientGenerator::with_naming(Box::new(PlainNaming))
            .generate(&spec, &config)
            .unwrap();
        assert!(files[0].content.contains("struct Pet {"));
        assert!(files[0].content.contains("class Demo_EXPORT PetClient : public AActor"));
        assert!(files[1].content.contains("PetClient::PetClient()"));
    }

    #[test]
    fn test_two_artifacts_named_after_class() {
        let spec = from_yaml("swagger: \"2.0\"\n").unwrap();
        let config = UnrealClientConfig {
            project_name: "Demo".to_string(),
            class_name: "PetClient".to_string(),
        };
        let files = UnrealClientGenerator::default()
            .generate(&spec, &config)
            .unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "PetClient.h");
        assert_eq!(files[1].path, "PetClient.cpp");
    }
}
