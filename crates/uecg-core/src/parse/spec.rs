use indexmap::IndexMap;
use serde::Deserialize;

/// Info object describing the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub license: Option<License>,
}

/// License information.
#[derive(Debug, Clone, Deserialize)]
pub struct License {
    pub name: String,

    #[serde(default)]
    pub url: Option<String>,
}

/// Top-level Swagger 2.0 specification (the subset uecg consumes).
#[derive(Debug, Clone, Deserialize)]
pub struct SwaggerSpec {
    pub swagger: String,

    #[serde(default)]
    pub info: Info,

    #[serde(default)]
    pub host: String,

    #[serde(rename = "basePath", default)]
    pub base_path: String,

    #[serde(default)]
    pub schemes: Vec<String>,

    #[serde(default)]
    pub consumes: Vec<String>,

    #[serde(default)]
    pub produces: Vec<String>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default)]
    pub definitions: IndexMap<String, Definition>,
}

/// HTTP method (lowercase, as spelled in the document) to operation.
pub type PathItem = IndexMap<String, Operation>;

/// One (path, method) operation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(rename = "operationId", default)]
    pub operation_id: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// An operation parameter: either an inline primitive or a `$ref` to a
/// definition. Only referenced parameters produce generated arguments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "in", default)]
    pub location: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(rename = "type", default)]
    pub type_name: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,
}

/// A response keyed by status code (or `"default"`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub headers: IndexMap<String, ResponseHeader>,

    #[serde(default)]
    pub schema: Option<SchemaRef>,
}

impl Response {
    /// The `$ref` of the response payload schema, if any.
    pub fn schema_ref(&self) -> Option<&str> {
        self.schema.as_ref()?.reference.as_deref()
    }
}

/// A documented response header. Decoded for completeness, not generated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseHeader {
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// A bare `$ref` wrapper as it appears under `schema` and `items`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaRef {
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,
}

/// A named schema: `type: object` with properties, or `type: array` with
/// an `items.$ref` pointing at an object definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(default)]
    pub properties: IndexMap<String, Property>,

    #[serde(default)]
    pub items: Option<SchemaRef>,
}

impl Definition {
    pub fn is_object(&self) -> bool {
        self.type_name.as_deref() == Some("object")
    }

    pub fn is_array(&self) -> bool {
        self.type_name.as_deref() == Some("array")
    }

    /// The `items.$ref` of an array definition, if present.
    pub fn items_ref(&self) -> Option<&str> {
        self.items.as_ref()?.reference.as_deref()
    }
}

/// A primitive property of an object definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Property {
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,

    #[serde(default)]
    pub format: Option<String>,
}
