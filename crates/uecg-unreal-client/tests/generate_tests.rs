use uecg_core::CodeGenerator;
use uecg_core::output::{self, WriteMode};
use uecg_core::parse::from_yaml;
use uecg_unreal_client::{UnrealClientConfig, UnrealClientGenerator};

const PETSTORE: &str = include_str!("fixtures/petstore.yaml");
const PETSTORE_SHUFFLED: &str = include_str!("fixtures/petstore-shuffled.yaml");

fn generate(yaml: &str) -> (String, String) {
    let spec = from_yaml(yaml).unwrap();
    let config = UnrealClientConfig {
        project_name: "MyGame".to_string(),
        class_name: "PetClient".to_string(),
    };
    let files = UnrealClientGenerator::default()
        .generate(&spec, &config)
        .unwrap();
    assert_eq!(files.len(), 2);
    (files[0].content.clone(), files[1].content.clone())
}

/// Index of a needle that must be present, for asserting relative order.
fn pos(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?}"))
}

#[test]
fn header_declares_structs_and_class() {
    let (header, _) = generate(PETSTORE);

    assert!(header.starts_with("#pragma once"));
    assert!(header.contains("#include \"PetClient.generated.h\""));

    // One record per object definition, none for the array definition.
    assert!(header.contains("struct FError {"));
    assert!(header.contains("struct FPet {"));
    assert!(!header.contains("struct FPets"));

    // Pet has exactly its three fields, typed through the mapper.
    assert!(header.contains("\tint32 Id;"));
    assert!(header.contains("\tFString Name;"));
    assert!(header.contains("\tFString Tag;"));
    assert_eq!(header.matches("UPROPERTY(").count(), 5); // Pet: 3, Error: 2

    assert!(header.contains("class MYGAME_API APetClient : public AActor"));
    assert!(header.contains("\tAPetClient();"));
    assert!(header.contains("void OnOapiError(const FString &text);"));
}

#[test]
fn header_declares_endpoint_groups() {
    let (header, _) = generate(PETSTORE);

    // Callable, handler, and per-status callbacks for each endpoint.
    assert!(header.contains("void GetPets();"));
    assert!(header.contains(
        "void OnGetPetsResponse(FHttpRequestPtr Request, FHttpResponsePtr Response, bool bWasSuccessful);"
    ));
    assert!(header.contains("void OnGetPetsResponse200(const TArray<FPet> &Result);"));
    assert!(header.contains("void OnGetPetsResponseError(FError Result);"));

    assert!(header.contains("void PostPets(FPet pet);"));
    assert!(header.contains("void OnPostPetsResponse201();"));

    assert!(header.contains("void GetPetsByPetId(FString petId);"));
    assert!(header.contains("void OnGetPetsByPetIdResponse200(FPet Result);"));

    // Endpoints ordered by path then method.
    let get_pets = pos(&header, "void GetPets();");
    let post_pets = pos(&header, "void PostPets(");
    let get_by_id = pos(&header, "void GetPetsByPetId(");
    assert!(get_pets < post_pets);
    assert!(post_pets < get_by_id);
}

#[test]
fn class_builds_requests() {
    let (_, class) = generate(PETSTORE);

    assert!(class.starts_with("#include \"PetClient.h\""));
    assert!(class.contains("APetClient::APetClient()"));
    assert!(class.contains("Http = &FHttpModule::Get();"));

    assert!(class.contains("void APetClient::GetPetsByPetId(FString petId)"));
    assert!(class.contains("Request->SetURL(\"petstore.swagger.io/v1/pets/\"+petId+\"\");"));
    assert!(class.contains("Request->SetURL(\"petstore.swagger.io/v1/pets\");"));
    assert!(class.contains("Request->SetVerb(\"get\");"));
    assert!(class.contains("Request->SetVerb(\"post\");"));
    assert!(class.contains("Request->SetHeader(TEXT(\"User-Agent\"), \"X-UnrealEngine-Agent\");"));
    assert!(class.contains("Request->SetHeader(\"Content-Type\", TEXT(\"application/json\"));"));
    assert!(
        class.contains(
            "Request->OnProcessRequestComplete().BindUObject(this, &APetClient::OnGetPetsResponse);"
        )
    );

    // Body parameter serialization for POST /pets.
    assert!(class.contains(
        "TSharedPtr<FJsonObject> petJsonObject = FJsonObjectConverter::UStructToJsonObject<FPet>(pet);"
    ));
    assert!(class.contains("Request->SetContentAsString(petContentString);"));

    // Submission is the last statement of every callable.
    assert_eq!(class.matches("Request->ProcessRequest();").count(), 3);
    let serialize = pos(&class, "Request->SetContentAsString(petContentString);");
    let submit = class[serialize..].find("Request->ProcessRequest();").unwrap();
    assert!(submit > 0);
}

#[test]
fn class_dispatches_responses() {
    let (_, class) = generate(PETSTORE);

    // GET /pets: 200 array branch, then default error branch.
    assert!(class.contains("if (Response->GetResponseCode() == 200) {"));
    assert!(class.contains("TArray<FPet> result;"));
    assert!(class.contains("Item.Name = JsonArray[i]->AsObject()->GetStringField(\"name\");"));
    assert!(class.contains("OnGetPetsResponse200(result);"));
    assert!(class.contains("OnOapiError(\"GetPets error\");"));

    // GET /pets/{petId}: single-object 200 branch.
    assert!(class.contains("FPet result;"));
    assert!(class.contains("result.Id = JsonObject->GetIntegerField(\"id\");"));
    assert!(class.contains("OnGetPetsByPetIdResponse200(result);"));

    // POST /pets: schema-less 201 branch.
    assert!(class.contains("OnPostPetsResponse201();"));

    // Explicit branch precedes the default branch in every handler.
    let handler = pos(&class, "void APetClient::OnPostPetsResponse(");
    let branch_201 = class[handler..].find("== 201").unwrap();
    let branch_else = class[handler..].find("else {").unwrap();
    assert!(branch_201 < branch_else);
}

#[test]
fn round_trip_widget() {
    // Widget{id: int32, label: string}, GET /widgets/{id} -> 200 Widget.
    let yaml = r#"
swagger: "2.0"
host: api.example.com
paths:
  /widgets/{id}:
    get:
      responses:
        "200":
          description: ok
          schema:
            $ref: '#/definitions/Widget'
definitions:
  Widget:
    type: object
    properties:
      id:
        type: integer
        format: int32
      label:
        type: string
"#;
    let spec = from_yaml(yaml).unwrap();
    let config = UnrealClientConfig {
        project_name: "Demo".to_string(),
        class_name: "WidgetClient".to_string(),
    };
    let files = UnrealClientGenerator::default()
        .generate(&spec, &config)
        .unwrap();
    let header = &files[0].content;
    let class = &files[1].content;

    // id lands in a 32-bit integer field, label in a string field.
    assert!(header.contains("\tint32 Id;"));
    assert!(header.contains("\tFString Label;"));
    assert!(class.contains("result.Id = JsonObject->GetIntegerField(\"id\");"));
    assert!(class.contains("result.Label = JsonObject->GetStringField(\"label\");"));

    // The 200 callback fires exactly once and the handler returns without
    // touching the error callback.
    assert_eq!(class.matches("OnGetWidgetsByIdResponse200(result);").count(), 1);
    assert!(!class.contains("OnOapiError("));
    let callback = pos(class, "OnGetWidgetsByIdResponse200(result);");
    assert!(class[callback..].contains("return;"));
}

#[test]
fn default_only_endpoint_always_errors() {
    let yaml = r#"
swagger: "2.0"
paths:
  /ping:
    get:
      responses:
        default:
          description: anything
"#;
    let spec = from_yaml(yaml).unwrap();
    let config = UnrealClientConfig {
        project_name: "Demo".to_string(),
        class_name: "PingClient".to_string(),
    };
    let files = UnrealClientGenerator::default()
        .generate(&spec, &config)
        .unwrap();
    let class = &files[1].content;

    // No status comparison at all: every response takes the error path once.
    let handler = pos(class, "void APingClient::OnGetPingResponse(");
    let body = &class[handler..];
    assert!(!body.contains("GetResponseCode()"));
    assert!(body.contains("OnGetPingResponseError();"));
    assert_eq!(body.matches("OnOapiError(\"GetPing error\");").count(), 1);
}

#[test]
fn two_body_parameters_last_serialization_wins() {
    let yaml = r#"
swagger: "2.0"
paths:
  /merge:
    post:
      parameters:
        - name: left
          in: body
          $ref: '#/definitions/Doc'
        - name: right
          in: body
          $ref: '#/definitions/Doc'
      responses:
        "200":
          description: ok
definitions:
  Doc:
    type: object
    properties:
      text:
        type: string
"#;
    let spec = from_yaml(yaml).unwrap();
    let config = UnrealClientConfig {
        project_name: "Demo".to_string(),
        class_name: "MergeClient".to_string(),
    };
    let files = UnrealClientGenerator::default()
        .generate(&spec, &config)
        .unwrap();
    let class = &files[1].content;

    // Both serializations are emitted in order of appearance; the one for
    // `right` runs last, so its content string is the body actually sent.
    let left = pos(class, "Request->SetContentAsString(leftContentString);");
    let right = pos(class, "Request->SetContentAsString(rightContentString);");
    let submit = pos(class, "Request->ProcessRequest();");
    assert!(left < right);
    assert!(right < submit);
}

#[test]
fn generation_is_idempotent_across_document_order() {
    let (header_a, class_a) = generate(PETSTORE);
    let (header_b, class_b) = generate(PETSTORE_SHUFFLED);
    assert_eq!(header_a, header_b);
    assert_eq!(class_a, class_b);
}

#[test]
fn artifacts_round_trip_through_disk() {
    let spec = from_yaml(PETSTORE).unwrap();
    let config = UnrealClientConfig {
        project_name: "MyGame".to_string(),
        class_name: "PetClient".to_string(),
    };
    let files = UnrealClientGenerator::default()
        .generate(&spec, &config)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let written = output::write_files(dir.path(), &files, WriteMode::Strict).unwrap();
    assert_eq!(written.len(), 2);
    let header = std::fs::read_to_string(dir.path().join("PetClient.h")).unwrap();
    assert_eq!(header, files[0].content);
}
