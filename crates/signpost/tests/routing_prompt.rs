//! End-to-end composition: registry lookup, fragment rendering and prompt
//! chaining, exercised through the umbrella crate the way an orchestrator
//! would use it.

use schemars::JsonSchema;
use signpost::generic::{GenericMessage, GenericRole};
use signpost::prompt::builder::PromptBuilder;
use signpost::prompt::chain::PromptChain;
use signpost::routing::{generate_guidance_options, generate_schema};
use signpost::types::fragments::{RoutingSchemaFragment, StaticFragment};
use signpost::RoutingRegistry;

#[derive(JsonSchema)]
#[schemars(rename_all = "camelCase")]
#[allow(dead_code)]
struct PlanRequest {
    goal: String,
    context_id: String,
}

#[derive(JsonSchema)]
#[allow(dead_code)]
struct OrchestratorRouting {
    /// Describes a plan
    plan: Option<PlanRequest>,
    abort: Option<bool>,
}

struct OrchestratorRequest;

#[test]
fn schema_block_matches_the_documented_format() {
    let block = generate_schema::<OrchestratorRouting>().unwrap();
    assert_eq!(
        block,
        "Return a routing object with exactly one of:\n\
         - **plan**: { goal } — Describes a plan\n\
         - **abort**\n"
    );
}

#[test]
fn guidance_list_matches_the_documented_format() {
    let list = generate_guidance_options::<OrchestratorRouting>().unwrap();
    assert_eq!(
        list,
        "**Routing options:**\n\
         - `plan` — Describes a plan\n\
         - `abort`\n"
    );
}

#[test]
fn registry_driven_prompt_assembly() {
    let registry = RoutingRegistry::new().register::<OrchestratorRequest, OrchestratorRouting>();

    let schema =
        RoutingSchemaFragment::for_request(&registry, &OrchestratorRequest).unwrap();

    let messages: Vec<GenericMessage> = PromptChain::new()
        .with(StaticFragment::new(
            "You are a workflow orchestrator.",
            GenericRole::System,
        ))
        .with(schema)
        .with(GenericMessage::new(
            "Route the current request.".into(),
            GenericRole::User,
        ))
        .build();

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role, GenericRole::System);
    assert!(messages[1]
        .content
        .starts_with("Return a routing object with exactly one of:"));
}

#[test]
fn unregistered_requests_contribute_nothing() {
    let registry = RoutingRegistry::new().register::<OrchestratorRequest, OrchestratorRouting>();

    let fragment = RoutingSchemaFragment::for_request(&registry, &1_u64).unwrap();
    let messages: Vec<GenericMessage> = PromptChain::new().with(fragment).build();

    assert!(messages.is_empty());
}

#[test]
fn generated_blocks_embed_verbatim_in_larger_documents() {
    let block = generate_schema::<OrchestratorRouting>().unwrap();

    let document = PromptBuilder::new()
        .add_section_h1("Routing")
        .add_blank_line()
        .add_block(&block)
        .add_delimiter()
        .finalize();

    assert!(document.contains("\nReturn a routing object with exactly one of:\n"));
    assert!(document.contains("- **plan**: { goal } — Describes a plan\n"));
    assert!(document.ends_with("---\n"));
}
