//! Renders the routing prompt for a small orchestrator workflow and prints
//! the assembled messages.
//!
//! Run with: `cargo run --example orchestrator_routing`

use schemars::JsonSchema;
use signpost::generic::GenericRole;
use signpost::prompt::chain::PromptChain;
use signpost::types::fragments::{RoutingOptionsFragment, RoutingSchemaFragment, StaticFragment};
use signpost::RoutingRegistry;

#[derive(JsonSchema)]
#[schemars(rename_all = "camelCase")]
#[allow(dead_code)]
struct PlanRequest {
    goal: String,
    phase: String,
    context_id: String,
}

#[derive(JsonSchema)]
#[schemars(rename_all = "camelCase")]
#[allow(dead_code)]
struct InterruptRequest {
    reason: String,
    previous_context: String,
}

#[derive(JsonSchema)]
#[allow(dead_code)]
struct OrchestratorRouting {
    /// Start or refine a plan for the task
    plan: Option<PlanRequest>,
    /// Pause the workflow and ask the user
    interrupt: Option<InterruptRequest>,
    abort: Option<bool>,
}

struct OrchestratorRequest;

fn main() -> signpost::Result<()> {
    let registry = RoutingRegistry::new().register::<OrchestratorRequest, OrchestratorRouting>();

    let messages = PromptChain::new()
        .with(StaticFragment::new(
            "You are a workflow orchestrator. Decide what happens next.",
            GenericRole::System,
        ))
        .with(RoutingSchemaFragment::for_request(
            &registry,
            &OrchestratorRequest,
        )?)
        .with(
            RoutingOptionsFragment::for_request(&registry, &OrchestratorRequest)?
                .with_preamble("For quick reference:"),
        )
        .build();

    for message in messages {
        println!("[{}]\n{}", message.role, message.content);
    }

    Ok(())
}
