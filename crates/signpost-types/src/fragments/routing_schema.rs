//! A prompt fragment that injects the full routing schema block for a
//! routing type.
//!
//! This replaces hand-maintained "return a routing object…" sections that
//! would otherwise be duplicated across prompt templates and drift out of
//! sync with the routing types.
//!
//! # What it adds
//!
//! ```markdown
//! Return a routing object with exactly one of:
//! - **plan**: { goal } — Describes a plan
//! - **abort**
//! ```
//!
//! # Example
//!
//! ```rust
//! use schemars::JsonSchema;
//! use signpost_types::fragments::RoutingSchemaFragment;
//! use signpost_prompt::chain::PromptChain;
//!
//! #[derive(JsonSchema)]
//! #[allow(dead_code)]
//! struct Routing {
//!     /// Hand the task to a planner
//!     plan: Option<bool>,
//! }
//!
//! let fragment = RoutingSchemaFragment::new::<Routing>().unwrap();
//! let messages = PromptChain::new().with(fragment).build();
//!
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].role.to_string(), "system");
//! ```
//!
//! The text is rendered once, at construction; the fragment itself is plain
//! data and can be cloned or stored freely.

use std::any::Any;

use schemars::JsonSchema;
use signpost_core::error::Result;
use signpost_core::generic::{GenericMessage, GenericRole};
use signpost_core::registry::RoutingRegistry;
use signpost_core::routing::generate_schema;
use signpost_core::template::IntoPrompt;

/// Injects the generated routing schema block as a system message.
///
/// A fragment built from a type that is not a structured routing record
/// holds empty text and contributes **no** messages — absence of output
/// means "nothing to contribute", never an error.
#[derive(Debug, Clone)]
pub struct RoutingSchemaFragment {
    text: String,
}

impl RoutingSchemaFragment {
    /// Render the schema block for routing type `R`.
    pub fn new<R>() -> Result<Self>
    where
        R: JsonSchema + 'static,
    {
        Ok(Self {
            text: generate_schema::<R>()?,
        })
    }

    /// Render the schema block for whatever routing type is registered for
    /// `request`, or an empty fragment when none is.
    pub fn for_request(registry: &RoutingRegistry, request: &dyn Any) -> Result<Self> {
        let text = match registry.routing_for(request) {
            Some(entry) => entry.schema_text()?,
            None => String::new(),
        };
        Ok(Self { text })
    }

    /// The rendered schema text (may be empty).
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl IntoPrompt for RoutingSchemaFragment {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        if self.text.is_empty() {
            return vec![];
        }
        vec![GenericMessage::new(self.text, GenericRole::System)]
    }
}

#[cfg(test)]
mod tests {
    use schemars::JsonSchema;
    use signpost_core::registry::RoutingRegistry;

    use super::*;

    struct TriageRequest;

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct TriageRouting {
        /// Escalate to a human operator
        escalate: Option<bool>,
        dismiss: Option<bool>,
    }

    #[test]
    fn contributes_one_system_message() {
        let fragment = RoutingSchemaFragment::new::<TriageRouting>().unwrap();
        let messages = fragment.into_prompt();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, GenericRole::System);
        assert!(messages[0]
            .content
            .starts_with("Return a routing object with exactly one of:"));
        assert!(messages[0].content.contains("- **escalate**"));
    }

    #[test]
    fn non_structured_routing_contributes_nothing() {
        let fragment = RoutingSchemaFragment::new::<String>().unwrap();
        assert!(fragment.text().is_empty());
        assert!(fragment.into_prompt().is_empty());
    }

    #[test]
    fn for_request_follows_the_registry() {
        let registry = RoutingRegistry::new().register::<TriageRequest, TriageRouting>();

        let hit = RoutingSchemaFragment::for_request(&registry, &TriageRequest).unwrap();
        assert!(!hit.text().is_empty());

        let miss = RoutingSchemaFragment::for_request(&registry, &42_u8).unwrap();
        assert!(miss.into_prompt().is_empty());
    }
}
