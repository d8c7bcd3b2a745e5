//! A prompt fragment that injects the condensed routing options list.
//!
//! Guidance text ("you are here in the workflow, these are your ways out")
//! wants the option names and descriptions but not the nested shapes — the
//! full schema block would drown the surrounding instructions.  This
//! fragment emits the shallow list, optionally preceded by a caller-supplied
//! lead-in line.
//!
//! ```markdown
//! **Routing options:**
//! - `plan` — Describes a plan
//! - `abort`
//! ```

use std::any::Any;

use schemars::JsonSchema;
use signpost_core::error::Result;
use signpost_core::generic::{GenericMessage, GenericRole};
use signpost_core::registry::RoutingRegistry;
use signpost_core::routing::generate_guidance_options;
use signpost_core::template::IntoPrompt;
use signpost_prompt::builder::PromptBuilder;

/// Injects the generated guidance options list as a system message.
///
/// Like [`super::RoutingSchemaFragment`], an empty options text (routing
/// type not structured, or request not registered) contributes no messages.
#[derive(Debug, Clone)]
pub struct RoutingOptionsFragment {
    text: String,
    preamble: Option<String>,
}

impl RoutingOptionsFragment {
    /// Render the options list for routing type `R`.
    pub fn new<R>() -> Result<Self>
    where
        R: JsonSchema + 'static,
    {
        Ok(Self {
            text: generate_guidance_options::<R>()?,
            preamble: None,
        })
    }

    /// Render the options list for whatever routing type is registered for
    /// `request`, or an empty fragment when none is.
    pub fn for_request(registry: &RoutingRegistry, request: &dyn Any) -> Result<Self> {
        let text = match registry.routing_for(request) {
            Some(entry) => entry.guidance_text()?,
            None => String::new(),
        };
        Ok(Self {
            text,
            preamble: None,
        })
    }

    /// Prefix the options list with a lead-in line of guidance text.
    ///
    /// The preamble is only emitted when the fragment actually has options
    /// to show.
    pub fn with_preamble(mut self, preamble: impl ToString) -> Self {
        self.preamble = Some(preamble.to_string());
        self
    }

    /// The rendered options text (may be empty; excludes the preamble).
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl IntoPrompt for RoutingOptionsFragment {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        if self.text.is_empty() {
            return vec![];
        }

        let content = match self.preamble {
            Some(preamble) => PromptBuilder::new()
                .add_line(preamble)
                .add_blank_line()
                .add_block(&self.text)
                .finalize(),
            None => self.text,
        };

        vec![GenericMessage::new(content, GenericRole::System)]
    }
}
