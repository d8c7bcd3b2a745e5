//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](signpost_core::template::IntoPrompt).
//!
//! ```text
//! ┌───────────────────────┐    IntoPrompt     ┌────────────────┐
//! │ StaticFragment        │ ─────────────────►│ Vec<Message>   │
//! ├───────────────────────┤                   ├────────────────┤
//! │ RoutingSchemaFragment │ ─────────────────►│ Vec<Message>   │
//! ├───────────────────────┤                   ├────────────────┤
//! │ …                     │ ─────────────────►│ Vec<Message>   │
//! └───────────────────────┘                   └────────────────┘
//!            ▲                                          │
//!            └────────── PromptChain::build() ◄─────────┘
//! ```
//!
//! # Motivation
//!
//! A routing prompt is rarely just the schema block.  Typically you line up
//!
//! * a static role description,
//! * task-specific context,
//! * the routing schema derived from the routing type,
//! * a final user instruction.
//!
//! `PromptChain` lets you compose these fragments in a clear, linear fashion
//! **without** mutable vectors or verbose `extend()` calls.  Fragments that
//! have nothing to contribute (e.g. a routing fragment for a request without
//! a routing type) simply add zero messages.
//!
//! # Usage
//!
//! ```rust
//! use signpost_prompt::chain::PromptChain;
//! use signpost_core::generic::{GenericMessage, GenericRole};
//!
//! let messages: Vec<GenericMessage> = PromptChain::new()
//!     .with(GenericMessage::new("You are an orchestrator.".into(), GenericRole::System))
//!     .with(GenericMessage::new("Route this request.".into(), GenericRole::User))
//!     .build();
//!
//! assert_eq!(messages.len(), 2);
//! ```
//!
//! The generic parameter `Message` allows prompt pipelines to plug in their
//! own, richer message types while reusing the same chaining logic.
use signpost_core::template::IntoPrompt;

/// Lightweight container that accumulates messages produced by
/// [`IntoPrompt`] implementors.
///
/// The single `Vec` field is kept private so the only way to obtain the result
/// is through [`Self::build`], ensuring the builder API remains fluent.
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    ///
    /// The method takes `self` **by value** to encourage concise
    /// call-chaining:
    ///
    /// ```rust
    /// # use signpost_prompt::chain::PromptChain;
    /// # use signpost_core::generic::{GenericMessage, GenericRole};
    /// #
    /// # let msg = GenericMessage::new("hi".into(), GenericRole::User);
    /// let vec = PromptChain::new()
    ///     .with(msg)
    ///     .build();
    /// ```
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
