//! The seam between *things that produce prompt text* and *things that
//! assemble prompts*.
//!
//! Routing fragments, static instruction blocks and whole prompt documents
//! all reduce to the same contract: consume yourself, hand back an ordered
//! list of chat messages.  Keeping the `Message` type associated (rather
//! than fixed to [`crate::generic::GenericMessage`]) lets a richer pipeline
//! plug in its own message struct without dynamic dispatch.

/// Converts a value into a series of chat messages.
///
/// Fragment crates typically use [`crate::generic::GenericMessage`], but a
/// prompt pipeline can require its own richer struct.  By making the
/// `Message` type an **associated type** we keep the trait flexible without
/// resorting to dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    ///
    /// Returning an empty `Vec` is the idiomatic "nothing to contribute"
    /// answer; callers concatenate whatever they receive.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// Convenience implementation so a single [`crate::generic::GenericMessage`]
/// can be passed directly to a prompt chain without wrapping it in a struct.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
