//! Helpers for composing markdown prompt fragments.
//!
//! * [`builder`] – a fluent [`builder::PromptBuilder`] for assembling
//!   markdown text line by line.
//! * [`chain`] – [`chain::PromptChain`], which concatenates anything
//!   implementing [`signpost_core::template::IntoPrompt`] into one message
//!   list.

pub mod builder;
pub mod chain;

pub use builder::PromptBuilder;
pub use chain::PromptChain;
