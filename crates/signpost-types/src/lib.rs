//! Reusable prompt fragments for the **signpost** workspace.
//!
//! Each fragment implements
//! [`IntoPrompt`](signpost_core::template::IntoPrompt) so it can be lined up
//! in a [`PromptChain`](signpost_prompt::chain::PromptChain) next to any
//! other prompt content.

pub mod fragments;
