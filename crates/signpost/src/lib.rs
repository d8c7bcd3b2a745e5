//! # `signpost` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the three
//! building-block crates in the workspace
//!
//! | Crate                 | What it provides                                                              |
//! |-----------------------|-------------------------------------------------------------------------------|
//! | **`signpost-core`**   | Routing-schema renderers, shape resolver, request→routing registry, errors    |
//! | **`signpost-prompt`** | Ergonomic helpers for building and chaining markdown prompt fragments         |
//! | **`signpost-types`**  | Reusable fragments (`RoutingSchemaFragment`, `RoutingOptionsFragment`, …)     |
//!
//! ## What problem does this solve?
//!
//! Agent workflows that ask an LLM for a *routing decision* — "populate
//! exactly one of these option fields" — need the prompt to describe the
//! routing record accurately.  Maintaining that description by hand in every
//! template means it silently rots whenever the record changes.  `signpost`
//! derives the description from the type itself:
//!
//! ```text
//! Return a routing object with exactly one of:
//! - **plan**: { goal } — Describes a plan
//! - **abort**
//! ```
//!
//! ## Design philosophy
//!
//! * **Pure transformations** – every renderer is a stateless function of
//!   [`schemars`]-derived type metadata; no I/O, nothing to lock.
//! * **No procedural macros of our own** – the existing `#[derive(JsonSchema)]`
//!   carries all the metadata we need, including doc-comment descriptions
//!   and declaration order.
//! * **Silent when there is nothing to say** – a non-structured routing type
//!   or an unregistered request renders as *no output*, never as an error.
//!
//! ## Quick example
//!
//! ```rust
//! use schemars::JsonSchema;
//! use signpost::routing::generate_schema;
//!
//! #[derive(JsonSchema)]
//! #[allow(dead_code)]
//! struct OrchestratorRouting {
//!     /// Kick off a planning phase
//!     plan: Option<bool>,
//!     /// Stop the workflow
//!     abort: Option<bool>,
//! }
//!
//! let block = generate_schema::<OrchestratorRouting>()?;
//! assert!(block.starts_with("Return a routing object with exactly one of:"));
//! # Ok::<(), signpost::SignpostError>(())
//! ```
//!
//! ## Crate contents
//!
//! The `pub use` statements below simply forward the public API of the
//! individual crates so users can write `signpost::RoutingRegistry` instead
//! of juggling three separate dependencies.

pub use signpost_core::*;
pub use signpost_prompt as prompt;
pub use signpost_types as types;
