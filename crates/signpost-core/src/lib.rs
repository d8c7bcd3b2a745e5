//! Core building blocks of the **signpost** workspace.
//!
//! The crate answers exactly one question: *given a routing type, what text
//! do we inject into the prompt so the model knows which single option field
//! to populate?*  Everything here is a pure, synchronous transformation over
//! immutable [`schemars`] type metadata — no I/O, no shared state, nothing
//! to lock.
//!
//! * [`routing`] – the schema and guidance renderers plus the shape resolver.
//! * [`introspect`] – turns a Rust type into the inlined JSON Schema the
//!   renderers walk.
//! * [`registry`] – maps request types to their routing types.
//! * [`generic`] / [`template`] – provider-agnostic message plumbing shared
//!   with the fragment crates.

pub mod error;
pub mod generic;
pub mod introspect;
pub mod registry;
pub mod routing;
pub mod template;

pub use error::{Result, SignpostError};
pub use registry::{RoutingEntry, RoutingRegistry};
