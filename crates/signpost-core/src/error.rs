//! Unified error type exposed by **`signpost-core`**.
//!
//! Almost nothing in this crate can fail: a routing type that turns out not
//! to be a structured record is a *silent* fallback (empty output), not an
//! error.  The variants below cover the remaining cases where the supplied
//! type metadata is genuinely unusable and the caller must hear about it.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SignpostError>;

#[derive(Debug, Error)]
pub enum SignpostError {
    /// The derived schema still contains a `$ref` after inlining.  This
    /// happens for recursive types, which [`schemars`] cannot inline; such a
    /// type cannot be rendered as a routing shape and indicates a caller-side
    /// contract violation rather than a legitimately non-structured type.
    #[error("schema contains unresolved reference `{reference}`")]
    UnresolvedRef { reference: String },

    /// Failure while serialising a derived schema into a JSON value.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
