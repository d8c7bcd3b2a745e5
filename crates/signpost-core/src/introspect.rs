//! Helpers for turning Rust type information into the JSON Schema form the
//! routing renderers walk.  The schema is produced with [`schemars`] and is
//! fully **inlined**: option-field subschemas are embedded in place so the
//! shape resolver never has to chase `$ref` pointers into a definitions map.
//!
//! The abstraction is intentionally **very small**: if you need a more
//! sophisticated setup (e.g. `$ref`-based schemas, custom serialization
//! logic) you can always bypass this helper and build the schema manually.

use schemars::{r#gen::SchemaSettings, schema::RootSchema, JsonSchema, SchemaGenerator};
use serde_json::Value;

use crate::error::Result;

/// Derive the inlined draft-07 schema for a routing type `T`.
///
/// Subschemas are inlined because the routing renderers read a field's
/// member names directly off its property schema.  Recursive types cannot
/// be inlined and keep a `$ref`; the renderers surface that as
/// [`crate::SignpostError::UnresolvedRef`].
///
/// # Example
///
/// ```
/// use signpost_core::introspect::derive_routing_schema;
/// use schemars::JsonSchema;
///
/// #[derive(JsonSchema)]
/// struct Routing { plan: Option<String> }
///
/// let root = derive_routing_schema::<Routing>();
/// assert!(root.schema.object.is_some());
/// ```
pub fn derive_routing_schema<T>() -> RootSchema
where
    T: JsonSchema + 'static,
{
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    generator.into_root_schema_for::<T>()
}

/// Derive the inlined schema for `T` as a plain JSON value.
///
/// Handy when the same routing type is also shipped to a provider that
/// accepts a machine-readable schema (e.g. structured-output response
/// formats) alongside the rendered instruction text.
pub fn routing_schema_json<T>() -> Result<Value>
where
    T: JsonSchema + 'static,
{
    let root = derive_routing_schema::<T>();
    Ok(serde_json::to_value(root)?)
}
