//! Renders routing schema text from routing types.
//!
//! A *routing type* is a record whose members are mutually exclusive option
//! fields: the model is asked to populate exactly one of them.  Instead of
//! hand-maintaining the "return a routing object…" block in every prompt
//! template, this module derives it from the type itself, so the instruction
//! text can never drift from the actual shape of the routing record.
//!
//! For each option field the schema renderer produces a bullet with the field
//! name, a compact shape descriptor (the member names of the field's type)
//! and the field's doc-comment description.  The guidance renderer is a
//! shallower sibling used for shorter prompt fragments: names and
//! descriptions only, no shapes.
//!
//! Everything here is a pure function of the derived schema; calling a
//! renderer twice with the same type yields byte-identical output.

use schemars::schema::{InstanceType, RootSchema, Schema, SchemaObject, SingleOrVec};
use schemars::JsonSchema;

use crate::error::{Result, SignpostError};
use crate::introspect::derive_routing_schema;

/// Infrastructure fields that the LLM should not set; excluded from shape
/// output.  These are plumbing members carried on request records (context
/// threading, worktree state, merge bookkeeping) that the orchestrator fills
/// in itself.
///
/// The filter applies only when rendering the *shape* of an option field's
/// type — a routing type's own top-level option list is never filtered.
pub const INFRASTRUCTURE_FIELDS: [&str; 6] = [
    "contextId",
    "worktreeContext",
    "previousContext",
    "mergeDescriptor",
    "mergeAggregation",
    "metadata",
];

/// Generate the full "Return a routing object with exactly one of:" block
/// for a routing type.
///
/// Option fields appear in declaration order.  A type that is not a
/// structured record yields an empty string — the documented "nothing to
/// contribute" fallback, not an error.
///
/// # Example
///
/// ```
/// use schemars::JsonSchema;
/// use signpost_core::routing::generate_schema;
///
/// #[derive(JsonSchema)]
/// #[allow(dead_code)]
/// struct ReviewRouting {
///     /// Request changes from the author
///     request_changes: Option<String>,
///     approve: Option<bool>,
/// }
///
/// let text = generate_schema::<ReviewRouting>().unwrap();
/// assert_eq!(
///     text,
///     "Return a routing object with exactly one of:\n\
///      - **request_changes** — Request changes from the author\n\
///      - **approve**\n"
/// );
/// ```
pub fn generate_schema<T>() -> Result<String>
where
    T: JsonSchema + 'static,
{
    generate_schema_for(&derive_routing_schema::<T>())
}

/// Like [`generate_schema`], but for a caller-prepared root schema.
pub fn generate_schema_for(root: &RootSchema) -> Result<String> {
    let Some(routing) = structured_object(&root.schema)? else {
        return Ok(String::new());
    };

    let mut out = String::from("Return a routing object with exactly one of:\n");

    for (name, field) in option_fields(routing) {
        out.push_str("- **");
        out.push_str(name);
        out.push_str("**");

        if let Some(shape) = resolve_shape(field)? {
            out.push_str(": ");
            out.push_str(&shape);
        }

        let description = description_of(field);
        if !description.is_empty() {
            out.push_str(" — ");
            out.push_str(description);
        }
        out.push('\n');
    }

    Ok(out)
}

/// Generate the simpler routing options list used in guidance text.
///
/// Lists field names with their descriptions and deliberately omits the
/// shape segment; guidance fragments should stay short.
pub fn generate_guidance_options<T>() -> Result<String>
where
    T: JsonSchema + 'static,
{
    generate_guidance_options_for(&derive_routing_schema::<T>())
}

/// Like [`generate_guidance_options`], but for a caller-prepared root schema.
pub fn generate_guidance_options_for(root: &RootSchema) -> Result<String> {
    let Some(routing) = structured_object(&root.schema)? else {
        return Ok(String::new());
    };

    let mut out = String::from("**Routing options:**\n");

    for (name, field) in option_fields(routing) {
        out.push_str("- `");
        out.push_str(name);
        out.push('`');

        let description = description_of(field);
        if !description.is_empty() {
            out.push_str(" — ");
            out.push_str(description);
        }
        out.push('\n');
    }

    Ok(out)
}

/// Resolve the compact field-shape string for an option field's schema.
///
/// E.g. `Some("{ goal, phase, reason }")` for a structured type,
/// `Some("{}")` for a structured type with no externally visible members,
/// or `None` when the field's type is not a record at all (scalars, arrays,
/// unit types) and no shape segment should be rendered.
pub fn resolve_shape(field: &Schema) -> Result<Option<String>> {
    let obj = match field {
        Schema::Bool(_) => return Ok(None),
        Schema::Object(obj) => obj,
    };
    let Some(structured) = structured_object(obj)? else {
        return Ok(None);
    };

    let names: Vec<&str> = option_fields(structured)
        .map(|(name, _)| name.as_str())
        .filter(|name| !INFRASTRUCTURE_FIELDS.contains(name))
        .collect();

    if names.is_empty() {
        return Ok(Some("{}".to_owned()));
    }
    Ok(Some(format!("{{ {} }}", names.join(", "))))
}

/// Extract the description attached to a field schema.
///
/// Descriptions come from doc comments (or explicit
/// `#[schemars(description = …)]` attributes) on the field.  Returns the
/// literal value unmodified, or `""` when the field carries none.
pub fn description_of(field: &Schema) -> &str {
    match field {
        Schema::Bool(_) => "",
        Schema::Object(obj) => obj
            .metadata
            .as_ref()
            .and_then(|meta| meta.description.as_deref())
            .unwrap_or(""),
    }
}

/// View a schema object as a structured record, if it is one.
///
/// A schema that still carries a `$ref` after inlining cannot be inspected
/// and fails loudly; a schema that is simply not an object type is the
/// expected silent case and yields `None`.
fn structured_object(obj: &SchemaObject) -> Result<Option<&SchemaObject>> {
    if let Some(reference) = &obj.reference {
        return Err(SignpostError::UnresolvedRef {
            reference: reference.clone(),
        });
    }
    if has_object_type(obj) {
        Ok(Some(obj))
    } else {
        Ok(None)
    }
}

/// Whether the schema's instance type is (or includes) `object`.
///
/// Optional fields derive to a `[<type>, "null"]` type list, so both the
/// single and the list form must be checked.
fn has_object_type(obj: &SchemaObject) -> bool {
    match &obj.instance_type {
        Some(SingleOrVec::Single(single)) => **single == InstanceType::Object,
        Some(SingleOrVec::Vec(list)) => list.contains(&InstanceType::Object),
        None => false,
    }
}

/// Iterate a structured schema's properties in declaration order.
///
/// Relies on the `preserve_order` feature of [`schemars`]; the order is
/// user-visible in generated prompt text and must never be alphabetized.
fn option_fields(obj: &SchemaObject) -> impl Iterator<Item = (&String, &Schema)> {
    obj.object.iter().flat_map(|o| o.properties.iter())
}

#[cfg(test)]
mod tests {
    use schemars::JsonSchema;

    use super::*;

    #[derive(JsonSchema)]
    #[schemars(rename_all = "camelCase")]
    #[allow(dead_code)]
    struct PlanRequest {
        goal: String,
        context_id: String,
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct PlannerRouting {
        /// Describes a plan
        plan: Option<PlanRequest>,
        abort: Option<bool>,
    }

    #[test]
    fn schema_block_for_planner_routing() {
        let text = generate_schema::<PlannerRouting>().unwrap();
        assert_eq!(
            text,
            "Return a routing object with exactly one of:\n\
             - **plan**: { goal } — Describes a plan\n\
             - **abort**\n"
        );
    }

    #[test]
    fn guidance_options_for_planner_routing() {
        let text = generate_guidance_options::<PlannerRouting>().unwrap();
        assert_eq!(
            text,
            "**Routing options:**\n\
             - `plan` — Describes a plan\n\
             - `abort`\n"
        );
    }

    #[test]
    fn non_structured_types_render_nothing() {
        assert_eq!(generate_schema::<String>().unwrap(), "");
        assert_eq!(generate_schema::<u32>().unwrap(), "");
        assert_eq!(generate_guidance_options::<Vec<String>>().unwrap(), "");
    }

    #[derive(JsonSchema)]
    struct EmptyRouting {}

    #[test]
    fn empty_routing_type_renders_header_only() {
        assert_eq!(
            generate_schema::<EmptyRouting>().unwrap(),
            "Return a routing object with exactly one of:\n"
        );
        assert_eq!(
            generate_guidance_options::<EmptyRouting>().unwrap(),
            "**Routing options:**\n"
        );
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct OrderedRouting {
        zeta: Option<bool>,
        alpha: Option<bool>,
        middle: Option<bool>,
    }

    #[test]
    fn option_fields_keep_declaration_order() {
        let text = generate_schema::<OrderedRouting>().unwrap();
        assert_eq!(
            text,
            "Return a routing object with exactly one of:\n\
             - **zeta**\n\
             - **alpha**\n\
             - **middle**\n"
        );
    }

    #[derive(JsonSchema)]
    #[schemars(rename_all = "camelCase")]
    #[allow(dead_code)]
    struct PlumbingOnly {
        context_id: String,
        merge_descriptor: String,
        metadata: String,
    }

    #[test]
    fn all_infrastructure_members_collapse_to_empty_braces() {
        let root = derive_routing_schema::<PlumbingOnly>();
        let shape = resolve_shape(&Schema::Object(root.schema)).unwrap();
        assert_eq!(shape.as_deref(), Some("{}"));
    }

    #[derive(JsonSchema)]
    #[schemars(rename_all = "camelCase")]
    #[allow(dead_code)]
    struct MixedMembers {
        a: String,
        b: String,
        context_id: String,
    }

    #[test]
    fn infrastructure_members_are_filtered_from_shapes() {
        let root = derive_routing_schema::<MixedMembers>();
        let shape = resolve_shape(&Schema::Object(root.schema)).unwrap();
        assert_eq!(shape.as_deref(), Some("{ a, b }"));
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct MetaRouting {
        metadata: Option<bool>,
    }

    #[test]
    fn top_level_option_list_is_never_filtered() {
        // The infrastructure filter applies to nested shapes only; a routing
        // type may legitimately declare an option field named `metadata`.
        let text = generate_schema::<MetaRouting>().unwrap();
        assert_eq!(
            text,
            "Return a routing object with exactly one of:\n\
             - **metadata**\n"
        );
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Looper {
        again: Box<Looper>,
    }

    #[test]
    fn recursive_types_fail_loudly() {
        assert!(matches!(
            generate_schema::<Looper>(),
            Err(SignpostError::UnresolvedRef { .. })
        ));
    }

    #[test]
    fn renderers_are_idempotent() {
        let first = generate_schema::<PlannerRouting>().unwrap();
        let second = generate_schema::<PlannerRouting>().unwrap();
        assert_eq!(first, second);

        let first = generate_guidance_options::<PlannerRouting>().unwrap();
        let second = generate_guidance_options::<PlannerRouting>().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn description_defaults_to_empty() {
        assert_eq!(description_of(&Schema::Bool(true)), "");
    }
}
