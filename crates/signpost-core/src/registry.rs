//! Per-request-type lookup of routing types.
//!
//! A workflow node receives many different request types, and each request
//! type answers with its own routing record.  The registry holds that
//! mapping so prompt-assembly code can ask "which routing schema applies to
//! *this* request?" without knowing the concrete types involved.
//!
//! The mapping is built once at startup with the fluent [`RoutingRegistry::register`]
//! call and is read-only afterwards.  An unregistered request type is not an
//! error — lookups return `None` and the caller contributes nothing to the
//! prompt.
//!
//! ```
//! use schemars::JsonSchema;
//! use signpost_core::registry::RoutingRegistry;
//!
//! struct PlanRequest;
//!
//! #[derive(JsonSchema)]
//! #[allow(dead_code)]
//! struct PlanRouting {
//!     /// Accept the plan as-is
//!     accept: Option<bool>,
//! }
//!
//! let registry = RoutingRegistry::new().register::<PlanRequest, PlanRouting>();
//!
//! let entry = registry.routing_for_type::<PlanRequest>().unwrap();
//! assert!(entry.schema_text().unwrap().starts_with("Return a routing object"));
//! assert!(registry.routing_for_type::<String>().is_none());
//! ```

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use schemars::JsonSchema;

use crate::error::Result;
use crate::routing::{generate_guidance_options, generate_schema};

/// One registered request→routing association.
///
/// The schema and guidance generators are captured as monomorphized function
/// pointers at registration time, so an entry can render text without the
/// registry ever naming the routing type again.
pub struct RoutingEntry {
    routing_type: &'static str,
    schema: fn() -> Result<String>,
    guidance: fn() -> Result<String>,
}

impl RoutingEntry {
    /// Fully qualified name of the routing type, for diagnostics and log
    /// lines. Never parsed.
    pub fn routing_type(&self) -> &'static str {
        self.routing_type
    }

    /// Render the full routing schema block for this entry.
    pub fn schema_text(&self) -> Result<String> {
        (self.schema)()
    }

    /// Render the condensed guidance options list for this entry.
    pub fn guidance_text(&self) -> Result<String> {
        (self.guidance)()
    }
}

/// Maps request types to the routing type the model should answer with.
#[derive(Default)]
pub struct RoutingRegistry {
    entries: HashMap<TypeId, RoutingEntry>,
}

impl RoutingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate request type `Req` with routing type `Routing`.
    ///
    /// Takes `self` by value so registrations chain fluently.  Registering
    /// the same request type twice replaces the earlier association.
    pub fn register<Req, Routing>(mut self) -> Self
    where
        Req: Any,
        Routing: JsonSchema + 'static,
    {
        self.entries.insert(
            TypeId::of::<Req>(),
            RoutingEntry {
                routing_type: type_name::<Routing>(),
                schema: generate_schema::<Routing>,
                guidance: generate_guidance_options::<Routing>,
            },
        );
        self
    }

    /// Look up the routing entry for a request value.
    ///
    /// `None` means no routing type is registered for the request's concrete
    /// type; the caller treats that as "nothing to contribute".
    pub fn routing_for(&self, request: &dyn Any) -> Option<&RoutingEntry> {
        self.entries.get(&request.type_id())
    }

    /// Look up the routing entry for a request type known at compile time.
    pub fn routing_for_type<Req>(&self) -> Option<&RoutingEntry>
    where
        Req: Any,
    {
        self.entries.get(&TypeId::of::<Req>())
    }

    /// Number of registered request types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no associations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
