//! Prompt fragments shipped with the workspace.

mod routing_options;
mod routing_schema;
mod static_fragment;

pub use routing_options::RoutingOptionsFragment;
pub use routing_schema::RoutingSchemaFragment;
pub use static_fragment::StaticFragment;
