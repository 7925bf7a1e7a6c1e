//! Host capability surface.
//!
//! The host build framework owns the node store, the query engine and the
//! page registry. This crate never reaches into any of that directly: each
//! lifecycle entry point receives exactly the capabilities it needs as
//! explicit trait objects, so every invocation is independent and there is no
//! shared mutable state between calls.

mod id;
mod item;

pub use id::NodeId;
pub use item::{ContentItem, SourceFileNode};

use crate::node::ProjectNode;
use crate::page::RouteDescriptor;
use crate::schema::FieldOverride;
use anyhow::Result;

/// Type tag the host assigns to Markdown-like document nodes.
pub const MDX_NODE_TYPE: &str = "Mdx";

// ============================================================================
// Capabilities
// ============================================================================

/// Look up a node's owning source-file record by id.
pub trait NodeLookup {
    fn get_node(&self, id: &NodeId) -> Option<SourceFileNode>;
}

/// Derive stable node identities.
///
/// Must be deterministic: equal seeds yield equal ids, so re-indexing the
/// same source node is idempotent at the identity level.
pub trait NodeIdentity {
    fn create_node_id(&self, seed: &str) -> NodeId;
}

/// Node-registration actions available during the indexing phase.
pub trait NodeActions {
    /// Register a derived project node with the host store.
    fn create_node(&mut self, node: ProjectNode);

    /// Link a derived node as a child of its source-file record.
    fn create_parent_child_link(&mut self, parent: &NodeId, child: &NodeId);
}

/// Page-registration actions available during the page-creation phase.
pub trait PageActions {
    fn create_page(&mut self, page: RouteDescriptor);
}

/// Execute a read-only query against the host's indexed node collection.
///
/// The result is GraphQL-shaped JSON; callers index directly into the
/// expected shape and let any mismatch propagate as an error.
pub trait QueryRunner {
    fn query(&self, query: &str) -> Result<serde_json::Value>;
}

/// Schema-declaration actions available during the schema phase.
pub trait SchemaActions {
    /// Submit a block of type declaration text to the host schema.
    fn create_types(&mut self, type_defs: &str);

    /// Override the resolution of a single field on a declared type.
    fn extend_type(&mut self, field: FieldOverride);
}
