//! GraphQL schema extension for the `Project` type family.
//!
//! Declares an abstract `Project` interface and one concrete variant
//! `ProjectMdx` implementing it, all fields non-nullable. The concrete
//! variant cannot parse document bodies itself, so its `body` field is a
//! passthrough: resolution forwards to the parent rich-document node through
//! an injected accessor rather than runtime schema introspection.

use crate::host::{NodeId, SchemaActions};
use crate::node::PROJECT_MDX_TYPE;
use anyhow::Result;

/// Type declaration text submitted to the host schema.
pub const PROJECT_TYPE_DEFS: &str = "\
interface Project @nodeInterface {
  id: ID!
  title: String!
  status: String!
  start_date: Date!
  completed_date: Date!
  source: String!
  report: String!
  presentation: String!
  brief: String!
  slug: String!
  fileAbsolutePath: String!
  body: String!
}
type ProjectMdx implements Project & Node {
  id: ID!
  title: String!
  status: String!
  start_date: Date!
  completed_date: Date!
  source: String!
  report: String!
  presentation: String!
  brief: String!
  slug: String!
  fileAbsolutePath: String!
  body: String!
}";

// ============================================================================
// Body passthrough
// ============================================================================

/// Accessor fetching the rendered body of a rich-document node by id.
///
/// Injected by the host; this crate never parses document bodies.
pub trait BodyAccessor: Send + Sync {
    fn body(&self, document: &NodeId) -> Result<String>;
}

impl<F> BodyAccessor for F
where
    F: Fn(&NodeId) -> Result<String> + Send + Sync,
{
    fn body(&self, document: &NodeId) -> Result<String> {
        self(document)
    }
}

/// Resolver the host invokes with a record's parent document id.
pub type FieldResolver = Box<dyn Fn(&NodeId) -> Result<String> + Send + Sync>;

/// Override for the resolution of one field on a declared type.
pub struct FieldOverride {
    /// Type the override applies to.
    pub type_name: &'static str,
    /// Field name.
    pub field: &'static str,
    /// Declared field type.
    pub field_type: &'static str,
    /// Resolution function.
    pub resolve: FieldResolver,
}

impl std::fmt::Debug for FieldOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldOverride")
            .field("type_name", &self.type_name)
            .field("field", &self.field)
            .field("field_type", &self.field_type)
            .finish_non_exhaustive()
    }
}

/// Register the `Project` schema extension with the host.
///
/// Submits the type declarations and one `body` field override on the
/// concrete variant. Idempotent only if the host de-duplicates identical
/// declarations - that is not guaranteed here.
pub fn register_schema(schema: &mut dyn SchemaActions, body: impl BodyAccessor + 'static) {
    schema.create_types(PROJECT_TYPE_DEFS);
    schema.extend_type(FieldOverride {
        type_name: PROJECT_MDX_TYPE,
        field: "body",
        field_type: "String!",
        resolve: Box::new(move |document| body.body(document)),
    });
}

// ============================================================================
// tests
// ============================================================================
