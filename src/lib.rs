//! project-source - project showcase content source for static-site builds.
//!
//! This crate is a content-source plugin: the host build framework calls into
//! it at fixed lifecycle points and this crate answers with derived data. It
//! never parses files, renders content or writes output itself - all of that
//! stays on the host side.
//!
//! # Lifecycle
//!
//! ```text
//! host schema phase   -> schema::register_schema   (type declarations)
//! host index phase    -> node::index_node          (one call per content node)
//! host page phase     -> page::build_pages         (one call per site build)
//! ```
//!
//! Every entry point takes explicit capability objects ([`host`]) and an
//! [`config::OptionsOverrides`] value; there is no ambient global state and
//! options are re-resolved from defaults on every call.

pub mod config;
pub mod host;
#[doc(hidden)]
pub mod logger;
pub mod node;
pub mod page;
pub mod preset;
pub mod schema;

pub use config::{Options, OptionsOverrides};
pub use host::{ContentItem, NodeId, SourceFileNode};
pub use node::{Frontmatter, ProjectRecord, index_node};
pub use page::{RouteDescriptor, TemplateRef, build_pages};
pub use schema::register_schema;

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
