//! Node indexing: turning qualifying content items into project records.
//!
//! The host invokes [`index_node`] once per content node it discovers. Most
//! invocations are no-ops - only nodes tagged `"Mdx"` whose owning source
//! file was discovered under the configured content path produce a record.

mod digest;
mod record;
pub mod slug;

pub use digest::ContentDigest;
pub use record::{DEFAULT_STATUS, Frontmatter, NodeInternal, PROJECT_MDX_TYPE, ProjectNode, ProjectRecord};

use crate::config::{Options, OptionsOverrides};
use crate::debug;
use crate::host::{ContentItem, MDX_NODE_TYPE, NodeActions, NodeIdentity, NodeLookup};
use anyhow::{Context, Result};

/// Capabilities the host supplies for one indexing invocation.
pub struct IndexContext<'a> {
    /// Node lookup (resolves the owning source-file record).
    pub lookup: &'a dyn NodeLookup,
    /// Deterministic identity derivation.
    pub identity: &'a dyn NodeIdentity,
    /// Node registration actions.
    pub actions: &'a mut dyn NodeActions,
}

/// Index one content node, producing at most one project record.
///
/// Returns `Ok(None)` when the node does not qualify (wrong type tag or
/// wrong source directory) - a filter, not an error. For qualifying nodes
/// the derived record is registered with the host, linked as a child of its
/// source-file record, and returned.
///
/// Options are re-resolved from defaults on every call; invocations share
/// no state.
pub fn index_node(
    item: &ContentItem,
    ctx: &mut IndexContext<'_>,
    overrides: &OptionsOverrides,
) -> Result<Option<ProjectRecord>> {
    // First filter: only Mdx document nodes qualify
    if item.node_type != MDX_NODE_TYPE {
        return Ok(None);
    }

    let options = Options::resolve(overrides);

    let file_node = ctx
        .lookup
        .get_node(&item.parent)
        .with_context(|| format!("source file node `{}` not found", item.parent))?;

    // Second filter: the file must come from the configured content source
    if file_node.source_instance_name != options.content_path {
        return Ok(None);
    }

    let slug = slug::derive(&options.base_url, &file_node.relative_path);
    let record = ProjectRecord::from_frontmatter(&item.frontmatter, &item.file_absolute_path, slug);

    let content = serde_json::to_string(&record).context("serialize project record")?;
    let digest = ContentDigest::of(content.as_bytes());

    // Identity is derived from the source node's id, so re-indexing the same
    // node yields the same child identity.
    let id = ctx
        .identity
        .create_node_id(&format!("{} >>> {PROJECT_MDX_TYPE}", item.id));

    debug!("index"; "project {} -> {}", item.id, record.slug);

    ctx.actions.create_node(ProjectNode {
        id: id.clone(),
        parent: item.id.clone(),
        children: Vec::new(),
        internal: NodeInternal {
            type_name: PROJECT_MDX_TYPE.to_string(),
            content_digest: digest.to_hex(),
            content,
            description: "Project records".to_string(),
        },
        record: record.clone(),
    });
    ctx.actions.create_parent_child_link(&file_node.id, &id);

    Ok(Some(record))
}

// ============================================================================
// tests
// ============================================================================
