//! Input node shapes supplied by the host.

use super::NodeId;
use crate::node::Frontmatter;
use serde::{Deserialize, Serialize};

/// One unit of source content discovered by the host indexing process.
///
/// Read-only input to [`crate::node::index_node`]. The `node_type` tag
/// decides whether this crate handles the item at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    /// Host-assigned identity of this node.
    pub id: NodeId,
    /// Internal type tag (only `"Mdx"` items qualify).
    pub node_type: String,
    /// Identity of the owning source-file record.
    pub parent: NodeId,
    /// Absolute path of the backing file.
    pub file_absolute_path: String,
    /// Metadata block parsed out of the document by the host.
    #[serde(default)]
    pub frontmatter: Frontmatter,
}

/// The source-file record owning a content item.
///
/// `relative_path` is host-derived: relative to the source directory,
/// extension stripped, with a leading `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFileNode {
    pub id: NodeId,
    /// Name of the source instance this file was discovered under.
    pub source_instance_name: String,
    /// Extension-stripped path relative to the source root (e.g. `/alpha/index`).
    pub relative_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_item_deserialize_without_frontmatter() {
        let json = r#"{
            "id": "node-1",
            "node_type": "Mdx",
            "parent": "file-1",
            "file_absolute_path": "/site/content/projects/alpha/index.mdx"
        }"#;
        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.node_type, "Mdx");
        assert!(item.frontmatter.title.is_none());
    }
}
