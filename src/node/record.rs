//! Project record and frontmatter shapes.

use crate::JsonMap;
use crate::host::NodeId;
use serde::{Deserialize, Serialize};

/// Type tag under which derived records are registered with the host.
pub const PROJECT_MDX_TYPE: &str = "ProjectMdx";

/// Default project status when frontmatter omits one.
pub const DEFAULT_STATUS: &str = "Completed";

// ============================================================================
// Frontmatter
// ============================================================================

/// Frontmatter of a project document.
///
/// Every field is optional - absence is never an error, each falls back to a
/// literal default when the record is built. Unknown keys land in `extra`
/// and are carried along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    pub title: Option<String>,
    /// Project status, e.g. "Completed" or "Ongoing".
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub completed_date: Option<String>,
    /// Link to the project's source repository.
    pub source: Option<String>,
    /// Link to the project report.
    pub report: Option<String>,
    /// Link to the project presentation.
    pub presentation: Option<String>,
    /// One-line project description.
    pub brief: Option<String>,
    /// Whether the generated page shows a table of contents.
    pub show_toc: Option<bool>,
    /// Additional user-defined fields (raw JSON).
    #[serde(flatten)]
    pub extra: JsonMap,
}

// ============================================================================
// ProjectRecord
// ============================================================================

/// Derived project record. Created once per qualifying content item during
/// the indexing phase, immutable thereafter.
///
/// Serialized field names mirror the declared schema, so the JSON form of
/// this struct is also the node content handed to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub status: String,
    pub start_date: Option<String>,
    pub completed_date: Option<String>,
    pub source: String,
    pub report: String,
    pub presentation: String,
    pub brief: String,
    pub show_toc: bool,
    #[serde(rename = "fileAbsolutePath")]
    pub file_absolute_path: String,
    pub slug: String,
}

impl ProjectRecord {
    /// Build a record from frontmatter, filling in the literal defaults.
    pub fn from_frontmatter(frontmatter: &Frontmatter, file_absolute_path: &str, slug: String) -> Self {
        Self {
            title: frontmatter.title.clone().unwrap_or_default(),
            status: frontmatter
                .status
                .clone()
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            start_date: frontmatter.start_date.clone(),
            completed_date: frontmatter.completed_date.clone(),
            source: frontmatter.source.clone().unwrap_or_default(),
            report: frontmatter.report.clone().unwrap_or_default(),
            presentation: frontmatter.presentation.clone().unwrap_or_default(),
            brief: frontmatter.brief.clone().unwrap_or_default(),
            show_toc: frontmatter.show_toc.unwrap_or(false),
            file_absolute_path: file_absolute_path.to_string(),
            slug,
        }
    }
}

// ============================================================================
// ProjectNode
// ============================================================================

/// Host bookkeeping attached to a registered node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInternal {
    /// Registered type tag (always [`PROJECT_MDX_TYPE`]).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Stable digest of `content`, used by the host for change detection.
    pub content_digest: String,
    /// Canonical JSON serialization of the record.
    pub content: String,
    pub description: String,
}

/// A project record packaged for registration with the host node store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectNode {
    /// Identity derived deterministically from the source node's identity.
    pub id: NodeId,
    /// The source content item this record was derived from.
    pub parent: NodeId,
    pub children: Vec<NodeId>,
    pub internal: NodeInternal,
    #[serde(flatten)]
    pub record: ProjectRecord,
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults() {
        let record =
            ProjectRecord::from_frontmatter(&Frontmatter::default(), "/abs/path", "/p/".into());
        assert_eq!(record.title, "");
        assert_eq!(record.status, "Completed");
        assert!(record.start_date.is_none());
        assert!(record.completed_date.is_none());
        assert_eq!(record.source, "");
        assert!(!record.show_toc);
        assert_eq!(record.file_absolute_path, "/abs/path");
        assert_eq!(record.slug, "/p/");
    }

    #[test]
    fn test_record_from_full_frontmatter() {
        let frontmatter = Frontmatter {
            title: Some("Alpha".into()),
            status: Some("Ongoing".into()),
            start_date: Some("2023-01-01".into()),
            completed_date: Some("2023-06-01".into()),
            source: Some("https://example.com/src".into()),
            report: Some("report.pdf".into()),
            presentation: Some("slides.pdf".into()),
            brief: Some("An alpha project".into()),
            show_toc: Some(true),
            extra: crate::JsonMap::new(),
        };
        let record = ProjectRecord::from_frontmatter(&frontmatter, "/abs", "/alpha".into());
        assert_eq!(record.title, "Alpha");
        assert_eq!(record.status, "Ongoing");
        assert_eq!(record.start_date.as_deref(), Some("2023-01-01"));
        assert!(record.show_toc);
    }

    #[test]
    fn test_frontmatter_extra_fields() {
        let json = r#"{"title": "Alpha", "weight": 3, "tags": ["a"]}"#;
        let frontmatter: Frontmatter = serde_json::from_str(json).unwrap();
        assert_eq!(frontmatter.title.as_deref(), Some("Alpha"));
        assert_eq!(frontmatter.extra.get("weight").and_then(|v| v.as_i64()), Some(3));
    }

    #[test]
    fn test_record_serializes_schema_field_names() {
        let record =
            ProjectRecord::from_frontmatter(&Frontmatter::default(), "/abs", "/p".into());
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("fileAbsolutePath").is_some());
        assert!(json.get("show_toc").is_some());
        assert!(json.get("start_date").is_some());
    }
}
