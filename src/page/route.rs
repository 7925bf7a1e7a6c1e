//! Route descriptors handed to the host page registry.

use crate::JsonMap;
use serde::Serialize;

/// Reference to a page template shipped with the downstream site.
///
/// The host resolves the reference to an actual component; this crate only
/// names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateRef(&'static str);

impl TemplateRef {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Template rendering a single project page.
pub const PROJECT_TEMPLATE: TemplateRef = TemplateRef::new("templates/project");

/// Template rendering the project listing page.
pub const PROJECT_LIST_TEMPLATE: TemplateRef = TemplateRef::new("templates/projects");

/// One page to generate: path, template and rendering context.
///
/// Ephemeral - produced during the page-creation phase and handed straight
/// to the host, never retained.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDescriptor {
    /// Final URL path of the page.
    pub path: String,
    pub template: TemplateRef,
    /// Data the template renders from.
    pub context: JsonMap,
}
