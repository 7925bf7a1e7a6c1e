//! Page building: one route per indexed project plus one listing route.
//!
//! Invoked once per site build. Reads the indexed project collection back
//! through the host's query capability and registers route descriptors; it
//! never writes files or renders templates itself.

mod route;

pub use route::{PROJECT_LIST_TEMPLATE, PROJECT_TEMPLATE, RouteDescriptor, TemplateRef};

use crate::JsonMap;
use crate::config::{Options, OptionsOverrides};
use crate::host::{PageActions, QueryRunner};
use crate::log;
use anyhow::{Context, Result};
use serde_json::Value;

/// Fixed read-only query over the indexed project collection.
pub const ALL_PROJECTS_QUERY: &str = "\
query AllProjectsQuery {
  allProject {
    edges {
      node {
        id
        slug
        title
        start_date
        completed_date
        brief
        source
        report
        presentation
        status
        fileAbsolutePath
      }
    }
  }
}";

/// Build all project pages.
///
/// Emits one route per project row in query order, then exactly one listing
/// route at the configured base URL whose context carries the full result
/// set. Ordering is caller-determined - the query's result order is passed
/// through, never re-sorted here.
///
/// Query failure or an unexpected result shape propagates as an error; no
/// local recovery is attempted.
pub fn build_pages(
    runner: &dyn QueryRunner,
    actions: &mut dyn PageActions,
    overrides: &OptionsOverrides,
) -> Result<()> {
    let options = Options::resolve(overrides);

    let result = runner.query(ALL_PROJECTS_QUERY)?;
    let edges = result["data"]["allProject"]["edges"]
        .as_array()
        .context("query result missing allProject.edges")?;

    let mut projects = Vec::with_capacity(edges.len());
    for edge in edges {
        let node = edge.get("node").context("query edge missing node")?;
        let path = node["slug"]
            .as_str()
            .context("project row missing slug")?
            .to_string();

        let mut context = JsonMap::new();
        context.insert("id".to_string(), node["id"].clone());
        context.insert("fileAbsolutePath".to_string(), node["fileAbsolutePath"].clone());

        actions.create_page(RouteDescriptor {
            path,
            template: PROJECT_TEMPLATE,
            context,
        });
        projects.push(node.clone());
    }

    log!("pages"; "projects base url: {}", options.base_url);

    let mut context = JsonMap::new();
    context.insert("projects".to_string(), Value::Array(projects));
    actions.create_page(RouteDescriptor {
        path: options.base_url,
        template: PROJECT_LIST_TEMPLATE,
        context,
    });

    Ok(())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use serde_json::json;

    struct FixedQuery(Value);

    impl QueryRunner for FixedQuery {
        fn query(&self, query: &str) -> Result<Value> {
            assert!(query.contains("allProject"));
            Ok(self.0.clone())
        }
    }

    struct FailingQuery;

    impl QueryRunner for FailingQuery {
        fn query(&self, _query: &str) -> Result<Value> {
            bail!("query engine unavailable")
        }
    }

    #[derive(Default)]
    struct RecordingPages(Vec<RouteDescriptor>);

    impl PageActions for RecordingPages {
        fn create_page(&mut self, page: RouteDescriptor) {
            self.0.push(page);
        }
    }

    fn row(id: &str, slug: &str) -> Value {
        json!({
            "id": id,
            "slug": slug,
            "title": id,
            "start_date": "2023-01-01",
            "completed_date": "2023-06-01",
            "brief": "",
            "source": "",
            "report": "",
            "presentation": "",
            "status": "Completed",
            "fileAbsolutePath": format!("/site/content/projects{slug}.mdx"),
        })
    }

    fn query_result(rows: &[Value]) -> Value {
        let edges: Vec<Value> = rows.iter().map(|node| json!({"node": node})).collect();
        json!({"data": {"allProject": {"edges": edges}}})
    }

    #[test]
    fn test_emits_one_route_per_project_plus_listing() {
        let rows = vec![row("p1", "/alpha"), row("p2", "/beta")];
        let runner = FixedQuery(query_result(&rows));
        let mut pages = RecordingPages::default();

        build_pages(&runner, &mut pages, &OptionsOverrides::none()).unwrap();

        assert_eq!(pages.0.len(), 3);

        // Query order is preserved
        assert_eq!(pages.0[0].path, "/alpha");
        assert_eq!(pages.0[0].template, PROJECT_TEMPLATE);
        assert_eq!(pages.0[0].context["id"], "p1");
        assert_eq!(
            pages.0[0].context["fileAbsolutePath"],
            "/site/content/projects/alpha.mdx"
        );
        assert_eq!(pages.0[1].path, "/beta");

        // Listing route is last, at the base URL, with all rows verbatim
        let listing = &pages.0[2];
        assert_eq!(listing.path, "/");
        assert_eq!(listing.template, PROJECT_LIST_TEMPLATE);
        assert_eq!(listing.context["projects"], json!(rows));
    }

    #[test]
    fn test_listing_path_uses_base_url_override() {
        let runner = FixedQuery(query_result(&[]));
        let mut pages = RecordingPages::default();
        let overrides = OptionsOverrides::from_value(json!({"baseUrl": "/work/"}));

        build_pages(&runner, &mut pages, &overrides).unwrap();

        assert_eq!(pages.0.len(), 1);
        assert_eq!(pages.0[0].path, "/work/");
        assert_eq!(pages.0[0].context["projects"], json!([]));
    }

    #[test]
    fn test_query_failure_propagates() {
        let mut pages = RecordingPages::default();
        let result = build_pages(&FailingQuery, &mut pages, &OptionsOverrides::none());
        assert!(result.is_err());
        assert!(pages.0.is_empty());
    }

    #[test]
    fn test_malformed_shape_propagates() {
        let runner = FixedQuery(json!({"data": {}}));
        let mut pages = RecordingPages::default();
        let result = build_pages(&runner, &mut pages, &OptionsOverrides::none());
        assert!(result.is_err());
    }

    #[test]
    fn test_row_without_slug_propagates() {
        let runner = FixedQuery(json!({
            "data": {"allProject": {"edges": [{"node": {"id": "p1"}}]}}
        }));
        let mut pages = RecordingPages::default();
        assert!(build_pages(&runner, &mut pages, &OptionsOverrides::none()).is_err());
    }

    #[test]
    fn test_query_projection_is_fixed() {
        for field in [
            "id",
            "slug",
            "title",
            "start_date",
            "completed_date",
            "brief",
            "source",
            "report",
            "presentation",
            "status",
            "fileAbsolutePath",
        ] {
            assert!(ALL_PROJECTS_QUERY.contains(field), "missing {field}");
        }
    }
}
