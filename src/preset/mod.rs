//! Default downstream site configuration.
//!
//! A site embedding this plugin starts from the preset returned by
//! [`site_preset`]: placeholder site metadata plus one content source
//! declaration pointing at the resolved content path. The embedding site is
//! expected to override the metadata.

use crate::config::{Options, OptionsOverrides};
use serde::{Deserialize, Serialize};

/// Social media handles shown by the downstream site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    pub facebook: String,
    pub twitter: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

impl Default for Social {
    fn default() -> Self {
        let handle = "john-doe".to_string();
        Self {
            facebook: handle.clone(),
            twitter: handle.clone(),
            email: handle.clone(),
            linkedin: handle.clone(),
            github: handle,
        }
    }
}

/// Site metadata defaults for a site embedding this plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteMetadata {
    pub app_name: String,
    pub title: String,
    pub author: String,
    pub site_url: String,
    pub base_url: String,
    pub description: String,
    pub social: Social,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            app_name: "project-source package".to_string(),
            title: "project-source package".to_string(),
            author: "John Doe".to_string(),
            site_url: "/".to_string(),
            base_url: "/".to_string(),
            description: "Demonstration site for the project-source content plugin".to_string(),
            social: Social::default(),
        }
    }
}

/// One content source the host should index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDecl {
    /// Source instance name (matched against during indexing).
    pub name: String,
    /// Directory to discover content in.
    pub path: String,
}

/// Complete preset handed to the downstream site build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePreset {
    pub site_metadata: SiteMetadata,
    pub sources: Vec<SourceDecl>,
}

/// Build the default site preset for the given option overrides.
///
/// Pure: resolves options the same way every lifecycle call does and
/// derives the content source declaration from the resolved content path.
pub fn site_preset(overrides: &OptionsOverrides) -> SitePreset {
    let options = Options::resolve(overrides);
    SitePreset {
        site_metadata: SiteMetadata::default(),
        sources: vec![SourceDecl {
            name: options.content_path.clone(),
            path: options.content_path,
        }],
    }
}

// ============================================================================
// tests
// ============================================================================
