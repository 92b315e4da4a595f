//! App-catalog manifest documents.
//!
//! A manifest is a JSON file consumed by AltStore/SideStore-style installer
//! clients: a static header describing the source plus an `apps` list of
//! installable versions. Field names on the wire are camelCase with the
//! `URL` suffix fully capitalized, hence the explicit renames.

pub mod entry;
pub mod profile;

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use self::profile::ManifestHeader;

/// One installable app version inside a manifest.
///
/// The optional fields only appear in the sidestore-style manifest; they are
/// skipped during serialization so the installer-style manifest keeps its
/// exact key set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppEntry {
    pub name: String,
    #[serde(rename = "bundleIdentifier")]
    pub bundle_identifier: String,
    #[serde(rename = "developerName")]
    pub developer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub version: String,
    #[serde(rename = "versionDate")]
    pub version_date: String,
    #[serde(rename = "versionDescription", skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,
    #[serde(rename = "downloadURL")]
    pub download_url: String,
    #[serde(rename = "localizedDescription")]
    pub localized_description: String,
    #[serde(rename = "iconURL")]
    pub icon_url: String,
    #[serde(rename = "tintColor", skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<String>,
    pub size: u64,
}

/// A whole manifest file: static source header plus the apps list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    pub name: String,
    pub identifier: String,
    pub subtitle: String,
    #[serde(rename = "iconURL")]
    pub icon_url: String,
    pub website: String,
    #[serde(rename = "sourceURL")]
    pub source_url: String,
    pub apps: Vec<AppEntry>,
}

impl ManifestDocument {
    /// Creates a fresh document from the static header, with no apps.
    pub fn from_header(header: &ManifestHeader) -> Self {
        ManifestDocument {
            name: header.name.clone(),
            identifier: header.identifier.clone(),
            subtitle: header.subtitle.clone(),
            icon_url: header.icon_url.clone(),
            website: header.website.clone(),
            source_url: header.source_url.clone(),
            apps: Vec::new(),
        }
    }

    /// Loads the manifest at `path`, or synthesizes a fresh one.
    ///
    /// A missing file and an unparsable file are treated the same way: the
    /// document is rebuilt from the header constants and the old content is
    /// overwritten on the next save.
    pub fn load_or_create(path: &Path, header: &ManifestHeader) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::from_header(header),
        };

        match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(
                    "Manifest at {} is not valid JSON ({}); recreating it",
                    path.display(),
                    e
                );
                Self::from_header(header)
            }
        }
    }

    /// Rewrites the manifest file wholesale, pretty-printed with 2-space
    /// indentation.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write manifest to {}", path.display()))?;
        Ok(())
    }
}
