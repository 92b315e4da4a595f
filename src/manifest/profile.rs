//! Per-manifest configuration: static fields and merge behavior.
//!
//! The two manifest flavors share the whole load/derive/persist pipeline and
//! differ only in constants and in how a new entry lands in the apps list, so
//! one profile type parameterizes a single updater instead of two
//! near-duplicate ones.

/// How a freshly built entry is merged into the apps list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Remove any entry with the same version, then append the new one.
    /// Entries for other versions are retained.
    UpsertByVersion,
    /// Discard the whole list and keep only the new entry.
    ReplaceAll,
}

/// Static top-level fields of a manifest document.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestHeader {
    pub name: String,
    pub identifier: String,
    pub subtitle: String,
    pub icon_url: String,
    pub website: String,
    pub source_url: String,
}

/// Static fields of an app entry. Everything except the per-release data
/// (version, date, download URL, size, release notes).
#[derive(Debug, Clone, PartialEq)]
pub struct AppTemplate {
    pub name: String,
    pub bundle_identifier: String,
    pub developer_name: String,
    pub icon_url: String,
    pub localized_description: String,
    pub subtitle: Option<String>,
    pub tint_color: Option<String>,
}

/// Everything that distinguishes one manifest flavor from the other.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestProfile {
    pub header: ManifestHeader,
    pub app: AppTemplate,
    /// Whether entries carry a sanitized `versionDescription` built from the
    /// release notes.
    pub release_notes: bool,
    pub merge: MergePolicy,
}
