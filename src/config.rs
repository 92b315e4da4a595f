//! Fixed configuration for the sync run.
//!
//! The repository identifier, manifest header constants, and description
//! templates live here as explicit constants assembled into a [`SyncConfig`]
//! that is passed down to the updaters. Nothing in the sync pipeline reads
//! global state.

use std::path::PathBuf;

use crate::github::GitHubRepo;
use crate::manifest::profile::{AppTemplate, ManifestHeader, ManifestProfile, MergePolicy};

const REPO_OWNER: &str = "asrma7";
const REPO_NAME: &str = "LiveContainer-Installer";

const SOURCE_NAME: &str = "LcInstaller Repo";
const IDENTIFIER: &str = "site.ashutoshportfolio.lcinstaller";
const SOURCE_SUBTITLE: &str = "LiveContainer Installer Repo to install or update LcInstaller";
const ICON_URL: &str =
    "https://raw.githubusercontent.com/asrma7/LiveContainer-installer/main/screenshots/100.png";
const WEBSITE: &str = "https://github.com/asrma7/LiveContainer-Installer";
const INSTALLER_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/asrma7/LiveContainer-Installer/main/source.json";
const SIDESTORE_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/asrma7/LiveContainer-Installer/main/sidestore.json";

const APP_NAME: &str = "LcInstaller";
const DEVELOPER_NAME: &str = "Ashutosh Sharma";
const APP_SUBTITLE: &str = "App installer for LiveContainer";
const TINT_COLOR: &str = "#307CFF";
const INSTALLER_DESCRIPTION: &str = "Update of LiveContainer just got released!";
const SIDESTORE_DESCRIPTION: &str =
    "Install apps on LiveContainer from different sources with ease!";

/// One manifest file to keep in sync.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestTarget {
    pub path: PathBuf,
    pub profile: ManifestProfile,
}

/// Full configuration for one run: which repository to poll and which
/// manifest files to update from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    pub repo: GitHubRepo,
    pub targets: Vec<ManifestTarget>,
}

impl SyncConfig {
    /// The production configuration: the LcInstaller repository feeding
    /// `source.json` (installer manifest, versioned history) and
    /// `sidestore.json` (sidestore manifest, latest release only).
    pub fn lc_installer() -> Self {
        let header = |source_url: &str| ManifestHeader {
            name: SOURCE_NAME.to_string(),
            identifier: IDENTIFIER.to_string(),
            subtitle: SOURCE_SUBTITLE.to_string(),
            icon_url: ICON_URL.to_string(),
            website: WEBSITE.to_string(),
            source_url: source_url.to_string(),
        };

        let installer = ManifestProfile {
            header: header(INSTALLER_SOURCE_URL),
            app: AppTemplate {
                name: APP_NAME.to_string(),
                bundle_identifier: IDENTIFIER.to_string(),
                developer_name: DEVELOPER_NAME.to_string(),
                icon_url: ICON_URL.to_string(),
                localized_description: INSTALLER_DESCRIPTION.to_string(),
                subtitle: None,
                tint_color: None,
            },
            release_notes: false,
            merge: MergePolicy::UpsertByVersion,
        };

        let sidestore = ManifestProfile {
            header: header(SIDESTORE_SOURCE_URL),
            app: AppTemplate {
                name: APP_NAME.to_string(),
                bundle_identifier: IDENTIFIER.to_string(),
                developer_name: DEVELOPER_NAME.to_string(),
                icon_url: ICON_URL.to_string(),
                localized_description: SIDESTORE_DESCRIPTION.to_string(),
                subtitle: Some(APP_SUBTITLE.to_string()),
                tint_color: Some(TINT_COLOR.to_string()),
            },
            release_notes: true,
            merge: MergePolicy::ReplaceAll,
        };

        SyncConfig {
            repo: GitHubRepo {
                owner: REPO_OWNER.to_string(),
                repo: REPO_NAME.to_string(),
            },
            targets: vec![
                ManifestTarget {
                    path: PathBuf::from("source.json"),
                    profile: installer,
                },
                ManifestTarget {
                    path: PathBuf::from("sidestore.json"),
                    profile: sidestore,
                },
            ],
        }
    }
}

/// Minimal fixtures shared by unit tests across modules.
#[cfg(test)]
pub fn test_header() -> ManifestHeader {
    ManifestHeader {
        name: "Test Repo".to_string(),
        identifier: "com.example.test".to_string(),
        subtitle: "Test source".to_string(),
        icon_url: "https://example.com/icon.png".to_string(),
        website: "https://example.com".to_string(),
        source_url: "https://example.com/source.json".to_string(),
    }
}

#[cfg(test)]
pub fn test_profile() -> ManifestProfile {
    ManifestProfile {
        header: test_header(),
        app: AppTemplate {
            name: "TestApp".to_string(),
            bundle_identifier: "com.example.test".to_string(),
            developer_name: "Test Dev".to_string(),
            icon_url: "https://example.com/icon.png".to_string(),
            localized_description: "A test app".to_string(),
            subtitle: None,
            tint_color: None,
        },
        release_notes: false,
        merge: MergePolicy::UpsertByVersion,
    }
}

#[cfg(test)]
pub fn test_sidestore_profile() -> ManifestProfile {
    let mut profile = test_profile();
    profile.app.subtitle = Some("Test subtitle".to_string());
    profile.app.tint_color = Some("#307CFF".to_string());
    profile.release_notes = true;
    profile.merge = MergePolicy::ReplaceAll;
    profile
}
