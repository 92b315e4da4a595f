//! The sync pipeline: fetch the latest release once, then update every
//! configured manifest from it.

use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::config::SyncConfig;
use crate::github::{GetReleases, Release};
use crate::manifest::entry::build_entry;
use crate::manifest::profile::{ManifestProfile, MergePolicy};
use crate::manifest::{AppEntry, ManifestDocument};

/// Merges a freshly built entry into the apps list.
pub fn apply_entry(doc: &mut ManifestDocument, entry: AppEntry, policy: MergePolicy) {
    match policy {
        MergePolicy::UpsertByVersion => {
            doc.apps.retain(|app| app.version != entry.version);
            doc.apps.push(entry);
        }
        MergePolicy::ReplaceAll => {
            doc.apps = vec![entry];
        }
    }
}

/// Updates one manifest file from the fetched release.
///
/// An absent release is a soft condition: a notice is logged and the file is
/// left untouched. Otherwise the document is loaded (or synthesized), the new
/// entry merged in per the profile's policy, and the file rewritten.
#[tracing::instrument(skip(profile, release))]
pub fn update_manifest(
    path: &Path,
    profile: &ManifestProfile,
    release: Option<&Release>,
) -> Result<()> {
    let Some(release) = release else {
        info!("No release found; {} left unchanged", path.display());
        return Ok(());
    };

    let mut doc = ManifestDocument::load_or_create(path, &profile.header);

    let entry = build_entry(profile, release)
        .with_context(|| format!("Failed to build manifest entry for {}", path.display()))?;
    apply_entry(&mut doc, entry, profile.merge);

    doc.save(path)?;
    info!("Updated {} successfully.", path.display());

    Ok(())
}

/// Runs one full sync: a single fetch, then each target in order.
///
/// A fetch failure aborts before any file is written. A fatal entry-build
/// error in an earlier target aborts before later targets run.
pub async fn run(config: &SyncConfig, source: &dyn GetReleases) -> Result<()> {
    let latest = source.latest_release(&config.repo).await?;

    for target in &config.targets {
        update_manifest(&target.path, &target.profile, latest.as_ref())?;
    }

    Ok(())
}
