//! Deriving an [`AppEntry`] from a GitHub release.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::github::{Release, ReleaseAsset};
use crate::sanitize::sanitize_notes;

use super::AppEntry;
use super::profile::ManifestProfile;

static SEMVER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.\d+\.\d+").unwrap());

/// Fallback notes for releases published without a body.
const NO_DESCRIPTION: &str = "No description provided.";

/// A release tag that does not contain a semantic version.
///
/// Upstream tags are expected to embed `major.minor.patch` somewhere in the
/// tag name. A tag without one is a data-integrity problem in the release
/// naming, and callers treat it as fatal rather than inventing a version.
#[derive(Debug, PartialEq)]
pub struct VersionPatternError {
    pub tag: String,
}

impl std::fmt::Display for VersionPatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No version of the form MAJOR.MINOR.PATCH found in tag '{}'",
            self.tag
        )
    }
}

impl std::error::Error for VersionPatternError {}

/// Extracts the first `major.minor.patch` group from a release tag.
///
/// An empty tag falls back to searching the literal `"1.0.0"`, which always
/// matches; a non-empty tag without the pattern is an error.
pub fn extract_version(tag: &str) -> Result<String, VersionPatternError> {
    let subject = if tag.is_empty() { "1.0.0" } else { tag };
    SEMVER
        .find(subject)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| VersionPatternError {
            tag: subject.to_string(),
        })
}

/// Reformats a release timestamp as a `YYYY-MM-DD` calendar date.
///
/// Only the exact shape `YYYY-MM-DDTHH:MM:SSZ` is accepted; anything else
/// (offsets, fractional seconds) is an error.
pub fn version_date(published_at: &str) -> Result<String, chrono::ParseError> {
    let parsed = NaiveDateTime::parse_from_str(published_at, "%Y-%m-%dT%H:%M:%SZ")?;
    Ok(parsed.format("%Y-%m-%d").to_string())
}

/// Picks the first asset whose file name ends in `.ipa`.
pub fn pick_ipa_asset(assets: &[ReleaseAsset]) -> Option<&ReleaseAsset> {
    assets.iter().find(|a| a.name.ends_with(".ipa"))
}

/// Builds a manifest entry for `release` using the profile's constants.
///
/// A missing `.ipa` asset degrades to an empty URL and zero size; a bad tag
/// or timestamp fails the whole build.
pub fn build_entry(profile: &ManifestProfile, release: &Release) -> Result<AppEntry> {
    let version = extract_version(&release.tag_name)?;
    let version_date = version_date(&release.published_at).with_context(|| {
        format!(
            "Release timestamp '{}' is not of the form YYYY-MM-DDTHH:MM:SSZ",
            release.published_at
        )
    })?;

    let (download_url, size) = match pick_ipa_asset(&release.assets) {
        Some(asset) => (asset.browser_download_url.clone(), asset.size),
        None => (String::new(), 0),
    };

    let version_description = profile.release_notes.then(|| {
        let body = match release.body.as_deref() {
            Some(body) if !body.is_empty() => body,
            _ => NO_DESCRIPTION,
        };
        sanitize_notes(body)
    });

    Ok(AppEntry {
        name: profile.app.name.clone(),
        bundle_identifier: profile.app.bundle_identifier.clone(),
        developer_name: profile.app.developer_name.clone(),
        subtitle: profile.app.subtitle.clone(),
        version,
        version_date,
        version_description,
        download_url,
        localized_description: profile.app.localized_description.clone(),
        icon_url: profile.app.icon_url.clone(),
        tint_color: profile.app.tint_color.clone(),
        size,
    })
}
