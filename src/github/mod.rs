//! GitHub releases API access.

mod client;
mod repo;
mod types;

pub use client::{GetReleases, GitHub};
pub use repo::GitHubRepo;
pub use types::{Release, ReleaseAsset};

#[cfg(test)]
pub use client::MockGetReleases;
