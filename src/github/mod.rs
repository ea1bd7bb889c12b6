//! GitHub release lookup for the upstream Dhall toolchain repository.

mod client;
mod types;

pub use client::{DEFAULT_API_URL, GetRelease, GitHub};
pub use types::{Release, ReleaseAsset};

#[cfg(test)]
pub use client::MockGetRelease;
