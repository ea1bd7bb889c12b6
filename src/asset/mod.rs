//! Asset selection module
//!
//! Maps the host platform to the archive-name patterns of a Dhall
//! release and picks the matching download URLs out of a release's
//! asset list.

mod matcher;
mod platform;

pub use matcher::{ResolvedUrls, match_assets};
pub use platform::{Platform, ReleasePatterns};
