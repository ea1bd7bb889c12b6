pub mod asset;
pub mod config;
pub mod github;
pub mod installer;
pub mod setup;
