//! buildstamp-lib: Core types and logic for buildstamp
//!
//! This crate provides the pieces of the version manifest generator:
//! - `ManifestPlugin`: the lifecycle hooks a host build pipeline drives
//! - `ManifestRecord`: the provenance record written into the build output
//! - `meta`: the individual metadata lookups (package version, git, runtime)

pub mod config;
pub mod consts;
pub mod manifest;
pub mod meta;
pub mod plugin;
