//! Project inspection: manifest, lockfiles, and dependency state.

pub mod dependencies;
pub mod manifest;

pub use dependencies::{dependencies_present, install, PackageManager};
pub use manifest::PackageManifest;
