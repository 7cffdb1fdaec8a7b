//! Tool availability checking.
//!
//! A tool is "available" only if its binary resolves on PATH to an
//! executable file AND a `--version` query exits zero. Resolution iterates
//! PATH entries directly; there is no shell-based fallback pass, since both
//! would use the same invocation mechanism anyway.

pub mod checker;
pub mod probe;
pub mod status;

pub use checker::{extract_version, ToolChecker, ToolSpec, BUN, NODE, NPM, PNPM, YARN};
pub use status::ToolStatus;
