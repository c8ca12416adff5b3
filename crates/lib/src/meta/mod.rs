//! Metadata lookups.
//!
//! Each lookup is independent and read-only. Failures are reported as
//! errors and degrade to sentinel values at the call site; nothing here
//! aborts the finish hook.

pub mod git;
pub mod package;
pub mod runtime;
