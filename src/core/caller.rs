//! Call-site capture
//!
//! The originating call site is resolved with `#[track_caller]` and
//! `std::panic::Location`: every public emission entry point is annotated,
//! so `Location::caller()` reports the user's file and line rather than an
//! internal helper frame. Macro-based entry points expand at the user call
//! site, which keeps the same guarantee.

use std::panic::Location;
use std::path::Path;

/// Render a call site as `[basename:line]`.
///
/// Returns `None` when the location's file path has no extractable base
/// name; callers omit the segment rather than failing.
#[must_use]
pub fn format_call_site(location: &Location<'_>) -> Option<String> {
    let file = Path::new(location.file()).file_name()?.to_str()?;
    Some(format!("[{}:{}]", file, location.line()))
}
