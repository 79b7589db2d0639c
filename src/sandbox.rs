//! Path resolution confined to the asset root.
//!
//! Client-supplied paths are normalized lexically, joined onto the
//! canonicalized root, then canonicalized again so the boundary check runs
//! against the symlink-resolved path rather than the raw input.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Lexically normalize a relative path: collapse `.` and empty segments,
/// pop a segment for every `..`, and clamp at the top so a leading run of
/// `..` cannot climb anywhere on its own.
pub fn normalize(raw: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

/// Resolve a client-supplied relative path to an absolute path under
/// `root`, which must itself be canonical.
///
/// The returned path is canonical (symlinks resolved), exists on disk, and
/// is guaranteed to sit at or below `root`. A symlink inside the tree that
/// points outside it is rejected with `AccessDenied`.
pub async fn resolve(root: &Path, raw: &str) -> Result<PathBuf> {
    // Traversal segments are rejected outright rather than clamped, so a
    // request naming `..` fails the same way whether or not the clamped
    // target would exist.
    if raw.split('/').any(|segment| segment == "..") {
        tracing::warn!(requested = raw, "rejecting path with traversal segments");
        return Err(Error::AccessDenied);
    }

    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(Error::AccessDenied);
    }

    let candidate = root.join(&normalized);

    // Canonicalize before the boundary check. Lexical normalization alone
    // cannot defeat symlinks or encoding tricks.
    let resolved = tokio::fs::canonicalize(&candidate).await?;

    if resolved == root || resolved.starts_with(root) {
        Ok(resolved)
    } else {
        tracing::warn!(requested = raw, resolved = %resolved.display(), "path escapes asset root");
        Err(Error::AccessDenied)
    }
}
