//! Working-tree diff capture.
//!
//! Produces the unified diff text that is sent to the review API. The diff is
//! index-to-workdir (what plain `git diff` shows), optionally narrowed to one
//! pathspec. Runs synchronously before the terminal is initialised; an empty
//! result means there is nothing to review and the caller exits early.

use git2::{DiffFormat, DiffOptions, Repository};
use std::path::Path;

/// Captures the unified diff of unstaged changes as plain text.
///
/// `pathspec` narrows the diff to a single path; `None` (or `"."`) covers all
/// changed files. The repository is discovered upward from `repo_dir`, so the
/// command works from any subdirectory of a work tree.
///
/// # Errors
///
/// Returns `git2::Error` when no repository is found or the diff cannot be
/// computed.
pub fn capture_diff(repo_dir: &Path, pathspec: Option<&str>) -> Result<String, git2::Error> {
    let repo = Repository::discover(repo_dir)?;

    let mut opts = DiffOptions::new();
    if let Some(spec) = pathspec {
        if spec != "." {
            opts.pathspec(spec);
        }
    }

    let diff = repo.diff_index_to_workdir(None, Some(&mut opts))?;

    let mut buf = String::new();
    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        // Content lines need their origin marker back; file and hunk headers
        // already carry their own text.
        if matches!(line.origin(), '+' | '-' | ' ') {
            buf.push(line.origin());
        }
        buf.push_str(&String::from_utf8_lossy(line.content()));
        true
    })?;

    Ok(buf)
}
