use std::path::{Path, PathBuf};

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - a project configuration file (`config/shipyard.yml`, `shipyard.yml`,
///   `.shipyard.yml`)
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    const MARKERS: &[&str] = &["config/shipyard.yml", "shipyard.yml", ".shipyard.yml"];

    for dir in start.ancestors() {
        if MARKERS.iter().any(|marker| dir.join(marker).is_file()) {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
