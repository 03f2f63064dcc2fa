//! Configuration fixtures.

use std::path::Path;

/// Project `app`, release `20240101`, one local destination `default`
/// storing into bucket `releases`.
pub fn local_config(storage_root: &Path) -> String {
    format!(
        r#"name: app
timestamp: "20240101"
plugins:
  remote:
    destinations:
      default:
        path: releases
        credentials:
          provider: local
          local_root: {root}
"#,
        root = yaml_path(storage_root)
    )
}

/// Same layout as [`local_config`] but in the legacy inline form
pub fn inline_local_config(storage_root: &Path) -> String {
    format!(
        r#"name: app
timestamp: "20240101"
plugins:
  remote:
    path: releases
    credentials:
      provider: local
      local_root: {root}
"#,
        root = yaml_path(storage_root)
    )
}

/// Quoted path, safe for Windows separators
pub fn yaml_path(path: &Path) -> String {
    format!("'{}'", path.display())
}
