//! ls against the local provider.

mod common;

use common::*;
use serde_json::Value;

fn env_with_objects() -> TestEnv {
    let env = TestEnv::new();
    env.write_config(&local_config(env.storage_root.path()));
    env.create_bucket("releases");
    for key in ["app-1.tar.bz2", "other-1.tar.bz2", "myapp-2.tar.bz2", "app-1-release-metadata.json"] {
        env.write_object("releases", key, "");
    }
    env
}

#[test]
fn test_ls_shows_project_packages_sorted() {
    let env = env_with_objects();

    let result = env.run(&["ls"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    assert_eq!(
        result.stdout_lines(),
        vec!["app-1-release-metadata.json", "app-1.tar.bz2", "myapp-2.tar.bz2"]
    );
    assert_eq!(result.stderr_lines(), vec!["Showing packages in default..."]);
}

#[test]
fn test_list_all_shows_everything() {
    let env = env_with_objects();

    let result = env.run(&["list", "--all"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    assert_eq!(result.stdout_lines().len(), 4);
    assert!(result.stdout.contains("other-1.tar.bz2"));
}

#[test]
fn test_ls_does_not_need_timestamp() {
    let env = env_with_objects();
    env.write_config(
        &local_config(env.storage_root.path()).replace("timestamp: \"20240101\"\n", ""),
    );

    let result = env.run(&["ls"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
}

#[test]
fn test_ls_name_flag_changes_filter() {
    let env = env_with_objects();

    let result = env.run(&["--name", "other", "ls"]);

    assert_eq!(result.stdout_lines(), vec!["other-1.tar.bz2"]);
}

#[test]
fn test_ls_json_prints_array() {
    let env = env_with_objects();

    let result = env.run(&["ls", "--json"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    let keys: Value = serde_json::from_str(result.stdout.trim()).unwrap();
    assert_eq!(
        keys,
        serde_json::json!(["app-1-release-metadata.json", "app-1.tar.bz2", "myapp-2.tar.bz2"])
    );
}
