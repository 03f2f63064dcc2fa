//! Test environment builder for isolated Shipyard testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Shipyard CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Non-empty stderr lines
    pub fn stderr_lines(&self) -> Vec<&str> {
        self.stderr.lines().filter(|l| !l.trim().is_empty()).collect()
    }

    /// Non-empty stdout lines
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.trim().is_empty()).collect()
    }
}

/// Isolated test environment.
///
/// - `project_root`: working directory, holds the config and `tmp/` artifacts
/// - `storage_root`: `local_root` of the local provider
/// - `home_dir`: HOME / XDG_CONFIG_HOME so no user config leaks in
pub struct TestEnv {
    pub project_root: TempDir,
    pub storage_root: TempDir,
    pub home_dir: TempDir,
    shipyard_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            storage_root: TempDir::new().expect("Failed to create storage dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            shipyard_bin: PathBuf::from(env!("CARGO_BIN_EXE_shipyard")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn storage_path(&self, relative: &str) -> PathBuf {
        self.storage_root.path().join(relative)
    }

    /// Create a bucket directory under the storage root
    pub fn create_bucket(&self, bucket: &str) -> PathBuf {
        let dir = self.storage_path(bucket);
        std::fs::create_dir_all(&dir).expect("Failed to create bucket");
        dir
    }

    /// Write `shipyard.yml` at the project root
    pub fn write_config(&self, yaml: &str) {
        self.write_project_file("shipyard.yml", yaml);
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        write_file(&self.project_path(relative_path), content);
    }

    /// Write an object straight into a bucket
    pub fn write_object(&self, bucket: &str, key: &str, content: &str) {
        write_file(&self.storage_path(bucket).join(key), content);
    }

    pub fn read_object(&self, bucket: &str, key: &str) -> Option<String> {
        std::fs::read_to_string(self.storage_path(bucket).join(key)).ok()
    }

    /// Stage the metadata and package files of a release in `tmp/`
    pub fn stage_release(&self, final_name: &str) {
        self.write_project_file(
            &format!("tmp/{}-release-metadata.json", final_name),
            r#"{"package":{"name":"app"}}"#,
        );
        self.write_project_file(&format!("tmp/{}.tar.bz2", final_name), "package-bytes");
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.shipyard_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path())
            .env("APPDATA", self.home_dir.path())
            .env_remove("SHIPYARD_TIMESTAMP")
            .env_remove("SHIPYARD_DESTINATION")
            .env_remove("SHIPYARD_VERBOSITY")
            .env_remove("SHIPYARD_ENVIRONMENT")
            .env_remove("SHIPYARD_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute shipyard");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
