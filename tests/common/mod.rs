#![allow(dead_code)]

pub mod mock_data;

use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run triage commands with an isolated config directory
pub struct TriageTest {
    pub config_dir: TempDir,
    api_url: Option<String>,
}

impl TriageTest {
    pub fn new() -> Self {
        TriageTest {
            config_dir: TempDir::new().expect("Failed to create temp directory"),
            api_url: None,
        }
    }

    /// Point the binary at a test backend (e.g. a mockito server)
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = Some(url.to_string());
        self
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_triage"));
        command
            .args(args)
            .env("TRIAGE_CONFIG_DIR", self.config_dir.path());
        if let Some(url) = &self.api_url {
            command.env("TRIAGE_API_URL", url);
        }
        command.output().expect("Failed to execute triage command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}
