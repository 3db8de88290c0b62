use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated working directory for tests that touch the filesystem.
/// Fixture files are addressed by bare name so command output lines
/// stay stable.
pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn cmd(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("binary built");
        cmd.current_dir(&self.dir);
        cmd
    }

    pub fn write(&self, name: &str, contents: &str) {
        fs::write(self.dir.join(name), contents).expect("write fixture");
    }
}
