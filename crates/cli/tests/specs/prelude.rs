//! Shared helpers for the CLI specs

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A fresh `rwgate` invocation with quiet logging
pub fn rwgate() -> Cli {
    let mut cmd = Command::cargo_bin("rwgate").unwrap();
    cmd.env("RUST_LOG", "warn");
    Cli { cmd }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args<S: AsRef<std::ffi::OsStr>>(mut self, args: &[S]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> Output {
        Output(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> Output {
        Output(self.cmd.assert().failure())
    }
}

pub struct Output(Assert);

impl Output {
    pub fn stdout_has(self, text: &str) -> Self {
        Output(self.0.stdout(predicate::str::contains(text)))
    }

    pub fn stdout_lacks(self, text: &str) -> Self {
        Output(self.0.stdout(predicate::str::contains(text).not()))
    }

    pub fn stderr_has(self, text: &str) -> Self {
        Output(self.0.stderr(predicate::str::contains(text)))
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).into_owned()
    }
}

/// A scratch directory holding config files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write `content` to `name` and return its path as a string
    pub fn file(&self, name: &str, content: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path.display().to_string()
    }
}
