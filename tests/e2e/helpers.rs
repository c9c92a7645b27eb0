use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub struct TestProject {
    pub dir: TempDir,
    pub binary_path: String,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let binary_path = env!("CARGO_BIN_EXE_license-header-lint").to_string();

        Self { dir, binary_path }
    }

    /// Write a file below the project dir, creating parent directories.
    pub fn write_file(&self, rel_path: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run the linter with the project dir as working directory.
    pub fn run_linter(&self, args: &[&str]) -> Output {
        self.run_linter_in(self.dir.path(), args)
    }

    pub fn run_linter_in(&self, cwd: &Path, args: &[&str]) -> Output {
        Command::new(&self.binary_path)
            .args(args)
            .current_dir(cwd)
            .output()
            .expect("Failed to run license-header-lint")
    }
}

pub fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// A header block that passes validation, for the given comment prefix.
pub fn valid_header(prefix: &str) -> String {
    let sep = format!("{}  {}", prefix, "-".repeat(75));
    format!(
        "{sep}\n\
         {prefix}  Copyright (C) 2020 BMW AG\n\
         {sep}\n\
         {prefix}  This Source Code Form is subject to the terms of the Mozilla Public\n\
         {prefix}  License, v. 2.0. If a copy of the MPL was not distributed with this\n\
         {prefix}  file, You can obtain one at https://mozilla.org/MPL/2.0/.\n\
         {sep}\n"
    )
}
