use assert_cmd::Command;
use assert_cmd::assert::Assert;
use assert_fs::TempDir;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Nothing listens on the discard port, so engine calls fail fast.
pub const UNREACHABLE_SERVER: &str = "http://127.0.0.1:9";

pub struct GrammarCheckTestHelper<'a> {
    pub work_dir: TempDir,
    name: &'a str,
    counter: AtomicUsize,
}

impl<'a> GrammarCheckTestHelper<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
            name,
            counter: AtomicUsize::new(0),
        }
    }

    pub fn run_command(&self, args: &[&str]) -> Assert {
        let mut cmd = Command::cargo_bin("grammar-check").unwrap();
        cmd.current_dir(self.work_dir.path())
            .env(
                "GRAMMAR_CHECK_RUN_ID",
                format!(
                    "{}-{}",
                    self.name,
                    self.counter.fetch_add(1, Ordering::Relaxed)
                ),
            )
            .env("GRAMMAR_CHECK_OUTPUT_PROGRESS", "plain")
            .env("GRAMMAR_CHECK_SERVER", UNREACHABLE_SERVER)
            .env("NO_COLOR", "1")
            .args(args)
            .assert()
    }

    /// Execute `check` against the unreachable server.
    pub fn check(&self, args: &[&str]) -> Assert {
        let mut run_command = vec!["check"];
        run_command.extend_from_slice(args);
        self.run_command(&run_command)
    }

    pub fn clean_work_dir(self) {
        self.work_dir.close().unwrap();
    }
}
