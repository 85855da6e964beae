//! Shared fakes for rcd-core integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rcd_core::transfer::command_line;
use rcd_core::{Prompt, Result, TransferStatus, TransferTool};

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub workdir: PathBuf,
    pub args: Vec<String>,
}

impl Call {
    pub fn verb(&self) -> &str {
        &self.args[0]
    }

    /// The call as one command line, as it would be logged.
    pub fn line(&self) -> String {
        command_line(&self.args)
    }

    pub fn is_dry_run(&self) -> bool {
        self.args.iter().any(|a| a == "--dry-run")
    }
}

/// Stands in for rclone.
///
/// `copy` between local paths really copies; every other command is only
/// recorded. Clones share the call log.
#[derive(Debug, Clone, Default)]
pub struct FakeRclone {
    calls: Arc<Mutex<Vec<Call>>>,
    fail_sync_with: Option<i32>,
}

impl FakeRclone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Real (non dry-run) `sync` calls exit with `code`.
    pub fn failing_sync(code: i32) -> Self {
        Self {
            fail_sync_with: Some(code),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sync_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.verb() == "sync")
            .collect()
    }
}

#[async_trait]
impl TransferTool for FakeRclone {
    async fn run(&self, workdir: &Path, args: &[String]) -> Result<TransferStatus> {
        self.calls.lock().unwrap().push(Call {
            workdir: workdir.to_path_buf(),
            args: args.to_vec(),
        });

        match args.first().map(String::as_str) {
            Some("copy") => {
                let source = workdir.join(&args[1]);
                let destination = workdir.join(&args[2]);
                if !source.exists() {
                    return Ok(TransferStatus { code: Some(3) });
                }
                copy_dir(&source, &destination);
                Ok(TransferStatus::success())
            }
            Some("sync") if !args.iter().any(|a| a == "--dry-run") => match self.fail_sync_with {
                Some(code) => Ok(TransferStatus { code: Some(code) }),
                None => Ok(TransferStatus::success()),
            },
            _ => Ok(TransferStatus::success()),
        }
    }
}

fn copy_dir(source: &Path, destination: &Path) {
    fs::create_dir_all(destination).unwrap();
    for entry in fs::read_dir(source).unwrap() {
        let entry = entry.unwrap();
        let target = destination.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

/// Answers prompts from a fixed script; `None` once the script runs out.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: usize,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: 0,
        }
    }

    pub fn silent() -> Self {
        Self::default()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, _message: &str) -> Option<String> {
        self.asked += 1;
        self.answers.pop_front()
    }
}
