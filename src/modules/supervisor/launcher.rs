use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::{Child, Command};

use crate::shared::constants::WORKER_SLOT_ENV;

/// Creates the process that occupies a worker slot
pub trait WorkerLauncher: Send + Sync + 'static {
    fn launch(&self, slot: usize) -> std::io::Result<Child>;
}

/// Launches a program as a worker. Children are killed when their handle drops.
#[derive(Debug, Clone)]
pub struct CommandLauncher {
    program: PathBuf,
    args: Vec<String>,
    slot_env: Option<&'static str>,
}

impl CommandLauncher {
    /// Re-executes the running binary in worker mode
    pub fn current_exe() -> std::io::Result<Self> {
        Ok(Self {
            program: std::env::current_exe()?,
            args: Vec::new(),
            slot_env: Some(WORKER_SLOT_ENV),
        })
    }

    #[cfg(test)]
    pub fn new(program: impl Into<PathBuf>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            slot_env: None,
        }
    }
}

impl WorkerLauncher for CommandLauncher {
    fn launch(&self, slot: usize) -> std::io::Result<Child> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        if let Some(var) = self.slot_env {
            cmd.env(var, slot.to_string());
        }

        cmd.spawn()
    }
}
