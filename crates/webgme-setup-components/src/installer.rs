//! Package manager integration

use async_trait::async_trait;
use camino::Utf8Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Exit status of an install run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallStatus {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
}

impl InstallStatus {
    /// Status with the given exit code
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Whether the install succeeded
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Installs a package into a project and records it in `package.json`
#[async_trait]
pub trait PackageInstaller: Send + Sync {
    /// Program name used in log messages
    fn program(&self) -> &str;

    /// Install `spec` in `project_root`
    async fn install(&self, project_root: &Utf8Path, spec: &str) -> Result<InstallStatus>;
}

/// Installer running `npm install <spec> --save`
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: String,
}

impl NpmInstaller {
    /// Installer using the given npm executable
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments passed to npm for a spec
    pub fn install_args(spec: &str) -> [&str; 3] {
        ["install", spec, "--save"]
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new("npm")
    }
}

#[async_trait]
impl PackageInstaller for NpmInstaller {
    fn program(&self) -> &str {
        &self.program
    }

    async fn install(&self, project_root: &Utf8Path, spec: &str) -> Result<InstallStatus> {
        let program =
            which::which(&self.program).map_err(|_| Error::command_not_found(&self.program))?;
        debug!("Resolved {} to {}", self.program, program.display());

        let mut child = Command::new(program)
            .current_dir(project_root)
            .args(Self::install_args(spec))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        tokio::join!(forward_lines(stdout), forward_lines(stderr));

        let status = child.wait().await?;
        Ok(InstallStatus {
            code: status.code(),
        })
    }
}

/// Log every line of a child stream at info level
async fn forward_lines<R: AsyncRead + Unpin>(stream: Option<R>) {
    let Some(stream) = stream else {
        return;
    };

    let mut lines = BufReader::new(stream).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        info!("{}", line);
    }
}
