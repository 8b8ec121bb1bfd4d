// components/media_downloader/src/ytdlp.rs
use crate::types::{DownloadError, DownloadOptions};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// External tool that performs the actual fetch, extraction and file write
#[async_trait]
pub trait Downloader {
    /// Check if the downloader is available and has all required dependencies
    async fn check_available(&self) -> Result<(), DownloadError>;

    /// Download the given URLs, blocking until the tool is done
    async fn download(&self, urls: &[String], options: &DownloadOptions) -> Result<(), DownloadError>;
}

pub struct YtDlp {
    program: PathBuf,
}

impl YtDlp {
    /// Run a specific yt-dlp executable instead of the one found in PATH
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::with_program("yt-dlp")
    }
}

#[async_trait]
impl Downloader for YtDlp {
    async fn check_available(&self) -> Result<(), DownloadError> {
        which::which(&self.program)
            .map(|path| tracing::debug!("Using yt-dlp at {}", path.display()))
            .map_err(|_| DownloadError::YtDlpNotFound)
    }

    async fn download(&self, urls: &[String], options: &DownloadOptions) -> Result<(), DownloadError> {
        let args = options.to_args(urls);
        tracing::debug!("Running {} {}", self.program.display(), args.join(" "));

        // The spinner owns stdout while yt-dlp runs
        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("yt-dlp exited with status: {}", output.status));
            return Err(DownloadError::DownloadFailed(reason));
        }

        Ok(())
    }
}
