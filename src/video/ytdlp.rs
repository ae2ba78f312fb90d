use std::{
    path::{Path, PathBuf},
    process::Output,
    time::Duration,
};

use async_trait::async_trait;
use log::{info, warn};
use serde::Deserialize;
use tokio::{fs, process};

use crate::{config::Config, errors::DownloadError, video::DownloadedFile};

/// Directory under the download dir that holds one subdirectory per request
const REQUEST_ROOT: &str = ".bot-downloads";

/// Prints the final file location once yt-dlp has moved it into place
const PRINT_METADATA: &str = "after_move:%(.{title,ext,filepath})j";

/// Lower-cased stderr fragments that point at a fetch problem rather than a bad page
const NETWORK_MARKERS: [&str; 10] = [
    "http error",
    "unable to download",
    "urlopen error",
    "timed out",
    "connection reset",
    "connection refused",
    "name or service not known",
    "temporary failure in name resolution",
    "getaddrinfo",
    "network is unreachable",
];

/// Fetches the media behind a page URL into a local file
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn download(&self, url: &str) -> Result<DownloadedFile, DownloadError>;
}

#[derive(Debug, Deserialize)]
struct YtDlpOutput {
    title: Option<String>,
    ext: Option<String>,
    filepath: String,
}

#[derive(Debug, Clone)]
pub struct YtDlp {
    binary: String,
    output_dir: PathBuf,
    timeout: Option<Duration>,
}

impl YtDlp {
    pub fn new(binary: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            output_dir: output_dir.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.ytdlp_path, &config.download_dir).with_timeout(config.download_timeout)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Parent of every per-request directory. Only this directory is ever
    /// cleared wholesale, never `output_dir` itself.
    pub fn request_root(&self) -> PathBuf {
        self.output_dir.join(REQUEST_ROOT)
    }

    fn new_request_dir(&self) -> PathBuf {
        self.request_root().join(uuid::Uuid::new_v4().simple().to_string())
    }

    fn build_command(&self, url: &str, request_dir: &Path) -> process::Command {
        let template = request_dir.join("%(title)s.%(ext)s");
        let mut cmd = process::Command::new(&self.binary);
        cmd.arg("--no-playlist")
            .args(["-f", "best"])
            .args(["--quiet", "--no-warnings"])
            .arg("-o")
            .arg(template)
            .arg("--no-simulate")
            .args(["--print", PRINT_METADATA])
            // A hung download is abandoned when the timeout drops the future
            .kill_on_drop(true)
            .arg("--")
            .arg(url);
        cmd
    }

    async fn run(&self, url: &str) -> Result<DownloadedFile, DownloadError> {
        let request_dir = self.new_request_dir();
        fs::create_dir_all(&request_dir).await.map_err(|e| {
            DownloadError::Unknown(format!("cannot create {}: {}", request_dir.display(), e))
        })?;

        match self.fetch(url, &request_dir).await {
            Ok(file) => Ok(file.in_request_dir(request_dir)),
            Err(e) => {
                // Nothing was delivered, so partial files have no owner
                if let Err(rm) = fs::remove_dir_all(&request_dir).await {
                    warn!("Failed to remove {}: {}", request_dir.display(), rm);
                }
                Err(e)
            }
        }
    }

    async fn fetch(&self, url: &str, request_dir: &Path) -> Result<DownloadedFile, DownloadError> {
        let mut cmd = self.build_command(url, request_dir);
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| DownloadError::TimedOut(limit))?,
            None => cmd.output().await,
        }
        .map_err(|e| DownloadError::Unknown(format!("failed to run {}: {}", self.binary, e)))?;

        info!("yt-dlp exit code: {:?}", output.status.code());
        file_from_output(&output)
    }
}

#[async_trait]
impl Extractor for YtDlp {
    async fn download(&self, url: &str) -> Result<DownloadedFile, DownloadError> {
        info!("Starting download: {}", url);
        let result = self.run(url).await;
        match &result {
            Ok(file) => info!("Download successful: {}", file.path().display()),
            Err(e) => log::error!("Download error for {}: {}", url, e),
        }
        result
    }
}

fn file_from_output(output: &Output) -> Result<DownloadedFile, DownloadError> {
    if !output.status.success() {
        return Err(classify_failure(&String::from_utf8_lossy(&output.stderr)));
    }
    parse_metadata(&String::from_utf8_lossy(&output.stdout))
}

/// Reads the JSON line printed by [`PRINT_METADATA`]
fn parse_metadata(stdout: &str) -> Result<DownloadedFile, DownloadError> {
    let line = stdout
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .ok_or_else(|| DownloadError::Unknown("yt-dlp printed no file path".to_string()))?;

    let meta: YtDlpOutput = serde_json::from_str(line)
        .map_err(|e| DownloadError::Unknown(format!("Failed to parse yt-dlp output: {}", e)))?;

    if meta.filepath.is_empty() {
        return Err(DownloadError::Unknown(
            "yt-dlp reported an empty file path".to_string(),
        ));
    }

    Ok(DownloadedFile::new(meta.filepath).with_metadata(meta.title, meta.ext))
}

fn classify_failure(stderr: &str) -> DownloadError {
    let lowered = stderr.to_lowercase();
    let summary = stderr
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("ERROR"))
        .or_else(|| stderr.lines().map(str::trim).find(|line| !line.is_empty()))
        .unwrap_or("yt-dlp exited without an error message")
        .to_string();

    if lowered.contains("unsupported url") || lowered.contains("no suitable extractor") {
        DownloadError::NoExtractor
    } else if NETWORK_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        DownloadError::Network(summary)
    } else {
        DownloadError::Unknown(summary)
    }
}
