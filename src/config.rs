use std::{fmt, path::PathBuf, time::Duration};

use crate::errors::{BotError, BotResult};

const TOKEN_VARS: [&str; 2] = ["TELOXIDE_TOKEN", "BOT_TOKEN"];
const DEFAULT_DOWNLOAD_DIR: &str = "downloads";
const DEFAULT_YTDLP: &str = "yt-dlp";

/// Runtime settings read from the environment (after `.env` is loaded)
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub download_dir: PathBuf,
    pub ytdlp_path: String,
    /// `None` means a download may run for as long as yt-dlp needs
    pub download_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> BotResult<Self> {
        let token = TOKEN_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .ok_or_else(|| BotError::missing_config(TOKEN_VARS[0]))?;

        let download_dir = lookup("DOWNLOAD_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_DIR.to_string());

        let ytdlp_path = lookup("YTDLP_PATH")
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_YTDLP.to_string());

        let download_timeout = match lookup("DOWNLOAD_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    BotError::invalid_parameters(format!(
                        "DOWNLOAD_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                        raw
                    ))
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            _ => None,
        };

        Ok(Self {
            token,
            download_dir: PathBuf::from(download_dir),
            ytdlp_path,
            download_timeout,
        })
    }
}

// Keeps the token out of logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("download_dir", &self.download_dir)
            .field("ytdlp_path", &self.ytdlp_path)
            .field("download_timeout", &self.download_timeout)
            .finish()
    }
}
