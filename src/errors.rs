use std::{fmt, time::Duration};

/// Errors surfaced by handlers and startup code
#[derive(Debug)]
pub enum BotError {
    /// Telegram API errors
    TelegramError(teloxide::RequestError),
    /// Local filesystem errors
    FileSystemError(std::io::Error),
    /// A required environment variable is not set
    MissingConfig(String),
    /// A configuration value could not be parsed
    InvalidParameters(String),
}

/// Why the extraction tool could not produce a file.
///
/// Every variant is reported to the user the same way; the split exists so
/// the logs say what actually went wrong.
#[derive(Debug)]
pub enum DownloadError {
    /// No extractor recognises the page
    NoExtractor,
    /// The page or media could not be fetched
    Network(String),
    /// The configured download timeout elapsed
    TimedOut(Duration),
    /// Spawn failures, unparsable output and unclassified tool errors
    Unknown(String),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::TelegramError(e) => write!(f, "Telegram API error: {}", e),
            BotError::FileSystemError(e) => write!(f, "Filesystem error: {}", e),
            BotError::MissingConfig(name) => {
                write!(f, "Missing required environment variable {}", name)
            }
            BotError::InvalidParameters(msg) => write!(f, "Invalid parameters: {}", msg),
        }
    }
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::NoExtractor => write!(f, "no extractor supports this page"),
            DownloadError::Network(msg) => write!(f, "network failure: {}", msg),
            DownloadError::TimedOut(limit) => {
                write!(f, "download timed out after {}s", limit.as_secs())
            }
            DownloadError::Unknown(msg) => write!(f, "extraction failed: {}", msg),
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BotError::TelegramError(e) => Some(e),
            BotError::FileSystemError(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for DownloadError {}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        BotError::TelegramError(err)
    }
}

impl From<std::io::Error> for BotError {
    fn from(err: std::io::Error) -> Self {
        BotError::FileSystemError(err)
    }
}

impl BotError {
    pub fn missing_config(name: impl Into<String>) -> Self {
        Self::MissingConfig(name.into())
    }

    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }
}

/// Result of bot operations
pub type BotResult<T> = Result<T, BotError>;

/// Result for handlers
pub type HandlerResult = BotResult<()>;
