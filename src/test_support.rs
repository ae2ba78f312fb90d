//! Fakes shared by the unit tests: a clock that can be moved, a messenger
//! that records what it was asked to send, and an extractor that never
//! touches the network.

use std::{
    path::{Path, PathBuf},
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use teloxide::types::{ChatId, KeyboardMarkup};
use tempfile::TempDir;

use crate::{
    errors::{BotError, DownloadError, HandlerResult},
    messenger::Messenger,
    quota::Clock,
    video::{DownloadedFile, Extractor},
};

pub struct ManualClock {
    today: Mutex<NaiveDate>,
}

impl ManualClock {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        Self {
            today: Mutex::new(date),
        }
    }

    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.lock().unwrap();
        *today = today.checked_add_days(Days::new(days)).unwrap();
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock().unwrap()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text {
        chat_id: ChatId,
        text: String,
        with_keyboard: bool,
    },
    Video {
        chat_id: ChatId,
        path: PathBuf,
        existed: bool,
    },
}

#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
    reject_videos: bool,
}

impl RecordingMessenger {
    pub fn rejecting_videos() -> Self {
        Self {
            reject_videos: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                Sent::Video { .. } => None,
            })
            .collect()
    }

    pub fn last_text(&self) -> Option<String> {
        self.texts().pop()
    }

    pub fn videos(&self) -> Vec<PathBuf> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Video { path, .. } => Some(path),
                Sent::Text { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<KeyboardMarkup>,
    ) -> HandlerResult {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id,
            text: text.to_string(),
            with_keyboard: keyboard.is_some(),
        });
        Ok(())
    }

    async fn send_video(&self, chat_id: ChatId, path: &Path) -> HandlerResult {
        if self.reject_videos {
            return Err(BotError::FileSystemError(std::io::Error::other("upload rejected")));
        }
        self.sent.lock().unwrap().push(Sent::Video {
            chat_id,
            path: path.to_path_buf(),
            existed: path.exists(),
        });
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FakeOutcome {
    Succeed,
    NoExtractor,
    Network,
    TimedOut,
    Unknown,
}

/// Writes a small file into its own temp dir for every successful call
pub struct FakeExtractor {
    dir: TempDir,
    outcome: FakeOutcome,
    calls: AtomicUsize,
}

impl FakeExtractor {
    pub fn new(outcome: FakeOutcome) -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(FakeOutcome::Succeed)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

#[async_trait]
impl Extractor for FakeExtractor {
    async fn download(&self, url: &str) -> Result<DownloadedFile, DownloadError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            FakeOutcome::Succeed => {
                let path = self.dir.path().join(format!("video-{}.mp4", call));
                std::fs::write(&path, url.as_bytes()).unwrap();
                Ok(DownloadedFile::new(path))
            }
            FakeOutcome::NoExtractor => Err(DownloadError::NoExtractor),
            FakeOutcome::Network => Err(DownloadError::Network("connection reset".into())),
            FakeOutcome::TimedOut => Err(DownloadError::TimedOut(Duration::from_secs(30))),
            FakeOutcome::Unknown => Err(DownloadError::Unknown("ffprobe not found".into())),
        }
    }
}
