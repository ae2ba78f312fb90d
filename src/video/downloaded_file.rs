use std::path::{Path, PathBuf};

use tokio::{fs, io};

/// A file yt-dlp left on disk for one request.
///
/// Nothing is removed on drop: the file is only deleted once it has been
/// delivered, through [`DownloadedFile::remove`].
#[derive(Debug)]
pub struct DownloadedFile {
    path: PathBuf,
    /// Directory created for this request alone; removed together with the file
    request_dir: Option<PathBuf>,
    title: Option<String>,
    ext: Option<String>,
}

impl DownloadedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            request_dir: None,
            title: None,
            ext: None,
        }
    }

    pub fn in_request_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.request_dir = Some(dir.into());
        self
    }

    pub fn with_metadata(mut self, title: Option<String>, ext: Option<String>) -> Self {
        self.title = title;
        self.ext = ext;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn ext(&self) -> Option<&str> {
        self.ext.as_deref()
    }

    pub async fn remove(self) -> io::Result<()> {
        match &self.request_dir {
            Some(dir) => fs::remove_dir_all(dir).await,
            None => fs::remove_file(&self.path).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn remove_deletes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"data").unwrap();

        let file =
            DownloadedFile::new(&path).with_metadata(Some("clip".into()), Some("mp4".into()));
        assert_eq!(file.title(), Some("clip"));
        assert_eq!(file.ext(), Some("mp4"));

        file.remove().await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn remove_takes_the_request_dir_along() {
        let root = tempfile::tempdir().unwrap();
        let request_dir = root.path().join("req-1");
        std::fs::create_dir(&request_dir).unwrap();
        let path = request_dir.join("clip.mp4");
        std::fs::write(&path, b"data").unwrap();
        std::fs::write(request_dir.join("clip.mp4.part"), b"partial").unwrap();

        DownloadedFile::new(&path)
            .in_request_dir(&request_dir)
            .remove()
            .await
            .unwrap();

        assert!(!request_dir.exists());
        assert!(root.path().exists());
    }

    #[tokio::test]
    async fn dropping_keeps_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"data").unwrap();

        drop(DownloadedFile::new(&path));
        assert!(path.exists());
    }
}
