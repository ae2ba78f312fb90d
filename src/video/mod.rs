pub mod downloaded_file;
pub mod ytdlp;

pub use downloaded_file::DownloadedFile;
pub use ytdlp::{Extractor, YtDlp};
