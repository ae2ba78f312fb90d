use std::path::Path;

use tokio::fs;

use crate::errors::BotResult;

/// Removes the directory the bot keeps its per-request downloads in.
///
/// Only `root` goes; siblings in the configured download dir are left alone.
/// Returns whether anything was removed.
pub async fn remove_request_root(root: impl AsRef<Path>) -> BotResult<bool> {
    let root = root.as_ref();
    if !fs::try_exists(root).await? {
        return Ok(false);
    }
    fs::remove_dir_all(root).await?;
    Ok(true)
}
