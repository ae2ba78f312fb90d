use std::path::Path;

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{InputFile, KeyboardMarkup},
};

use crate::errors::HandlerResult;

/// Outbound side of the chat transport.
///
/// Handlers only talk to this trait, never to [`Bot`] directly.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<KeyboardMarkup>,
    ) -> HandlerResult;

    async fn send_video(&self, chat_id: ChatId, path: &Path) -> HandlerResult;
}

#[async_trait]
impl Messenger for Bot {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<KeyboardMarkup>,
    ) -> HandlerResult {
        let request = Requester::send_message(self, chat_id, text);
        match keyboard {
            Some(keyboard) => request.reply_markup(keyboard).await?,
            None => request.await?,
        };
        Ok(())
    }

    async fn send_video(&self, chat_id: ChatId, path: &Path) -> HandlerResult {
        Requester::send_video(self, chat_id, InputFile::file(path)).await?;
        Ok(())
    }
}
