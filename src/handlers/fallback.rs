use crate::{app::IncomingMessage, errors::HandlerResult, messenger::Messenger, texts};

pub async fn fallback(bot: &dyn Messenger, msg: &IncomingMessage) -> HandlerResult {
    bot.send_message(msg.chat_id, texts::FALLBACK, None).await
}
