use crate::{app::IncomingMessage, errors::HandlerResult, messenger::Messenger, texts};

pub async fn start(bot: &dyn Messenger, msg: &IncomingMessage) -> HandlerResult {
    bot.send_message(msg.chat_id, texts::START, Some(texts::main_menu()))
        .await
}
